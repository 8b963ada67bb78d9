//! Human-readable dump of the type lattice.
//!
//! ```text
//! [scalars]
//! K0 boolean  1
//! ...
//!
//! [references]
//! K8 ptr<unit>      8  ; TYPE_UNIT
//! ...
//! ```

use std::fmt::Write as _;

use crate::colors::Colors;
use crate::config::Config;
use crate::type_system::{PREDEFINED_REFERENCES, Type, TypeKind};

/// One row of the lattice table.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Entry {
    /// Rendered type, e.g. `int` or `ptr<string>`.
    pub name: String,
    pub kind: TypeKind,
    pub size: usize,
    /// Exported constant for builtin references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant: Option<&'static str>,
}

impl Entry {
    fn new(ty: &Type, constant: Option<&'static str>) -> Self {
        Self {
            name: ty.to_string(),
            kind: ty.kind(),
            size: ty.byte_size(),
            constant,
        }
    }
}

/// Builtin references keep their exported constant name.
impl From<&Type> for Entry {
    fn from(ty: &Type) -> Self {
        let constant = PREDEFINED_REFERENCES
            .iter()
            .find(|(_, builtin)| builtin == ty)
            .map(|(constant, _)| *constant);
        Self::new(ty, constant)
    }
}

/// Rows for every scalar kind and every builtin reference selected by `config`.
pub fn lattice_entries(config: &Config) -> Vec<Entry> {
    let mut entries = Vec::new();

    if config.scalars {
        entries.extend(
            TypeKind::SCALARS
                .into_iter()
                .filter_map(Type::scalar)
                .map(|ty| Entry::new(&ty, None)),
        );
    }

    if config.references {
        entries.extend(
            PREDEFINED_REFERENCES
                .iter()
                .map(|(constant, ty)| Entry::new(ty, Some(*constant))),
        );
    }

    entries
}

/// Generate a human-readable dump of the lattice.
pub fn dump(config: &Config) -> String {
    let mut out = String::new();
    let entries = lattice_entries(config);
    let c = config.colors;

    let (scalars, references): (Vec<_>, Vec<_>) =
        entries.iter().partition(|e| e.kind.is_scalar());

    if config.scalars {
        dump_section(&mut out, "scalars", &scalars, c);
    }
    if config.references {
        if config.scalars {
            out.push('\n');
        }
        dump_section(&mut out, "references", &references, c);
    }

    out
}

fn dump_section(out: &mut String, title: &str, entries: &[&Entry], c: Colors) {
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);

    writeln!(out, "{}[{title}]{}", c.blue, c.reset).unwrap();
    for entry in entries {
        let comment = match entry.constant {
            Some(constant) => format!("{}  ; {constant}{}", c.dim, c.reset),
            None => String::new(),
        };
        writeln!(
            out,
            "{}K{}{} {}{:<width$}{}  {}{comment}",
            c.dim,
            entry.kind.as_u8(),
            c.reset,
            c.blue,
            entry.name,
            c.reset,
            entry.size,
        )
        .unwrap();
    }
}
