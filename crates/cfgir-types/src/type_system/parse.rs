//! Reading type names back from their rendered form.

use std::str::FromStr;

use super::kind::TypeKind;
use super::referent::{BuiltinLabel, Class, Referent};
use super::ty::Type;

/// Errors from parsing a type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTypeError {
    #[error("empty type name")]
    Empty,

    #[error("unknown type `{0}`")]
    UnknownType(String),

    #[error("unterminated reference `{0}` (expected `ptr<...>`)")]
    UnterminatedReference(String),

    #[error("unknown reference label `{0}` (use `class NAME` for user classes)")]
    UnknownLabel(String),

    #[error("class reference without a name")]
    EmptyClassName,
}

impl FromStr for Type {
    type Err = ParseTypeError;

    /// Accepts what `Display` produces: a scalar name, `ptr<LABEL>` for a
    /// builtin label, or `ptr<class NAME>`. Parsing a rendering gives back the
    /// rendered value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseTypeError::Empty);
        }

        if let Some(inner) = s.strip_prefix("ptr<") {
            let inner = inner
                .strip_suffix('>')
                .ok_or_else(|| ParseTypeError::UnterminatedReference(s.to_owned()))?;
            return parse_referent(inner).map(Type::Ptr);
        }

        TypeKind::SCALARS
            .into_iter()
            .find(|kind| kind.name() == s)
            .and_then(Type::scalar)
            .ok_or_else(|| ParseTypeError::UnknownType(s.to_owned()))
    }
}

fn parse_referent(s: &str) -> Result<Referent, ParseTypeError> {
    if s == "class" {
        return Err(ParseTypeError::EmptyClassName);
    }

    // one separator space, the name is kept verbatim
    if let Some(name) = s.strip_prefix("class ") {
        return Ok(Referent::from(Class::new(name)));
    }

    let label = s.trim();
    BuiltinLabel::from_name(label)
        .map(Referent::Label)
        .ok_or_else(|| ParseTypeError::UnknownLabel(label.to_owned()))
}
