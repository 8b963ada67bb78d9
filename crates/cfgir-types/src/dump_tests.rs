use crate::config::Config;
use crate::dump::{Entry, dump, lattice_entries};
use crate::colors::Colors;
use crate::type_system::{PREDEFINED_REFERENCES, TYPE_INT, Type, TypeKind};

#[test]
fn dump_full_lattice() {
    let res = dump(&Config::new());

    insta::assert_snapshot!(res, @r"
    [scalars]
    K0 boolean  1
    K1 byte     2
    K2 short    2
    K3 int      4
    K4 long     8
    K5 float    4
    K6 double   8
    K7 char     2

    [references]
    K8 ptr<unit>      8  ; TYPE_UNIT
    K8 ptr<string>    8  ; TYPE_STRING
    K8 ptr<function>  8  ; TYPE_FUNCTION
    K8 ptr<block>     8  ; TYPE_BLOCK
    K8 ptr<ptr>       8  ; TYPE_PTR
    ");
}

#[test]
fn dump_scalars_only() {
    let res = dump(&Config::new().references(false));

    insta::assert_snapshot!(res, @r"
    [scalars]
    K0 boolean  1
    K1 byte     2
    K2 short    2
    K3 int      4
    K4 long     8
    K5 float    4
    K6 double   8
    K7 char     2
    ");
}

#[test]
fn dump_references_only() {
    let res = dump(&Config::new().scalars(false));

    insta::assert_snapshot!(res, @r"
    [references]
    K8 ptr<unit>      8  ; TYPE_UNIT
    K8 ptr<string>    8  ; TYPE_STRING
    K8 ptr<function>  8  ; TYPE_FUNCTION
    K8 ptr<block>     8  ; TYPE_BLOCK
    K8 ptr<ptr>       8  ; TYPE_PTR
    ");
}

#[test]
fn dump_nothing() {
    let res = dump(&Config::new().scalars(false).references(false));
    assert_eq!(res, "");
}

#[test]
fn dump_colored() {
    let config = Config::new().colored(true).references(false);
    assert!(config.colors().is_enabled());

    let res = dump(&config);
    let first_row = res.lines().nth(1).unwrap();
    assert_eq!(
        first_row,
        "\x1b[2mK0\x1b[0m \x1b[34mboolean\x1b[0m  1"
    );
}

#[test]
fn colors_follow_flag() {
    assert_eq!(Colors::new(true), Colors::ON);
    assert_eq!(Colors::new(false), Colors::OFF);
    assert!(Colors::ON.is_enabled());
    assert!(!Colors::default().is_enabled());
}

#[test]
fn entry_from_type_names_builtin_constant() {
    for (constant, ty) in PREDEFINED_REFERENCES {
        assert_eq!(Entry::from(&ty).constant, Some(constant));
    }
    assert_eq!(Entry::from(&TYPE_INT).constant, None);
    assert_eq!(Entry::from(&Type::class("string")).constant, None);
}

#[test]
fn entries_cover_lattice() {
    let entries = lattice_entries(&Config::new());
    assert_eq!(entries.len(), 13);
    assert_eq!(
        entries[3],
        Entry {
            name: "int".to_owned(),
            kind: TypeKind::Int,
            size: 4,
            constant: None,
        }
    );
    assert!(entries[8..].iter().all(|e| e.kind == TypeKind::Ptr && e.size == 8));
}

#[test]
fn entries_serialize() {
    let entries = lattice_entries(&Config::new());
    let json = serde_json::to_string(&entries[..1]).unwrap();
    assert_eq!(json, r#"[{"name":"boolean","kind":"boolean","size":1}]"#);

    let json = serde_json::to_string(&entries[9]).unwrap();
    assert_eq!(
        json,
        r#"{"name":"ptr<string>","kind":"ptr","size":8,"constant":"TYPE_STRING"}"#
    );
}
