use super::kind::TypeKind;
use super::parse::ParseTypeError;
use super::predefined::{PREDEFINED_REFERENCES, TYPE_FUNCTION};
use super::referent::{BuiltinLabel, Referent};
use super::ty::Type;

fn parse(s: &str) -> Result<Type, ParseTypeError> {
    s.parse()
}

#[test]
fn parses_scalars() {
    for kind in TypeKind::SCALARS {
        let ty = parse(kind.name()).unwrap();
        assert_eq!(ty.kind(), kind);
    }
}

#[test]
fn parses_predefined_references() {
    for (name, ty) in PREDEFINED_REFERENCES {
        assert_eq!(parse(&ty.to_string()), Ok(ty), "{name}");
    }
}

#[test]
fn parses_class_reference() {
    let ty = parse("ptr<class Foo>").unwrap();
    assert_eq!(ty, Type::class("Foo"));
    assert_eq!(ty.to_string(), "ptr<class Foo>");
}

#[test]
fn trims_whitespace() {
    assert_eq!(parse("  long \n"), Ok(Type::Long));
    assert_eq!(parse("ptr< function >"), Ok(TYPE_FUNCTION));
}

#[test]
fn class_name_is_kept_verbatim() {
    assert_eq!(parse("ptr<class   Bar >"), Ok(Type::class("  Bar ")));
    assert_eq!(parse(" ptr<class A> "), Ok(Type::class("A")));
    assert_eq!(parse("ptr<class Map<K>>"), Ok(Type::class("Map<K>")));
}

#[test]
fn parses_its_own_rendering() {
    let mut types: Vec<Type> = TypeKind::SCALARS
        .into_iter()
        .filter_map(Type::scalar)
        .collect();
    types.extend(
        BuiltinLabel::ALL
            .into_iter()
            .map(|label| Type::ptr(Referent::Label(label))),
    );
    for name in [
        "A", " A", "A ", "", " ", "class A", "unit", "Map<K>", "a>b", "two words", "tab\t",
    ] {
        types.push(Type::class(name));
    }

    for ty in types {
        let rendered = ty.to_string();
        assert_eq!(parse(&rendered), Ok(ty), "{rendered:?}");
    }
}

#[test]
fn rejects_empty() {
    assert_eq!(parse(""), Err(ParseTypeError::Empty));
    assert_eq!(parse("   "), Err(ParseTypeError::Empty));
}

#[test]
fn rejects_unknown_scalar() {
    assert_eq!(
        parse("Int"),
        Err(ParseTypeError::UnknownType("Int".to_owned()))
    );
    assert_eq!(
        parse("i32"),
        Err(ParseTypeError::UnknownType("i32".to_owned()))
    );
}

#[test]
fn rejects_unterminated_reference() {
    assert_eq!(
        parse("ptr<string"),
        Err(ParseTypeError::UnterminatedReference("ptr<string".to_owned()))
    );
}

#[test]
fn rejects_unknown_label() {
    assert_eq!(
        parse("ptr<heap>"),
        Err(ParseTypeError::UnknownLabel("heap".to_owned()))
    );
    assert_eq!(
        parse("ptr<classic>"),
        Err(ParseTypeError::UnknownLabel("classic".to_owned()))
    );
}

#[test]
fn rejects_nameless_class() {
    assert_eq!(parse("ptr<class>"), Err(ParseTypeError::EmptyClassName));
    // an empty name still has its separator
    assert_eq!(parse("ptr<class >"), Ok(Type::class("")));
}

#[test]
fn error_messages() {
    let unknown_label = parse("ptr<heap>").unwrap_err().to_string();
    let unknown_type = parse("quad").unwrap_err().to_string();

    insta::assert_snapshot!(unknown_label, @"unknown reference label `heap` (use `class NAME` for user classes)");
    insta::assert_snapshot!(unknown_type, @"unknown type `quad`");
}
