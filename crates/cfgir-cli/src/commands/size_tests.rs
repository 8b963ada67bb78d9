use super::size::{measure, render};

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn measures_scalars_and_references() {
    let entries = measure(&names(&["int", " ptr<string> ", "ptr<class Foo>", "boolean"])).unwrap();

    insta::assert_snapshot!(render(&entries), @r"
    int             4
    ptr<string>     8
    ptr<class Foo>  8
    boolean         1
    ");
}

#[test]
fn canonicalizes_spacing() {
    let entries = measure(&names(&["ptr<  function >"])).unwrap();
    assert_eq!(entries[0].name, "ptr<function>");
    assert_eq!(entries[0].constant, Some("TYPE_FUNCTION"));
}

#[test]
fn names_builtin_constants() {
    let entries = measure(&names(&["ptr<string>", "ptr<class string>", "int"])).unwrap();
    let constants: Vec<_> = entries.iter().map(|entry| entry.constant).collect();
    assert_eq!(constants, [Some("TYPE_STRING"), None, None]);

    let json = serde_json::to_string(&entries[0]).unwrap();
    assert_eq!(
        json,
        r#"{"name":"ptr<string>","kind":"ptr","size":8,"constant":"TYPE_STRING"}"#
    );
}

#[test]
fn stops_at_first_bad_name() {
    let err = measure(&names(&["int", "ptr<heap>", "quad"])).unwrap_err();
    insta::assert_snapshot!(err, @"unknown reference label `heap` (use `class NAME` for user classes) in `ptr<heap>`");
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render(&[]), "");
}
