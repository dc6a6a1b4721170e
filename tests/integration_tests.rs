use flatten_keys::{
    flatten, flatten_all, flatten_str, flatten_value, tree, Error, FlatMap, Style, Value,
};

fn decode(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

fn flat(pairs: &[(&str, Value)]) -> FlatMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn sorted(mut map: FlatMap) -> FlatMap {
    map.sort_keys();
    map
}

const NESTED: &str = r#"{
    "foo": {
        "jim": "bean"
    },
    "fee": "bar",
    "n1": {
        "alist": [
            "a",
            "b",
            "c",
            {
                "d": "other",
                "e": "another"
            }
        ]
    },
    "number": 1.4567,
    "bool": true
}"#;

#[test]
fn test_flatten_dot_style() {
    let nested = decode(NESTED);
    let got = flatten(nested.as_object().unwrap(), "", Style::Dot).unwrap();

    let want = flat(&[
        ("foo.jim", Value::from("bean")),
        ("fee", Value::from("bar")),
        ("n1.alist.0", Value::from("a")),
        ("n1.alist.1", Value::from("b")),
        ("n1.alist.2", Value::from("c")),
        ("n1.alist.3.d", Value::from("other")),
        ("n1.alist.3.e", Value::from("another")),
        ("number", Value::from(1.4567)),
        ("bool", Value::from(true)),
    ]);
    assert_eq!(got, want);
}

#[test]
fn test_flatten_rails_style() {
    let nested = decode(NESTED);
    let got = flatten(nested.as_object().unwrap(), "", Style::Rails).unwrap();

    assert_eq!(got.get("foo[jim]"), Some(&Value::from("bean")));
    assert_eq!(got.get("n1[alist][0]"), Some(&Value::from("a")));
    assert_eq!(got.get("n1[alist][3][d]"), Some(&Value::from("other")));
    assert_eq!(got.get("n1[alist][3][e]"), Some(&Value::from("another")));
    assert_eq!(got.len(), 9);
}

#[test]
fn test_flatten_slash_style() {
    let nested = decode(NESTED);
    let got = flatten(nested.as_object().unwrap(), "", Style::Slash).unwrap();
    assert_eq!(got.get("n1/alist/3/e"), Some(&Value::from("another")));
}

#[test]
fn test_rails_single_level() {
    let nested = tree!({"foo": {"jim": "bean"}});
    let got = flatten(nested.as_object().unwrap(), "", Style::Rails).unwrap();
    assert_eq!(got, flat(&[("foo[jim]", Value::from("bean"))]));
}

#[test]
fn test_prefix_joins_without_separator() {
    let nested = decode(r#"{ "a": { "b": "c" }, "e": "f" }"#);
    let got = flatten(nested.as_object().unwrap(), "p:", Style::Dot).unwrap();
    assert_eq!(
        sorted(got),
        flat(&[("p:a.b", Value::from("c")), ("p:e", Value::from("f"))])
    );
}

#[test]
fn test_flat_map_is_fixed_point() {
    let nested = tree!({"a": 1, "b": "two", "c": null, "d": [1, 2]});
    for style in [Style::Dot, Style::Slash, Style::Rails] {
        let got = flatten(nested.as_object().unwrap(), "", style).unwrap();
        assert_eq!(Value::Object(got), nested);
    }
}

#[test]
fn test_scalar_array_kept_in_map_but_expanded_in_list() {
    let nested = decode(r#"{"one": {"two": ["2a", "2b"]}, "side": "value"}"#);

    let map = flatten(nested.as_object().unwrap(), "", Style::Dot).unwrap();
    assert_eq!(
        map,
        flat(&[
            ("one.two", tree!(["2a", "2b"])),
            ("side", Value::from("value")),
        ])
    );

    let list = flatten_all(&nested, "", Style::Dot, true).unwrap();
    assert_eq!(list, vec!["one.two.0.2a", "one.two.1.2b", "side.value"]);
}

#[test]
fn test_structural_array_expanded() {
    let nested = decode(r#"{"one": {"two": ["2a", {"x": "2b"}]}}"#);
    let map = flatten(nested.as_object().unwrap(), "", Style::Dot).unwrap();
    assert_eq!(
        map,
        flat(&[
            ("one.two.0", Value::from("2a")),
            ("one.two.1.x", Value::from("2b")),
        ])
    );
}

#[test]
fn test_flatten_all_sorted() {
    let nested = decode(
        r#"{
            "someitem": {
                "thesearecool": [
                    { "neat": "wow" },
                    { "neat": "tubular", "sausage": true, "eggs": false }
                ],
                "thisisok": "ham",
                "meh": [1.01, 2]
            }
        }"#,
    );

    let got = flatten_all(&nested, "", Style::Dot, true).unwrap();
    assert_eq!(
        got,
        vec![
            "someitem.meh.0.1.01",
            "someitem.meh.1.2",
            "someitem.thesearecool.0.neat.wow",
            "someitem.thesearecool.1.eggs.false",
            "someitem.thesearecool.1.neat.tubular",
            "someitem.thesearecool.1.sausage.true",
            "someitem.thisisok.ham",
        ]
    );
}

#[test]
fn test_flatten_all_empty() {
    let got = flatten_all(&decode("{}"), "", Style::Dot, true).unwrap();
    assert!(got.is_empty());

    let got = flatten(&flatten_keys::Map::new(), "", Style::Dot).unwrap();
    assert!(got.is_empty());
}

#[test]
fn test_flatten_all_top_level_array() {
    let nested = tree!([{"foo": 1}, "bar"]);
    let got = flatten_all(&nested, "", Style::Dot, true).unwrap();
    assert_eq!(got, vec!["0.foo.1", "1.bar"]);
}

#[test]
fn test_bare_scalar_rejected() {
    assert!(matches!(
        flatten_all(&Value::from(1.5), "", Style::Dot, false),
        Err(Error::InvalidInputKind("number"))
    ));
    assert!(matches!(
        flatten_value(&Value::from("x"), "", Style::Rails),
        Err(Error::InvalidInputKind("string"))
    ));
}

#[test]
fn test_flatten_str_cases() {
    let cases = [
        (r#"{ "a": "b" }"#, r#"{"a":"b"}"#),
        (
            r#"{ "a": { "b" : { "c" : { "d" : "e" } } }, "number": 1.4567, "bool": true }"#,
            r#"{"a.b.c.d":"e","bool":true,"number":1.4567}"#,
        ),
    ];

    for (i, (nested, want)) in cases.iter().enumerate() {
        let got = flatten_str(nested, "", Style::Dot).unwrap();
        assert_eq!(&got, want, "case {}", i + 1);
    }
}

#[test]
fn test_flatten_str_round_trip_leaf_count() {
    let nested = r#"{"a": {"b": 1, "c": {"d": false, "e": "x"}}, "f": 2.5}"#;
    let flat_text = flatten_str(nested, "", Style::Dot).unwrap();
    let flat: FlatMap = serde_json::from_str(&flat_text).unwrap();

    assert_eq!(flat.len(), 4);
    assert_eq!(flat.get("a.b"), Some(&Value::from(1)));
    assert_eq!(flat.get("a.c.d"), Some(&Value::from(false)));
    assert_eq!(flat.get("a.c.e"), Some(&Value::from("x")));
    assert_eq!(flat.get("f"), Some(&Value::from(2.5)));
}

#[test]
fn test_flatten_str_invalid_json() {
    assert!(matches!(
        flatten_str("{not json}", "", Style::Dot),
        Err(Error::Json(_))
    ));
    assert!(matches!(
        flatten_str("42", "", Style::Dot),
        Err(Error::NotAnObject("number"))
    ));
}
