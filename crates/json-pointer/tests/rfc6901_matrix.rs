use json_pointer::{Error, Pointer};
use serde_json::{json, Value};

fn rfc_doc() -> Value {
    // RFC 6901, section 5.
    json!({
        "foo": ["bar", "baz"],
        "": 0,
        "a/b": 1,
        "c%d": 2,
        "e^f": 3,
        "g|h": 4,
        "i\\j": 5,
        "k\"l": 6,
        " ": 7,
        "m~n": 8
    })
}

#[test]
fn pointer_rfc6901_evaluation_matrix() {
    let doc = rfc_doc();
    let cases = [
        ("", doc.clone()),
        ("/foo", json!(["bar", "baz"])),
        ("/foo/0", json!("bar")),
        ("/", json!(0)),
        ("/a~1b", json!(1)),
        ("/c%d", json!(2)),
        ("/e^f", json!(3)),
        ("/g|h", json!(4)),
        ("/i\\j", json!(5)),
        ("/k\"l", json!(6)),
        ("/ ", json!(7)),
        ("/m~0n", json!(8)),
    ];

    for (pointer, expected) in cases {
        let p = Pointer::parse(pointer).expect("valid pointer");
        assert_eq!(p.eval(&doc), Ok(&expected), "pointer {pointer:?}");
        assert_eq!(p.to_string(), pointer);
    }
}

#[test]
fn pointer_json_string_representation() {
    // RFC 6901, section 5: JSON string representation of the same pointers.
    let cases = [
        (r#""""#, ""),
        (r#""/foo""#, "/foo"),
        (r#""/foo/0""#, "/foo/0"),
        (r#""/""#, "/"),
        (r#""/a~1b""#, "/a~1b"),
        (r#""/c%d""#, "/c%d"),
        (r#""/e^f""#, "/e^f"),
        (r#""/g|h""#, "/g|h"),
        (r#""/i\\j""#, "/i\\j"),
        (r#""/k\"l""#, "/k\"l"),
        (r#""/ ""#, "/ "),
        (r#""/m~0n""#, "/m~0n"),
    ];

    for (json_text, pointer) in cases {
        let p = Pointer::from_json_str(json_text).expect("decodes");
        assert_eq!(p, Pointer::parse(pointer).unwrap());
        assert_eq!(p.to_json_string(), json_text);
    }
}

#[test]
fn pointer_error_classification_matrix() {
    let doc = json!({"foo": [null, {"bar": "hello, world"}], "n": 1});
    let cases = [
        ("/n/x", Error::DerefPrimitive("x".into())),
        ("/foo/0/bar", Error::DerefPrimitive("bar".into())),
        ("/foo/x", Error::NumParse("x".into())),
        ("/foo/2", Error::IndexOutOfBounds(2)),
        ("/foo/-3", Error::IndexOutOfBounds(-3)),
        ("/quux", Error::NoSuchProperty("quux".into())),
        ("/foo/1/baz", Error::NoSuchProperty("baz".into())),
    ];

    for (pointer, expected) in cases {
        let p = Pointer::parse(pointer).unwrap();
        assert_eq!(p.eval(&doc), Err(expected), "pointer {pointer:?}");
    }
}

#[test]
fn pointer_parse_error_carries_input() {
    for input in [" ", "foo", "foo/bar", "~0", "#/foo"] {
        let err = Pointer::parse(input).unwrap_err();
        assert!(err.is_parse());
        assert_eq!(err.token(), Some(input));
    }
}
