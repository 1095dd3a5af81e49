//! Core logic of the `json-pointer` command-line tool.
//!
//! `json-pointer [--strict] '<pointer>'` reads a JSON document from stdin
//! and prints the referenced value.

use serde_json::Value;

use crate::{Error, EvalOptions, Pointer};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("First argument must be a JSON Pointer.")]
    MissingPointer,
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Pointer(#[from] Error),
}

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub pointer: String,
    pub options: EvalOptions,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Args, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = EvalOptions::default();
    let mut pointer = None;
    for arg in args {
        let arg: String = arg.into();
        if arg == "--strict" {
            options = EvalOptions::strict();
        } else if arg.starts_with("--") || pointer.is_some() {
            return Err(CliError::UnknownOption(arg));
        } else {
            pointer = Some(arg);
        }
    }
    Ok(Args {
        pointer: pointer.ok_or(CliError::MissingPointer)?,
        options,
    })
}

/// Look up `pointer` in the JSON document `doc_json`, returning the
/// referenced value pretty-printed.
pub fn lookup_pointer(
    doc_json: &str,
    pointer: &str,
    options: EvalOptions,
) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let pointer = Pointer::parse(pointer)?;
    let found = pointer.eval_with(&doc, options)?;
    Ok(serde_json::to_string_pretty(found)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_root() {
        let out = lookup_pointer(r#"{"a":1}"#, "", EvalOptions::default()).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["a"], 1);
    }

    #[test]
    fn pointer_nested() {
        let doc = r#"{"foo":{"bar":[10,{"baz":"qux"}]}}"#;
        let out = lookup_pointer(doc, "/foo/bar/1/baz", EvalOptions::default()).unwrap();
        assert_eq!(out, "\"qux\"");
    }

    #[test]
    fn pointer_errors() {
        let doc = r#"{"arr":[1,2,3]}"#;
        let opts = EvalOptions::default();
        let err = lookup_pointer(doc, "/missing", opts).unwrap_err();
        assert_eq!(err.to_string(), "no such property \"missing\"");
        assert!(matches!(
            lookup_pointer(doc, "/arr/3", opts),
            Err(CliError::Pointer(Error::IndexOutOfBounds(3)))
        ));
        assert!(matches!(
            lookup_pointer(doc, "arr", opts),
            Err(CliError::Pointer(Error::Parse(_)))
        ));
        assert!(matches!(
            lookup_pointer("{", "/arr", opts),
            Err(CliError::Json(_))
        ));
    }

    #[test]
    fn pointer_strict_index() {
        let doc = "[1,2,3]";
        assert_eq!(lookup_pointer(doc, "/01", EvalOptions::default()).unwrap(), "2");
        assert!(matches!(
            lookup_pointer(doc, "/01", EvalOptions::strict()),
            Err(CliError::Pointer(Error::NumParse(_)))
        ));
    }

    #[test]
    fn args_parsing() {
        let args = parse_args(["/a/b"]).unwrap();
        assert_eq!(args.pointer, "/a/b");
        assert_eq!(args.options, EvalOptions::default());

        let args = parse_args(["--strict", ""]).unwrap();
        assert_eq!(args.pointer, "");
        assert_eq!(args.options, EvalOptions::strict());

        assert!(matches!(
            parse_args(Vec::<String>::new()),
            Err(CliError::MissingPointer)
        ));
        assert!(matches!(
            parse_args(["--loose", "/a"]),
            Err(CliError::UnknownOption(_))
        ));
        assert!(matches!(
            parse_args(["/a", "/b"]),
            Err(CliError::UnknownOption(_))
        ));
    }
}
