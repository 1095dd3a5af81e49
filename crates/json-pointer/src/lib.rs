//! JSON Pointer (RFC 6901).
//!
//! This crate parses [JSON Pointer](https://tools.ietf.org/html/rfc6901)
//! strings into a [`Pointer`], formats them back, and evaluates them against
//! any document implementing [`JsonNode`] (`serde_json::Value` and
//! `ciborium::value::Value` out of the box).
//!
//! # Example
//!
//! ```
//! use json_pointer::{Error, Pointer};
//! use serde_json::json;
//!
//! // Parse a JSON pointer string into reference tokens
//! let p: Pointer = "/foo/1/a~1b".parse().unwrap();
//! assert_eq!(p.tokens(), ["foo", "1", "a/b"]);
//!
//! // Format the tokens back into a pointer string
//! assert_eq!(p.to_string(), "/foo/1/a~1b");
//!
//! // Evaluate against a document
//! let doc = json!({"foo": [null, {"a/b": 42}]});
//! assert_eq!(p.eval(&doc), Ok(&json!(42)));
//!
//! let missing: Pointer = "/bar".parse().unwrap();
//! assert_eq!(missing.eval(&doc), Err(Error::NoSuchProperty("bar".into())));
//! ```

mod cbor;
pub mod cli;
mod codec;
mod error;
mod eval;
mod node;
mod pointer;
mod util;

pub use codec::CodecError;
pub use error::Error;
pub use eval::{is_valid_index, EvalOptions, IndexSyntax};
pub use node::{JsonNode, Kind};
pub use pointer::Pointer;
pub use util::{escape_token, unescape_token};
