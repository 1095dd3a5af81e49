//! Error types for JSON Pointer parsing and evaluation.

use thiserror::Error;

/// A failure while parsing or evaluating a JSON Pointer.
///
/// Each variant carries the offending token, index, or value so the message
/// can be rendered without looking anything else up.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// A token was applied to null, a boolean, a number, or a string.
    #[error("cannot dereference primitive with token {0:?}")]
    DerefPrimitive(String),
    /// An array was indexed by a token that is not an integer.
    #[error("cannot parse array index from token {0:?}")]
    NumParse(String),
    /// An array index was negative or past the end of the array.
    #[error("array index {0} out of bounds")]
    IndexOutOfBounds(i64),
    /// An object has no member with the requested key.
    #[error("no such property {0:?}")]
    NoSuchProperty(String),
    /// The pointer string is neither empty nor begins with `/`.
    #[error("invalid JSON Pointer {0:?}: must be empty or begin with \"/\"")]
    Parse(String),
    /// Traversal stepped into a value that is not one of the JSON kinds.
    ///
    /// Carries a debug rendering of the value.
    #[error("value is not JSON: {0}")]
    NotJson(String),
}

impl Error {
    pub fn is_deref_primitive(&self) -> bool {
        matches!(self, Error::DerefPrimitive(_))
    }

    pub fn is_num_parse(&self) -> bool {
        matches!(self, Error::NumParse(_))
    }

    pub fn is_index_out_of_bounds(&self) -> bool {
        matches!(self, Error::IndexOutOfBounds(_))
    }

    pub fn is_no_such_property(&self) -> bool {
        matches!(self, Error::NoSuchProperty(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    pub fn is_not_json(&self) -> bool {
        matches!(self, Error::NotJson(_))
    }

    /// The reference token that caused the failure, if the variant carries one.
    ///
    /// For [`Error::Parse`] this is the whole rejected input.
    pub fn token(&self) -> Option<&str> {
        match self {
            Error::DerefPrimitive(t)
            | Error::NumParse(t)
            | Error::NoSuchProperty(t)
            | Error::Parse(t) => Some(t),
            Error::IndexOutOfBounds(_) | Error::NotJson(_) => None,
        }
    }

    /// The out-of-bounds index, for [`Error::IndexOutOfBounds`].
    pub fn index(&self) -> Option<i64> {
        match self {
            Error::IndexOutOfBounds(n) => Some(*n),
            _ => None,
        }
    }
}
