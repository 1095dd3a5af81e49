//! Serde integration: a [`Pointer`] is represented by its string form
//! (RFC 6901, section 5).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Pointer};

/// Failure decoding a pointer from JSON text.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The input is not a JSON string.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The string is not a valid pointer.
    #[error(transparent)]
    Pointer(#[from] Error),
}

impl Serialize for Pointer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pointer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pointer::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Pointer {
    /// Decode a pointer from a JSON string literal.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::Pointer;
    ///
    /// let p = Pointer::from_json_slice(br#""/a~1b/0""#).unwrap();
    /// assert_eq!(p.tokens(), ["a/b", "0"]);
    /// ```
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        let s: String = serde_json::from_slice(bytes)?;
        Ok(Pointer::parse(&s)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, CodecError> {
        Self::from_json_slice(text.as_bytes())
    }

    /// Encode as a JSON string literal.
    pub fn to_json_vec(&self) -> Vec<u8> {
        self.to_json_string().into_bytes()
    }

    pub fn to_json_string(&self) -> String {
        serde_json::Value::String(self.to_string()).to_string()
    }
}
