//! Document model abstraction used by the evaluator.

use std::fmt::Debug;

use serde_json::Value;

/// The kind of a document node, as seen by pointer evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
    /// Anything outside the JSON data model (e.g. CBOR byte strings).
    Foreign,
}

impl Kind {
    /// Null, boolean, number or string.
    pub fn is_primitive(self) -> bool {
        matches!(self, Kind::Null | Kind::Bool | Kind::Number | Kind::String)
    }
}

/// A value that a [`Pointer`](crate::Pointer) can be evaluated against.
///
/// `get_index*` are only called on [`Kind::Array`] nodes and `get_key*`
/// only on [`Kind::Object`] nodes. The `Debug` rendering is what
/// [`Error::NotJson`](crate::Error::NotJson) carries for [`Kind::Foreign`]
/// nodes.
pub trait JsonNode: Debug {
    fn kind(&self) -> Kind;

    /// Array element at `index`, or `None` past the end.
    fn get_index(&self, index: usize) -> Option<&Self>;

    fn get_index_mut(&mut self, index: usize) -> Option<&mut Self>;

    /// Object member named exactly `key`.
    fn get_key(&self, key: &str) -> Option<&Self>;

    fn get_key_mut(&mut self, key: &str) -> Option<&mut Self>;
}

impl JsonNode for Value {
    fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    fn get_index(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    fn get_index_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.as_array_mut()?.get_mut(index)
    }

    fn get_key(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }

    fn get_key_mut(&mut self, key: &str) -> Option<&mut Self> {
        self.as_object_mut()?.get_mut(key)
    }
}
