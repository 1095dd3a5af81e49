//! Pointer evaluation over CBOR documents.
//!
//! CBOR is a superset of the JSON data model: integers and floats are both
//! numbers, text strings are strings, and maps are objects whose members are
//! looked up by text key (the first matching entry wins). Byte strings and
//! tagged values have no JSON counterpart and are [`Kind::Foreign`].

use ciborium::value::Value;

use crate::node::{JsonNode, Kind};

fn is_text_key(k: &Value, key: &str) -> bool {
    matches!(k, Value::Text(t) if t == key)
}

impl JsonNode for Value {
    fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Integer(_) | Value::Float(_) => Kind::Number,
            Value::Text(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Map(_) => Kind::Object,
            _ => Kind::Foreign,
        }
    }

    fn get_index(&self, index: usize) -> Option<&Self> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    fn get_index_mut(&mut self, index: usize) -> Option<&mut Self> {
        match self {
            Value::Array(items) => items.get_mut(index),
            _ => None,
        }
    }

    fn get_key(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Map(entries) => entries
                .iter()
                .find(|(k, _)| is_text_key(k, key))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    fn get_key_mut(&mut self, key: &str) -> Option<&mut Self> {
        match self {
            Value::Map(entries) => entries
                .iter_mut()
                .find(|(k, _)| is_text_key(k, key))
                .map(|(_, v)| v),
            _ => None,
        }
    }
}
