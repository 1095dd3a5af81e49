//! Pointer evaluation.

use crate::node::{JsonNode, Kind};
use crate::{Error, Pointer};

/// Accepted syntax for array index tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexSyntax {
    /// Any base-10 `i64`: leading `+`, `-` and zeros are accepted.
    /// Negative values fail with [`Error::IndexOutOfBounds`].
    #[default]
    Lenient,
    /// RFC 6901 `array-index`: `0` or a digit string without a leading zero.
    Strict,
}

/// Options for [`Pointer::eval_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptions {
    pub index: IndexSyntax,
}

impl EvalOptions {
    pub fn strict() -> Self {
        Self {
            index: IndexSyntax::Strict,
        }
    }
}

/// Check if a token matches the RFC 6901 `array-index` production.
pub fn is_valid_index(token: &str) -> bool {
    let bytes = token.as_bytes();
    match bytes {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        _ => bytes.iter().all(u8::is_ascii_digit),
    }
}

fn parse_index(token: &str, syntax: IndexSyntax) -> Result<i64, Error> {
    if syntax == IndexSyntax::Strict && !is_valid_index(token) {
        return Err(Error::NumParse(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| Error::NumParse(token.to_string()))
}

/// Parsed index and its `usize` position (`None` if negative). The element
/// lookup decides the upper bound.
fn array_position(token: &str, syntax: IndexSyntax) -> Result<(i64, Option<usize>), Error> {
    let n = parse_index(token, syntax)?;
    Ok((n, usize::try_from(n).ok()))
}

fn fail(err: Error) -> Error {
    log::debug!("pointer evaluation failed: {err}");
    err
}

fn step<'a, N: JsonNode>(node: &'a N, token: &str, syntax: IndexSyntax) -> Result<&'a N, Error> {
    let kind = node.kind();
    log::trace!("step {token:?} into {kind:?}");
    match kind {
        Kind::Null | Kind::Bool | Kind::Number | Kind::String => {
            Err(Error::DerefPrimitive(token.to_string()))
        }
        Kind::Array => {
            let (n, pos) = array_position(token, syntax)?;
            pos.and_then(|i| node.get_index(i))
                .ok_or(Error::IndexOutOfBounds(n))
        }
        Kind::Object => node
            .get_key(token)
            .ok_or_else(|| Error::NoSuchProperty(token.to_string())),
        Kind::Foreign => Err(Error::NotJson(format!("{node:?}"))),
    }
}

fn step_mut<'a, N: JsonNode>(
    node: &'a mut N,
    token: &str,
    syntax: IndexSyntax,
) -> Result<&'a mut N, Error> {
    let kind = node.kind();
    log::trace!("step {token:?} into {kind:?}");
    match kind {
        Kind::Null | Kind::Bool | Kind::Number | Kind::String => {
            Err(Error::DerefPrimitive(token.to_string()))
        }
        Kind::Array => {
            let (n, pos) = array_position(token, syntax)?;
            match pos {
                Some(i) => node.get_index_mut(i).ok_or(Error::IndexOutOfBounds(n)),
                None => Err(Error::IndexOutOfBounds(n)),
            }
        }
        Kind::Object => node
            .get_key_mut(token)
            .ok_or_else(|| Error::NoSuchProperty(token.to_string())),
        Kind::Foreign => Err(Error::NotJson(format!("{node:?}"))),
    }
}

impl Pointer {
    /// Evaluate this pointer against `doc`, returning a borrow of the
    /// referenced value.
    ///
    /// The root pointer returns `doc` itself without inspecting it.
    ///
    /// # Errors
    ///
    /// - [`Error::DerefPrimitive`] - a token was applied to a primitive
    /// - [`Error::NumParse`] - an array was indexed by a non-integer token
    /// - [`Error::IndexOutOfBounds`] - an array index is negative or too large
    /// - [`Error::NoSuchProperty`] - an object lacks the requested key
    /// - [`Error::NotJson`] - a token was applied to a [`Kind::Foreign`] node
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::Pointer;
    /// use serde_json::json;
    ///
    /// let doc = json!({"foo": [null, {"bar": "hello, world"}]});
    /// let p: Pointer = "/foo/1/bar".parse().unwrap();
    /// assert_eq!(p.eval(&doc).unwrap(), "hello, world");
    /// ```
    pub fn eval<'a, N: JsonNode>(&self, doc: &'a N) -> Result<&'a N, Error> {
        self.eval_with(doc, EvalOptions::default())
    }

    /// Like [`eval`](Self::eval), with explicit options.
    pub fn eval_with<'a, N: JsonNode>(
        &self,
        doc: &'a N,
        options: EvalOptions,
    ) -> Result<&'a N, Error> {
        let mut current = doc;
        for token in self.tokens() {
            current = step(current, token, options.index).map_err(fail)?;
        }
        Ok(current)
    }

    /// Evaluate this pointer, returning a mutable borrow into `doc`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::Pointer;
    /// use serde_json::json;
    ///
    /// let mut doc = json!({"a": [1, 2]});
    /// *Pointer::parse("/a/0").unwrap().eval_mut(&mut doc).unwrap() = json!(10);
    /// assert_eq!(doc, json!({"a": [10, 2]}));
    /// ```
    pub fn eval_mut<'a, N: JsonNode>(&self, doc: &'a mut N) -> Result<&'a mut N, Error> {
        self.eval_mut_with(doc, EvalOptions::default())
    }

    pub fn eval_mut_with<'a, N: JsonNode>(
        &self,
        doc: &'a mut N,
        options: EvalOptions,
    ) -> Result<&'a mut N, Error> {
        let mut current = doc;
        for token in self.tokens() {
            current = step_mut(current, token, options.index).map_err(fail)?;
        }
        Ok(current)
    }
}
