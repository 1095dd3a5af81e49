//! The parsed [`Pointer`] type.

use std::fmt;
use std::str::FromStr;

use crate::util::{escape_token, unescape_token};
use crate::Error;

/// A parsed JSON Pointer: an ordered sequence of unescaped reference tokens.
///
/// The empty pointer (no tokens) refers to the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pointer {
    tokens: Vec<String>,
}

impl Pointer {
    /// Parse a JSON Pointer string.
    ///
    /// - Empty string is the root pointer
    /// - Anything else must begin with `/`
    /// - `~1` and `~0` are unescaped in each token
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] with the whole input if it is non-empty and
    /// does not begin with `/`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::Pointer;
    ///
    /// assert!(Pointer::parse("").unwrap().is_root());
    /// assert_eq!(Pointer::parse("/").unwrap().tokens(), [""]);
    /// assert_eq!(Pointer::parse("/a~1b/m~0n").unwrap().tokens(), ["a/b", "m~n"]);
    /// assert!(Pointer::parse("foo").unwrap_err().is_parse());
    /// ```
    pub fn parse(pointer: &str) -> Result<Self, Error> {
        if pointer.is_empty() {
            return Ok(Self::root());
        }
        let Some(rest) = pointer.strip_prefix('/') else {
            log::debug!("rejecting pointer without leading slash: {pointer:?}");
            return Err(Error::Parse(pointer.to_string()));
        };
        Ok(Self {
            tokens: rest.split('/').map(unescape_token).collect(),
        })
    }

    /// The root pointer (`""`).
    pub fn root() -> Self {
        Self { tokens: Vec::new() }
    }

    /// The unescaped reference tokens, in traversal order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    /// Whether this pointer refers to the whole document.
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append an unescaped token.
    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// The last token, if any.
    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// The pointer to the containing value, or `None` for the root.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::Pointer;
    ///
    /// let p: Pointer = "/foo/bar".parse().unwrap();
    /// assert_eq!(p.parent().unwrap().to_string(), "/foo");
    /// assert!(Pointer::root().parent().is_none());
    /// ```
    pub fn parent(&self) -> Option<Pointer> {
        let (_, init) = self.tokens.split_last()?;
        Some(Pointer {
            tokens: init.to_vec(),
        })
    }

    /// Whether `prefix` addresses this value or one of its ancestors.
    pub fn starts_with(&self, prefix: &Pointer) -> bool {
        self.tokens.starts_with(&prefix.tokens)
    }

    /// Whether `parent` is a strict ancestor of this pointer.
    pub fn is_child_of(&self, parent: &Pointer) -> bool {
        parent.len() < self.len() && self.starts_with(parent)
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "/{}", escape_token(token))?;
        }
        Ok(())
    }
}

impl FromStr for Pointer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pointer::parse(s)
    }
}

impl TryFrom<&str> for Pointer {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Pointer::parse(s)
    }
}

impl TryFrom<String> for Pointer {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Pointer::parse(&s)
    }
}

/// Builds a pointer from already-unescaped tokens.
impl From<Vec<String>> for Pointer {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

impl<S: Into<String>> FromIterator<S> for Pointer {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Pointer> for Vec<String> {
    fn from(pointer: Pointer) -> Self {
        pointer.tokens
    }
}
