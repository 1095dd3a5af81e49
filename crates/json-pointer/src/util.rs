//! Reference token escaping (RFC 6901, section 4).

/// Resolves the escape sequences of a single reference token.
///
/// `~1` is replaced before `~0`, so `~01` becomes `~1` rather than `/`.
///
/// # Example
///
/// ```
/// use json_pointer::unescape_token;
///
/// assert_eq!(unescape_token("a~1b"), "a/b");
/// assert_eq!(unescape_token("m~0n"), "m~n");
/// assert_eq!(unescape_token("~01"), "~1");
/// ```
pub fn unescape_token(token: &str) -> String {
    if !token.contains('~') {
        return token.to_string();
    }
    token.replace("~1", "/").replace("~0", "~")
}

/// Escapes a single reference token for use in a pointer string.
///
/// `~` is escaped before `/` so the inserted `~1` is not escaped again.
///
/// # Example
///
/// ```
/// use json_pointer::escape_token;
///
/// assert_eq!(escape_token("a/b"), "a~1b");
/// assert_eq!(escape_token("m~n"), "m~0n");
/// assert_eq!(escape_token("~1"), "~01");
/// ```
pub fn escape_token(token: &str) -> String {
    if !token.contains(['/', '~']) {
        return token.to_string();
    }
    token.replace('~', "~0").replace('/', "~1")
}
