// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use std::fmt::{self, Display};

/// A link target as found between `<` and `>`. No URI validation is done.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UriRef(String);

impl UriRef {
    /// Builds a target from a bracketed token such as `<https://example.org>`.
    pub fn from_bracketed(s: &str) -> UriRef {
        UriRef(debrack(s).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for UriRef {
    fn from(s: String) -> Self {
        UriRef(s)
    }
}

impl From<&str> for UriRef {
    fn from(s: &str) -> Self {
        UriRef(s.to_string())
    }
}

impl Display for UriRef {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Wraps a bare token in angle brackets.
///
/// Tokens that already start with `<` or end with `>` are left untouched.
///
/// ```
/// use linkheader::uri::brack;
///
/// assert_eq!(brack("test"), "<test>");
/// assert_eq!(brack("<test"), "<test");
/// assert_eq!(brack("test>"), "test>");
/// ```
pub fn brack(s: &str) -> String {
    if s.starts_with('<') || s.ends_with('>') {
        return s.to_string();
    }

    format!("<{}>", s)
}

/// Strips a leading `<` and, when present, the matching trailing `>`.
///
/// A token that does not start with `<` is returned as is.
///
/// ```
/// use linkheader::uri::debrack;
///
/// assert_eq!(debrack("<test>"), "test");
/// assert_eq!(debrack("<test"), "test");
/// assert_eq!(debrack("test>"), "test>");
/// ```
pub fn debrack(s: &str) -> &str {
    match s.strip_prefix('<') {
        Some(rest) => rest.strip_suffix('>').unwrap_or(rest),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brack_bare_token() {
        assert_eq!(brack("test"), "<test>");
        assert_eq!(brack(""), "<>");
    }

    #[test]
    fn brack_partial_token() {
        assert_eq!(brack("<test"), "<test");
        assert_eq!(brack("test>"), "test>");
        assert_eq!(brack("<test>"), "<test>");
    }

    #[test]
    fn debrack_tokens() {
        assert_eq!(debrack("a"), "a");
        assert_eq!(debrack("<test>"), "test");
        assert_eq!(debrack("<test"), "test");
        assert_eq!(debrack("test>"), "test>");
    }

    #[test]
    fn debrack_degenerate_tokens() {
        assert_eq!(debrack(""), "");
        assert_eq!(debrack("<"), "");
        assert_eq!(debrack("<>"), "");
    }

    #[test]
    fn from_bracketed() {
        let actual = UriRef::from_bracketed("<https://example.org>");

        assert_eq!(actual, UriRef::from("https://example.org"));
        assert_eq!(actual.as_str(), "https://example.org");
    }
}
