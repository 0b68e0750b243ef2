// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{ParserError, Result};
use crate::parser::Rule;
use pest::iterators::Pair;

/// A link param pair.
///
/// A param is written either as a token, `rel=next`, or as quoted text,
/// `rel="next"`. Both are represented the same way, with the quotes removed:
///
/// ```
/// use linkheader::param::Param;
///
/// let param = Param::new("rel", "next");
///
/// assert_eq!(param.name(), "rel");
/// assert_eq!(param.value(), "next");
/// ```
///
/// Names are kept verbatim, so a star param such as `title*` is not decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    name: String,
    value: String,
}

impl Param {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Param {
        Param {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn from_rule(pair: Pair<Rule>) -> Result<Param> {
        ensure!(
            pair.as_rule() == Rule::param,
            ParserError::InvalidRule(Rule::param, pair.as_rule())
        );

        let mut name = String::new();
        let mut value = String::new();

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::name => name.push_str(inner_pair.as_str()),

                Rule::value => value.push_str(inner_pair.as_str()),

                Rule::quoted_value => value.push_str(unquote(inner_pair.as_str())),

                _ => unreachable!(),
            }
        }

        Ok(Param { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the param and returns its name and value.
    pub fn into_pair(self) -> (String, String) {
        (self.name, self.value)
    }
}

/// Removes a pair of surrounding double quotes.
///
/// Anything not fully wrapped in quotes is returned unchanged.
///
/// ```
/// use linkheader::param::unquote;
///
/// assert_eq!(unquote(r#""foo""#), "foo");
/// assert_eq!(unquote(r#""foo"#), r#""foo"#);
/// ```
pub fn unquote(s: &str) -> &str {
    if s.len() < 2 || !s.starts_with('"') || !s.ends_with('"') {
        return s;
    }

    &s[1..s.len() - 1]
}

/// Whether `s` can be written as a param name or an unquoted value.
///
/// ```
/// use linkheader::param::is_token;
///
/// assert!(is_token("title*"));
/// assert!(!is_token("two words"));
/// ```
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && !s.contains(DELIMITERS)
}

const DELIMITERS: &[char] = &[
    '(', ')', '<', '>', '@', ',', ';', ':', '"', '/', '[', ']', '?', '=', '{', '}', ' ', '\t',
];
