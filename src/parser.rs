// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{ParserError, Result};
use crate::header::Header;
pub use pest::Parser;
use std::fmt::{self, Display};

#[derive(Parser)]
#[grammar = "linkheader.pest"]
pub struct LinkHeaderParser;

impl Display for Rule {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:?}", self)
    }
}

/// Parses a raw `Link` header value into its links.
///
/// The grammar never rejects input: spans that do not form a link are
/// skipped, so a malformed value yields fewer links rather than an error.
pub fn parse(input: &str) -> Result<Header> {
    let rule = LinkHeaderParser::parse(Rule::header, input)?
        .next()
        .ok_or(ParserError::MissingRule(Rule::header))?;

    Header::from_rule(rule)
}
