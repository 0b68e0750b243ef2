// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{ParserError, Result};
use crate::link::Link;
use crate::parser::Rule;
use pest::iterators::Pair;

/// A collection of links, in the order they appear in the header.
///
/// Only the spans the grammar recognises as links are kept; everything else
/// in the raw value is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub links: Vec<Link>,
}

impl Header {
    pub fn from_rule(pair: Pair<Rule>) -> Result<Header> {
        ensure!(
            pair.as_rule() == Rule::header,
            ParserError::InvalidRule(Rule::header, pair.as_rule())
        );

        let mut links = vec![];

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::link => {
                    let link = Link::from_rule(inner_pair)?;
                    links.push(link);
                }

                Rule::EOI => (),

                _ => unreachable!(),
            }
        }

        Ok(Header { links })
    }
}
