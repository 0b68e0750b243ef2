// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{ParserError, Result};
use crate::param::Param;
use crate::parser::Rule;
use crate::uri::UriRef;
use pest::iterators::Pair;

/// Primitive representation of a link without Context or handling rules for
/// "rel", "anchor", "hreflang", etc.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub target: UriRef,
    pub params: Vec<Param>,
}

impl Link {
    pub fn from_rule(pair: Pair<Rule>) -> Result<Link> {
        ensure!(
            pair.as_rule() == Rule::link,
            ParserError::InvalidRule(Rule::link, pair.as_rule())
        );

        let mut target = UriRef::default();
        let mut params = vec![];

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::target => {
                    target = UriRef::from_bracketed(inner_pair.as_str());
                }

                Rule::param => {
                    let param = Param::from_rule(inner_pair)?;
                    params.push(param);
                }

                _ => unreachable!(),
            }
        }

        let link = Link { target, params };

        Ok(link)
    }
}
