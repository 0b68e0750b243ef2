// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Rel-keyed views over a `Link` header and their serialization.
//!
//! Decoding is best effort. Spans that do not form a link, and links without
//! a non-empty `rel`, are dropped. When several links share a `rel` the last
//! one wins.
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut params = HashMap::new();
//! params.insert("rel".to_string(), "next".to_string());
//! params.insert("title".to_string(), "Next page".to_string());
//!
//! let header = linkheader::encode_add("", "https://example.org/2", &params);
//! assert_eq!(header, r#"<https://example.org/2>; rel="next"; title="Next page""#);
//!
//! let links = linkheader::decode(&header);
//! assert_eq!(links["next"].href, "https://example.org/2");
//! assert_eq!(links["next"].get("title"), Some("Next page"));
//! ```

use crate::param::is_token;
use crate::parser::parse;
use std::collections::HashMap;
use std::fmt::Write;
use tracing::{trace, warn};

/// Links keyed by their `rel` value.
pub type Links = HashMap<String, LinkEntry>;

/// Link targets keyed by their `rel` value.
pub type SimpleLinks = HashMap<String, String>;

/// A decoded link: its target and every param found next to it, `rel`
/// included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkEntry {
    pub href: String,
    pub params: HashMap<String, String>,
}

impl LinkEntry {
    pub fn new(href: impl Into<String>) -> LinkEntry {
        LinkEntry {
            href: href.into(),
            params: HashMap::new(),
        }
    }

    /// Looks up a param by name. `href` resolves to the link target.
    pub fn get(&self, name: &str) -> Option<&str> {
        if name == "href" {
            return Some(self.href.as_str());
        }

        self.params.get(name).map(String::as_str)
    }
}

/// Decodes a header into links keyed by `rel`.
pub fn decode(header: &str) -> Links {
    let mut links = Links::new();

    if header.is_empty() {
        return links;
    }

    let parsed = match parse(header) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(error = %err, "link header could not be parsed");
            return links;
        }
    };

    for link in parsed.links {
        let params: HashMap<String, String> = link
            .params
            .into_iter()
            .filter(|param| !param.value().is_empty())
            .map(|param| param.into_pair())
            .collect();

        match params.get("rel").cloned() {
            Some(rel) => {
                links.insert(
                    rel,
                    LinkEntry {
                        href: link.target.into_string(),
                        params,
                    },
                );
            }
            None => trace!(href = %link.target, "dropping link without rel"),
        }
    }

    links
}

/// Decodes a header into link targets keyed by `rel`, ignoring other params.
pub fn decode_simple(header: &str) -> SimpleLinks {
    decode(header)
        .into_iter()
        .map(|(rel, entry)| (rel, entry.href))
        .collect()
}

/// Serializes links as a header value.
///
/// Each link is written as `<href>; rel="..."` followed by its remaining
/// params in name order, all quoted. The order of links is unspecified.
///
/// Links and params that would not decode back are left out.
pub fn encode(links: &Links) -> String {
    let mut header = String::new();

    for (rel, entry) in links {
        if !is_encodable_link(&entry.href, rel) {
            trace!(
                rel = rel.as_str(),
                href = entry.href.as_str(),
                "skipping link that cannot be encoded"
            );
            continue;
        }

        if !header.is_empty() {
            header.push_str(", ");
        }

        let mut params: Vec<(&String, &String)> = entry
            .params
            .iter()
            .filter(|(name, _)| name.as_str() != "rel" && name.as_str() != "href")
            .filter(|(name, value)| is_encodable_param(name, value))
            .collect();
        params.sort();

        write_link(&mut header, &entry.href, rel, params);
    }

    header
}

/// Serializes link targets keyed by `rel` as a header value.
pub fn encode_simple(links: &SimpleLinks) -> String {
    let mut header = String::new();

    for (rel, href) in links {
        if !is_encodable_link(href, rel) {
            trace!(
                rel = rel.as_str(),
                href = href.as_str(),
                "skipping link that cannot be encoded"
            );
            continue;
        }

        if !header.is_empty() {
            header.push_str(", ");
        }

        write_link(&mut header, href, rel, vec![]);
    }

    header
}

/// A target cannot hold `>` and a quoted value cannot hold `"`.
fn is_encodable_link(href: &str, rel: &str) -> bool {
    !href.contains('>') && is_encodable_param("rel", rel)
}

fn is_encodable_param(name: &str, value: &str) -> bool {
    is_token(name) && !value.is_empty() && !value.contains('"')
}

fn write_link(out: &mut String, href: &str, rel: &str, params: Vec<(&String, &String)>) {
    // Writing into a String cannot fail.
    let _ = write!(out, "<{}>; rel=\"{}\"", href, rel);

    for (name, value) in params {
        let _ = write!(out, "; {}=\"{}\"", name, value);
    }
}

/// Adds a link to an existing header and returns the reserialized header.
///
/// `params` must carry a non-empty `rel`; a link already present under the
/// same `rel` is replaced. When `href` is empty or holds `>`, or there is no
/// usable `rel`, the original header is returned unchanged. Params that
/// would not decode back (a name that is not a token, an empty value or a
/// value holding `"`) are skipped.
pub fn encode_add(header: &str, href: &str, params: &HashMap<String, String>) -> String {
    if href.is_empty() || params.is_empty() {
        return header.to_string();
    }

    let rel = match params.get("rel") {
        Some(rel) if is_encodable_link(href, rel) => rel.clone(),
        _ => return header.to_string(),
    };

    trace!(rel = rel.as_str(), href, "adding link");

    let mut links = decode(header);
    let entry = LinkEntry {
        href: href.to_string(),
        params: params
            .iter()
            .filter(|(name, _)| name.as_str() != "href")
            .filter(|(name, value)| {
                let encodable = is_encodable_param(name, value);
                if !encodable {
                    trace!(param = name.as_str(), "skipping param that cannot be encoded");
                }
                encodable
            })
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect(),
    };
    links.insert(rel, entry);

    encode(&links)
}

/// Adds a link with only a `rel` to an existing header and returns the
/// reserialized header.
///
/// Params other than `rel` already in the header are not preserved. When
/// `href` or `rel` is empty, `href` holds `>` or `rel` holds `"`, the
/// original header is returned unchanged.
pub fn encode_add_simple(header: &str, href: &str, rel: &str) -> String {
    if href.is_empty() || !is_encodable_link(href, rel) {
        return header.to_string();
    }

    trace!(rel, href, "adding link");

    let mut links = decode_simple(header);
    links.insert(rel.to_string(), href.to_string());

    encode_simple(&links)
}
