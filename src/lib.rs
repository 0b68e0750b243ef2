// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Best effort parsing and serialization of HTTP `Link` header values.
//!
//! [`parse`] returns every link found in a header, in order. [`decode`] and
//! [`decode_simple`] key those links by `rel`, and [`encode_add`] and
//! [`encode_add_simple`] add a link to an existing header value.

#[macro_use]
extern crate failure;

extern crate pest;
#[macro_use]
extern crate pest_derive;

pub mod codec;
pub mod error;
pub mod header;
pub mod link;
pub mod param;
pub mod parser;
pub mod uri;

pub use codec::{
    decode, decode_simple, encode, encode_add, encode_add_simple, encode_simple, LinkEntry, Links,
    SimpleLinks,
};
pub use parser::parse;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Header;
    use crate::link::Link;
    use crate::param::Param;

    #[test]
    fn single_link() {
        let input = r#"<https://example.org>"#;
        let expected = Header {
            links: vec![Link {
                target: "https://example.org".into(),
                params: vec![],
            }],
        };

        let actual = parse(input).expect("Expect a valid header");

        assert_eq!(actual, expected);
    }

    #[test]
    fn multiple_links() {
        let input =
            r#"<https://example.org/3>; rel="next", <https://example.org/1>; rel="previous""#;
        let expected = Header {
            links: vec![
                Link {
                    target: "https://example.org/3".into(),
                    params: vec![Param::new("rel", "next")],
                },
                Link {
                    target: "https://example.org/1".into(),
                    params: vec![Param::new("rel", "previous")],
                },
            ],
        };

        let actual = parse(input).expect("Expect a valid header");

        assert_eq!(actual, expected);
    }

    #[test]
    fn link_header_field_examples_1() {
        let input =
            r#"<http://example.com/TheBook/chapter2>; rel="previous"; title="previous chapter""#;

        let actual = decode(input);

        assert_eq!(actual.len(), 1);
        assert_eq!(actual["previous"].href, "http://example.com/TheBook/chapter2");
        assert_eq!(actual["previous"].get("title"), Some("previous chapter"));
    }

    #[test]
    fn link_header_field_examples_2() {
        let input = r#"</>; rel="http://example.net/foo""#;

        let actual = decode_simple(input);

        assert_eq!(actual["http://example.net/foo"], "/");
    }

    #[test]
    fn link_header_field_examples_3() {
        let input = "</terms>; rel=\"copyright\"; anchor=\"#foo\"";

        let actual = decode(input);

        assert_eq!(actual["copyright"].href, "/terms");
        assert_eq!(actual["copyright"].get("anchor"), Some("#foo"));
    }

    #[test]
    fn link_header_field_examples_4() {
        let input = r#"</TheBook/chapter2>; rel="previous"; title*=UTF-8'de'letztes%20Kapitel, </TheBook/chapter4>; rel="next"; title*=UTF-8'de'n%c3%a4chstes%20Kapitel"#;

        let actual = decode(input);

        assert_eq!(actual.len(), 2);
        assert_eq!(actual["previous"].href, "/TheBook/chapter2");
        assert_eq!(
            actual["previous"].get("title*"),
            Some("UTF-8'de'letztes%20Kapitel")
        );
        assert_eq!(actual["next"].href, "/TheBook/chapter4");
        assert_eq!(
            actual["next"].get("title*"),
            Some("UTF-8'de'n%c3%a4chstes%20Kapitel")
        );
    }

    #[test]
    fn link_header_field_examples_5() {
        let input = r#"<http://example.org/>; rel="start http://example.net/relation/other""#;

        let actual = decode_simple(input);

        assert_eq!(
            actual["start http://example.net/relation/other"],
            "http://example.org/"
        );
    }

    #[test]
    fn unicode_fest() {
        let input = "<http://example.org/\u{FE0F}>; rel=\"\u{1F383}\"";

        let actual = decode(input);

        assert_eq!(actual["🎃"].href, "http://example.org/\u{FE0F}");
    }

    #[test]
    fn entry_lookup() {
        let mut entry = LinkEntry::new("https://example.org");
        entry.params.insert("rel".into(), "next".into());

        assert_eq!(entry.get("href"), Some("https://example.org"));
        assert_eq!(entry.get("rel"), Some("next"));
        assert_eq!(entry.get("title"), None);
    }

    #[test]
    fn encode_user_built_links() {
        let mut entry = LinkEntry::new("https://example.org/2");
        entry.params.insert("rel".into(), "ignored".into());
        entry.params.insert("title".into(), "Page 2".into());
        let mut links = Links::new();
        links.insert("next".into(), entry);

        let actual = encode(&links);

        assert_eq!(
            actual,
            r#"<https://example.org/2>; rel="next"; title="Page 2""#
        );
    }

    #[test]
    fn encode_simple_links() {
        let mut links = SimpleLinks::new();
        links.insert("next".into(), "https://example.org/2".into());

        assert_eq!(
            encode_simple(&links),
            r#"<https://example.org/2>; rel="next""#
        );
    }
}
