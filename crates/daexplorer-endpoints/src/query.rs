//! Query-string overrides.
//!
//! Both of these forms carry an override:
//! - `http://localhost:3000/?rpc=wss://node.example/#/explorer`
//! - `http://localhost:3000/#/explorer?rpc=wss://node.example`
//!
//! so the query is taken as the text after the first `?` of the href, up to
//! any second `?`, and the fragment is not split off beforehand.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use url::form_urlencoded;

use crate::error::EndpointError;

/// Decoded query parameters, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse `application/x-www-form-urlencoded` text.
    pub fn parse(query: &str) -> Self {
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Parse the query portion of a location href.
    pub fn from_href(href: &str) -> Self {
        Self::parse(href.split('?').nth(1).unwrap_or_default())
    }

    /// The single non-empty value of `name`.
    ///
    /// Returns `None` when the parameter is absent or empty, and
    /// `InvalidInput` when it is given more than once.
    pub fn single(&self, name: &str) -> Result<Option<&str>, EndpointError> {
        let mut values = self
            .pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str());
        let first = values.next();
        if values.next().is_some() {
            return Err(EndpointError::InvalidInput(format!(
                "'{}' specified more than once",
                name
            )));
        }
        Ok(first.filter(|v| !v.is_empty()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// True if every `%` starts a two hex digit escape.
fn has_valid_escapes(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

/// Drop any `#` route suffix from an override and percent-decode the rest.
///
/// Malformed escapes and escapes that do not decode to UTF-8 are rejected.
pub fn decode_override(raw: &str) -> Result<String, EndpointError> {
    let head = raw.split_once('#').map_or(raw, |(head, _)| head);
    if !has_valid_escapes(head) {
        return Err(EndpointError::InvalidInput(format!(
            "Malformed url '{}': invalid percent escape",
            head
        )));
    }
    percent_decode_str(head)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| EndpointError::InvalidInput(format!("Malformed url '{}': {}", head, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== QueryParams Tests ====================

    #[test]
    fn test_from_href_without_query() {
        let params = QueryParams::from_href("http://localhost:3000/#/explorer");
        assert!(params.is_empty());
    }

    #[test]
    fn test_from_href_query_before_fragment() {
        let params = QueryParams::from_href("http://localhost:3000/?rpc=wss://a.b#/explorer");
        assert_eq!(params.single("rpc").unwrap(), Some("wss://a.b#/explorer"));
    }

    #[test]
    fn test_from_href_query_after_fragment() {
        let params = QueryParams::from_href("http://localhost:3000/#/explorer?rpc=wss://a.b");
        assert_eq!(params.single("rpc").unwrap(), Some("wss://a.b"));
    }

    #[test]
    fn test_from_href_ignores_second_question_mark() {
        let params = QueryParams::from_href("http://x/?rpc=wss://a.b?light=https://c.d");
        assert_eq!(params.single("rpc").unwrap(), Some("wss://a.b"));
        assert_eq!(params.single("light").unwrap(), None);
    }

    #[test]
    fn test_parse_decodes_values() {
        let params = QueryParams::parse("rpc=wss%3A%2F%2Fa.b%2F%23%2Fexplorer&x=a+b");
        assert_eq!(params.single("rpc").unwrap(), Some("wss://a.b/#/explorer"));
        assert_eq!(params.single("x").unwrap(), Some("a b"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_single_empty_is_absent() {
        let params = QueryParams::parse("rpc=&light");
        assert_eq!(params.single("rpc").unwrap(), None);
        assert_eq!(params.single("light").unwrap(), None);
    }

    #[test]
    fn test_single_repeated_is_invalid() {
        let params = QueryParams::parse("rpc=wss://a.b&rpc=wss://c.d");
        let err = params.single("rpc").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_single_repeated_empty_is_invalid() {
        let params = QueryParams::parse("rpc&rpc=");
        assert!(params.single("rpc").is_err());
    }

    // ==================== decode_override Tests ====================

    #[test]
    fn test_decode_override_strips_fragment() {
        assert_eq!(
            decode_override("wss://a.b/#/explorer").unwrap(),
            "wss://a.b/"
        );
    }

    #[test]
    fn test_decode_override_second_decoding() {
        assert_eq!(
            decode_override("wss%3A%2F%2Fa.b%3A9944").unwrap(),
            "wss://a.b:9944"
        );
    }

    #[test]
    fn test_decode_override_keeps_plus() {
        assert_eq!(decode_override("ws://a+b").unwrap(), "ws://a+b");
    }

    #[test]
    fn test_decode_override_invalid_utf8() {
        let err = decode_override("wss://%FF%FE").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_decode_override_malformed_escape() {
        assert!(decode_override("wss://a%ZZ").unwrap_err().is_invalid_input());
        assert!(decode_override("wss://a%4").unwrap_err().is_invalid_input());
        assert!(decode_override("wss://a%").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_decode_override_malformed_escape_after_fragment_ignored() {
        assert_eq!(decode_override("wss://a.b/#%ZZ").unwrap(), "wss://a.b/");
    }
}
