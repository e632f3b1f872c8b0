//! Callback URL construction and the `tval` wire parameter.

use std::borrow::Cow;

/// Name of the query parameter carrying the changed value.
pub const VALUE_PARAM: &str = "tval";

/// A callback endpoint, treated as an opaque string.
///
/// The base is not validated beyond checking whether it already carries a
/// query string, so relative paths and pre-parameterized URLs both work. The
/// changed value is appended as the `tval` parameter, query-encoded, using `&`
/// when the base already contains a `?` and `?` otherwise.
///
/// # Examples
///
/// ```rust
/// use textwatch::notify::CallbackUrl;
///
/// let url = CallbackUrl::new("/notify");
/// assert_eq!(url.with_value("hello world"), "/notify?tval=hello%20world");
///
/// let url = CallbackUrl::new("/notify?x=1");
/// assert_eq!(url.with_value("a"), "/notify?x=1&tval=a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackUrl {
    base: String,
}

impl CallbackUrl {
    /// Wrap a callback address.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// The configured base, untouched.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Build the request URL for a changed value.
    pub fn with_value(&self, value: &str) -> String {
        let separator = if self.base.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}={}",
            self.base,
            separator,
            VALUE_PARAM,
            urlencoding::encode(value)
        )
    }
}

impl From<&str> for CallbackUrl {
    fn from(base: &str) -> Self {
        Self::new(base)
    }
}

impl From<String> for CallbackUrl {
    fn from(base: String) -> Self {
        Self::new(base)
    }
}

/// Extract and decode the `tval` parameter from a request URL or bare query
/// string.
///
/// This is the receiving half of the wire contract. Returns `None` when the
/// parameter is absent or its encoding is invalid.
///
/// # Examples
///
/// ```rust
/// use textwatch::notify::extract_value;
///
/// assert_eq!(
///     extract_value("/notify?tval=hello%20world"),
///     Some("hello world".to_string())
/// );
/// assert_eq!(extract_value("x=1&tval=a"), Some("a".to_string()));
/// assert_eq!(extract_value("/notify?x=1"), None);
/// ```
pub fn extract_value(url_or_query: &str) -> Option<String> {
    let query = match url_or_query.split_once('?') {
        Some((_, query)) => query,
        None => url_or_query,
    };

    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            if key == VALUE_PARAM {
                return urlencoding::decode(value).ok().map(Cow::into_owned);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_base_uses_question_mark() {
        let url = CallbackUrl::new("/notify");
        assert_eq!(url.with_value("a"), "/notify?tval=a");
    }

    #[test]
    fn test_parameterized_base_uses_ampersand() {
        let url = CallbackUrl::new("/notify?x=1");
        assert_eq!(url.with_value("a"), "/notify?x=1&tval=a");
    }

    #[test]
    fn test_value_is_query_encoded() {
        let url = CallbackUrl::new("/notify");
        assert_eq!(url.with_value("hello world"), "/notify?tval=hello%20world");
        assert_eq!(url.with_value("a&b=c"), "/notify?tval=a%26b%3Dc");
    }

    #[test]
    fn test_empty_value() {
        let url = CallbackUrl::new("/notify");
        assert_eq!(url.with_value(""), "/notify?tval=");
    }

    #[test]
    fn test_extract_from_full_url() {
        assert_eq!(
            extract_value("/notify?x=1&tval=hello%20world"),
            Some("hello world".to_string())
        );
    }

    #[test]
    fn test_extract_from_bare_query() {
        assert_eq!(extract_value("tval=abc"), Some("abc".to_string()));
    }

    #[test]
    fn test_extract_missing_param() {
        assert_eq!(extract_value("/notify?x=1"), None);
        assert_eq!(extract_value("/notify"), None);
    }

    #[test]
    fn test_extract_invalid_encoding() {
        // %FF does not decode to valid UTF-8
        assert_eq!(extract_value("tval=%FF"), None);
    }

    proptest! {
        #[test]
        fn prop_value_roundtrips_through_query(value in "\\PC*") {
            let url = CallbackUrl::new("/notify").with_value(&value);
            prop_assert_eq!(extract_value(&url), Some(value));
        }

        #[test]
        fn prop_separator_matches_base(base in "[a-z0-9/._-]{1,24}", param in proptest::option::of("[a-z]=[0-9]")) {
            let base = match param {
                Some(p) => format!("{base}?{p}"),
                None => base,
            };
            let url = CallbackUrl::new(&base).with_value("v");
            if base.contains('?') {
                prop_assert_eq!(url, format!("{base}&tval=v"));
            } else {
                prop_assert_eq!(url, format!("{base}?tval=v"));
            }
        }
    }
}
