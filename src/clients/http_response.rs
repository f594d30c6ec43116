//! HTTP response type.
//!
//! [`HttpResponse`] keeps the raw body text so callers can decode it into
//! whatever model they expect, and exposes the WordPress pagination headers.

use std::collections::HashMap;

/// Response header carrying the number of pages for a listing.
pub const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

/// Response header carrying the number of records for a listing.
pub const TOTAL_HEADER: &str = "X-WP-Total";

/// An HTTP response from the WooCommerce REST API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the raw `X-WP-TotalPages` header value, if present.
    #[must_use]
    pub fn total_pages(&self) -> Option<&str> {
        self.header(TOTAL_PAGES_HEADER)
    }

    /// Returns the `X-WP-Total` record count, if present and numeric.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.header(TOTAL_HEADER)
            .and_then(|value| value.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            map.entry((*key).to_string())
                .or_default()
                .push((*value).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), "");
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [301, 400, 401, 404, 429, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), "").is_ok());
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(200, headers(&[("x-wp-totalpages", "7")]), "[]");
        assert_eq!(response.header("X-WP-TotalPages"), Some("7"));
        assert_eq!(response.total_pages(), Some("7"));
    }

    #[test]
    fn test_total_parses_record_count() {
        let response = HttpResponse::new(200, headers(&[("x-wp-total", "42")]), "[]");
        assert_eq!(response.total(), Some(42));

        let response = HttpResponse::new(200, headers(&[("x-wp-total", "many")]), "[]");
        assert_eq!(response.total(), None);
    }

    #[test]
    fn test_missing_headers_return_none() {
        let response = HttpResponse::new(200, HashMap::new(), "[]");
        assert!(response.total_pages().is_none());
        assert!(response.total().is_none());
    }
}
