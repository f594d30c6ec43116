//! Generic HTTP executor.
//!
//! [`HttpClient`] applies default headers, encodes JSON bodies and query
//! strings, sends the request and hands back the raw response. It knows
//! nothing about WooCommerce beyond the base URL it was given.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Async HTTP client bound to one base URL.
///
/// `HttpClient` is `Send + Sync`. It performs no retries: every call to
/// [`request`](Self::request) sends exactly one HTTP request.
///
/// ```rust
/// use std::collections::HashMap;
/// use woocommerce_api::clients::HttpClient;
///
/// let client = HttpClient::new("https://shop.example.com/", "wp-json/wc/v2", HashMap::new(), None).unwrap();
/// assert_eq!(client.base_uri(), "https://shop.example.com");
/// assert_eq!(client.base_path(), "wp-json/wc/v2");
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI without trailing slash (e.g., `https://shop.example.com`).
    base_uri: String,
    /// Base path without surrounding slashes (e.g., `wp-json/wc/v2`).
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying `reqwest` client
    /// cannot be created (e.g. TLS backend initialisation failure).
    pub fn new(
        base_uri: impl Into<String>,
        base_path: impl Into<String>,
        default_headers: HashMap<String, String>,
        timeout: Option<Duration>,
    ) -> Result<Self, HttpError> {
        let base_uri = base_uri.into().trim_end_matches('/').to_string();
        let base_path = base_path.into().trim_matches('/').to_string();

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the absolute URL for a request.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        let path = request.path_and_query();
        if self.base_path.is_empty() {
            format!("{}/{}", self.base_uri, path)
        } else {
            format!("{}/{}/{}", self.base_uri, self.base_path, path)
        }
    }

    /// Sends an HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`, carrying the raw body)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path_and_query(), "sending request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!(status = code, path = %request.path, "received response");

        let response = HttpResponse::new(code, res_headers, body);
        if response.is_ok() {
            Ok(response)
        } else {
            Err(HttpError::Response(HttpResponseError::new(
                code,
                response.body,
            )))
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::http_request::HttpRequest;

    fn client() -> HttpClient {
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        HttpClient::new("https://shop.example.com/", "/wp-json/wc/v2/", headers, None).unwrap()
    }

    #[test]
    fn test_client_trims_base_uri_and_path() {
        let client = client();
        assert_eq!(client.base_uri(), "https://shop.example.com");
        assert_eq!(client.base_path(), "wp-json/wc/v2");
    }

    #[test]
    fn test_url_for_joins_base_and_query() {
        let client = client();
        let request = HttpRequest::builder(HttpMethod::Get, "orders")
            .query_param("page", "2")
            .query_param("per_page", "10")
            .build()
            .unwrap();
        assert_eq!(
            client.url_for(&request),
            "https://shop.example.com/wp-json/wc/v2/orders?page=2&per_page=10"
        );
    }

    #[test]
    fn test_url_for_without_base_path() {
        let client = HttpClient::new("http://localhost:8080", "", HashMap::new(), None).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "status").build().unwrap();
        assert_eq!(client.url_for(&request), "http://localhost:8080/status");
    }

    #[test]
    fn test_default_headers_are_kept() {
        let client = client();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
