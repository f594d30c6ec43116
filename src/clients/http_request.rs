//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder, plus the
//! ordered [`QueryParams`] map used for every query string the client sends.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// Query parameters, kept sorted by key so the rendered string is stable.
pub type QueryParams = BTreeMap<String, String>;

/// Renders query parameters as a percent-encoded `k=v&k2=v2` string.
///
/// ```rust
/// use woocommerce_api::clients::{encode_query, QueryParams};
///
/// let mut query = QueryParams::new();
/// query.insert("per_page".to_string(), "10".to_string());
/// query.insert("page".to_string(), "2".to_string());
/// query.insert("search".to_string(), "blue shirt".to_string());
/// assert_eq!(encode_query(&query), "page=2&per_page=10&search=blue%20shirt");
/// ```
#[must_use]
pub fn encode_query(query: &QueryParams) -> String {
    query
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// HTTP methods used by the WooCommerce REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// An HTTP request to be sent through an [`HttpClient`](crate::clients::HttpClient).
///
/// ```rust
/// use woocommerce_api::clients::{HttpRequest, HttpMethod, DataType};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "orders")
///     .query_param("page", "2")
///     .build()
///     .unwrap();
/// assert_eq!(get_request.path, "orders");
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "products")
///     .body(json!({"name": "Hoodie"}))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
/// assert!(post_request.body.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the client base path) for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Query parameters to append to the URL.
    pub query: Option<QueryParams>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `body_type` is `None`
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the path with its encoded query string appended, if any.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) if !query.is_empty() => format!("{}?{}", self.path, encode_query(query)),
            _ => self.path.clone(),
        }
    }
}

/// Builder for [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    body_type: Option<DataType>,
    query: Option<QueryParams>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            query: None,
            extra_headers: None,
        }
    }

    /// Sets the request body.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(QueryParams::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_post_without_body_fails() {
        let result = HttpRequest::builder(HttpMethod::Post, "products").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_body_without_type_fails() {
        let result = HttpRequest::builder(HttpMethod::Put, "products/1")
            .body(json!({"name": "x"}))
            .build();
        assert!(matches!(result, Err(InvalidHttpRequestError::MissingBodyType)));
    }

    #[test]
    fn test_delete_without_body_succeeds() {
        let request = HttpRequest::builder(HttpMethod::Delete, "products/55")
            .query_param("force", "true")
            .build()
            .unwrap();
        assert_eq!(request.path_and_query(), "products/55?force=true");
    }

    #[test]
    fn test_query_is_rendered_in_key_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "orders")
            .query_param("per_page", "10")
            .query_param("page", "2")
            .query_param("after", "2024-01-01T00:00:00")
            .build()
            .unwrap();
        assert_eq!(
            request.path_and_query(),
            "orders?after=2024-01-01T00%3A00%3A00&page=2&per_page=10"
        );
    }

    #[test]
    fn test_empty_query_renders_bare_path() {
        let request = HttpRequest::builder(HttpMethod::Get, "orders")
            .query(QueryParams::new())
            .build()
            .unwrap();
        assert_eq!(request.path_and_query(), "orders");
    }

    #[test]
    fn test_encode_query_escapes_commas_and_spaces() {
        let mut query = QueryParams::new();
        query.insert("include".to_string(), "1,2,3".to_string());
        query.insert("search".to_string(), "a b".to_string());
        assert_eq!(encode_query(&query), "include=1%2C2%2C3&search=a%20b");
    }

    #[test]
    fn test_header_builder_collects_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "orders")
            .header("X-Trace", "abc")
            .build()
            .unwrap();
        assert_eq!(
            request.extra_headers.unwrap().get("X-Trace"),
            Some(&"abc".to_string())
        );
    }
}
