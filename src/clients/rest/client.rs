//! WooCommerce REST transport client.
//!
//! [`RestClient`] is the single path every resource operation takes to the
//! network. It owns the Basic authentication header, promotes WooCommerce
//! error envelopes into [`RestError::Api`] and counts the requests it sends.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::clients::rest::RestError;
use crate::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, QueryParams,
    SDK_VERSION,
};
use crate::config::{ApiVersion, StoreUrl, WooCommerceConfig};

/// Name reported by [`RestClient::api_name`].
pub const API_NAME: &str = "WooCommerce";

/// REST client for the WooCommerce API.
///
/// Requests go to `<store url>/wp-json/wc/<version>/<path>`. Each call
/// issues exactly one HTTP request; there is no retry or client-side rate
/// limiting.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`. The request counter is atomic, so one
/// client can be shared between tasks, though resource listings always
/// fetch their pages one after another.
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::{RestClient, WooCommerceConfig};
///
/// let config = WooCommerceConfig::new("https://shop.example.com", "ck_...", "cs_...")?;
/// let client = RestClient::new(&config)?;
///
/// let response = client.get("orders", None).await?;
/// println!("{} calls so far", client.api_call_count());
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
    store_url: StoreUrl,
    request_count: AtomicU64,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from a configuration.
    ///
    /// The `Authorization` header is computed here once and reused for
    /// every request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &WooCommerceConfig) -> Result<Self, RestError> {
        let api_version = config.api_version();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}WooCommerce API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            basic_auth_header(config.consumer_key().as_ref(), config.consumer_secret().as_ref()),
        );

        let http_client = HttpClient::new(
            config.store_url().as_ref(),
            api_version.base_path(),
            default_headers,
            config.timeout(),
        )?;

        tracing::debug!(
            store = %config.store_url(),
            version = %api_version,
            "created WooCommerce REST client"
        );

        Ok(Self {
            http_client,
            api_version,
            store_url: config.store_url().clone(),
            request_count: AtomicU64::new(0),
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the store URL this client talks to.
    #[must_use]
    pub const fn store_url(&self) -> &StoreUrl {
        &self.store_url
    }

    /// Returns the name of the remote API.
    #[must_use]
    pub const fn api_name(&self) -> &'static str {
        API_NAME
    }

    /// Returns the number of requests sent since creation or the last reset.
    #[must_use]
    pub fn api_call_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Resets the request counter to zero.
    pub fn reset_api_call_count(&self) {
        self.request_count.store(0, Ordering::Relaxed);
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty,
    /// [`RestError::Api`] if the server answered with an error envelope and
    /// [`RestError::Http`] for any other failure.
    pub async fn get(
        &self,
        path: &str,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn delete(
        &self,
        path: &str,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }
        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.request_count.fetch_add(1, Ordering::Relaxed);

        match self.http_client.request(request).await {
            Ok(response) => Ok(response),
            Err(HttpError::Response(error)) => Err(RestError::from_response_error(error)),
            Err(e) => Err(e.into()),
        }
    }
}

/// Builds the `Authorization` header value for HTTP Basic authentication.
fn basic_auth_header(consumer_key: &str, consumer_secret: &str) -> String {
    let token = STANDARD.encode(format!("{consumer_key}:{consumer_secret}"));
    format!("Basic {token}")
}

/// Strips leading and trailing slashes and rejects empty paths.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let path = path.trim_matches('/');

    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(path.to_string())
}
