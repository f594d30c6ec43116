//! Configuration types for the WooCommerce API client.
//!
//! The main types in this module are:
//!
//! - [`WooCommerceConfig`]: credentials, store URL and transport settings
//! - [`WooCommerceConfigBuilder`]: builder for [`WooCommerceConfig`]
//! - [`ConsumerKey`] / [`ConsumerSecret`]: validated REST API credentials
//! - [`StoreUrl`]: the validated WordPress site URL
//! - [`ApiVersion`]: the `wc/vN` REST namespace to talk to
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{WooCommerceConfig, ConsumerKey, ConsumerSecret, StoreUrl, ApiVersion};
//!
//! let config = WooCommerceConfig::builder()
//!     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
//!     .consumer_key(ConsumerKey::new("ck_123").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_456").unwrap())
//!     .api_version(ApiVersion::V2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.store_url().as_ref(), "https://shop.example.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{ConsumerKey, ConsumerSecret, StoreUrl};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for a WooCommerce REST API client.
///
/// `WooCommerceConfig` is `Clone`, `Send` and `Sync`. Each instance describes
/// one store and one set of credentials, so several configurations (and
/// clients) can coexist in the same process.
#[derive(Clone, Debug)]
pub struct WooCommerceConfig {
    store_url: StoreUrl,
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl WooCommerceConfig {
    /// Creates a new builder for constructing a `WooCommerceConfig`.
    #[must_use]
    pub fn builder() -> WooCommerceConfigBuilder {
        WooCommerceConfigBuilder::new()
    }

    /// Builds a configuration from raw host, key and secret strings using
    /// the default API version.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any of the three values is empty or the
    /// host is not a valid `http(s)` URL.
    ///
    /// ```rust
    /// use woocommerce_api::{WooCommerceConfig, ConfigError};
    ///
    /// let config = WooCommerceConfig::new("https://shop.example.com", "ck_1", "cs_1").unwrap();
    /// assert_eq!(config.consumer_key().as_ref(), "ck_1");
    ///
    /// let err = WooCommerceConfig::new("https://shop.example.com", "", "cs_1").unwrap_err();
    /// assert_eq!(err, ConfigError::EmptyConsumerKey);
    /// ```
    pub fn new(
        host: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .store_url(StoreUrl::new(host)?)
            .consumer_key(ConsumerKey::new(consumer_key)?)
            .consumer_secret(ConsumerSecret::new(consumer_secret)?)
            .build()
    }

    /// Returns the store URL.
    #[must_use]
    pub const fn store_url(&self) -> &StoreUrl {
        &self.store_url
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify WooCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WooCommerceConfig>();
};

/// Builder for [`WooCommerceConfig`].
///
/// `store_url`, `consumer_key` and `consumer_secret` are required.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::V2`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no client-side timeout)
#[derive(Debug, Default)]
pub struct WooCommerceConfigBuilder {
    store_url: Option<StoreUrl>,
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl WooCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store URL (required).
    #[must_use]
    pub fn store_url(mut self, url: StoreUrl) -> Self {
        self.store_url = Some(url);
        self
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied to every HTTP request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`WooCommerceConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_url`,
    /// `consumer_key` or `consumer_secret` is not set.
    pub fn build(self) -> Result<WooCommerceConfig, ConfigError> {
        let store_url = self
            .store_url
            .ok_or(ConfigError::MissingRequiredField { field: "store_url" })?;
        let consumer_key = self
            .consumer_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_key",
            })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;

        Ok(WooCommerceConfig {
            store_url,
            consumer_key,
            consumer_secret,
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
