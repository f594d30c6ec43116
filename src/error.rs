//! Configuration error types for the WooCommerce API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! missing host or credential is reported before any request is sent.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{ConsumerKey, ConfigError};
//!
//! let result = ConsumerKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyConsumerKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Consumer key cannot be empty.
    #[error("ConsumerKey not provided. Please provide a valid WooCommerce consumer key.")]
    EmptyConsumerKey,

    /// Consumer secret cannot be empty.
    #[error("ConsumerSecret not provided. Please provide a valid WooCommerce consumer secret.")]
    EmptyConsumerSecret,

    /// Store URL is missing or malformed.
    #[error("Invalid store URL '{url}'. Please provide a URL with scheme (e.g., 'https://shop.example.com').")]
    InvalidStoreUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version string is not recognised.
    #[error("Invalid API version '{version}'. Expected one of 'v1', 'v2' or 'v3'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
