//! WooCommerce transport error types.
//!
//! - [`RestError::Api`]: a non-2xx response whose body decoded as the
//!   WooCommerce error envelope; its `message` becomes the error text
//! - [`RestError::InvalidPath`]: the request path was empty
//! - [`RestError::Http`]: any other transport failure
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::clients::rest::RestError;
//!
//! match client.get("orders", None).await {
//!     Ok(response) => println!("Orders: {}", response.body),
//!     Err(RestError::Api { status, error }) => {
//!         println!("{status} {}: {}", error.code, error.message);
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::{HttpError, HttpResponseError};

/// The error body returned by the WooCommerce REST API.
///
/// ```json
/// {"code": "woocommerce_rest_shop_order_invalid_id", "message": "Invalid ID.", "data": {"status": 404}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error data.
    #[serde(default)]
    pub data: ErrorData,
}

/// The `data` member of an [`ErrorResponse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorData {
    /// HTTP status reported by the server.
    #[serde(default)]
    pub status: u16,
    /// Per-parameter validation messages.
    #[serde(default)]
    pub params: HashMap<String, String>,
}

impl ErrorResponse {
    /// Decodes an error envelope from a raw response body.
    ///
    /// Returns `None` when the body is not an envelope or carries no message.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|envelope| !envelope.message.is_empty())
    }
}

/// Error type for WooCommerce transport operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// The API answered with its error envelope.
    #[error("{}", .error.message)]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// The decoded error envelope.
        error: ErrorResponse,
    },

    /// The REST API path is invalid.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Promotes a response error into [`RestError::Api`] when its body holds
    /// a WooCommerce error envelope.
    #[must_use]
    pub fn from_response_error(error: HttpResponseError) -> Self {
        match ErrorResponse::from_body(&error.body) {
            Some(envelope) => Self::Api {
                status: error.code,
                error: envelope,
            },
            None => Self::Http(HttpError::Response(error)),
        }
    }

    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            Self::InvalidPath { .. } => None,
        }
    }
}
