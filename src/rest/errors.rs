//! Resource-level error types.
//!
//! [`ResourceError`] covers everything that can go wrong above the
//! transport: local validation that stops a request from being sent,
//! pagination header problems, decode failures tagged with the JSON path
//! of the offending field, and wrapped [`RestError`]s.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::{RestResource, ResourceError};
//!
//! match Order::all(&client, None).await {
//!     Ok(orders) => println!("{} orders", orders.len()),
//!     Err(ResourceError::PaginationHeader { header, reason }) => {
//!         println!("bad {header}: {reason}");
//!     }
//!     Err(ResourceError::Decode { resource, path, message }) => {
//!         println!("{resource} field {path}: {message}");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::RestError;
use thiserror::Error;

/// Error type for REST resource operations.
///
/// ```rust
/// use woocommerce_api::rest::ResourceError;
///
/// let error = ResourceError::BatchLimitExceeded {
///     resource: "products",
///     max: 100,
///     actual: 101,
/// };
/// assert_eq!(error.to_string(), "Maximum 100 products can be updated at once");
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A batch request holds more records than the API accepts.
    #[error("Maximum {max} {resource} can be updated at once")]
    BatchLimitExceeded {
        /// Plural resource name (e.g. "products").
        resource: &'static str,
        /// The largest accepted batch.
        max: usize,
        /// The number of records passed in.
        actual: usize,
    },

    /// The operation needs a record id that is not set.
    #[error("{resource} has no id; cannot {operation}")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// No valid path matches the provided IDs and operation.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "all", "delete").
        operation: &'static str,
    },

    /// The total-pages header was missing or not a number.
    #[error("Error while retrieving {header} header ({reason})")]
    PaginationHeader {
        /// Name of the header.
        header: &'static str,
        /// Why the value could not be used.
        reason: String,
    },

    /// A response body did not match the expected model.
    #[error("Failed to decode {resource} at '{path}': {message}")]
    Decode {
        /// The type name of the resource.
        resource: &'static str,
        /// JSON path of the field that failed (e.g. `[3].line_items[0].total`).
        path: String,
        /// The underlying decode error.
        message: String,
    },

    /// A record or filter could not be serialized.
    #[error("Failed to encode {resource}: {message}")]
    Encode {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying encode error.
        message: String,
    },

    /// A transport-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rest(e) => e.status(),
            _ => None,
        }
    }

    /// Returns `true` if the error was raised locally, before any request.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::BatchLimitExceeded { .. } | Self::MissingId { .. } | Self::PathResolutionFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, HttpResponseError};

    #[test]
    fn test_pagination_header_error_message() {
        let error = ResourceError::PaginationHeader {
            header: "X-WP-TotalPages",
            reason: "header missing".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Error while retrieving X-WP-TotalPages header (header missing)"
        );
    }

    #[test]
    fn test_decode_error_names_resource_and_path() {
        let error = ResourceError::Decode {
            resource: "Order",
            path: "[0].total".to_string(),
            message: "invalid number".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Order"));
        assert!(message.contains("[0].total"));
    }

    #[test]
    fn test_validation_errors_are_flagged() {
        assert!(ResourceError::MissingId {
            resource: "Product",
            operation: "update",
        }
        .is_validation());
        assert!(!ResourceError::PaginationHeader {
            header: "X-WP-TotalPages",
            reason: String::new(),
        }
        .is_validation());
    }

    #[test]
    fn test_rest_error_converts_and_keeps_status() {
        let rest = RestError::Http(HttpError::Response(HttpResponseError::new(503, "")));
        let error: ResourceError = rest.into();
        assert_eq!(error.status(), Some(503));
        assert_eq!(error.to_string(), "Request failed with status 503");
    }
}
