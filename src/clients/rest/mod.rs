//! WooCommerce REST transport.
//!
//! - [`RestClient`]: authenticated `get()`, `post()`, `put()`, `delete()` and
//!   the request counter
//! - [`RestError`]: transport errors, including the decoded
//!   [`ErrorResponse`] envelope
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::{RestClient, WooCommerceConfig};
//!
//! let config = WooCommerceConfig::new("https://shop.example.com", "ck_...", "cs_...")?;
//! let client = RestClient::new(&config)?;
//!
//! let response = client.get("products/attributes", None).await?;
//! println!("{}", response.body);
//! ```

mod client;
mod errors;

pub use client::{RestClient, API_NAME};
pub use errors::{ErrorData, ErrorResponse, RestError};
