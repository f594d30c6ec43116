//! Resource models, grouped by API version.
//!
//! The `wc/v2` models are re-exported here:
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::Product;      // wc/v2
//! use woocommerce_api::rest::resources::v2::Product;  // explicit
//! ```

pub mod v2;

pub use v2::*;
