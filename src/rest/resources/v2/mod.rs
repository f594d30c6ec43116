//! Resources of the `wc/v2` API.
//!
//! | Resource | Collection path | Listing |
//! |---|---|---|
//! | [`Order`] | `orders` | `X-WP-TotalPages` header |
//! | [`Product`] | `products` | `X-WP-TotalPages` header |
//! | [`ProductVariation`] | `products/{product_id}/variations` | until an empty page |
//! | [`ProductAttributeDef`] | `products/attributes` | single response |
//! | [`ProductBrand`] | `products/brands` | until an empty page |
//!
//! [`Product::batch_update`] updates up to [`MAX_BATCH_SIZE`] products in
//! one call.

pub mod common;
mod order;
mod product;
mod product_attribute;
mod product_brand;
mod product_variation;

pub use order::{Order, OrderListParams};
pub use product::{Product, ProductListParams, MAX_BATCH_SIZE};
pub use product_attribute::{ProductAttributeDef, ProductAttributeDefListParams};
pub use product_brand::{ProductBrand, ProductBrandListParams};
pub use product_variation::{ProductVariation, ProductVariationListParams};
