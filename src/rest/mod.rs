//! Typed access to WooCommerce resources.
//!
//! - [`RestResource`]: CRUD operations shared by every resource
//! - [`ResourcePath`] / [`ResourceOperation`]: path tables
//! - [`Paginator`] / [`PaginationPolicy`]: how `all()` walks a collection
//! - [`to_query_params`] and the filter enums: list filters
//! - [`NumericString`], [`DateTimeString`], [`StockManagement`],
//!   [`decode_meta_value`]: field codecs
//! - [`ResourceError`]: errors raised above the transport
//! - [`resources`]: the resource models
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::RestResource;
//! use woocommerce_api::rest::resources::{Product, ProductListParams};
//!
//! let params = ProductListParams { sku: Some("WOO-123".into()), ..Default::default() };
//! let products = Product::all(&client, Some(params)).await?;
//!
//! let mut product = Product::find(&client, 55).await?;
//! product.regular_price = Some("24.99".parse()?);
//! let product = product.save(&client).await?;
//!
//! Product::delete(&client, 55, true).await?;
//! ```

mod codec;
mod errors;
mod pagination;
mod path;
mod query;
mod resource;

pub mod resources;

pub use codec::{
    decode_json, decode_meta_value, DateTimeString, Float64String, Int64String, NumericString,
    StockManagement, DATE_FORMAT,
};
pub use errors::ResourceError;
pub use pagination::{list_pages, PaginationPolicy, Paginator, DEFAULT_PAGE_SIZE};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use query::{
    to_query_params, Context, ListParams, OrderBy, OrderStatusFilter, ProductStatusFilter,
    ProductType, SortOrder, StockStatus, TaxClass,
};
pub use resource::{PathIds, RestResource};
pub use resources::{
    Order, OrderListParams, Product, ProductAttributeDef, ProductAttributeDefListParams,
    ProductBrand, ProductBrandListParams, ProductListParams, ProductVariation,
    ProductVariationListParams,
};
