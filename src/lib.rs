//! # WooCommerce API client
//!
//! A typed async client for the WooCommerce REST API (`wp-json/wc/v2`).
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated configuration via [`WooCommerceConfig`] and [`WooCommerceConfigBuilder`]
//! - An authenticated transport, [`RestClient`], using HTTP Basic auth with the
//!   store's consumer key and secret
//! - Typed models for orders, products, product variations, attribute
//!   definitions and brands, with CRUD operations through [`rest::RestResource`]
//! - Automatic pagination of list operations
//! - Tolerant decoding of fields the API encodes inconsistently (numbers as
//!   strings, heterogeneous meta-data values, `manage_stock` as bool or `"parent"`)
//!
//! ## Quick Start
//!
//! ```rust
//! use woocommerce_api::{RestClient, WooCommerceConfig};
//!
//! let config = WooCommerceConfig::new("https://shop.example.com", "ck_key", "cs_secret").unwrap();
//! let client = RestClient::new(&config).unwrap();
//! assert_eq!(client.api_name(), "WooCommerce");
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use woocommerce_api::rest::RestResource;
//! use woocommerce_api::rest::resources::{Order, OrderListParams, Product, ProductVariation};
//!
//! // Every order, following the X-WP-TotalPages header
//! let orders = Order::all(&client, None).await?;
//!
//! // Just page 2
//! let params = OrderListParams { page: Some(2), per_page: Some(10), ..Default::default() };
//! let page = Order::all(&client, Some(params)).await?;
//!
//! // Variations of product 22
//! let variations = ProductVariation::all_for_product(&client, 22, None).await?;
//!
//! // Permanently delete a product
//! Product::delete(&client, 55, true).await?;
//!
//! println!("{} requests sent", client.api_call_count());
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: requests and fetched pages at
//! `debug`, suspicious pagination headers at `warn`. Install any
//! `tracing` subscriber to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: every client owns its credentials and request counter
//! - **Fail-fast validation**: configuration and batch limits are checked
//!   before any network activity
//! - **Thread-safe**: all types are `Send + Sync`
//! - **No retries**: errors are returned to the caller as they happen

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use config::{
    ApiVersion, ConsumerKey, ConsumerSecret, StoreUrl, WooCommerceConfig,
    WooCommerceConfigBuilder,
};
pub use error::ConfigError;

pub use clients::{
    encode_query, DataType, ErrorResponse, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError, QueryParams,
    RestClient, RestError,
};

pub use rest::ResourceError;
