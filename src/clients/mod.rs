//! HTTP transport for the WooCommerce REST API.
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: the generic async HTTP executor
//! - [`HttpRequest`]: a request to be sent
//! - [`HttpResponse`]: a response with its raw body and headers
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`QueryParams`]: the ordered query parameter map
//! - [`rest::RestClient`]: the authenticated WooCommerce client
//! - [`rest::RestError`]: WooCommerce transport errors
//!
//! Requests are never retried. A non-2xx status is reported as an error
//! straight away.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    encode_query, DataType, HttpMethod, HttpRequest, HttpRequestBuilder, QueryParams,
};
pub use http_response::{HttpResponse, TOTAL_HEADER, TOTAL_PAGES_HEADER};

pub use rest::{ErrorResponse, RestClient, RestError};
