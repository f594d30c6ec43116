//! Filter vocabulary and query-string rendering for list operations.
//!
//! Every list-params struct is plain data with all fields optional. It is
//! turned into a [`QueryParams`] map by [`to_query_params`], which skips
//! unset fields, joins lists with commas and renders enums as their wire
//! tag. The map is ordered, so one filter always renders the same string.
//!
//! ```rust
//! use woocommerce_api::rest::{to_query_params, OrderListParams, OrderStatusFilter};
//! use woocommerce_api::encode_query;
//!
//! let params = OrderListParams {
//!     status: Some(OrderStatusFilter::Processing),
//!     include: Some(vec![10, 11]),
//!     per_page: Some(20),
//!     ..Default::default()
//! };
//! let query = to_query_params("Order", &params).unwrap();
//! assert_eq!(encode_query(&query), "include=10%2C11&per_page=20&status=processing");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::QueryParams;
use crate::rest::ResourceError;

/// A list-params struct that may pin the listing to one page.
pub trait ListParams: Serialize + Default + Send + Sync {
    /// The explicitly requested page, if any.
    fn page(&self) -> Option<u32>;
}

/// Renders a filter struct as query parameters.
///
/// - `None` fields are skipped
/// - lists are comma-joined; an empty list gives the key with an empty value
/// - booleans render as `true` / `false`
/// - nested objects render as compact JSON
///
/// # Errors
///
/// Returns [`ResourceError::Encode`] if the filter cannot be serialized.
pub fn to_query_params<T: Serialize>(resource: &'static str, params: &T) -> Result<QueryParams, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::Encode {
        resource,
        message: format!("failed to serialize params: {e}"),
    })?;

    let mut query = QueryParams::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(items) => {
                    let values: Vec<String> = items
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            Value::Bool(b) => Some(b.to_string()),
                            _ => None,
                        })
                        .collect();
                    query.insert(key, values.join(","));
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

/// Scope under which the request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// Public fields only.
    View,
    /// Fields available for editing.
    Edit,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Collection sort attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    Date,
    Id,
    Include,
    Title,
    Slug,
}

/// Order status used as a list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatusFilter {
    Any,
    Pending,
    Processing,
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    Failed,
    Trash,
}

/// Product status used as a list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatusFilter {
    Any,
    Draft,
    Pending,
    Private,
    Publish,
}

/// Product type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Simple,
    Grouped,
    External,
    Variable,
}

/// Tax class used as a list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxClass {
    Standard,
    ReducedRate,
    ZeroRate,
}

/// Stock status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Instock,
    Outofstock,
    Onbackorder,
}
