//! Order resource.
//!
//! Orders live at `orders` and `orders/{id}`. Listing follows the
//! `X-WP-TotalPages` header unless a page is pinned.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::RestResource;
//! use woocommerce_api::rest::resources::{Order, OrderListParams};
//! use woocommerce_api::rest::OrderStatusFilter;
//!
//! let params = OrderListParams {
//!     status: Some(OrderStatusFilter::Processing),
//!     per_page: Some(50),
//!     ..Default::default()
//! };
//! let orders = Order::all(&client, Some(params)).await?;
//!
//! let mut order = Order::find(&client, 727).await?;
//! order.status = Some("completed".to_string());
//! let order = order.save(&client).await?;
//! ```

use serde::{Deserialize, Serialize};

use super::common::{
    BillingAddress, CouponLine, FeeLine, LineItem, MetaData, OrderRefund, ShippingAddress,
    ShippingLine, TaxLine,
};
use crate::rest::{
    Context, DateTimeString, Float64String, ListParams, OrderBy, OrderStatusFilter,
    PaginationPolicy, ResourceOperation, ResourcePath, RestResource, SortOrder,
};

/// A WooCommerce order.
///
/// `status` is kept as text: stores may register statuses of their own.
///
/// ## Read-Only Fields
/// - `id`, `number`, `order_key`, `created_via`, `version`
/// - all `date_*` fields
/// - computed totals (`discount_total`, `shipping_total`, `cart_tax`, `total`, ...)
/// - `prices_include_tax`, `customer_ip_address`, `customer_user_agent`
/// - `cart_hash`, `tax_lines`, `refunds`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    #[serde(skip_serializing)]
    pub id: Option<i64>,

    /// Parent order id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    #[serde(skip_serializing)]
    pub number: Option<String>,

    #[serde(skip_serializing)]
    pub order_key: Option<String>,

    /// Where the order was created (`admin`, `checkout`, `rest-api`).
    #[serde(skip_serializing)]
    pub created_via: Option<String>,

    /// WooCommerce version that last updated the order.
    #[serde(skip_serializing)]
    pub version: Option<String>,

    /// `pending`, `processing`, `on-hold`, `completed`, `cancelled`,
    /// `refunded`, `failed` or a custom status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing)]
    pub currency_symbol: Option<String>,

    #[serde(skip_serializing)]
    pub date_created: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_modified: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<DateTimeString>,

    #[serde(skip_serializing)]
    pub discount_total: Option<Float64String>,
    #[serde(skip_serializing)]
    pub discount_tax: Option<Float64String>,
    #[serde(skip_serializing)]
    pub shipping_total: Option<Float64String>,
    #[serde(skip_serializing)]
    pub shipping_tax: Option<Float64String>,
    #[serde(skip_serializing)]
    pub cart_tax: Option<Float64String>,
    #[serde(skip_serializing)]
    pub total: Option<Float64String>,
    #[serde(skip_serializing)]
    pub total_tax: Option<Float64String>,

    #[serde(skip_serializing)]
    pub prices_include_tax: Option<bool>,

    /// `0` for guest orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,

    #[serde(skip_serializing)]
    pub customer_ip_address: Option<String>,
    #[serde(skip_serializing)]
    pub customer_user_agent: Option<String>,

    /// Note left by the customer at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<BillingAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingAddress>,

    /// Payment method id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    #[serde(skip_serializing)]
    pub date_paid: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_paid_gmt: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_completed: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_completed_gmt: Option<DateTimeString>,

    #[serde(skip_serializing)]
    pub cart_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    #[serde(skip_serializing)]
    pub tax_lines: Option<Vec<TaxLine>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<ShippingLine>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_lines: Option<Vec<FeeLine>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_lines: Option<Vec<CouponLine>>,

    #[serde(skip_serializing)]
    pub refunds: Option<Vec<OrderRefund>>,

    /// Write-only. Marks the order paid and moves it to `processing`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_paid: Option<bool>,
}

impl RestResource for Order {
    type Id = i64;
    type AllParams = OrderListParams;

    const NAME: &'static str = "Order";
    const PLURAL: &'static str = "orders";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::Find, &["id"], "orders/{id}"),
        ResourcePath::new(ResourceOperation::All, &[], "orders"),
        ResourcePath::new(ResourceOperation::Create, &[], "orders"),
        ResourcePath::new(ResourceOperation::Update, &["id"], "orders/{id}"),
        ResourcePath::new(ResourceOperation::Delete, &["id"], "orders/{id}"),
    ];

    const PAGINATION: PaginationPolicy = PaginationPolicy::TotalPagesHeader;

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Filters for listing orders.
///
/// Leave `page` unset to fetch every page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    /// Fetch only this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Records per page, 1 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Only orders created after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<DateTimeString>,

    /// Only orders created before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<DateTimeString>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<OrderBy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_exclude: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatusFilter>,

    /// Customer id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<i64>,

    /// Product id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<i64>,

    /// Decimal places used when rounding amounts in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dp: Option<u32>,
}

impl ListParams for OrderListParams {
    fn page(&self) -> Option<u32> {
        self.page
    }
}
