//! Product resource, including batch updates.
//!
//! Products live at `products` and `products/{id}`. Up to
//! [`MAX_BATCH_SIZE`] products can be updated in one `products/batch` call.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::RestResource;
//! use woocommerce_api::rest::resources::{Product, ProductListParams};
//! use woocommerce_api::rest::StockStatus;
//!
//! let params = ProductListParams {
//!     stock_status: Some(StockStatus::Outofstock),
//!     ..Default::default()
//! };
//! let mut products = Product::all(&client, Some(params)).await?;
//!
//! for product in &mut products {
//!     product.stock_status = Some("instock".to_string());
//! }
//! let updated = Product::batch_update(&client, &products).await?;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{
    Dimensions, MetaData, ProductAttribute, ProductDownload, ProductImage, ProductTerm,
    VariationAttribute,
};
use crate::clients::RestClient;
use crate::rest::{
    decode_json, Context, DateTimeString, Float64String, ListParams, OrderBy, PaginationPolicy,
    PathIds, ProductStatusFilter, ProductType, ResourceError, ResourceOperation, ResourcePath,
    RestResource, SortOrder, StockStatus, TaxClass,
};

/// Most products accepted by one batch request.
pub const MAX_BATCH_SIZE: usize = 100;

/// A WooCommerce product.
///
/// ## Read-Only Fields
/// - `id`, `permalink`, all `date_*` fields except the sale window
/// - `price`, `price_html`, `on_sale`, `purchasable`, `total_sales`
/// - `backorders_allowed`, `backordered`
/// - `shipping_required`, `shipping_taxable`, `shipping_class_id`
/// - `average_rating`, `rating_count`, `related_ids`, `variations`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    #[serde(skip_serializing)]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing)]
    pub permalink: Option<String>,

    #[serde(skip_serializing)]
    pub date_created: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_modified: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<DateTimeString>,

    /// Named `type` on the wire. `simple`, `grouped`, `external`,
    /// `variable`, or a type added by a plugin.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// `draft`, `pending`, `private` or `publish`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    /// `visible`, `catalog`, `search` or `hidden`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_visibility: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Current price, computed from the regular and sale prices.
    #[serde(skip_serializing)]
    pub price: Option<Float64String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<Float64String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Float64String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_from: Option<DateTimeString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_from_gmt: Option<DateTimeString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_to: Option<DateTimeString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_to_gmt: Option<DateTimeString>,

    #[serde(skip_serializing)]
    pub price_html: Option<String>,

    #[serde(skip_serializing)]
    pub on_sale: Option<bool>,

    #[serde(skip_serializing)]
    pub purchasable: Option<bool>,

    #[serde(skip_serializing)]
    pub total_sales: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#virtual: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloadable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<Vec<ProductDownload>>,

    /// `-1` for unlimited downloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_limit: Option<i64>,

    /// Days until a download link expires, `-1` for never.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_expiry: Option<i64>,

    /// Product URL for external products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,

    /// `taxable`, `shipping` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_stock: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,

    /// `instock`, `outofstock`, `onbackorder`, or a plugin status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<String>,

    /// `no`, `notify` or `yes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backorders: Option<String>,

    #[serde(skip_serializing)]
    pub backorders_allowed: Option<bool>,

    #[serde(skip_serializing)]
    pub backordered: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_individually: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Float64String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    #[serde(skip_serializing)]
    pub shipping_required: Option<bool>,

    #[serde(skip_serializing)]
    pub shipping_taxable: Option<bool>,

    /// Shipping class slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class: Option<String>,

    #[serde(skip_serializing)]
    pub shipping_class_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_allowed: Option<bool>,

    #[serde(skip_serializing)]
    pub average_rating: Option<Float64String>,

    #[serde(skip_serializing)]
    pub rating_count: Option<i64>,

    #[serde(skip_serializing)]
    pub related_ids: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upsell_ids: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_sell_ids: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    /// Note sent to the customer after purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<ProductTerm>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ProductTerm>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<ProductAttribute>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_attributes: Option<Vec<VariationAttribute>>,

    /// Ids of the product's variations.
    #[serde(skip_serializing)]
    pub variations: Option<Vec<i64>>,

    /// Ids of the children of a grouped product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouped_products: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

impl RestResource for Product {
    type Id = i64;
    type AllParams = ProductListParams;

    const NAME: &'static str = "Product";
    const PLURAL: &'static str = "products";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::Find, &["id"], "products/{id}"),
        ResourcePath::new(ResourceOperation::All, &[], "products"),
        ResourcePath::new(ResourceOperation::Create, &[], "products"),
        ResourcePath::new(ResourceOperation::Update, &["id"], "products/{id}"),
        ResourcePath::new(ResourceOperation::Delete, &["id"], "products/{id}"),
        ResourcePath::new(ResourceOperation::Batch, &[], "products/batch"),
    ];

    const PAGINATION: PaginationPolicy = PaginationPolicy::TotalPagesHeader;

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

#[derive(Debug, Default, Deserialize)]
struct BatchResponse {
    #[serde(default)]
    update: Vec<Product>,
}

impl Product {
    /// Updates several existing products in one request.
    ///
    /// Every product must carry its id. An empty slice sends nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BatchLimitExceeded`] for more than
    /// [`MAX_BATCH_SIZE`] products and [`ResourceError::MissingId`] for a
    /// product without an id. Neither sends a request.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let updated = Product::batch_update(&client, &products).await?;
    /// ```
    pub async fn batch_update(client: &RestClient, products: &[Self]) -> Result<Vec<Self>, ResourceError> {
        if products.len() > MAX_BATCH_SIZE {
            return Err(ResourceError::BatchLimitExceeded {
                resource: Self::PLURAL,
                max: MAX_BATCH_SIZE,
                actual: products.len(),
            });
        }
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let updates = products
            .iter()
            .map(Self::batch_entry)
            .collect::<Result<Vec<_>, _>>()?;

        let path = Self::resolve_path(ResourceOperation::Batch, &PathIds::new())?;
        let body = serde_json::json!({ "update": updates });

        let response = client.post(&path, body, None).await?;
        let result: BatchResponse = decode_json(Self::NAME, &response.body)?;

        tracing::debug!(
            sent = products.len(),
            updated = result.update.len(),
            "batch updated products"
        );

        Ok(result.update)
    }

    fn batch_entry(&self) -> Result<Value, ResourceError> {
        let id = self.get_id().ok_or(ResourceError::MissingId {
            resource: Self::NAME,
            operation: ResourceOperation::Batch.as_str(),
        })?;

        let mut body = self.to_body()?;
        if let Value::Object(map) = &mut body {
            map.insert("id".to_string(), Value::from(id));
        }
        Ok(body)
    }
}

/// Filters for listing products.
///
/// Leave `page` unset to fetch every page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    /// Fetch only this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<DateTimeString>,
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
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatusFilter>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    /// Category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Tag id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class: Option<String>,
    /// Attribute slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Attribute term id; needs `attribute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<TaxClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,
    /// Sent as-is; not checked against `max_price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<StockStatus>,
}

impl ListParams for ProductListParams {
    fn page(&self) -> Option<u32> {
        self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WooCommerceConfig;
    use crate::rest::{get_path, to_query_params};

    const PRODUCT_JSON: &str = r#"{
        "id": 794,
        "name": "Premium Quality",
        "slug": "premium-quality-19",
        "permalink": "https://example.com/product/premium-quality-19/",
        "date_created": "2017-03-23T17:01:14",
        "date_modified": "2017-03-23T17:01:14Z",
        "type": "simple",
        "status": "publish",
        "featured": false,
        "catalog_visibility": "visible",
        "description": "<p>Pellentesque habitant morbi tristique.</p>",
        "short_description": "",
        "sku": "",
        "price": "21.99",
        "regular_price": "21.99",
        "sale_price": "",
        "date_on_sale_from": null,
        "date_on_sale_to": null,
        "price_html": "<span>$21.99</span>",
        "on_sale": false,
        "purchasable": true,
        "total_sales": 0,
        "virtual": false,
        "downloadable": false,
        "downloads": [],
        "download_limit": -1,
        "download_expiry": -1,
        "external_url": "",
        "button_text": "",
        "tax_status": "taxable",
        "tax_class": "",
        "manage_stock": false,
        "stock_quantity": null,
        "stock_status": "instock",
        "backorders": "no",
        "backorders_allowed": false,
        "backordered": false,
        "sold_individually": false,
        "weight": "",
        "dimensions": {"length": "", "width": "", "height": ""},
        "shipping_required": true,
        "shipping_taxable": true,
        "shipping_class": "",
        "shipping_class_id": 0,
        "reviews_allowed": true,
        "average_rating": "0.00",
        "rating_count": 0,
        "related_ids": [53, 40, 56],
        "upsell_ids": [],
        "cross_sell_ids": [],
        "parent_id": 0,
        "purchase_note": "",
        "categories": [{"id": 9, "name": "Clothing", "slug": "clothing"}],
        "tags": [{"id": 34, "name": "Leather", "slug": "leather"}],
        "images": [{"id": 792, "date_created": "2017-03-23T14:01:13", "src": "https://example.com/T_2_front-4.jpg", "name": "", "alt": ""}],
        "attributes": [{"id": 6, "name": "Color", "position": 0, "visible": false, "variation": true, "options": ["Black", "Green"]}],
        "default_attributes": [{"id": 6, "name": "Color", "option": "black"}],
        "variations": [],
        "grouped_products": [],
        "menu_order": 0,
        "meta_data": [{"id": 1, "key": "_rating", "value": 4.5}]
    }"#;

    fn product_with_id(id: i64) -> Product {
        Product {
            id: Some(id),
            regular_price: Some("9.99".parse().unwrap()),
            ..Default::default()
        }
    }

    fn client() -> RestClient {
        let config = WooCommerceConfig::new("https://shop.example.com", "ck", "cs").unwrap();
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_product_decodes_full_payload() {
        let product: Product = decode_json("Product", PRODUCT_JSON).unwrap();
        assert_eq!(product.get_id(), Some(794));
        assert_eq!(product.product_type.as_deref(), Some("simple"));
        assert_eq!(product.price.as_ref().and_then(Float64String::value), Some(21.99));
        assert!(product.sale_price.as_ref().unwrap().is_empty());
        assert_eq!(product.stock_status.as_deref(), Some("instock"));
        assert_eq!(product.tags.as_ref().unwrap()[0].slug.as_deref(), Some("leather"));
        assert_eq!(product.meta_data.as_ref().unwrap()[0].value, "4.5");
        assert_eq!(product.related_ids, Some(vec![53, 40, 56]));
    }

    #[test]
    fn test_product_listing_keeps_plugin_type_and_stock_status() {
        let products: Vec<Product> = decode_json(
            "Product",
            r#"[{"id": 1, "type": "simple"}, {"id": 2, "type": "subscription", "stock_status": "preorder"}]"#,
        )
        .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].product_type.as_deref(), Some("subscription"));
        assert_eq!(products[1].stock_status.as_deref(), Some("preorder"));

        let body = serde_json::to_value(&products[1]).unwrap();
        assert_eq!(body["type"], "subscription");
        assert_eq!(body["stock_status"], "preorder");
    }

    #[test]
    fn test_product_body_round_trips_numeric_text() {
        let product: Product = decode_json("Product", PRODUCT_JSON).unwrap();
        let body = serde_json::to_value(&product).unwrap();

        assert_eq!(body["regular_price"], "21.99");
        assert_eq!(body["sale_price"], "");
        assert_eq!(body["type"], "simple");
        for field in ["id", "price", "permalink", "related_ids", "variations", "average_rating"] {
            assert!(body.get(field).is_none(), "{field} should not be sent");
        }
    }

    #[test]
    fn test_batch_entry_includes_id() {
        let entry = product_with_id(55).batch_entry().unwrap();
        assert_eq!(entry, serde_json::json!({"id": 55, "regular_price": "9.99"}));
    }

    #[test]
    fn test_batch_path() {
        assert_eq!(
            get_path(Product::PATHS, ResourceOperation::Batch, &[]).unwrap().template,
            "products/batch"
        );
    }

    #[tokio::test]
    async fn test_batch_update_over_limit_sends_nothing() {
        let client = client();
        let products: Vec<Product> = (1..=101).map(product_with_id).collect();

        let error = Product::batch_update(&client, &products).await.unwrap_err();
        assert_eq!(error.to_string(), "Maximum 100 products can be updated at once");
        assert!(error.is_validation());
        assert_eq!(client.api_call_count(), 0);
    }

    #[tokio::test]
    async fn test_batch_update_without_id_sends_nothing() {
        let client = client();
        let products = vec![product_with_id(1), Product::default()];

        let error = Product::batch_update(&client, &products).await.unwrap_err();
        assert!(matches!(error, ResourceError::MissingId { operation: "batch", .. }));
        assert_eq!(client.api_call_count(), 0);
    }

    #[tokio::test]
    async fn test_batch_update_empty_is_a_no_op() {
        let client = client();
        let updated = Product::batch_update(&client, &[]).await.unwrap();
        assert!(updated.is_empty());
        assert_eq!(client.api_call_count(), 0);
    }

    #[test]
    fn test_product_list_params_render() {
        let params = ProductListParams {
            product_type: Some(ProductType::Variable),
            tax_class: Some(TaxClass::Standard),
            on_sale: Some(true),
            min_price: Some(50),
            max_price: Some(10),
            exclude: Some(vec![]),
            ..Default::default()
        };
        let query = to_query_params(Product::NAME, &params).unwrap();
        assert_eq!(query.len(), 6);
        assert_eq!(query["type"], "variable");
        assert_eq!(query["tax_class"], "standard");
        assert_eq!(query["on_sale"], "true");
        assert_eq!(query["min_price"], "50");
        assert_eq!(query["max_price"], "10");
        assert_eq!(query["exclude"], "");
    }
}
