//! Product variation resource.
//!
//! Variations only exist under their product:
//! `products/{product_id}/variations/{id}`. Listing requests pages of
//! up to 100 records until one comes back empty.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::ProductVariation;
//!
//! let variations = ProductVariation::all_for_product(&client, 22, None).await?;
//!
//! let mut variation = ProductVariation::find_for_product(&client, 22, 733).await?;
//! variation.regular_price = Some("10.00".parse()?);
//! let variation = variation.update_for_product(&client, 22).await?;
//! ```

use serde::{Deserialize, Serialize};

use super::common::{Dimensions, MetaData, ProductDownload, ProductImage, VariationAttribute};
use crate::clients::RestClient;
use crate::rest::{
    Context, DateTimeString, Float64String, Int64String, ListParams, PaginationPolicy,
    ProductStatusFilter, ResourceError, ResourceOperation, ResourcePath, RestResource,
    StockManagement, StockStatus,
};

const PARENT_ID: &str = "product_id";

/// A variation of a variable product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductVariation {
    #[serde(skip_serializing)]
    pub id: Option<i64>,

    /// The product owning this variation.
    #[serde(skip_serializing)]
    pub parent_id: Option<i64>,

    #[serde(skip_serializing)]
    pub date_created: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_modified: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<DateTimeString>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing)]
    pub permalink: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

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
    pub on_sale: Option<bool>,

    /// Whether the variation is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    #[serde(skip_serializing)]
    pub purchasable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#virtual: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloadable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<Vec<ProductDownload>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_expiry: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    /// `true`, `false`, or stock tracked on the parent product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_stock: Option<StockManagement>,

    /// Sent by some stores as a quoted number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<Int64String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,

    /// `instock`, `outofstock`, `onbackorder`, or a plugin status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backorders: Option<String>,

    #[serde(skip_serializing)]
    pub backorders_allowed: Option<bool>,

    #[serde(skip_serializing)]
    pub backordered: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Float64String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class: Option<String>,

    #[serde(skip_serializing)]
    pub shipping_class_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<VariationAttribute>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

impl RestResource for ProductVariation {
    type Id = i64;
    type AllParams = ProductVariationListParams;

    const NAME: &'static str = "ProductVariation";
    const PLURAL: &'static str = "variations";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            ResourceOperation::Find,
            &["product_id", "id"],
            "products/{product_id}/variations/{id}",
        ),
        ResourcePath::new(
            ResourceOperation::All,
            &["product_id"],
            "products/{product_id}/variations",
        ),
        ResourcePath::new(
            ResourceOperation::Create,
            &["product_id"],
            "products/{product_id}/variations",
        ),
        ResourcePath::new(
            ResourceOperation::Update,
            &["product_id", "id"],
            "products/{product_id}/variations/{id}",
        ),
        ResourcePath::new(
            ResourceOperation::Delete,
            &["product_id", "id"],
            "products/{product_id}/variations/{id}",
        ),
    ];

    const PAGINATION: PaginationPolicy = PaginationPolicy::UntilEmptyPage;

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl ProductVariation {
    /// Lists the variations of a product.
    ///
    /// # Errors
    ///
    /// Returns the first transport or decode error; no partial result.
    pub async fn all_for_product(
        client: &RestClient,
        product_id: i64,
        params: Option<ProductVariationListParams>,
    ) -> Result<Vec<Self>, ResourceError> {
        Self::all_with_parent(client, PARENT_ID, product_id, params).await
    }

    /// Fetches one variation of a product.
    ///
    /// # Errors
    ///
    /// Returns transport and decode errors.
    pub async fn find_for_product(client: &RestClient, product_id: i64, id: i64) -> Result<Self, ResourceError> {
        Self::find_with_parent(client, PARENT_ID, product_id, id).await
    }

    /// Creates this variation under a product.
    ///
    /// # Errors
    ///
    /// Returns transport and decode errors.
    pub async fn create_for_product(&self, client: &RestClient, product_id: i64) -> Result<Self, ResourceError> {
        self.create_with_parent(client, PARENT_ID, product_id).await
    }

    /// Updates this variation of a product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without sending anything when
    /// the variation has no id.
    pub async fn update_for_product(&self, client: &RestClient, product_id: i64) -> Result<Self, ResourceError> {
        self.update_with_parent(client, PARENT_ID, product_id).await
    }

    /// Creates or updates this variation depending on whether it has an id.
    ///
    /// # Errors
    ///
    /// See [`create_for_product`](Self::create_for_product) and
    /// [`update_for_product`](Self::update_for_product).
    pub async fn save_for_product(&self, client: &RestClient, product_id: i64) -> Result<Self, ResourceError> {
        if self.id.is_some() {
            self.update_for_product(client, product_id).await
        } else {
            self.create_for_product(client, product_id).await
        }
    }

    /// Deletes a variation of a product.
    ///
    /// # Errors
    ///
    /// Returns transport errors.
    pub async fn delete_for_product(
        client: &RestClient,
        product_id: i64,
        id: i64,
        force: bool,
    ) -> Result<(), ResourceError> {
        Self::delete_with_parent(client, PARENT_ID, product_id, id, force).await
    }
}

/// Filters for listing variations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductVariationListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    /// Fetch only this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Defaults to 100 when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatusFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<StockStatus>,
}

impl ListParams for ProductVariationListParams {
    fn page(&self) -> Option<u32> {
        self.page
    }
}
