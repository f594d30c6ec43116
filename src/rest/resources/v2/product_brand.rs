//! Product brands (`products/brands`).
//!
//! Brands are listed 100 at a time until an empty page comes back.

use serde::{Deserialize, Serialize};

use super::common::ProductImage;
use crate::rest::{
    Context, ListParams, PaginationPolicy, ResourceOperation, ResourcePath, RestResource,
};

/// A product brand.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductBrand {
    #[serde(skip_serializing)]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Parent brand id, `0` for top-level brands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,

    /// Number of products in the brand.
    #[serde(skip_serializing)]
    pub count: Option<i64>,
}

impl RestResource for ProductBrand {
    type Id = i64;
    type AllParams = ProductBrandListParams;

    const NAME: &'static str = "ProductBrand";
    const PLURAL: &'static str = "brands";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::Find, &["id"], "products/brands/{id}"),
        ResourcePath::new(ResourceOperation::All, &[], "products/brands"),
        ResourcePath::new(ResourceOperation::Create, &[], "products/brands"),
        ResourcePath::new(ResourceOperation::Update, &["id"], "products/brands/{id}"),
        ResourcePath::new(ResourceOperation::Delete, &["id"], "products/brands/{id}"),
    ];

    const PAGINATION: PaginationPolicy = PaginationPolicy::UntilEmptyPage;

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Filters for listing brands.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductBrandListParams {
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
    /// Skip brands without products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_empty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl ListParams for ProductBrandListParams {
    fn page(&self) -> Option<u32> {
        self.page
    }
}
