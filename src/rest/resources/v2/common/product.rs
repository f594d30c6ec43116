//! Product parts shared by products and variations.

use serde::{Deserialize, Serialize};

use crate::rest::{DateTimeString, Float64String};

/// Package dimensions. Values arrive as numeric strings and may be empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Dimensions {
    #[serde(default)]
    pub length: Float64String,
    #[serde(default)]
    pub width: Float64String,
    #[serde(default)]
    pub height: Float64String,
}

/// A category or tag reference on a product.
///
/// Only `id` is needed when assigning terms in a request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductTerm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing)]
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub slug: Option<String>,
}

impl ProductTerm {
    /// A reference to an existing term by id.
    #[must_use]
    pub const fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            name: None,
            slug: None,
        }
    }
}

/// An image attached to a product, a variation or a brand.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing)]
    pub date_created: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_created_gmt: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_modified: Option<DateTimeString>,
    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<DateTimeString>,
    /// Image URL. Setting it on a new image sideloads the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A product attribute with its selectable options.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductAttribute {
    /// Global attribute id; `0` for attributes local to the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// Shown on the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Used for variations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// One chosen attribute option, as used by variations and default attributes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VariationAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
}

/// A downloadable file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductDownload {
    /// File id; the server uses an MD5 hash of the file URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// File URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}
