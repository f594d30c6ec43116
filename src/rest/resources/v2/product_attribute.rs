//! Global product attribute definitions (`products/attributes`).
//!
//! The collection is returned in one response and has no pages.

use serde::{Deserialize, Serialize};

use crate::rest::{
    Context, ListParams, PaginationPolicy, ResourceOperation, ResourcePath, RestResource,
};

/// A global attribute such as "Color" or "Size".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductAttributeDef {
    #[serde(skip_serializing)]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Alphanumeric identifier, unique among attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Usually `select`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<String>,

    /// Default sort order of the terms: `menu_order`, `name`, `name_num` or `id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    /// Whether the attribute has an archive page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_archives: Option<bool>,
}

impl RestResource for ProductAttributeDef {
    type Id = i64;
    type AllParams = ProductAttributeDefListParams;

    const NAME: &'static str = "ProductAttributeDef";
    const PLURAL: &'static str = "attributes";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::Find, &["id"], "products/attributes/{id}"),
        ResourcePath::new(ResourceOperation::All, &[], "products/attributes"),
        ResourcePath::new(ResourceOperation::Create, &[], "products/attributes"),
        ResourcePath::new(ResourceOperation::Update, &["id"], "products/attributes/{id}"),
        ResourcePath::new(ResourceOperation::Delete, &["id"], "products/attributes/{id}"),
    ];

    const PAGINATION: PaginationPolicy = PaginationPolicy::Unpaginated;

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Filters for listing attribute definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductAttributeDefListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

impl ListParams for ProductAttributeDefListParams {
    fn page(&self) -> Option<u32> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{decode_json, to_query_params, PathIds};

    #[test]
    fn test_attribute_def_round_trip() {
        let attributes: Vec<ProductAttributeDef> = decode_json(
            "ProductAttributeDef",
            r#"[{"id": 1, "name": "Color", "slug": "pa_color", "type": "select", "order_by": "menu_order", "has_archives": true}]"#,
        )
        .unwrap();
        assert_eq!(attributes[0].attribute_type.as_deref(), Some("select"));

        let body = serde_json::to_value(&attributes[0]).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["type"], "select");
        assert_eq!(body["has_archives"], true);
    }

    #[test]
    fn test_update_path_uses_id() {
        let mut ids = PathIds::new();
        ids.insert("id", "1".to_string());
        assert_eq!(
            ProductAttributeDef::resolve_path(ResourceOperation::Update, &ids).unwrap(),
            "products/attributes/1"
        );
    }

    #[test]
    fn test_list_params_never_pin_a_page() {
        let params = ProductAttributeDefListParams {
            context: Some(Context::Edit),
        };
        assert_eq!(params.page(), None);
        assert_eq!(
            to_query_params(ProductAttributeDef::NAME, &params).unwrap()["context"],
            "edit"
        );
    }
}
