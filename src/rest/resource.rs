//! The [`RestResource`] trait: CRUD operations shared by every resource.
//!
//! A resource declares its name, its path table and how its collection is
//! paginated. The trait then provides `all()`, `find()`, `create()`,
//! `update()`, `save()` and `delete()`, plus `*_with_parent` variants for
//! collections nested under another record.
//!
//! Request bodies are the bare JSON of the record. Fields the server owns
//! are marked `skip_serializing` on the model and never leave the client.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::{RestResource, ResourcePath, ResourceOperation, PaginationPolicy};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Coupon {
//!     #[serde(skip_serializing)]
//!     pub id: Option<i64>,
//!     pub code: String,
//! }
//!
//! impl RestResource for Coupon {
//!     type Id = i64;
//!     type AllParams = CouponListParams;
//!
//!     const NAME: &'static str = "Coupon";
//!     const PLURAL: &'static str = "coupons";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(ResourceOperation::Find, &["id"], "coupons/{id}"),
//!         ResourcePath::new(ResourceOperation::All, &[], "coupons"),
//!     ];
//!     const PAGINATION: PaginationPolicy = PaginationPolicy::TotalPagesHeader;
//!
//!     fn get_id(&self) -> Option<i64> {
//!         self.id
//!     }
//! }
//!
//! let coupons = Coupon::all(&client, None).await?;
//! let coupon = Coupon::find(&client, 719).await?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{QueryParams, RestClient};
use crate::rest::{
    build_path, decode_json, get_path, list_pages, to_query_params, ListParams,
    PaginationPolicy, ResourceError, ResourceOperation, ResourcePath,
};

/// Ids available for filling a path template.
pub type PathIds = HashMap<&'static str, String>;

/// A WooCommerce REST resource.
///
/// # Associated Types
///
/// - `Id`: the record identifier
/// - `AllParams`: filter struct for `all()`
///
/// # Associated Constants
///
/// - `NAME`: singular type name, used in errors and logs
/// - `PLURAL`: collection name as it appears in URLs
/// - `PATHS`: the path table
/// - `PAGINATION`: how `all()` walks the collection
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the record's identifier.
    type Id: Display + Clone + Send + Sync;

    /// Filter parameters for `all()`.
    type AllParams: ListParams;

    /// The singular name of the resource (e.g. "Order").
    const NAME: &'static str;

    /// The plural name used in URL paths (e.g. "orders").
    const PLURAL: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Pagination policy of the collection.
    const PAGINATION: PaginationPolicy;

    /// Returns the record's id, or `None` if it has not been created yet.
    fn get_id(&self) -> Option<Self::Id>;

    /// Resolves the path for `operation` from the given ids.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no template fits.
    fn resolve_path(operation: ResourceOperation, ids: &PathIds) -> Result<String, ResourceError> {
        let available: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, operation, &available).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            },
        )?;
        Ok(build_path(path.template, ids))
    }

    /// Serializes the record as a request body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Encode`] if serialization fails.
    fn to_body(&self) -> Result<Value, ResourceError> {
        serde_json::to_value(self).map_err(|e| ResourceError::Encode {
            resource: Self::NAME,
            message: e.to_string(),
        })
    }

    /// Lists every record matching `params`.
    ///
    /// Without a page in `params` the whole collection is fetched, one
    /// request per page. With a page, only that page is fetched.
    ///
    /// # Errors
    ///
    /// Returns the first transport, pagination or decode error. No partial
    /// result is returned.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let params = OrderListParams { page: Some(2), per_page: Some(10), ..Default::default() };
    /// let orders = Order::all(&client, Some(params)).await?;
    /// ```
    async fn all(client: &RestClient, params: Option<Self::AllParams>) -> Result<Vec<Self>, ResourceError> {
        Self::list_at(client, PathIds::new(), params).await
    }

    /// Lists records nested under a parent record.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    async fn all_with_parent<P: Display + Send>(
        client: &RestClient,
        parent_id_name: &'static str,
        parent_id: P,
        params: Option<Self::AllParams>,
    ) -> Result<Vec<Self>, ResourceError> {
        let mut ids = PathIds::new();
        ids.insert(parent_id_name, parent_id.to_string());
        Self::list_at(client, ids, params).await
    }

    /// Lists records at the collection path resolved from `ids`.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    async fn list_at(
        client: &RestClient,
        ids: PathIds,
        params: Option<Self::AllParams>,
    ) -> Result<Vec<Self>, ResourceError> {
        let path = Self::resolve_path(ResourceOperation::All, &ids)?;
        let params = params.unwrap_or_default();
        let query = to_query_params(Self::NAME, &params)?;

        list_pages(client, Self::NAME, &path, Self::PAGINATION, params.page(), query).await
    }

    /// Fetches one record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport errors, including the
    /// API's "Invalid ID." envelope on a 404.
    async fn find(client: &RestClient, id: Self::Id) -> Result<Self, ResourceError> {
        let mut ids = PathIds::new();
        ids.insert("id", id.to_string());
        Self::find_at(client, ids).await
    }

    /// Fetches one record nested under a parent record.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    async fn find_with_parent<P: Display + Send>(
        client: &RestClient,
        parent_id_name: &'static str,
        parent_id: P,
        id: Self::Id,
    ) -> Result<Self, ResourceError> {
        let mut ids = PathIds::new();
        ids.insert(parent_id_name, parent_id.to_string());
        ids.insert("id", id.to_string());
        Self::find_at(client, ids).await
    }

    /// Fetches the record at the path resolved from `ids`.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    async fn find_at(client: &RestClient, ids: PathIds) -> Result<Self, ResourceError> {
        let path = Self::resolve_path(ResourceOperation::Find, &ids)?;
        let response = client.get(&path, None).await?;
        decode_json(Self::NAME, &response.body)
    }

    /// Creates the record and returns it as stored by the server.
    ///
    /// # Errors
    ///
    /// Returns transport and decode errors.
    async fn create(&self, client: &RestClient) -> Result<Self, ResourceError> {
        self.create_at(client, PathIds::new()).await
    }

    /// Creates the record under a parent record.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    async fn create_with_parent<P: Display + Send>(
        &self,
        client: &RestClient,
        parent_id_name: &'static str,
        parent_id: P,
    ) -> Result<Self, ResourceError> {
        let mut ids = PathIds::new();
        ids.insert(parent_id_name, parent_id.to_string());
        self.create_at(client, ids).await
    }

    /// Creates the record at the collection path resolved from `ids`.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    async fn create_at(&self, client: &RestClient, ids: PathIds) -> Result<Self, ResourceError> {
        let path = Self::resolve_path(ResourceOperation::Create, &ids)?;
        let body = self.to_body()?;
        let response = client.post(&path, body, None).await?;
        decode_json(Self::NAME, &response.body)
    }

    /// Replaces the stored record with this one.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without sending anything when
    /// the record has no id.
    async fn update(&self, client: &RestClient) -> Result<Self, ResourceError> {
        self.update_at(client, PathIds::new()).await
    }

    /// Updates the record under a parent record.
    ///
    /// # Errors
    ///
    /// See [`update`](Self::update).
    async fn update_with_parent<P: Display + Send>(
        &self,
        client: &RestClient,
        parent_id_name: &'static str,
        parent_id: P,
    ) -> Result<Self, ResourceError> {
        let mut ids = PathIds::new();
        ids.insert(parent_id_name, parent_id.to_string());
        self.update_at(client, ids).await
    }

    /// Updates the record, adding its own id to `ids`.
    ///
    /// # Errors
    ///
    /// See [`update`](Self::update).
    async fn update_at(&self, client: &RestClient, mut ids: PathIds) -> Result<Self, ResourceError> {
        let id = self.get_id().ok_or(ResourceError::MissingId {
            resource: Self::NAME,
            operation: ResourceOperation::Update.as_str(),
        })?;
        ids.insert("id", id.to_string());

        let path = Self::resolve_path(ResourceOperation::Update, &ids)?;
        let body = self.to_body()?;
        let response = client.put(&path, body, None).await?;
        decode_json(Self::NAME, &response.body)
    }

    /// Creates the record if it has no id, updates it otherwise.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create) and [`update`](Self::update).
    async fn save(&self, client: &RestClient) -> Result<Self, ResourceError> {
        if self.get_id().is_some() {
            self.update(client).await
        } else {
            self.create(client).await
        }
    }

    /// Deletes a record by id.
    ///
    /// Sends `force=true` to delete permanently, `force=false` to move the
    /// record to the trash where the resource supports it.
    ///
    /// # Errors
    ///
    /// Returns transport errors.
    async fn delete(client: &RestClient, id: Self::Id, force: bool) -> Result<(), ResourceError> {
        let mut ids = PathIds::new();
        ids.insert("id", id.to_string());
        Self::delete_at(client, ids, force).await
    }

    /// Deletes a record nested under a parent record.
    ///
    /// # Errors
    ///
    /// See [`delete`](Self::delete).
    async fn delete_with_parent<P: Display + Send>(
        client: &RestClient,
        parent_id_name: &'static str,
        parent_id: P,
        id: Self::Id,
        force: bool,
    ) -> Result<(), ResourceError> {
        let mut ids = PathIds::new();
        ids.insert(parent_id_name, parent_id.to_string());
        ids.insert("id", id.to_string());
        Self::delete_at(client, ids, force).await
    }

    /// Deletes the record at the path resolved from `ids`.
    ///
    /// # Errors
    ///
    /// See [`delete`](Self::delete).
    async fn delete_at(client: &RestClient, ids: PathIds, force: bool) -> Result<(), ResourceError> {
        let path = Self::resolve_path(ResourceOperation::Delete, &ids)?;

        let mut query = QueryParams::new();
        query.insert("force".to_string(), force.to_string());

        client.delete(&path, Some(query)).await?;
        tracing::debug!(resource = Self::NAME, path = %path, force, "deleted record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
        use crate::config::WooCommerceConfig;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct MockCoupon {
        #[serde(skip_serializing)]
        id: Option<i64>,
        code: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<String>,
    }

    #[derive(Debug, Default, Serialize)]
    struct MockCouponParams {
        #[serde(skip_serializing_if = "Option::is_none")]
        page: Option<u32>,
    }

    impl ListParams for MockCouponParams {
        fn page(&self) -> Option<u32> {
            self.page
        }
    }

    impl RestResource for MockCoupon {
        type Id = i64;
        type AllParams = MockCouponParams;

        const NAME: &'static str = "Coupon";
        const PLURAL: &'static str = "coupons";
        const PATHS: &'static [ResourcePath] = &[
            ResourcePath::new(ResourceOperation::Find, &["id"], "coupons/{id}"),
            ResourcePath::new(ResourceOperation::All, &[], "coupons"),
            ResourcePath::new(ResourceOperation::Create, &[], "coupons"),
            ResourcePath::new(ResourceOperation::Update, &["id"], "coupons/{id}"),
        ];
        const PAGINATION: PaginationPolicy = PaginationPolicy::TotalPagesHeader;

        fn get_id(&self) -> Option<i64> {
            self.id
        }
    }

    fn client() -> RestClient {
        let config = WooCommerceConfig::new("https://shop.example.com", "ck", "cs").unwrap();
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_resolve_path_fills_id() {
        let mut ids = PathIds::new();
        ids.insert("id", "719".to_string());
        assert_eq!(
            MockCoupon::resolve_path(ResourceOperation::Find, &ids).unwrap(),
            "coupons/719"
        );
    }

    #[test]
    fn test_resolve_path_fails_for_missing_operation() {
        let mut ids = PathIds::new();
        ids.insert("id", "719".to_string());
        let error = MockCoupon::resolve_path(ResourceOperation::Delete, &ids).unwrap_err();
        assert!(matches!(
            error,
            ResourceError::PathResolutionFailed { resource: "Coupon", operation: "delete" }
        ));
    }

    #[test]
    fn test_to_body_omits_read_only_fields() {
        let coupon = MockCoupon {
            id: Some(719),
            code: "spring".to_string(),
            amount: None,
        };
        let body = coupon.to_body().unwrap();
        assert_eq!(body, serde_json::json!({"code": "spring"}));
    }

    #[tokio::test]
    async fn test_update_without_id_sends_nothing() {
        let client = client();
        let coupon = MockCoupon {
            id: None,
            code: "spring".to_string(),
            amount: None,
        };

        let error = coupon.update(&client).await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::MissingId { resource: "Coupon", operation: "update" }
        ));
        assert_eq!(client.api_call_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_without_path_sends_nothing() {
        let client = client();
        let error = MockCoupon::delete(&client, 719, true).await.unwrap_err();
        assert!(error.is_validation());
        assert_eq!(client.api_call_count(), 0);
    }
}
