//! Path tables for REST resources.
//!
//! Each resource declares the URL templates it supports as a static slice
//! of [`ResourcePath`]. A template names the ids it needs in `{braces}`;
//! nested collections such as product variations carry the parent id too:
//!
//! - `products/{product_id}/variations/{id}`
//! - `products/{product_id}/variations`
//!
//! [`get_path`] picks the most specific template whose ids are all
//! available and [`build_path`] fills them in.
//!
//! ```rust
//! use woocommerce_api::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         ResourceOperation::Find,
//!         &["product_id", "id"],
//!         "products/{product_id}/variations/{id}",
//!     ),
//!     ResourcePath::new(ResourceOperation::Find, &["id"], "products/{id}"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["product_id", "id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("product_id", 12);
//! ids.insert("id", 34);
//! assert_eq!(build_path(path.template, &ids), "products/12/variations/34");
//! ```

use std::collections::HashMap;
use std::fmt::Display;

/// Operations a resource path can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// GET `<resource>/{id}`.
    Find,
    /// GET `<resource>`.
    All,
    /// POST `<resource>`.
    Create,
    /// PUT `<resource>/{id}`.
    Update,
    /// DELETE `<resource>/{id}`.
    Delete,
    /// POST `<resource>/batch`.
    Batch,
}

impl ResourceOperation {
    /// Returns the operation name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Batch => "batch",
        }
    }
}

/// One URL template of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Ids the template needs (e.g. `["product_id", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of ids the template needs.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks that every id the template needs is available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the most specific path for `operation` given the available ids.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Replaces `{name}` placeholders in `template` with the matching ids.
///
/// Placeholders without a value are left untouched.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
