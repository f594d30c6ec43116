//! Meta-data entries attached to orders, products and their lines.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::rest::decode_meta_value;

/// One `(id, key, value)` meta-data entry.
///
/// The server may send `value` as any JSON type. It is decoded to a plain
/// string from its wire text: strings lose their surrounding quotes with
/// escapes kept as sent, everything else is kept as JSON text. See
/// [`decode_meta_value`].
///
/// ```rust
/// use woocommerce_api::rest::resources::common::MetaData;
///
/// let entry: MetaData = serde_json::from_str(r#"{"id": 9, "key": "_gift", "value": {"wrap": true}}"#).unwrap();
/// assert_eq!(entry.value, r#"{"wrap":true}"#);
/// ```
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct MetaData {
    /// Assigned by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub key: String,
    pub value: String,
}

#[derive(Deserialize)]
struct RawMetaData {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    key: String,
    value: Box<RawValue>,
}

impl<'de> Deserialize<'de> for MetaData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawMetaData::deserialize(deserializer)?;
        let value = decode_meta_value(raw.value.get()).map_err(de::Error::custom)?;
        Ok(Self {
            id: raw.id,
            key: raw.key,
            value,
        })
    }
}
