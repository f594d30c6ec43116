//! Scalar codecs for fields WooCommerce encodes inconsistently.
//!
//! - [`NumericString`] (with the [`Float64String`] and [`Int64String`]
//!   aliases) for numbers that arrive either quoted or bare
//! - [`DateTimeString`] for the `YYYY-MM-DDTHH:MM:SS[Z]` timestamps
//! - [`StockManagement`] for `manage_stock`, which is a bool or `"parent"`
//! - [`decode_meta_value`] for meta-data values of arbitrary JSON type
//! - [`decode_json`] which decodes a whole body and tags failures with the
//!   JSON path of the field

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::de::{self, DeserializeOwned, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::rest::ResourceError;

/// Date-time format used for timestamps and date filters.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Decodes a JSON body, reporting the path of the failing field.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] naming `resource` and the JSON path.
pub fn decode_json<T: DeserializeOwned>(resource: &'static str, body: &str) -> Result<T, ResourceError> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| ResourceError::Decode {
        resource,
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

/// Normalizes a raw meta-data value to a plain string.
///
/// A JSON string has exactly one leading and one trailing `"` removed from
/// its raw text. Escapes inside the string are left as they are, so
/// `"say \"hi\""` becomes `say \"hi\"`. Every other JSON value is rendered
/// back to compact JSON text.
///
/// ```rust
/// use woocommerce_api::rest::decode_meta_value;
///
/// assert_eq!(decode_meta_value("\"hello\"").unwrap(), "hello");
/// assert_eq!(decode_meta_value("42").unwrap(), "42");
/// assert_eq!(decode_meta_value(r#""http:\/\/x.com""#).unwrap(), r"http:\/\/x.com");
/// assert_eq!(decode_meta_value("{\"a\": 1}").unwrap(), "{\"a\":1}");
/// ```
///
/// # Errors
///
/// Returns the JSON error if `raw` is not valid JSON.
pub fn decode_meta_value(raw: &str) -> Result<String, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    match value {
        serde_json::Value::String(_) => {
            let raw = raw.trim();
            let raw = raw.strip_prefix('"').unwrap_or(raw);
            let raw = raw.strip_suffix('"').unwrap_or(raw);
            Ok(raw.to_string())
        }
        other => Ok(other.to_string()),
    }
}

/// A number that the API may send as a JSON string or a bare JSON number.
///
/// The wire text is kept as received so that re-encoding yields the same
/// text (`"12.50"` stays `"12.50"`). Empty text is accepted and has no
/// value. The value is always encoded as a JSON string.
///
/// ```rust
/// use woocommerce_api::rest::Float64String;
///
/// let price: Float64String = serde_json::from_str("\"12.50\"").unwrap();
/// assert_eq!(price.value(), Some(12.5));
/// assert_eq!(serde_json::to_string(&price).unwrap(), "\"12.50\"");
///
/// let empty: Float64String = serde_json::from_str("\"\"").unwrap();
/// assert_eq!(empty.value(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NumericString<T> {
    raw: String,
    value: Option<T>,
}

/// A float that may arrive quoted.
pub type Float64String = NumericString<f64>;

/// An integer that may arrive quoted.
pub type Int64String = NumericString<i64>;

impl<T: FromStr + fmt::Display> NumericString<T> {
    /// Wraps a value, using its `Display` form as the wire text.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            raw: value.to_string(),
            value: Some(value),
        }
    }

    /// Parses wire text. Empty or blank text gives an empty value.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the text is not blank and not a number.
    pub fn parse(raw: impl Into<String>) -> Result<Self, T::Err> {
        let raw = raw.into();
        let trimmed = raw.trim();
        let value = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.parse::<T>()?)
        };
        Ok(Self { raw, value })
    }
}

impl<T> NumericString<T> {
    /// Returns an empty value that encodes as `""`.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            raw: String::new(),
            value: None,
        }
    }

    /// Returns the text as it appears on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` when no number is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl<T: Copy> NumericString<T> {
    /// Returns the parsed number, or `None` when the text was empty.
    #[must_use]
    pub const fn value(&self) -> Option<T> {
        self.value
    }
}

impl<T> Default for NumericString<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: FromStr + fmt::Display> FromStr for NumericString<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T> fmt::Display for NumericString<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<T> Serialize for NumericString<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

struct NumericStringVisitor<T>(PhantomData<T>);

impl<T: FromStr + fmt::Display> NumericStringVisitor<T> {
    fn from_number<E: de::Error>(&self, text: String, unexpected: Unexpected<'_>) -> Result<NumericString<T>, E> {
        NumericString::parse(text).map_err(|_| E::invalid_value(unexpected, self))
    }
}

impl<'de, T: FromStr + fmt::Display> Visitor<'de> for NumericStringVisitor<T> {
    type Value = NumericString<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        NumericString::parse(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        self.from_number(v.to_string(), Unexpected::Signed(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        self.from_number(v.to_string(), Unexpected::Unsigned(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        self.from_number(v.to_string(), Unexpected::Float(v))
    }
}

impl<'de, T: FromStr + fmt::Display> Deserialize<'de> for NumericString<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumericStringVisitor(PhantomData))
    }
}

/// A WooCommerce timestamp, `YYYY-MM-DDTHH:MM:SS` with an optional `Z`.
///
/// Encodes without the `Z`. Also used to render `after` / `before` filters.
///
/// ```rust
/// use woocommerce_api::rest::DateTimeString;
///
/// let created: DateTimeString = serde_json::from_str("\"2024-03-01T09:30:00Z\"").unwrap();
/// assert_eq!(created.to_string(), "2024-03-01T09:30:00");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeString(pub NaiveDateTime);

impl DateTimeString {
    /// Returns the wrapped date-time.
    #[must_use]
    pub const fn into_inner(self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for DateTimeString {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl FromStr for DateTimeString {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix('Z').unwrap_or(s);
        NaiveDateTime::parse_from_str(s, DATE_FORMAT).map(Self)
    }
}

impl fmt::Display for DateTimeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for DateTimeString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateTimeString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid date-time '{s}': {e}")))
    }
}

/// Stock management mode of a product variation.
///
/// Variations report `true`, `false` or `"parent"` when stock is managed
/// by the parent product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockManagement {
    /// Stock is tracked for this record.
    Enabled,
    /// Stock is not tracked.
    Disabled,
    /// Stock is tracked on the parent product.
    Parent,
}

impl Serialize for StockManagement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Enabled => serializer.serialize_bool(true),
            Self::Disabled => serializer.serialize_bool(false),
            Self::Parent => serializer.serialize_str("parent"),
        }
    }
}

struct StockManagementVisitor;

impl<'de> Visitor<'de> for StockManagementVisitor {
    type Value = StockManagement;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean or \"parent\"")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(if v {
            StockManagement::Enabled
        } else {
            StockManagement::Disabled
        })
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v {
            "parent" => Ok(StockManagement::Parent),
            "true" => Ok(StockManagement::Enabled),
            "false" => Ok(StockManagement::Disabled),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for StockManagement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StockManagementVisitor)
    }
}
