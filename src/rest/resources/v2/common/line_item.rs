//! Order lines: products, taxes, shipping, fees, coupons and refunds.

use serde::{Deserialize, Serialize};

use super::MetaData;
use crate::rest::Float64String;

/// A product line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItem {
    /// Set to update or remove an existing line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,
    /// Line subtotal before discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Float64String>,
    #[serde(skip_serializing)]
    pub subtotal_tax: Option<Float64String>,
    /// Line total after discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Float64String>,
    #[serde(skip_serializing)]
    pub total_tax: Option<Float64String>,
    #[serde(skip_serializing)]
    pub taxes: Option<Vec<LineTax>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
    #[serde(skip_serializing)]
    pub sku: Option<String>,
    /// Unit price.
    #[serde(skip_serializing)]
    pub price: Option<Float64String>,
}

/// Tax applied to a single line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineTax {
    pub id: i64,
    #[serde(default)]
    pub total: Float64String,
    #[serde(default)]
    pub subtotal: Float64String,
}

/// A tax line of an order. Computed by the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaxLine {
    pub id: Option<i64>,
    pub rate_code: Option<String>,
    pub rate_id: Option<i64>,
    pub label: Option<String>,
    /// Compound taxes are applied on top of other taxes.
    pub compound: Option<bool>,
    pub tax_total: Option<Float64String>,
    pub shipping_tax_total: Option<Float64String>,
    pub meta_data: Option<Vec<MetaData>>,
}

/// A shipping line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Float64String>,
    #[serde(skip_serializing)]
    pub total_tax: Option<Float64String>,
    #[serde(skip_serializing)]
    pub taxes: Option<Vec<LineTax>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

/// A fee line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeeLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,
    /// `taxable` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Float64String>,
    #[serde(skip_serializing)]
    pub total_tax: Option<Float64String>,
    #[serde(skip_serializing)]
    pub taxes: Option<Vec<LineTax>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

/// A coupon applied to an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CouponLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing)]
    pub discount: Option<Float64String>,
    #[serde(skip_serializing)]
    pub discount_tax: Option<Float64String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

/// A refund listed on an order. The total is negative.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderRefund {
    pub id: i64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub total: Float64String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_decodes_mixed_number_shapes() {
        let item: LineItem = serde_json::from_str(
            r#"{
                "id": 315, "name": "Woo Single #1", "product_id": 93, "variation_id": 0,
                "quantity": 2, "tax_class": "", "subtotal": "6.00", "subtotal_tax": "0.45",
                "total": "6.00", "total_tax": "0.45",
                "taxes": [{"id": 75, "total": "0.45", "subtotal": "0.45"}],
                "meta_data": [], "sku": "", "price": 3
            }"#,
        )
        .unwrap();
        assert_eq!(item.quantity, Some(2));
        assert_eq!(item.total.as_ref().and_then(Float64String::value), Some(6.0));
        assert_eq!(item.price.as_ref().and_then(Float64String::value), Some(3.0));
        assert_eq!(item.taxes.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_new_line_item_sends_only_writable_fields() {
        let item = LineItem {
            product_id: Some(93),
            quantity: Some(2),
            total_tax: Some(Float64String::new(1.0)),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({"product_id": 93, "quantity": 2})
        );
    }

    #[test]
    fn test_refund_total_is_negative_text() {
        let refund: OrderRefund =
            serde_json::from_str(r#"{"id": 726, "reason": "", "total": "-10.00"}"#).unwrap();
        assert_eq!(refund.total.value(), Some(-10.0));
        assert_eq!(refund.total.as_str(), "-10.00");
    }
}
