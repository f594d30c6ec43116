//! Nested types embedded in WooCommerce resources.
//!
//! These are not resources themselves: they have no paths of their own and
//! only travel inside an [`Order`](super::Order), a [`Product`](super::Product)
//! or a [`ProductVariation`](super::ProductVariation).

mod address;
mod line_item;
mod meta_data;
mod product;

pub use address::{BillingAddress, ShippingAddress};
pub use line_item::{CouponLine, FeeLine, LineItem, LineTax, OrderRefund, ShippingLine, TaxLine};
pub use meta_data::MetaData;
pub use product::{
    Dimensions, ProductAttribute, ProductDownload, ProductImage, ProductTerm, VariationAttribute,
};
