// Typed fixture data consumed by the page objects
//
// Product and payment kinds are closed enums dispatched exhaustively; an
// unrecognized tag in a fixture document fails at deserialization, before
// any browser interaction.

mod checkout;
mod product;

pub use checkout::{
    Address, BillingSection, CheckoutOptions, PaymentInfo, ShippingMethod, ShippingSection,
};
pub use product::{CategoryData, Category, FeaturedProducts, ProductKind, ProductOptions};
