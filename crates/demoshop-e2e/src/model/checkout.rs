// Checkout fixture model
//
// Mirrors the shape of fixtures/checkout.json.

use serde::{Deserialize, Deserializer};

/// Everything the checkout flow needs to place one order
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOptions {
    pub billing: BillingSection,
    pub shipping: ShippingSection,
    pub shipping_method: ShippingMethod,
    pub payment: PaymentInfo,
    #[serde(default)]
    pub confirm_order: bool,
}

/// Billing address step configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSection {
    /// Fill a fresh address instead of reusing the account's saved one
    pub use_new_address: bool,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Shipping address step configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingSection {
    /// Pick the order up in store; no shipping address is filled
    #[serde(default)]
    pub in_store_pickup: bool,
    #[serde(default)]
    pub use_new_address: bool,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Postal address as entered into the new-address form.
///
/// Country and state values must match option labels present in the live
/// form; a mismatch fails the selection step.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
    pub city: String,
    pub address1: String,
    #[serde(default)]
    pub address2: Option<String>,
    pub zip_postal_code: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub fax_number: Option<String>,
}

/// The shop's fixed shipping method enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ShippingMethod {
    Ground,
    #[serde(rename = "Next Day Air")]
    NextDayAir,
    #[serde(rename = "2nd Day Air")]
    SecondDayAir,
}

impl ShippingMethod {
    /// Exact label text of the method's radio option on the page.
    pub fn label(&self) -> &'static str {
        match self {
            ShippingMethod::Ground => "Ground",
            ShippingMethod::NextDayAir => "Next Day Air",
            ShippingMethod::SecondDayAir => "2nd Day Air",
        }
    }
}

/// Payment variant, discriminated by the `type` tag.
///
/// A tag outside this set is a deserialization error; adding a variant
/// forces every dispatch site to handle it.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum PaymentInfo {
    #[serde(rename = "COD")]
    Cod,
    CheckMoneyOrder,
    #[serde(rename_all = "camelCase")]
    CreditCard {
        card_type: String,
        card_holder_name: String,
        card_number: String,
        #[serde(deserialize_with = "string_or_number")]
        expire_month: String,
        #[serde(deserialize_with = "string_or_number")]
        expire_year: String,
        card_code: String,
    },
    #[serde(rename_all = "camelCase")]
    PurchaseOrder { po_number: String },
}

impl PaymentInfo {
    /// Friendly label of the payment method's radio option on the page.
    pub fn friendly_label(&self) -> &'static str {
        match self {
            PaymentInfo::Cod => "Cash On Delivery (COD)",
            PaymentInfo::CheckMoneyOrder => "Check / Money Order",
            PaymentInfo::CreditCard { .. } => "Credit Card",
            PaymentInfo::PurchaseOrder { .. } => "Purchase Order",
        }
    }
}

// Expiry fields appear as either strings or bare numbers in fixture data.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cod_checkout_deserializes() {
        let options: CheckoutOptions = serde_json::from_str(
            r#"{
                "billing": { "useNewAddress": false },
                "shipping": { "inStorePickup": true },
                "shippingMethod": "Ground",
                "payment": { "type": "COD" },
                "confirmOrder": true
            }"#,
        )
        .unwrap();
        assert!(!options.billing.use_new_address);
        assert!(options.shipping.in_store_pickup);
        assert_eq!(options.shipping_method, ShippingMethod::Ground);
        assert!(matches!(options.payment, PaymentInfo::Cod));
        assert!(options.confirm_order);
    }

    #[test]
    fn credit_card_expiry_accepts_numbers_and_strings() {
        let payment: PaymentInfo = serde_json::from_str(
            r#"{
                "type": "CreditCard",
                "cardType": "Visa",
                "cardHolderName": "Jane Doe",
                "cardNumber": "4111111111111111",
                "expireMonth": 3,
                "expireYear": "2030",
                "cardCode": "123"
            }"#,
        )
        .unwrap();
        match payment {
            PaymentInfo::CreditCard {
                expire_month,
                expire_year,
                ..
            } => {
                assert_eq!(expire_month, "3");
                assert_eq!(expire_year, "2030");
            }
            other => panic!("expected credit card, got {other:?}"),
        }
    }

    #[test]
    fn shipping_method_labels_match_the_page() {
        assert_eq!(ShippingMethod::Ground.label(), "Ground");
        assert_eq!(ShippingMethod::NextDayAir.label(), "Next Day Air");
        assert_eq!(ShippingMethod::SecondDayAir.label(), "2nd Day Air");
    }

    #[test]
    fn payment_friendly_labels_match_the_page() {
        assert_eq!(PaymentInfo::Cod.friendly_label(), "Cash On Delivery (COD)");
        assert_eq!(
            PaymentInfo::CheckMoneyOrder.friendly_label(),
            "Check / Money Order"
        );
        let po: PaymentInfo =
            serde_json::from_str(r#"{"type": "PurchaseOrder", "poNumber": "PO-7"}"#).unwrap();
        assert_eq!(po.friendly_label(), "Purchase Order");
    }

    #[test]
    fn unknown_shipping_method_is_rejected() {
        let result: Result<ShippingMethod, _> = serde_json::from_str(r#""Same Day Drone""#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_payment_type_is_rejected() {
        let result: Result<PaymentInfo, _> = serde_json::from_str(r#"{"type": "Barter"}"#);
        assert!(result.is_err());
    }
}
