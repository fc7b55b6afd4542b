// Product fixture model
//
// Mirrors the shapes of fixtures/product.json and
// fixtures/category-product.json.

use serde::Deserialize;

/// One product to add to the cart, with its category-specific options
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOptions {
    /// Exact product name as rendered in listing tiles
    pub product_name: String,
    /// Quantity to order; the product page default applies when absent
    #[serde(default)]
    pub qty: Option<u32>,
    /// Category-specific options, discriminated by `productType`
    #[serde(flatten)]
    pub kind: ProductKind,
}

/// Closed set of product categories the suite knows how to configure.
///
/// The `productType` tag selects the variant; a tag outside this set is a
/// deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "productType")]
pub enum ProductKind {
    #[serde(rename = "book")]
    Book,
    #[serde(rename = "gift-card", rename_all = "camelCase")]
    GiftCard {
        recipient_name: String,
        recipient_email: String,
        #[serde(default)]
        message: Option<String>,
    },
    #[serde(rename = "laptop")]
    Laptop,
    #[serde(rename = "computer", rename_all = "camelCase")]
    Computer {
        #[serde(default)]
        processor: Option<String>,
        #[serde(default)]
        ram: Option<String>,
        #[serde(default)]
        hdd: Option<String>,
        #[serde(default)]
        software: Option<Vec<String>>,
    },
    #[serde(rename = "apparel and shoes", rename_all = "camelCase")]
    Apparel {
        #[serde(default)]
        size: Option<String>,
        #[serde(default)]
        color: Option<String>,
    },
    #[serde(rename = "jewelry", rename_all = "camelCase")]
    Jewelry {
        #[serde(default)]
        material: Option<String>,
        #[serde(default, rename = "lengthInCM")]
        length_in_cm: Option<String>,
    },
}

/// Root of fixtures/product.json
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedProducts {
    pub featured_items: Vec<ProductOptions>,
}

/// Root of fixtures/category-product.json
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryData {
    pub categories: Vec<Category>,
}

/// A top-menu category and the products to order from it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_name: String,
    pub products: Vec<ProductOptions>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gift_card_options_deserialize() {
        let product: ProductOptions = serde_json::from_str(
            r#"{
                "productName": "$25 Virtual Gift Card",
                "productType": "gift-card",
                "qty": 1,
                "recipientName": "Jane Doe",
                "recipientEmail": "jane.doe@example.com"
            }"#,
        )
        .unwrap();
        assert_eq!(product.product_name, "$25 Virtual Gift Card");
        assert_eq!(product.qty, Some(1));
        match product.kind {
            ProductKind::GiftCard {
                recipient_name,
                recipient_email,
                message,
            } => {
                assert_eq!(recipient_name, "Jane Doe");
                assert_eq!(recipient_email, "jane.doe@example.com");
                assert!(message.is_none());
            }
            other => panic!("expected gift card, got {other:?}"),
        }
    }

    #[test]
    fn computer_options_allow_partial_attributes() {
        let product: ProductOptions = serde_json::from_str(
            r#"{
                "productName": "Build your own cheap computer",
                "productType": "computer",
                "ram": "4GB",
                "software": ["Microsoft Office"]
            }"#,
        )
        .unwrap();
        match product.kind {
            ProductKind::Computer {
                processor,
                ram,
                hdd,
                software,
            } => {
                assert!(processor.is_none());
                assert_eq!(ram.as_deref(), Some("4GB"));
                assert!(hdd.is_none());
                assert_eq!(software.unwrap(), vec!["Microsoft Office"]);
            }
            other => panic!("expected computer, got {other:?}"),
        }
    }

    #[test]
    fn apparel_tag_contains_spaces() {
        let product: ProductOptions = serde_json::from_str(
            r#"{
                "productName": "Blue Jeans",
                "productType": "apparel and shoes",
                "size": "34"
            }"#,
        )
        .unwrap();
        assert!(matches!(product.kind, ProductKind::Apparel { .. }));
    }

    #[test]
    fn jewelry_length_uses_fixture_key() {
        let product: ProductOptions = serde_json::from_str(
            r#"{
                "productName": "Create Your Own Jewelry",
                "productType": "jewelry",
                "material": "Silver (1 mm)",
                "lengthInCM": "60"
            }"#,
        )
        .unwrap();
        match product.kind {
            ProductKind::Jewelry {
                material,
                length_in_cm,
            } => {
                assert_eq!(material.as_deref(), Some("Silver (1 mm)"));
                assert_eq!(length_in_cm.as_deref(), Some("60"));
            }
            other => panic!("expected jewelry, got {other:?}"),
        }
    }

    #[test]
    fn unknown_product_type_is_rejected() {
        let result: Result<ProductOptions, _> = serde_json::from_str(
            r#"{"productName": "Hoverboard", "productType": "vehicle"}"#,
        );
        assert!(result.is_err());
    }
}
