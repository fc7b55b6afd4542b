// Fixture loading
//
// The three JSON documents under fixtures/ are read once at test start and
// deserialized into the typed model; the data is immutable for the rest of
// the run.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::model::{CategoryData, CheckoutOptions, FeaturedProducts};

/// Featured-item products added in the first scenario
pub const PRODUCT_FIXTURE: &str = "product.json";
/// Category/product nesting driven by the second scenario
pub const CATEGORY_FIXTURE: &str = "category-product.json";
/// Checkout option set shared by both scenarios
pub const CHECKOUT_FIXTURE: &str = "checkout.json";

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Loads and deserializes one fixture document by file name.
pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
    let path = fixture_dir().join(name);
    let raw = std::fs::read_to_string(&path).map_err(|source| Error::FixtureIo {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| Error::FixtureParse { path, source })
}

/// fixtures/product.json
pub fn featured_products() -> Result<FeaturedProducts> {
    load(PRODUCT_FIXTURE)
}

/// fixtures/category-product.json
pub fn category_products() -> Result<CategoryData> {
    load(CATEGORY_FIXTURE)
}

/// fixtures/checkout.json
pub fn checkout_options() -> Result<CheckoutOptions> {
    load(CHECKOUT_FIXTURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_fixtures_deserialize() {
        let products = featured_products().unwrap();
        assert!(!products.featured_items.is_empty());

        let categories = category_products().unwrap();
        assert!(!categories.categories.is_empty());
        for category in &categories.categories {
            assert!(!category.products.is_empty());
        }

        // The shared checkout document must parse into a complete option set.
        checkout_options().unwrap();
    }

    #[test]
    fn missing_fixture_reports_its_path() {
        let err = load::<FeaturedProducts>("does-not-exist.json").unwrap_err();
        assert!(err.to_string().contains("does-not-exist.json"));
    }
}
