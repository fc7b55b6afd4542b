// Landing page with the featured-products grid

use std::time::Duration;

use playwright_rs::{Page, expect};

use crate::error::Result;
use crate::pages::{LoginPage, Navbar};
use crate::selectors::xpath_literal;
use crate::support;

const FEATURED_TITLE: &str = "//div//strong[text()='Featured products']";

fn product_tile(name: &str) -> String {
    format!("//h2[a[normalize-space(text())={}]]", xpath_literal(name))
}

/// Landing page actions
pub struct LandingPage {
    page: Page,
    pub navbar: Navbar,
}

impl LandingPage {
    pub fn new(page: &Page) -> Self {
        Self {
            page: page.clone(),
            navbar: Navbar::new(page),
        }
    }

    /// Opens the login page via the navbar.
    pub async fn click_login_button(&self) -> Result<LoginPage> {
        self.navbar.goto_login().await
    }

    async fn open_tile(&self, name: &str) -> Result<()> {
        let tile = self.page.locator(&product_tile(name)).await;
        support::wait_attached(&tile, Duration::from_secs(10)).await?;
        tile.click(None).await?;
        Ok(())
    }

    /// Opens a product from the featured grid by its exact name.
    pub async fn open_feature_item(&self, name: &str) -> Result<()> {
        self.open_tile(name).await
    }

    /// Opens a product from a category listing by its exact name.
    pub async fn open_product(&self, name: &str) -> Result<()> {
        self.open_tile(name).await
    }

    /// Asserts the featured-products heading is shown, which only happens
    /// on the landing page.
    pub async fn verify_feature_product_title(&self) -> Result<()> {
        expect(self.page.locator(FEATURED_TITLE).await)
            .to_be_visible()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_selector_survives_quotes_in_names() {
        assert_eq!(
            product_tile("Apple Cinema 30\""),
            "//h2[a[normalize-space(text())='Apple Cinema 30\"']]"
        );
        assert_eq!(
            product_tile("50's Rockabilly Polka Dot Top S-4X"),
            "//h2[a[normalize-space(text())=\"50's Rockabilly Polka Dot Top S-4X\"]]"
        );
    }
}
