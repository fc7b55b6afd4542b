// Top navigation bar, shared by every page of the shop

use std::time::Duration;

use playwright_rs::{Page, expect};

use crate::error::Result;
use crate::pages::LoginPage;
use crate::selectors::xpath_literal;
use crate::support;

const LOGO: &str = "//div[@class='header-logo']";
const SEARCH_INPUT: &str = "//input[@id='small-searchterms']";
const SEARCH_BUTTON: &str = "//input[@type='submit']";
const LOGIN_LINK: &str = "//a[text()='Log in']";
const REGISTER_LINK: &str = "//a[text()='Register']";
const CART_LINK: &str = "//span[text()='Shopping cart']";
const WISHLIST_LINK: &str = "//span[text()='Wishlist']";

fn top_menu_category(category: &str) -> String {
    format!(
        "//ul[@class='top-menu']//a[normalize-space()={}]",
        xpath_literal(category)
    )
}

/// Cross-page navigation actions.
///
/// Every method mutates the shared browser page (current URL, visible DOM)
/// and relies on the automation layer's auto-waiting for readiness.
#[derive(Clone)]
pub struct Navbar {
    page: Page,
}

impl Navbar {
    pub fn new(page: &Page) -> Self {
        Self { page: page.clone() }
    }

    /// Clicks the shop logo, returning to the landing page.
    pub async fn goto_home(&self) -> Result<()> {
        self.page.locator(LOGO).await.click(None).await?;
        Ok(())
    }

    /// Runs a catalog search for `term`.
    pub async fn search(&self, term: &str) -> Result<()> {
        self.page
            .locator(SEARCH_INPUT)
            .await
            .first()
            .fill(term, None)
            .await?;
        self.page
            .locator(SEARCH_BUTTON)
            .await
            .first()
            .click(None)
            .await?;
        Ok(())
    }

    /// Opens the shopping cart.
    pub async fn goto_cart(&self) -> Result<()> {
        self.page.locator(CART_LINK).await.click(None).await?;
        Ok(())
    }

    /// Opens the wishlist.
    pub async fn goto_wishlist(&self) -> Result<()> {
        self.page.locator(WISHLIST_LINK).await.click(None).await?;
        Ok(())
    }

    /// Opens the login page and hands back its page object.
    pub async fn goto_login(&self) -> Result<LoginPage> {
        self.page.locator(LOGIN_LINK).await.click(None).await?;
        Ok(LoginPage::new(&self.page))
    }

    /// Opens the registration page.
    pub async fn goto_register(&self) -> Result<()> {
        self.page.locator(REGISTER_LINK).await.click(None).await?;
        Ok(())
    }

    /// Opens a top-menu category by its visible name.
    pub async fn open_category(&self, category: &str) -> Result<()> {
        self.page
            .locator(&top_menu_category(category))
            .await
            .click(None)
            .await?;
        Ok(())
    }

    /// Asserts the landing page is current: expected URL plus the top-level
    /// navigation affordances.
    pub async fn verify_landing_page(&self, base_url: &str) -> Result<()> {
        support::wait_for_url(&self.page, base_url, Duration::from_secs(10)).await?;
        expect(self.page.locator(REGISTER_LINK).await)
            .to_be_visible()
            .await?;
        expect(self.page.locator(LOGIN_LINK).await)
            .to_be_visible()
            .await?;
        expect(self.page.locator(CART_LINK).await)
            .to_be_visible()
            .await?;
        expect(self.page.locator(WISHLIST_LINK).await)
            .to_be_visible()
            .await?;
        expect(self.page.locator(SEARCH_INPUT).await.first())
            .to_be_visible()
            .await?;
        expect(self.page.locator(SEARCH_BUTTON).await.first())
            .to_be_visible()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_selector_embeds_quoted_name() {
        assert_eq!(
            top_menu_category("Apparel & Shoes"),
            "//ul[@class='top-menu']//a[normalize-space()='Apparel & Shoes']"
        );
    }
}
