// Shopping cart page: line-item verification and price reconciliation

use playwright_rs::{Page, expect};

use crate::error::{Error, Result};
use crate::pages::Navbar;
use crate::selectors::xpath_literal;

const CHECKOUT_BUTTON: &str = "//button[@name='checkout']";
const UPDATE_CART_BUTTON: &str = "//input[@name='updatecart']";
const TERMS_CHECKBOX: &str = "//div[@class='terms-of-service']//input[@type='checkbox']";
const ORDER_TOTAL: &str = "//span[@class='product-price order-total']";

fn item_row(name: &str) -> String {
    format!(
        "//tr[@class='cart-item-row'][.//a[@class='product-name' and normalize-space(.)={}]]",
        xpath_literal(name)
    )
}

fn item_subtotal(name: &str) -> String {
    format!("{}//span[@class='product-subtotal']", item_row(name))
}

fn item_remove_control(name: &str) -> String {
    format!("{}//input[@name='removefromcart']", item_row(name))
}

/// Cart page actions.
///
/// Row lookup is by exact product name, one row per distinct name; a cart
/// holding duplicate names would double-count in the total calculation.
pub struct CartPage {
    page: Page,
    pub navbar: Navbar,
}

impl CartPage {
    pub fn new(page: &Page) -> Self {
        Self {
            page: page.clone(),
            navbar: Navbar::new(page),
        }
    }

    /// Verifies the named rows, accepts the terms of service, and starts
    /// checkout. The checkout button only becomes enabled once the terms
    /// box is checked.
    pub async fn checkout_with_items(&self, item_names: &[String]) -> Result<()> {
        self.verify_checkout_item(item_names).await?;
        self.page.locator(TERMS_CHECKBOX).await.check(None).await?;
        let checkout = self.page.locator(CHECKOUT_BUTTON).await;
        expect(checkout.clone()).to_be_enabled().await?;
        checkout.click(None).await?;
        Ok(())
    }

    /// Asserts each named line item's subtotal cell is visible.
    pub async fn verify_checkout_item(&self, item_names: &[String]) -> Result<()> {
        for name in item_names {
            expect(self.page.locator(&item_subtotal(name)).await)
                .to_be_visible()
                .await?;
        }
        Ok(())
    }

    /// Sums the displayed subtotal of each named row.
    pub async fn calculate_item_total(&self, item_names: &[String]) -> Result<f64> {
        let mut sum = 0.0;
        for name in item_names {
            let text = self
                .page
                .locator(&item_subtotal(name))
                .await
                .inner_text()
                .await?;
            sum += parse_price(&text)?;
        }
        Ok(sum)
    }

    /// Asserts the displayed order total equals the sum of line subtotals
    /// exactly. Both values render from the same server-side figures, so no
    /// rounding tolerance is applied.
    pub async fn verify_price_calculation(&self, item_names: &[String]) -> Result<()> {
        let computed = self.calculate_item_total(item_names).await?;
        let displayed =
            parse_price(&self.page.locator(ORDER_TOTAL).await.inner_text().await?)?;
        if displayed != computed {
            return Err(Error::TotalMismatch {
                computed,
                displayed,
            });
        }
        Ok(())
    }

    /// Flags each named row for removal, then submits a cart update.
    pub async fn remove_item_from_cart(&self, item_names: &[String]) -> Result<()> {
        for name in item_names {
            self.page
                .locator(&item_remove_control(name))
                .await
                .click(None)
                .await?;
        }
        self.page
            .locator(UPDATE_CART_BUTTON)
            .await
            .click(None)
            .await?;
        Ok(())
    }
}

/// Locale-naive price parse: reads the leading digits-and-dot prefix of the
/// trimmed text, the way the shop renders plain decimal amounts.
fn parse_price(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let end = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    trimmed[..end].parse().map_err(|_| Error::PriceParse {
        text: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimal_amounts() {
        assert_eq!(parse_price("241.00").unwrap(), 241.0);
        assert_eq!(parse_price("  1200.00\n").unwrap(), 1200.0);
        assert_eq!(parse_price("25").unwrap(), 25.0);
    }

    #[test]
    fn stops_at_the_first_non_numeric_character() {
        // Thousands separators are not understood; the shop renders plain
        // decimals.
        assert_eq!(parse_price("1,200.00").unwrap(), 1.0);
    }

    #[test]
    fn rejects_text_without_a_leading_number() {
        assert!(parse_price("$241.00").is_err());
        assert!(parse_price("free").is_err());
        assert!(parse_price("").is_err());
    }

    #[test]
    fn row_selectors_embed_the_product_name() {
        assert_eq!(
            item_subtotal("Laptop"),
            "//tr[@class='cart-item-row'][.//a[@class='product-name' and normalize-space(.)='Laptop']]//span[@class='product-subtotal']"
        );
        assert!(item_remove_control("Laptop").ends_with("//input[@name='removefromcart']"));
    }
}
