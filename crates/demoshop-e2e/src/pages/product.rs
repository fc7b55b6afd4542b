// Product detail page: attribute selection and add-to-cart
//
// Attribute-style products (computers) render each named option as a
// dropdown, radio group, or checkbox group under a <dt> label. The control
// kind is not knowable from the fixture, so resolution walks an ordered
// fallback chain and stops at the first strategy that finds the control.

use std::time::Duration;

use playwright_rs::{Locator, Page, SelectOption, SelectOptions, expect};

use crate::error::{Error, Result};
use crate::model::{ProductKind, ProductOptions};
use crate::pages::Navbar;
use crate::selectors::xpath_literal;

const RECIPIENT_NAME_INPUT: &str = "//input[@class='recipient-name']";
const RECIPIENT_EMAIL_INPUT: &str = "//input[@class='recipient-email']";
const MESSAGE_TEXTAREA: &str = "//textarea[@class='message']";
const QTY_INPUT: &str = "//input[@class='qty-input']";
const ADD_TO_CART_BUTTON: &str = "//div[@class='add-to-cart-panel']//input[@value='Add to cart']";
const NOTIFICATION_BAR: &str = "#bar-notification";

/// Definition cell holding the controls for one named attribute.
fn attribute_cell(label: &str) -> String {
    format!(
        "//dt[label[normalize-space(.)={}]]/following-sibling::dd[1]",
        xpath_literal(label)
    )
}

/// Dropdown under a labelled definition term (apparel size, jewelry material).
fn labeled_dropdown(label: &str) -> String {
    format!(
        "//label[normalize-space(.)={}]/ancestor::dt/following-sibling::dd//select",
        xpath_literal(label)
    )
}

/// Free-text input under a labelled definition term (jewelry length).
fn labeled_text_input(label: &str) -> String {
    format!(
        "//label[normalize-space(.)={}]/ancestor::dt/following-sibling::dd//input[@type='text']",
        xpath_literal(label)
    )
}

fn color_swatch(color: &str) -> String {
    format!(
        "//span[@class='color-container' and @title={}]",
        xpath_literal(color)
    )
}

/// Option whose text contains the requested value (substring fallback).
fn option_containing(text: &str) -> String {
    format!("//option[contains(., {})]", xpath_literal(text))
}

/// Radio/checkbox wrapped inside a label whose text contains the option.
fn control_in_label(control: &str, text: &str) -> String {
    format!(
        "//label[contains(normalize-space(.), {})]//input[@type='{control}']",
        xpath_literal(text)
    )
}

/// Radio/checkbox followed by a sibling label whose text contains the option.
fn control_before_label(control: &str, text: &str) -> String {
    format!(
        "//input[@type='{control}' and following-sibling::label[contains(normalize-space(.), {})]]",
        xpath_literal(text)
    )
}

/// Product page actions
pub struct ProductPage {
    page: Page,
    pub navbar: Navbar,
}

impl ProductPage {
    pub fn new(page: &Page) -> Self {
        Self {
            page: page.clone(),
            navbar: Navbar::new(page),
        }
    }

    /// Configures the product per its options and adds it to the cart.
    ///
    /// Postcondition: the notification bar must become visible after the
    /// add-to-cart click; its absence means the add silently failed
    /// server-side and is reported as a failure regardless of product type.
    pub async fn add_item_to_cart(&self, options: &ProductOptions) -> Result<()> {
        if let Some(qty) = options.qty
            && qty > 0
        {
            self.fill_quantity(qty).await?;
        }

        match &options.kind {
            ProductKind::GiftCard {
                recipient_name,
                recipient_email,
                message,
            } => {
                self.fill_recipient_name(recipient_name).await?;
                self.fill_recipient_email(recipient_email).await?;
                if let Some(message) = message {
                    self.fill_message(message).await?;
                }
            }
            // No extra options for plain catalog items.
            ProductKind::Book | ProductKind::Laptop => {}
            ProductKind::Computer {
                processor,
                ram,
                hdd,
                software,
            } => {
                if let Some(processor) = processor {
                    self.choose_attribute("Processor", processor).await?;
                }
                if let Some(ram) = ram {
                    self.choose_attribute("RAM", ram).await?;
                }
                if let Some(hdd) = hdd {
                    self.choose_attribute("HDD", hdd).await?;
                }
                for package in software.iter().flatten() {
                    self.choose_attribute("Software", package).await?;
                }
            }
            ProductKind::Apparel { size, color } => {
                if let Some(size) = size {
                    self.select_dropdown(&labeled_dropdown("Size"), size).await?;
                }
                if let Some(color) = color {
                    self.choose_color(color).await?;
                }
            }
            ProductKind::Jewelry {
                material,
                length_in_cm,
            } => {
                if let Some(material) = material {
                    self.select_dropdown(&labeled_dropdown("Material"), material)
                        .await?;
                }
                if let Some(length) = length_in_cm {
                    self.page
                        .locator(&labeled_text_input("Length in cm"))
                        .await
                        .fill(length, None)
                        .await?;
                }
            }
        }

        self.page
            .locator(ADD_TO_CART_BUTTON)
            .await
            .click(None)
            .await?;
        expect(self.page.locator(NOTIFICATION_BAR).await)
            .to_be_visible()
            .await?;
        Ok(())
    }

    async fn fill_quantity(&self, qty: u32) -> Result<()> {
        self.page
            .locator(QTY_INPUT)
            .await
            .fill(&qty.to_string(), None)
            .await?;
        Ok(())
    }

    async fn fill_recipient_name(&self, recipient_name: &str) -> Result<()> {
        self.page
            .locator(RECIPIENT_NAME_INPUT)
            .await
            .fill(recipient_name, None)
            .await?;
        Ok(())
    }

    async fn fill_recipient_email(&self, recipient_email: &str) -> Result<()> {
        self.page
            .locator(RECIPIENT_EMAIL_INPUT)
            .await
            .fill(recipient_email, None)
            .await?;
        Ok(())
    }

    async fn fill_message(&self, message: &str) -> Result<()> {
        self.page
            .locator(MESSAGE_TEXTAREA)
            .await
            .fill(message, None)
            .await?;
        Ok(())
    }

    async fn select_dropdown(&self, selector: &str, visible_text: &str) -> Result<()> {
        self.page
            .locator(selector)
            .await
            .select_option(SelectOption::Label(visible_text.to_string()), None)
            .await?;
        Ok(())
    }

    async fn choose_color(&self, color: &str) -> Result<()> {
        self.page
            .locator(&color_swatch(color))
            .await
            .click(None)
            .await?;
        Ok(())
    }

    /// Resolves a named attribute to whichever control kind is present
    /// under its label and selects `option` in it.
    ///
    /// Strategies are tried in order: dropdown, radio group, checkbox
    /// group. The first control kind found wins; no control at all is an
    /// explicit error naming the attribute.
    async fn choose_attribute(&self, attribute: &str, option: &str) -> Result<()> {
        let cell = self.page.locator(&attribute_cell(attribute)).await;
        expect(cell.clone())
            .with_timeout(Duration::from_secs(3))
            .to_be_visible()
            .await?;

        let dropdown = cell.locator("//select");
        if dropdown.count().await? > 0 {
            return self.select_attribute_option(&dropdown, attribute, option).await;
        }

        if cell.locator("//input[@type='radio']").count().await? > 0 {
            return self.check_grouped_control(&cell, "radio", attribute, option).await;
        }

        if cell.locator("//input[@type='checkbox']").count().await? > 0 {
            return self
                .check_grouped_control(&cell, "checkbox", attribute, option)
                .await;
        }

        Err(Error::AttributeControlNotFound {
            attribute: attribute.to_string(),
        })
    }

    /// Dropdown path: label match first, then a substring scan over the
    /// options selecting by underlying value.
    async fn select_attribute_option(
        &self,
        dropdown: &Locator,
        attribute: &str,
        option: &str,
    ) -> Result<()> {
        // Bounded first attempt so a label miss falls through to the scan
        // instead of waiting out the default action timeout.
        let by_label = dropdown
            .first()
            .select_option(
                SelectOption::Label(option.to_string()),
                Some(SelectOptions::builder().timeout(5_000.0).build()),
            )
            .await;
        if by_label.is_ok() {
            return Ok(());
        }
        tracing::debug!(attribute, option, "label match failed, scanning options");

        let candidates = dropdown.locator(&option_containing(option));
        if candidates.count().await? > 0
            && let Some(value) = candidates.first().get_attribute("value").await?
        {
            dropdown
                .first()
                .select_option(SelectOption::Value(value), None)
                .await?;
            return Ok(());
        }

        Err(Error::OptionNotFound {
            select: attribute.to_string(),
            option: option.to_string(),
        })
    }

    /// Radio/checkbox path: label-wrapped control first, then the
    /// control-before-sibling-label pattern.
    async fn check_grouped_control(
        &self,
        cell: &Locator,
        control: &'static str,
        attribute: &str,
        option: &str,
    ) -> Result<()> {
        let wrapped = cell.locator(&control_in_label(control, option));
        if wrapped.count().await? > 0 {
            wrapped.first().check(None).await?;
            return Ok(());
        }

        let sibling = cell.locator(&control_before_label(control, option));
        if sibling.count().await? > 0 {
            sibling.first().check(None).await?;
            return Ok(());
        }

        Err(Error::AttributeOptionNotFound {
            control,
            attribute: attribute.to_string(),
            option: option.to_string(),
        })
    }
}
