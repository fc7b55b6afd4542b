//! demoshop-e2e: page-object end-to-end suite for the Tricentis demo web shop
//!
//! Wraps each page of <https://demowebshop.tricentis.com/> in a page object
//! exposing semantic actions (add an item to the cart, complete checkout)
//! over raw element locators. Test scenarios compose these actions and are
//! driven by the JSON fixtures under `fixtures/`.
//!
//! # Example
//!
//! ```ignore
//! use demoshop_e2e::{Config, fixtures, pages::{CartPage, CheckoutPage, LandingPage, ProductPage}};
//! use playwright_rs::{LaunchOptions, Playwright};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let playwright = Playwright::launch().await?;
//!     let browser = playwright
//!         .chromium()
//!         .launch_with_options(LaunchOptions::new().headless(config.headless))
//!         .await?;
//!     let page = browser.new_context().await?.new_page().await?;
//!
//!     page.goto(&config.base_url, None).await?;
//!     let landing = LandingPage::new(&page);
//!     let login = landing.click_login_button().await?;
//!     login.login_user(&config.user_email, &config.user_password).await?;
//!
//!     let item = &fixtures::featured_products()?.featured_items[0];
//!     landing.open_feature_item(&item.product_name).await?;
//!     ProductPage::new(&page).add_item_to_cart(item).await?;
//!
//!     landing.navbar.goto_cart().await?;
//!     let names = vec![item.product_name.clone()];
//!     let cart = CartPage::new(&page);
//!     cart.verify_price_calculation(&names).await?;
//!     cart.checkout_with_items(&names).await?;
//!     CheckoutPage::new(&page)
//!         .complete_checkout(&fixtures::checkout_options()?)
//!         .await?;
//!
//!     browser.close().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod pages;
pub mod selectors;
pub mod support;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{
    Address, BillingSection, Category, CategoryData, CheckoutOptions, FeaturedProducts,
    PaymentInfo, ProductKind, ProductOptions, ShippingMethod, ShippingSection,
};
pub use pages::{CartPage, CheckoutPage, LandingPage, LoginPage, Navbar, ProductPage};
