// Login page

use std::time::Duration;

use playwright_rs::{Page, expect};

use crate::error::Result;
use crate::support;

const EMAIL_INPUT: &str = "//input[@id='Email']";
const PASSWORD_INPUT: &str = "//input[@id='Password']";
const LOGIN_BUTTON: &str = "//input[@value='Log in']";
const PAGE_TITLE: &str = "//h1[text()='Welcome, Please Sign In!']";

/// Login form actions.
///
/// No retry logic: a missing field or failed submit surfaces as a timeout
/// from the interaction layer.
pub struct LoginPage {
    page: Page,
}

impl LoginPage {
    pub fn new(page: &Page) -> Self {
        Self { page: page.clone() }
    }

    async fn fill_email(&self, email: &str) -> Result<()> {
        self.page.locator(EMAIL_INPUT).await.fill(email, None).await?;
        Ok(())
    }

    async fn fill_password(&self, password: &str) -> Result<()> {
        self.page
            .locator(PASSWORD_INPUT)
            .await
            .fill(password, None)
            .await?;
        Ok(())
    }

    async fn click_login(&self) -> Result<()> {
        self.page.locator(LOGIN_BUTTON).await.click(None).await?;
        Ok(())
    }

    /// Asserts the login page is current: `/login` URL and welcome heading.
    pub async fn verify_login_page(&self, base_url: &str) -> Result<()> {
        let expected = format!("{base_url}login");
        support::wait_for_url(&self.page, &expected, Duration::from_secs(10)).await?;
        expect(self.page.locator(PAGE_TITLE).await)
            .to_be_visible()
            .await?;
        Ok(())
    }

    /// Fills the credential pair and submits.
    pub async fn login_user(&self, email: &str, password: &str) -> Result<()> {
        self.fill_email(email).await?;
        self.fill_password(password).await?;
        self.click_login().await
    }
}
