// Suite configuration from the environment
//
// Credentials and target selection are the only runtime inputs; everything
// else comes from fixture files. Values are read once at suite start.

use crate::error::{Error, Result};

/// Public demo shop driven by the suite when no override is given
pub const DEFAULT_BASE_URL: &str = "https://demowebshop.tricentis.com/";

/// Runtime configuration for a suite run
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the shop, always with a trailing slash
    pub base_url: String,
    /// Account email used by the login flow
    pub user_email: String,
    /// Account password used by the login flow
    pub user_password: String,
    /// Whether the browser runs headless
    pub headless: bool,
}

impl Config {
    /// Reads configuration from the environment, loading `.env` first when
    /// one is present.
    ///
    /// `USER_EMAIL` and `USER_PASSWORD` are required. `DEMOSHOP_BASE_URL`
    /// overrides the target shop and `DEMOSHOP_HEADLESS=0` opens a headed
    /// browser.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("DEMOSHOP_BASE_URL")
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let user_email = require("USER_EMAIL")?;
        let user_password = require("USER_PASSWORD")?;
        let headless = std::env::var("DEMOSHOP_HEADLESS")
            .map(|v| !matches!(v.as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Ok(Self {
            base_url,
            user_email,
            user_password,
            headless,
        })
    }

    /// URL of the login page.
    pub fn login_url(&self) -> String {
        format!("{}login", self.base_url)
    }
}

fn require(name: &'static str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::MissingEnv(name))
}

fn normalize_base_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://shop.example.com"),
            "https://shop.example.com/"
        );
        assert_eq!(
            normalize_base_url("https://shop.example.com/"),
            "https://shop.example.com/"
        );
    }

    #[test]
    fn login_url_appends_to_base() {
        let config = Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_email: String::new(),
            user_password: String::new(),
            headless: true,
        };
        assert_eq!(
            config.login_url(),
            "https://demowebshop.tricentis.com/login"
        );
    }
}
