// Error types for the demo shop end-to-end suite

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the demo shop
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying Playwright failure (navigation, locator wait, interaction)
    ///
    /// A locator that never becomes visible or actionable surfaces here as a
    /// timeout and fails the enclosing test step.
    #[error(transparent)]
    Playwright(#[from] playwright_rs::Error),

    /// No dropdown, radio group, or checkbox group exists under a product
    /// attribute label
    #[error("no select, radio, or checkbox control found for attribute '{attribute}'")]
    AttributeControlNotFound { attribute: String },

    /// A radio or checkbox group exists for the attribute, but none of its
    /// entries matches the requested option text
    #[error("{control} option '{option}' not found for attribute '{attribute}'")]
    AttributeOptionNotFound {
        control: &'static str,
        attribute: String,
        option: String,
    },

    /// A dropdown exists but neither label match nor substring scan found
    /// the requested option
    #[error("no option matching '{option}' in the {select} dropdown")]
    OptionNotFound { select: String, option: String },

    /// A checkout section asks for a new address without supplying one
    #[error("{section} section requests a new address but none was provided")]
    MissingAddress { section: &'static str },

    /// The displayed order total does not equal the sum of line subtotals
    #[error("order total {displayed} does not equal the sum of line subtotals {computed}")]
    TotalMismatch { computed: f64, displayed: f64 },

    /// A cart cell's text could not be read as a price
    #[error("subtotal text '{text}' is not a price")]
    PriceParse { text: String },

    /// Bounded condition poll expired
    #[error("timed out after {timeout:?} waiting for {what}")]
    WaitTimeout { what: String, timeout: Duration },

    /// Required environment variable is absent
    #[error("required environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// Fixture file could not be read
    #[error("fixture {}: {source}", path.display())]
    FixtureIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fixture file could not be deserialized
    ///
    /// An unrecognized `productType` or payment `type` tag lands here, at
    /// load time, before any browser interaction happens.
    #[error("fixture {}: {source}", path.display())]
    FixtureParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
