// Wait and verification helpers shared by the page objects
//
// Fixed-duration sleeps are not used anywhere in the suite; every wait is a
// bounded poll against an observable signal (URL, match count, visibility).
// Required checks propagate their failure; `optional_visible` is the one
// deliberate exception and only ever logs.

use std::future::Future;
use std::time::Duration;

use playwright_rs::{Locator, Page, expect};

use crate::error::{Error, Result};

/// Interval between condition polls
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Polls an async predicate until it returns true or the timeout expires.
///
/// Errors from the predicate propagate immediately; expiry yields
/// [`Error::WaitTimeout`] naming the awaited condition.
pub async fn wait_until<F, Fut>(what: &str, timeout: Duration, mut predicate: F) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if predicate().await? {
            return Ok(());
        }
        if tokio::time::Instant::now() >= deadline {
            return Err(Error::WaitTimeout {
                what: what.to_string(),
                timeout,
            });
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Waits for the page URL to become exactly `expected`.
pub async fn wait_for_url(page: &Page, expected: &str, timeout: Duration) -> Result<()> {
    let what = format!("url to equal {expected}");
    wait_until(&what, timeout, || {
        let matched = page.url() == expected;
        async move { Ok(matched) }
    })
    .await
}

/// Waits for the locator to resolve to at least one element.
pub async fn wait_attached(locator: &Locator, timeout: Duration) -> Result<()> {
    let what = format!("{} to be attached", locator.selector());
    wait_until(&what, timeout, || {
        let locator = locator.clone();
        async move { Ok(locator.count().await? > 0) }
    })
    .await
}

/// Optional verification: waits briefly for visibility, never propagates.
///
/// For page furniture that may legitimately be absent (informational
/// payment messages, optional continue buttons). A miss is logged so flaky
/// runs can be diagnosed from the trace.
pub async fn optional_visible(locator: Locator, timeout: Duration) {
    let selector = locator.selector().to_string();
    if let Err(err) = expect(locator).with_timeout(timeout).to_be_visible().await {
        tracing::debug!(%selector, %err, "optional element not visible, continuing");
    }
}

/// Clicks the first match if the locator resolves to anything.
///
/// Returns whether a click happened. Used for per-step continue buttons
/// whose presence depends on the checkout configuration.
pub async fn click_if_present(locator: &Locator) -> Result<bool> {
    if locator.count().await? > 0 {
        locator.first().click(None).await?;
        Ok(true)
    } else {
        Ok(false)
    }
}
