use std::time::{Duration, Instant};

use chromiumoxide::page::Page;
use tracing::debug;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::keys;
use crate::locator::{Locator, Query};
use crate::wait::{Condition, ConditionState, WaitPolicy};

/// Settling pause between clearing a field and typing its replacement.
/// A concession to flaky browser input timing, not a correctness
/// guarantee: some pages re-render inputs on change events and eat
/// keystrokes that arrive too early.
const CLEAR_SETTLE: Duration = Duration::from_secs(1);

/// Element action façade over a live CDP page.
///
/// Translates a [`Locator`] into a native query, polls until the wait
/// condition holds, then performs exactly one action on the resolved
/// element. Holds a borrowed page handle supplied by the caller's
/// harness; it never creates, configures or closes the session.
///
/// Nothing is cached between calls: every action re-resolves its locator
/// against the current DOM, and no element handle outlives the call that
/// produced it (except [`resolve`](Self::resolve) and
/// [`wait_until_visible`](Self::wait_until_visible), which hand the
/// handle to the caller for immediate chained use).
pub struct PageActions<'a> {
    page: &'a Page,
}

impl<'a> PageActions<'a> {
    pub fn new(page: &'a Page) -> Self {
        Self { page }
    }

    /// Returns the underlying page handle.
    pub fn page(&self) -> &Page {
        self.page
    }

    /// Resolve a locator, polling at `policy.poll_interval` until
    /// `policy.condition` holds or `policy.timeout` elapses.
    ///
    /// A timeout fails once with [`Error::ElementNotFound`]; there are no
    /// silent re-attempts beyond the polling itself.
    pub async fn resolve(&self, locator: &Locator, policy: WaitPolicy) -> Result<Element> {
        let start = Instant::now();
        let mut last_state = ConditionState::Missing;

        loop {
            match self.find_once(locator).await {
                Ok(element) => match self.check(&element, policy.condition).await? {
                    None => return Ok(element),
                    Some(state) => last_state = state,
                },
                Err(_) => last_state = ConditionState::Missing,
            }

            if start.elapsed() >= policy.timeout {
                debug!(
                    locator = %locator,
                    timeout = ?policy.timeout,
                    last_state = %last_state,
                    "wait timed out"
                );
                return Err(Error::ElementNotFound {
                    kind: locator.kind,
                    value: locator.value.clone(),
                    timeout: policy.timeout,
                    last_state,
                });
            }
            tokio::time::sleep(policy.poll_interval).await;
        }
    }

    /// One lookup against the current DOM, no waiting.
    async fn find_once(&self, locator: &Locator) -> Result<Element> {
        let inner = match locator.query() {
            Query::Css(css) => self.page.find_element(css).await?,
            Query::XPath(xpath) => self.page.find_xpath(xpath).await?,
        };
        Ok(Element::new(inner))
    }

    /// Returns `None` when the condition holds, otherwise the state that
    /// failed it.
    async fn check(
        &self,
        element: &Element,
        condition: Condition,
    ) -> Result<Option<ConditionState>> {
        match condition {
            Condition::Present => Ok(None),
            Condition::Visible => {
                if element.is_visible().await? {
                    Ok(None)
                } else {
                    Ok(Some(ConditionState::Hidden))
                }
            }
            Condition::Clickable => {
                if !element.is_visible().await? {
                    Ok(Some(ConditionState::Hidden))
                } else if element.is_clickable().await? {
                    Ok(None)
                } else {
                    Ok(Some(ConditionState::Disabled))
                }
            }
        }
    }

    // ── Text input ──────────────────────────────────────────────────

    /// Append `text` to the element verbatim. Does not clear first.
    pub async fn type_text(&self, locator: &Locator, text: &str, policy: WaitPolicy) -> Result<()> {
        let element = self.resolve(locator, policy).await?;
        element.type_text(text).await
    }

    /// Empty the element: focus, select-all (Cmd+A on macOS hosts, Ctrl+A
    /// elsewhere), then Delete.
    pub async fn clear(&self, locator: &Locator, policy: WaitPolicy) -> Result<()> {
        let element = self.resolve(locator, policy).await?;
        self.clear_element(&element).await
    }

    /// Clear the element, pause for the page's input handlers to settle,
    /// then append `text`. End state is exactly `text` regardless of prior
    /// content.
    pub async fn clear_and_type(
        &self,
        locator: &Locator,
        text: &str,
        policy: WaitPolicy,
    ) -> Result<()> {
        let element = self.resolve(locator, policy).await?;
        self.clear_element(&element).await?;
        tokio::time::sleep(CLEAR_SETTLE).await;
        element.type_text(text).await
    }

    async fn clear_element(&self, element: &Element) -> Result<()> {
        element.focus().await?;
        keys::select_all(self.page).await?;
        keys::delete(self.page).await?;
        Ok(())
    }

    // ── Reads ───────────────────────────────────────────────────────

    /// Rendered text content; empty string when the element has none.
    pub async fn text(&self, locator: &Locator, policy: WaitPolicy) -> Result<String> {
        let element = self.resolve(locator, policy).await?;
        element.text().await
    }

    /// Current value of the named attribute, or `None` when the attribute
    /// is not set. No default is substituted.
    pub async fn attribute(
        &self,
        locator: &Locator,
        name: &str,
        policy: WaitPolicy,
    ) -> Result<Option<String>> {
        let element = self.resolve(locator, policy).await?;
        element.attribute(name).await
    }

    /// Whether a checkbox/toggle-like element is currently selected.
    pub async fn toggle_state(&self, locator: &Locator, policy: WaitPolicy) -> Result<bool> {
        let element = self.resolve(locator, policy).await?;
        element.is_selected().await
    }

    // ── Visual / navigational ───────────────────────────────────────

    /// Direct click, falling back to a script-level click when input
    /// simulation fails (overlays, off-screen nodes and similar false
    /// negatives). Both tiers target the same resolved element; the
    /// locator is never re-resolved between them.
    pub async fn click(&self, locator: &Locator, policy: WaitPolicy) -> Result<()> {
        let element = self.resolve(locator, policy).await?;
        if let Err(err) = element.click().await {
            debug!(locator = %locator, error = %err, "direct click failed, trying script click");
            element.click_via_script().await?;
        }
        Ok(())
    }

    /// Move the viewport to the element.
    pub async fn scroll_into_view(&self, locator: &Locator, policy: WaitPolicy) -> Result<()> {
        let element = self.resolve(locator, policy).await?;
        element.scroll_into_view().await
    }

    /// Resolve with the `Visible` condition (overriding whatever
    /// `policy.condition` says) and return the handle for chained use.
    pub async fn wait_until_visible(
        &self,
        locator: &Locator,
        policy: WaitPolicy,
    ) -> Result<Element> {
        self.resolve(locator, policy.with_condition(Condition::Visible))
            .await
    }

    /// Navigate back in the browser history.
    pub async fn back(&self) -> Result<()> {
        self.page.evaluate("window.history.back()").await?;
        Ok(())
    }

    /// Reload the current page.
    pub async fn refresh(&self) -> Result<()> {
        self.page.reload().await?;
        Ok(())
    }
}
