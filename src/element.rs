use chromiumoxide::element::Element as CdpElement;

use crate::error::{Error, Result};

/// Runs with the element as `this`; true when the node is rendered with a
/// nonzero box and not hidden via CSS.
const VISIBLE_FN: &str = r#"function() {
    const style = window.getComputedStyle(this);
    if (style.display === 'none' || style.visibility === 'hidden') return false;
    const rect = this.getBoundingClientRect();
    return rect.width > 0 && rect.height > 0;
}"#;

/// True when the node is visible and not disabled.
const CLICKABLE_FN: &str = r#"function() {
    const style = window.getComputedStyle(this);
    if (style.display === 'none' || style.visibility === 'hidden') return false;
    const rect = this.getBoundingClientRect();
    if (rect.width <= 0 || rect.height <= 0) return false;
    return this.disabled !== true;
}"#;

/// Checked/selected state of checkbox, radio and option elements.
const SELECTED_FN: &str =
    "function() { return this.checked === true || this.selected === true; }";

/// Script-level click, bypassing input simulation.
const CLICK_FN: &str = "function() { this.click(); }";

/// Live handle to one resolved DOM node.
///
/// Handles are transient: one resolution, one action. Callers re-resolve
/// instead of keeping a handle around, since the node can be replaced
/// between calls and the handle would go stale.
#[derive(Debug)]
pub struct Element {
    inner: CdpElement,
}

impl Element {
    pub(crate) fn new(inner: CdpElement) -> Self {
        Self { inner }
    }

    /// Returns a reference to the underlying chromiumoxide Element.
    pub fn inner(&self) -> &CdpElement {
        &self.inner
    }

    /// Click via simulated input (scrolls into view first).
    pub async fn click(&self) -> Result<()> {
        self.inner.click().await?;
        Ok(())
    }

    /// Click via `HTMLElement.click()`, bypassing input simulation. Used
    /// as the fallback tier when the direct click fails.
    pub async fn click_via_script(&self) -> Result<()> {
        self.inner.call_js_fn(CLICK_FN, false).await?;
        Ok(())
    }

    /// Append text to this element. Does not clear existing content.
    pub async fn type_text(&self, text: &str) -> Result<()> {
        self.inner.type_str(text).await?;
        Ok(())
    }

    /// Press a key on this element (e.g. "Enter", "Delete").
    pub async fn press_key(&self, key: &str) -> Result<()> {
        self.inner.press_key(key).await?;
        Ok(())
    }

    /// Focus this element.
    pub async fn focus(&self) -> Result<()> {
        self.inner.focus().await?;
        Ok(())
    }

    /// Scroll the viewport to this element.
    pub async fn scroll_into_view(&self) -> Result<()> {
        self.inner.scroll_into_view().await?;
        Ok(())
    }

    /// Rendered text content; empty string when the element has none.
    pub async fn text(&self) -> Result<String> {
        Ok(self.inner.inner_text().await?.unwrap_or_default())
    }

    /// Current value of the named attribute, or `None` when it is not set.
    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        Ok(self.inner.attribute(name).await?)
    }

    pub async fn is_visible(&self) -> Result<bool> {
        self.eval_bool(VISIBLE_FN).await
    }

    pub async fn is_clickable(&self) -> Result<bool> {
        self.eval_bool(CLICKABLE_FN).await
    }

    /// Whether a checkbox/toggle-like element is currently selected.
    pub async fn is_selected(&self) -> Result<bool> {
        self.eval_bool(SELECTED_FN).await
    }

    async fn eval_bool(&self, function: &str) -> Result<bool> {
        let ret = self.inner.call_js_fn(function, false).await?;
        match ret.result.value {
            Some(serde_json::Value::Bool(b)) => Ok(b),
            other => Err(Error::JsError(format!(
                "element predicate returned non-boolean: {other:?}"
            ))),
        }
    }
}
