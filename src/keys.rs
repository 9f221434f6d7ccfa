//! Raw CDP key events for the editing chords the element API cannot
//! express: select-all carries a platform modifier, and Delete must reach
//! the focused element as a real key press.

use chromiumoxide::cdp::browser_protocol::input::{
    DispatchKeyEventParams, DispatchKeyEventType,
};
use chromiumoxide::page::Page;

use crate::error::{Error, Result};

// Input.dispatchKeyEvent modifier bits.
const MODIFIER_CTRL: i64 = 2;
const MODIFIER_META: i64 = 4;

/// Modifier for the select-all chord on the host platform: Cmd on macOS,
/// Ctrl everywhere else.
pub(crate) fn select_all_modifier() -> i64 {
    if cfg!(target_os = "macos") {
        MODIFIER_META
    } else {
        MODIFIER_CTRL
    }
}

/// Send Cmd/Ctrl+A to the focused element.
pub(crate) async fn select_all(page: &Page) -> Result<()> {
    send_key(page, "a", "KeyA", 65, select_all_modifier()).await
}

/// Send Delete to the focused element.
pub(crate) async fn delete(page: &Page) -> Result<()> {
    send_key(page, "Delete", "Delete", 46, 0).await
}

async fn send_key(
    page: &Page,
    key: &str,
    code: &str,
    virtual_key_code: i64,
    modifiers: i64,
) -> Result<()> {
    let down = DispatchKeyEventParams::builder()
        .r#type(DispatchKeyEventType::KeyDown)
        .key(key)
        .code(code)
        .windows_virtual_key_code(virtual_key_code)
        .native_virtual_key_code(virtual_key_code)
        .modifiers(modifiers)
        .build()
        .map_err(Error::InputError)?;
    page.execute(down).await?;

    let up = DispatchKeyEventParams::builder()
        .r#type(DispatchKeyEventType::KeyUp)
        .key(key)
        .code(code)
        .windows_virtual_key_code(virtual_key_code)
        .native_virtual_key_code(virtual_key_code)
        .modifiers(modifiers)
        .build()
        .map_err(Error::InputError)?;
    page.execute(up).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn select_all_uses_ctrl_off_macos() {
        assert_eq!(select_all_modifier(), MODIFIER_CTRL);
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn select_all_uses_meta_on_macos() {
        assert_eq!(select_all_modifier(), MODIFIER_META);
    }
}
