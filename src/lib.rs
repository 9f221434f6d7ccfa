//! Page-object style element actions over a live [`chromiumoxide`] page.
//!
//! The crate is a thin façade: a [`Locator`] (the classic WebDriver
//! strategies — XPATH, ID, NAME, TAG, CLASS, CSS, LINK_TEXT) is lowered to
//! a native CDP query, resolved with an explicit wait, and exactly one
//! action is performed on the result. The page handle is owned by the
//! caller's harness; this crate never launches or closes a browser.
//!
//! ```no_run
//! use page_actions::{Locator, PageActions, WaitPolicy};
//!
//! # async fn example(page: &chromiumoxide::Page) -> page_actions::Result<()> {
//! let actions = PageActions::new(page);
//! actions
//!     .clear_and_type(&Locator::id("search"), "rust cdp", WaitPolicy::default())
//!     .await?;
//! actions
//!     .click(&Locator::link_text("Search"), WaitPolicy::default())
//!     .await?;
//! let heading = actions
//!     .text(&Locator::css("h1"), WaitPolicy::default())
//!     .await?;
//! # let _ = heading;
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod element;
pub mod error;
mod keys;
pub mod locator;
pub mod wait;

pub use actions::PageActions;
pub use element::Element;
pub use error::{Error, Result};
pub use locator::{Locator, LocatorKind, Query};
pub use wait::{Condition, ConditionState, WaitPolicy};
