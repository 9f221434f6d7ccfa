use std::time::Duration;

use thiserror::Error;

use crate::locator::LocatorKind;
use crate::wait::ConditionState;

#[derive(Debug, Error)]
pub enum Error {
    /// The caller named a locator kind outside the closed enumeration.
    /// Always a caller/config defect; raised before any wait starts.
    #[error("unknown locator kind: {0:?}")]
    UnknownLocatorKind(String),

    /// The wait condition never held within the timeout. Carries the full
    /// locator and the last state observed while polling, for diagnosis.
    #[error("element not found: {kind}={value} within {timeout:?} (last observed: {last_state})")]
    ElementNotFound {
        kind: LocatorKind,
        value: String,
        timeout: Duration,
        last_state: ConditionState,
    },

    /// An in-page predicate or script returned something unusable.
    #[error("JavaScript error: {0}")]
    JsError(String),

    /// Building a CDP input event failed.
    #[error("input dispatch failed: {0}")]
    InputError(String),

    /// Underlying driver failure, passed through unmodified.
    #[error("CDP error: {0}")]
    CdpError(#[from] chromiumoxide::error::CdpError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_not_found_names_the_locator_and_timeout() {
        let err = Error::ElementNotFound {
            kind: LocatorKind::Id,
            value: "save-button".into(),
            timeout: Duration::from_secs(20),
            last_state: ConditionState::Missing,
        };
        let msg = err.to_string();
        assert!(msg.contains("ID=save-button"), "message was: {msg}");
        assert!(msg.contains("20s"), "message was: {msg}");
        assert!(msg.contains("missing"), "message was: {msg}");
    }
}
