use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default resolution timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default interval between condition checks while waiting.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Condition an element must satisfy before a wait completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Attached to the DOM, not necessarily rendered or interactable.
    #[default]
    Present,
    /// Rendered with a nonzero box and not hidden via CSS.
    Visible,
    /// Visible and not disabled.
    Clickable,
}

/// Last state observed for a locator while waiting. Reported inside
/// [`Error::ElementNotFound`](crate::Error::ElementNotFound) when a wait
/// times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionState {
    /// No matching node in the DOM.
    Missing,
    /// A node matched but failed the visibility check.
    Hidden,
    /// A node was visible but disabled.
    Disabled,
}

impl fmt::Display for ConditionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConditionState::Missing => "missing",
            ConditionState::Hidden => "hidden",
            ConditionState::Disabled => "disabled",
        };
        f.write_str(s)
    }
}

/// Timeout and condition applied to one element resolution.
///
/// Plays the role keyword arguments play in dynamic page-object layers:
/// pass [`WaitPolicy::default`] for the stock behavior, or override the
/// odd field per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub timeout: Duration,
    pub condition: Condition,
    pub poll_interval: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            condition: Condition::Present,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl WaitPolicy {
    pub fn new(timeout: Duration, condition: Condition) -> Self {
        Self {
            timeout,
            condition,
            ..Self::default()
        }
    }

    /// Default condition with the given timeout.
    pub fn timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Default timeout with the given condition.
    pub fn condition(condition: Condition) -> Self {
        Self {
            condition,
            ..Self::default()
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_waits_twenty_seconds_for_presence() {
        let policy = WaitPolicy::default();
        assert_eq!(policy.timeout, Duration::from_secs(20));
        assert_eq!(policy.condition, Condition::Present);
        assert_eq!(policy.poll_interval, Duration::from_millis(100));
    }

    #[test]
    fn overrides_leave_other_fields_at_defaults() {
        let policy = WaitPolicy::timeout(Duration::from_secs(5));
        assert_eq!(policy.timeout, Duration::from_secs(5));
        assert_eq!(policy.condition, Condition::Present);

        let policy = WaitPolicy::condition(Condition::Clickable);
        assert_eq!(policy.timeout, DEFAULT_TIMEOUT);
        assert_eq!(policy.condition, Condition::Clickable);

        let policy = WaitPolicy::default()
            .with_condition(Condition::Visible)
            .with_poll_interval(Duration::from_millis(50));
        assert_eq!(policy.condition, Condition::Visible);
        assert_eq!(policy.poll_interval, Duration::from_millis(50));
    }

    #[test]
    fn condition_state_displays_lowercase() {
        assert_eq!(ConditionState::Missing.to_string(), "missing");
        assert_eq!(ConditionState::Hidden.to_string(), "hidden");
        assert_eq!(ConditionState::Disabled.to_string(), "disabled");
    }
}
