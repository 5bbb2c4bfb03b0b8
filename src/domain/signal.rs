/// Well-known discriminator carried by the minute-boundary tick broadcast.
pub const ACTION_TIME_TICK: &str = "time.tick";

/// An inbound broadcast signal from the host.
///
/// Signals carry at most one piece of payload the handler consumes: an
/// optional action string identifying what the broadcast is. A signal with
/// no action, or with an action other than [`ACTION_TIME_TICK`], is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    action: Option<String>,
}

impl Signal {
    /// A well-formed minute-tick signal.
    pub fn time_tick() -> Self {
        Self {
            action: Some(ACTION_TIME_TICK.to_string()),
        }
    }

    /// A signal carrying an arbitrary action tag.
    pub fn with_action(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
        }
    }

    /// A malformed signal with no discriminator at all.
    pub fn empty() -> Self {
        Self { action: None }
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn is_time_tick(&self) -> bool {
        self.action() == Some(ACTION_TIME_TICK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_tick_signal_matches() {
        assert!(Signal::time_tick().is_time_tick());
        assert_eq!(Signal::time_tick().action(), Some(ACTION_TIME_TICK));
    }

    #[test]
    fn test_other_actions_do_not_match() {
        assert!(!Signal::empty().is_time_tick());
        assert!(!Signal::with_action("battery.low").is_time_tick());
        assert!(!Signal::with_action("").is_time_tick());
    }
}
