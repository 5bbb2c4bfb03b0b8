/// Numeric id of the application's primary persistent notification.
///
/// Tick updates are submitted under this same id so the host replaces the
/// existing notification instead of stacking a duplicate. Any other code
/// that owns the primary notification must use this constant, never a
/// repeated literal.
pub const PRIMARY_NOTIFICATION_ID: u32 = 2000;

/// Default notification channel id.
pub const DEFAULT_CHANNEL: &str = "pip_clock_channel";

/// Default title label shown before the formatted time.
pub const DEFAULT_LABEL: &str = "Pip Clock";

/// Static subtitle shown under the title.
pub const DEFAULT_BODY: &str = "Tap to open";

/// Default icon reference for the clock notification.
pub const DEFAULT_ICON: &str = "clock";

/// Identifier of a notification channel
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId(pub String);

impl ChannelId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ChannelId {
    fn default() -> Self {
        Self(DEFAULT_CHANNEL.to_string())
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to an icon resource, interpreted by the host backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRef(pub String);

impl IconRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IconRef {
    fn default() -> Self {
        Self(DEFAULT_ICON.to_string())
    }
}

/// Display priority of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Min,
    Low,
    Default,
    High,
    Max,
}

/// Replacement content for one notification submission.
///
/// The notification itself is owned and persisted by the host; this value
/// only describes what the host should render next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub channel: ChannelId,
    pub title: String,
    pub body: String,
    /// Non-dismissible by the user until the owning application clears it.
    pub ongoing: bool,
    pub priority: Priority,
    pub icon: IconRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Max > Priority::High);
        assert!(Priority::Min < Priority::Default);
    }

    #[test]
    fn test_defaults_match_channel_contract() {
        assert_eq!(ChannelId::default().as_str(), "pip_clock_channel");
        assert_eq!(PRIMARY_NOTIFICATION_ID, 2000);
    }
}
