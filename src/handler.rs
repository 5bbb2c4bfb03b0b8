use chrono::Timelike;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::{
    ChannelId, IconRef, NotificationContent, Priority, Signal, DEFAULT_BODY, DEFAULT_LABEL,
    PRIMARY_NOTIFICATION_ID,
};
use crate::ports::{Clock, NotificationSink};

/// What a single `on_tick` invocation did.
///
/// Skips are ordinary outcomes, not errors: a mismatched signal and an
/// unavailable sink both leave the host untouched and the handler ready
/// for the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Replacement content was handed to the notification sink.
    Submitted,
    /// The signal carried no discriminator or a non-matching one.
    IgnoredSignal,
    /// No notification sink was available; nothing was submitted.
    SinkUnavailable,
    /// The sink was available but rejected the submission.
    SubmitFailed,
}

/// Reacts to the minute-tick signal by submitting a fresh clock
/// notification.
///
/// Each invocation is independent and idempotent: the handler keeps no
/// state between ticks, and re-submitting identical content under
/// [`PRIMARY_NOTIFICATION_ID`] is a safe overwrite.
pub struct TickHandler {
    clock: Arc<dyn Clock>,
    sink: Option<Arc<dyn NotificationSink>>,
    channel: ChannelId,
    label: String,
    body: String,
    icon: IconRef,
}

impl TickHandler {
    /// Build a handler with the default channel, label, and body.
    ///
    /// `sink` is `None` when the host could not provide a notification
    /// surface; the handler then treats every tick as a silent skip.
    pub fn new(clock: Arc<dyn Clock>, sink: Option<Arc<dyn NotificationSink>>) -> Self {
        Self {
            clock,
            sink,
            channel: ChannelId::default(),
            label: DEFAULT_LABEL.to_string(),
            body: DEFAULT_BODY.to_string(),
            icon: IconRef::default(),
        }
    }

    /// Build a handler whose channel, label, and body come from config.
    pub fn from_config(
        clock: Arc<dyn Clock>,
        sink: Option<Arc<dyn NotificationSink>>,
        config: &Config,
    ) -> Self {
        Self {
            channel: ChannelId(config.channel.clone()),
            label: config.label.clone(),
            body: config.body.clone(),
            ..Self::new(clock, sink)
        }
    }

    /// Handle one inbound signal.
    ///
    /// Validates the discriminator, formats the current wall-clock time as
    /// zero-padded `HH:MM`, and submits the replacement notification. Both
    /// recognized skip conditions return without error.
    pub fn on_tick(&self, signal: &Signal) -> TickOutcome {
        if !signal.is_time_tick() {
            debug!(action = ?signal.action(), "Ignoring non-tick signal");
            return TickOutcome::IgnoredSignal;
        }

        let Some(sink) = &self.sink else {
            debug!("Notification sink unavailable, skipping update");
            return TickOutcome::SinkUnavailable;
        };

        let now = self.clock.now();
        let title = format!("{} • {:02}:{:02}", self.label, now.hour(), now.minute());
        let content = NotificationContent {
            channel: self.channel.clone(),
            title,
            body: self.body.clone(),
            ongoing: true,
            priority: Priority::Max,
            icon: self.icon.clone(),
        };

        match sink.submit(PRIMARY_NOTIFICATION_ID, &content) {
            Ok(()) => {
                info!(title = %content.title, "Updated clock notification");
                TickOutcome::Submitted
            }
            Err(err) => {
                warn!("Notification submission failed: {err}");
                TickOutcome::SubmitFailed
            }
        }
    }
}
