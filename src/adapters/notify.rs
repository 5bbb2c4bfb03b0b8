use notify_rust::{Hint, Notification, Timeout, Urgency};

use crate::domain::{NotificationContent, Priority};
use crate::ports::{NotificationSink, SinkError};

/// Notification sink backed by the desktop notification daemon.
///
/// The numeric id doubles as the replacement id, so submitting under the
/// same id updates the existing notification in place.
#[derive(Debug, Default)]
pub struct DesktopSink;

fn urgency_for(priority: Priority) -> Urgency {
    match priority {
        Priority::Max | Priority::High => Urgency::Critical,
        Priority::Default => Urgency::Normal,
        Priority::Low | Priority::Min => Urgency::Low,
    }
}

impl NotificationSink for DesktopSink {
    fn submit(&self, id: u32, content: &NotificationContent) -> Result<(), SinkError> {
        let mut notification = Notification::new();
        notification
            .appname(content.channel.as_str())
            .summary(&content.title)
            .body(&content.body)
            .icon(content.icon.as_str())
            .id(id)
            .urgency(urgency_for(content.priority));

        if content.ongoing {
            // Resident + no timeout approximates a non-dismissible
            // ongoing notification.
            notification.timeout(Timeout::Never).hint(Hint::Resident(true));
        }

        notification
            .show()
            .map(|_| ())
            .map_err(|err| SinkError::Backend { source: err.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_mapping() {
        assert_eq!(urgency_for(Priority::Max), Urgency::Critical);
        assert_eq!(urgency_for(Priority::Default), Urgency::Normal);
        assert_eq!(urgency_for(Priority::Min), Urgency::Low);
    }
}
