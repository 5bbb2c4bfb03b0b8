use crate::domain::NotificationContent;
use thiserror::Error;

/// Errors a notification backend can report.
///
/// An absent sink is not an error: the handler models that case with an
/// optional sink and skips quietly.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("notification backend error: {source}")]
    Backend { source: anyhow::Error },
}

/// Host-owned notification surface.
///
/// Implementations render and persist a status notification keyed by a
/// numeric id: submitting under an id the host already knows replaces the
/// prior content rather than creating a duplicate. The handler receives
/// this capability by injection instead of fetching it from ambient
/// context.
pub trait NotificationSink: Send + Sync {
    /// Submit replacement content under the given notification id.
    fn submit(&self, id: u32, content: &NotificationContent) -> Result<(), SinkError>;
}
