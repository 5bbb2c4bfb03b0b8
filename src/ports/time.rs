use chrono::{DateTime, Local};

/// Clock abstraction for testability
pub trait Clock: Send + Sync {
    /// Get current local wall-clock time
    fn now(&self) -> DateTime<Local>;
}

/// System clock implementation
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
