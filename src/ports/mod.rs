pub mod notify;
pub mod time;

// Re-exports
pub use notify::*;
pub use time::*;
