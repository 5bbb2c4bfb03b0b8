pub mod notification;
pub mod signal;

// Re-exports for convenience
pub use notification::*;
pub use signal::*;
