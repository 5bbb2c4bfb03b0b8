//! PipClock - keeps a persistent clock notification up to date
//!
//! The domain types and the tick handler are pure; the clock and the
//! notification surface are ports (traits) injected explicitly, so the
//! handler never reaches into ambient host context. Adapters wire the
//! ports to the actual desktop notification backend.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod handler;
pub mod ports;
pub mod ticker;

// Re-exports for ergonomics
pub use domain::*;
pub use handler::{TickHandler, TickOutcome};
