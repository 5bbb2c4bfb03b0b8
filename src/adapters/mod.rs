pub mod notify;

pub use notify::DesktopSink;
