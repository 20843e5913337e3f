//! Application layer - Use cases and port interfaces
//!
//! Contains the shortcut monitor and trait definitions
//! for external system interactions.

pub mod monitor;
pub mod ports;

// Re-export use cases
pub use monitor::{MonitorEvent, ShortcutMonitor};
