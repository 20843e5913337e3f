//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! and the one-shot and monitor runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod monitor_app;
pub mod pid_file;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{run_oneshot, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, Commands, ConfigAction, MonitorOptions};
pub use monitor_app::run_monitor;
pub use presenter::Presenter;
