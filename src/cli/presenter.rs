//! CLI presenter for output formatting

use std::path::Path;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::application::MonitorEvent;

/// Presenter for CLI output formatting.
///
/// While the listening spinner runs, status lines are printed above it.
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print a line to stderr, above the spinner if one is running
    fn status_line(&self, line: String) {
        match self.spinner {
            Some(ref spinner) => spinner.suspend(|| eprintln!("{}", line)),
            None => eprintln!("{}", line),
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        self.status_line(format!("{} {}", "ℹ".cyan(), message));
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        self.status_line(format!("{} {}", "✓".green(), message));
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        self.status_line(format!("{} {}", "⚠".yellow(), message));
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        self.status_line(format!("{} {}", "✗".red(), message));
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print one monitor event
    pub fn monitor_event(&self, event: &MonitorEvent) {
        let line = format_event(event);
        match event {
            MonitorEvent::Played { .. } => self.success(&line),
            MonitorEvent::Muted { .. } | MonitorEvent::Suppressed { .. } => self.info(&line),
            MonitorEvent::SoundMissing { .. } | MonitorEvent::PlaybackFailed { .. } => {
                self.warn(&line)
            }
        }
    }

    /// Print monitor status
    pub fn monitor_status(&self, state: &str) {
        self.status_line(format!("{} Monitor: {}", "●".cyan(), state));
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Describe a monitor event in one line (without the status symbol)
pub fn format_event(event: &MonitorEvent) -> String {
    match event {
        MonitorEvent::Played { combo, sound } => format!(
            "Shortcut {} -> {}",
            combo.to_string().to_uppercase(),
            file_label(sound)
        ),
        MonitorEvent::Muted { combo, sound } => format!(
            "Shortcut {} -> {} (muted)",
            combo.to_string().to_uppercase(),
            file_label(sound)
        ),
        MonitorEvent::Suppressed { combo, flag } => format!(
            "Shortcut {} skipped ({} is disabled)",
            combo.to_string().to_uppercase(),
            flag
        ),
        MonitorEvent::SoundMissing { combo, sound } => format!(
            "Shortcut {}: sound file {} not found",
            combo.to_string().to_uppercase(),
            sound.display()
        ),
        MonitorEvent::PlaybackFailed { combo, error } => format!(
            "Shortcut {}: {}",
            combo.to_string().to_uppercase(),
            error
        ),
    }
}

/// File name of a sound, or the whole path if it has none
fn file_label(sound: &Path) -> String {
    sound
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| sound.display().to_string())
}
