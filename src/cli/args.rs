//! CLI argument definitions using Clap

use std::path::PathBuf;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use crate::domain::shortcut::DEFAULT_SOUNDS_DIR;

use super::pid_file::DEFAULT_PID_PATH;

/// Default poll interval in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 50;

/// EchoCode - sound cues for editing shortcuts
#[derive(Parser, Debug)]
#[command(name = "echocode")]
#[command(version)]
#[command(about = "Plays a sound when you press copy, paste, undo, redo or save")]
#[command(long_about = None)]
pub struct Cli {
    /// One-shot command instead of monitoring (supported: success, error)
    #[arg(value_name = "COMMAND")]
    pub oneshot: Option<String>,

    /// Settings file (default: <config dir>/echocode/settings.json)
    #[arg(long, value_name = "PATH", env = "ECHOCODE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding copy.mp3, paste.mp3, undo.mp3, redo.mp3, save.mp3, success.mp3 and error.mp3
    #[arg(
        long,
        value_name = "DIR",
        env = "ECHOCODE_SOUNDS_DIR",
        default_value = DEFAULT_SOUNDS_DIR
    )]
    pub sounds_dir: PathBuf,

    /// Keyboard poll interval in milliseconds
    #[arg(
        long,
        value_name = "MS",
        default_value_t = DEFAULT_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..=1000)
    )]
    pub interval_ms: u64,

    /// Detect shortcuts but play nothing
    #[arg(long)]
    pub mute: bool,

    /// PID file guarding against a second monitor
    #[arg(
        long,
        value_name = "PATH",
        env = "ECHOCODE_PID_FILE",
        default_value = DEFAULT_PID_PATH
    )]
    pub pid_file: PathBuf,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check combinations clap cannot express: a one-shot word and a
    /// subcommand are mutually exclusive
    pub fn validate(&self) -> Result<(), clap::Error> {
        if let (Some(word), Some(_)) = (&self.oneshot, &self.command) {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                format!(
                    "the one-shot command '{}' cannot be used with a subcommand",
                    word
                ),
            ));
        }
        Ok(())
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage which sounds are enabled
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create settings file with every sound enabled
    Init,
    /// Set a flag to true or false
    Set {
        /// Flag name (e.g. sound_copy or copy)
        flag: String,
        /// true/false, yes/no, on/off, 1/0
        value: String,
    },
    /// Get a flag value
    Get {
        /// Flag name
        flag: String,
    },
    /// Enable a sound
    Enable {
        /// Flag name
        flag: String,
    },
    /// Disable a sound
    Disable {
        /// Flag name
        flag: String,
    },
    /// Flip a sound on or off
    Toggle {
        /// Flag name
        flag: String,
    },
    /// List all flags
    List,
    /// Show settings file path
    Path,
}

/// Parsed monitor options (loop mode)
#[derive(Debug, Clone)]
pub struct MonitorOptions {
    pub config_path: Option<PathBuf>,
    pub sounds_dir: PathBuf,
    pub interval: Duration,
    pub mute: bool,
    pub pid_file: PathBuf,
}

impl From<&Cli> for MonitorOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            config_path: cli.config.clone(),
            sounds_dir: cli.sounds_dir.clone(),
            interval: Duration::from_millis(cli.interval_ms),
            mute: cli.mute,
            pid_file: cli.pid_file.clone(),
        }
    }
}
