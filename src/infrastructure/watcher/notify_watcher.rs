//! Settings file watcher using notify
//!
//! Watches the directory holding the settings file, not the file itself,
//! so that editors which save by writing a new file and renaming it over
//! the old one are still noticed, as is the file being created later.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use notify::{recommended_watcher, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;

/// Errors that can occur when starting the watcher
#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Config path has no file name: {0}")]
    InvalidPath(String),

    #[error("Failed to create config directory: {0}")]
    DirectoryCreate(String),

    #[error("Failed to watch config file: {0}")]
    Watch(String),
}

/// Calls back whenever the settings file changes. Dropping it stops watching.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    /// Start watching `path`.
    ///
    /// `on_change` runs on the watcher's thread; it should only hand off a
    /// message. Watch errors reported by the backend are ignored.
    pub fn start<F>(path: &Path, on_change: F) -> Result<Self, WatchError>
    where
        F: Fn() + Send + 'static,
    {
        let file_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .ok_or_else(|| WatchError::InvalidPath(path.display().to_string()))?;

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| WatchError::DirectoryCreate(e.to_string()))?;

        let mut watcher = recommended_watcher(move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                if is_relevant(&event, &file_name) {
                    on_change();
                }
            }
        })
        .map_err(|e| WatchError::Watch(e.to_string()))?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| WatchError::Watch(e.to_string()))?;

        Ok(Self { _watcher: watcher })
    }

    /// Stop watching
    pub fn stop(self) {
        drop(self);
    }
}

/// Whether an event touches the settings file in a way that can change it
fn is_relevant(event: &Event, file_name: &OsString) -> bool {
    let changes_content = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    );
    changes_content
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name.as_os_str()))
}
