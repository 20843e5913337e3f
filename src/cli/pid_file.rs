//! PID file management for monitor mode

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process;

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

/// Default PID file location
pub const DEFAULT_PID_PATH: &str = "/tmp/echocode.pid";

/// PID file guarding against two monitors playing every sound twice.
///
/// Only a file this process wrote is ever removed, and it is removed on drop
/// so every exit path after `acquire` cleans up.
pub struct PidFile {
    path: PathBuf,
    held: bool,
}

impl PidFile {
    /// PID file at `path`, not yet acquired
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            held: false,
        }
    }

    /// Check if another monitor is already running
    pub fn is_running(&self) -> Option<u32> {
        if !self.path.exists() {
            return None;
        }

        // Read existing PID
        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return None,
        };

        let mut contents = String::new();
        if file.read_to_string(&mut contents).is_err() {
            return None;
        }

        let pid: u32 = match contents.trim().parse() {
            Ok(p) => p,
            Err(_) => return None,
        };

        // Our own PID is left over from an earlier run in this process
        if pid == process::id() {
            return None;
        }

        // Null signal: existence check only
        let pid_t = Pid::from_raw(pid as i32);
        match kill(pid_t, None::<Signal>) {
            Ok(_) => Some(pid), // Process exists
            Err(nix::errno::Errno::ESRCH) => {
                // Process doesn't exist - stale PID file
                let _ = fs::remove_file(&self.path);
                None
            }
            Err(nix::errno::Errno::EPERM) => Some(pid), // Exists, owned by someone else
            Err(_) => None, // Other error - assume not running
        }
    }

    /// Acquire the PID file (fails if another monitor is running)
    pub fn acquire(&mut self) -> Result<(), PidFileError> {
        if let Some(pid) = self.is_running() {
            return Err(PidFileError::AlreadyRunning(pid));
        }

        // Write our PID
        let mut file = File::create(&self.path).map_err(|e| {
            PidFileError::WriteFailed(format!("Failed to create PID file: {}", e))
        })?;
        self.held = true;

        let pid = process::id();
        write!(file, "{}", pid).map_err(|e| {
            PidFileError::WriteFailed(format!("Failed to write PID: {}", e))
        })?;

        Ok(())
    }

    /// Release the PID file if this process holds it
    pub fn release(&mut self) -> Result<(), PidFileError> {
        if !self.held {
            return Ok(());
        }
        self.held = false;
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                PidFileError::RemoveFailed(format!("Failed to remove PID file: {}", e))
            })?;
        }
        Ok(())
    }
}

impl Drop for PidFile {
    fn drop(&mut self) {
        // Best-effort cleanup
        let _ = self.release();
    }
}

/// PID file errors
#[derive(Debug, thiserror::Error)]
pub enum PidFileError {
    #[error("Another monitor is already running (PID: {0})")]
    AlreadyRunning(u32),

    #[error("Failed to write PID file: {0}")]
    WriteFailed(String),

    #[error("Failed to remove PID file: {0}")]
    RemoveFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    #[test]
    fn is_running_returns_none_for_nonexistent_file() {
        let pid_file = PidFile::with_path(temp_dir().join("nonexistent.pid"));
        assert!(pid_file.is_running().is_none());
    }

    #[test]
    fn acquire_writes_pid_and_release_removes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("echocode.pid");
        let mut pid_file = PidFile::with_path(&path);

        pid_file.acquire().unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, process::id().to_string());

        pid_file.release().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn garbage_pid_file_is_not_running() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("echocode.pid");
        fs::write(&path, "not a pid").unwrap();
        assert!(PidFile::with_path(&path).is_running().is_none());
    }

    #[test]
    fn live_foreign_process_blocks_acquire() {
        // PID 1 always exists
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("echocode.pid");
        fs::write(&path, "1").unwrap();

        let mut pid_file = PidFile::with_path(&path);
        assert!(matches!(
            pid_file.acquire(),
            Err(PidFileError::AlreadyRunning(1))
        ));

        // Giving up must not delete the other monitor's file
        drop(pid_file);
        assert_eq!(fs::read_to_string(&path).unwrap(), "1");
    }

    #[test]
    fn drop_removes_acquired_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("echocode.pid");

        {
            let mut pid_file = PidFile::with_path(&path);
            pid_file.acquire().unwrap();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn release_without_acquire_leaves_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("echocode.pid");
        fs::write(&path, "12345").unwrap();

        let mut pid_file = PidFile::with_path(&path);
        pid_file.release().unwrap();
        assert!(path.exists());
    }
}
