//! Global key state using `rdev::listen`
//!
//! `rdev::listen` is a blocking call that must live on its own OS thread.
//! The thread keeps the set of held keys up to date; `snapshot` copies it.
//! rdev has no way to stop the listener, so the thread stays blocked until
//! the process exits.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;

use rdev::EventType;

use crate::application::ports::{KeyboardError, KeyboardState};
use crate::domain::keyboard::{KeyCode, KeySnapshot};

use super::key_map::{map_key, Side};

/// Held keys, tracked per physical key so that releasing one of two held
/// Ctrl keys leaves Ctrl held.
#[derive(Debug, Default)]
pub struct KeyTracker {
    held: HashSet<(KeyCode, Side)>,
}

impl KeyTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one rdev event. Non-keyboard events are ignored.
    pub fn apply(&mut self, event: &EventType) {
        match event {
            EventType::KeyPress(key) => {
                if let Some(mapped) = map_key(*key) {
                    self.held.insert(mapped);
                }
            }
            EventType::KeyRelease(key) => {
                if let Some(mapped) = map_key(*key) {
                    self.held.remove(&mapped);
                }
            }
            _ => {}
        }
    }

    /// Current held keys
    pub fn snapshot(&self) -> KeySnapshot {
        self.held.iter().map(|(code, _)| *code).collect()
    }
}

/// Keyboard state backed by a global rdev listener thread
pub struct RdevKeyboard {
    tracker: Arc<Mutex<KeyTracker>>,
    failure: Arc<Mutex<Option<String>>>,
    _thread: thread::JoinHandle<()>,
}

impl RdevKeyboard {
    /// Spawn the listener thread.
    ///
    /// Listener failures that happen after this returns (missing display,
    /// missing permissions) surface on the next `snapshot`.
    pub fn start() -> Result<Self, KeyboardError> {
        let tracker = Arc::new(Mutex::new(KeyTracker::new()));
        let failure = Arc::new(Mutex::new(None));

        let thread_tracker = Arc::clone(&tracker);
        let thread_failure = Arc::clone(&failure);

        let thread = thread::Builder::new()
            .name("key-listener".to_string())
            .spawn(move || {
                let result = rdev::listen(move |event| {
                    thread_tracker
                        .lock()
                        .unwrap_or_else(|e| e.into_inner())
                        .apply(&event.event_type);
                });

                let reason = match result {
                    Ok(()) => "listener exited".to_string(),
                    Err(e) => format!("{:?}", e),
                };
                *thread_failure.lock().unwrap_or_else(|e| e.into_inner()) = Some(reason);
            })
            .map_err(|e| KeyboardError::ListenerStart(e.to_string()))?;

        Ok(Self {
            tracker,
            failure,
            _thread: thread,
        })
    }
}

impl KeyboardState for RdevKeyboard {
    fn snapshot(&self) -> Result<KeySnapshot, KeyboardError> {
        if let Some(reason) = self
            .failure
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            return Err(KeyboardError::ListenerStopped(reason.clone()));
        }

        Ok(self
            .tracker
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .snapshot())
    }
}
