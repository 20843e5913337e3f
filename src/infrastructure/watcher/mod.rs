//! File watching infrastructure module

mod notify_watcher;

pub use notify_watcher::{ConfigWatcher, WatchError};
