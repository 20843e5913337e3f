//! Rodio-based sound player adapter
//!
//! Decodes sound files and plays them on a detached thread per sound.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::thread;

use colored::Colorize;
use rodio::{Decoder, OutputStream, Sink};

use crate::application::ports::{SoundError, SoundPlayer};

/// Sound player implementation using rodio
pub struct RodioSoundPlayer;

impl RodioSoundPlayer {
    /// Create a new rodio-based sound player
    pub fn new() -> Self {
        Self
    }
}

impl Default for RodioSoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, path: &Path) -> Result<(), SoundError> {
        if !path.is_file() {
            return Err(SoundError::FileMissing(path.to_path_buf()));
        }

        // Open and decode on the playback thread; only a missing file is
        // reported to the caller
        let path = path.to_path_buf();
        thread::Builder::new()
            .name("sound-playback".to_string())
            .spawn(move || {
                if let Err(e) = play_file_sync(&path) {
                    eprintln!("{} {} ({})", "⚠".yellow(), e, path.display());
                }
            })
            .map_err(|e| SoundError::PlaybackFailed(format!("Thread spawn error: {}", e)))?;

        Ok(())
    }
}

/// Decode and play a file to completion (called on the playback thread)
fn play_file_sync(path: &Path) -> Result<(), SoundError> {
    let file = File::open(path).map_err(|e| SoundError::PlaybackFailed(e.to_string()))?;
    let source =
        Decoder::new(BufReader::new(file)).map_err(|e| SoundError::PlaybackFailed(e.to_string()))?;

    // The stream must outlive the sink, so it is opened here rather than shared
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| SoundError::PlaybackFailed(e.to_string()))?;

    sink.append(source);

    // Wait for playback to complete
    sink.sleep_until_end();

    Ok(())
}
