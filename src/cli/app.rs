//! Main app runner for one-shot mode

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use crate::application::ports::{SoundError, SoundPlayer};
use crate::domain::error::UnknownCommandError;
use crate::domain::shortcut::OneShotSound;
use crate::infrastructure::{create_sound_player, XdgConfigStore};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// How long a one-shot run stays alive so the sound can finish
pub const ONESHOT_PLAYBACK_WAIT: Duration = Duration::from_secs(2);

/// Result of a one-shot command
#[derive(Debug)]
pub enum OneShotOutcome {
    /// Playback started for this file
    Played(PathBuf),
    /// The player is silent; this file would have played
    Muted(PathBuf),
    /// The command is known but its sound could not be played
    Failed(SoundError),
    /// The command word is not recognized
    Unknown(UnknownCommandError),
}

/// Run a one-shot command word against a player. Unknown words never reach
/// the player.
pub fn execute_oneshot<P: SoundPlayer + ?Sized>(
    command: &str,
    sounds_dir: &Path,
    player: &P,
) -> OneShotOutcome {
    let sound = match command.parse::<OneShotSound>() {
        Ok(sound) => sound.path(sounds_dir),
        Err(e) => return OneShotOutcome::Unknown(e),
    };

    if player.is_silent() {
        return OneShotOutcome::Muted(sound);
    }

    match player.play(&sound) {
        Ok(()) => OneShotOutcome::Played(sound),
        Err(e) => OneShotOutcome::Failed(e),
    }
}

/// Run the one-shot command and exit
pub async fn run_oneshot(command: &str, sounds_dir: &Path, mute: bool) -> ExitCode {
    let presenter = Presenter::new();
    let player = create_sound_player(mute);

    match execute_oneshot(command, sounds_dir, player.as_ref()) {
        OneShotOutcome::Played(sound) => {
            presenter.success(&format!("Playing {}", sound.display()));
            tokio::time::sleep(ONESHOT_PLAYBACK_WAIT).await;
            ExitCode::from(EXIT_SUCCESS)
        }
        OneShotOutcome::Muted(sound) => {
            presenter.info(&format!("Muted, not playing {}", sound.display()));
            ExitCode::from(EXIT_SUCCESS)
        }
        OneShotOutcome::Failed(e) if e.is_missing() => {
            // A missing sound is not an error worth failing a script over
            presenter.warn(&e.to_string());
            ExitCode::from(EXIT_SUCCESS)
        }
        OneShotOutcome::Failed(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
        OneShotOutcome::Unknown(e) => {
            presenter.warn(&e.to_string());
            ExitCode::from(EXIT_SUCCESS)
        }
    }
}

/// Settings store at the given path, or the XDG default
pub fn config_store(path: Option<PathBuf>) -> XdgConfigStore {
    match path {
        Some(p) => XdgConfigStore::with_path(p),
        None => XdgConfigStore::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::application::ports::ConfigStore;

    #[derive(Default)]
    struct RecordingPlayer {
        played: Mutex<Vec<PathBuf>>,
    }

    impl SoundPlayer for RecordingPlayer {
        fn play(&self, path: &Path) -> Result<(), SoundError> {
            self.played.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn success_plays_fixed_file() {
        let player = RecordingPlayer::default();
        let outcome = execute_oneshot("success", Path::new("sounds"), &player);

        assert!(matches!(outcome, OneShotOutcome::Played(ref p) if p == Path::new("sounds/success.mp3")));
        assert_eq!(
            *player.played.lock().unwrap(),
            vec![PathBuf::from("sounds/success.mp3")]
        );
    }

    #[test]
    fn error_plays_error_file() {
        let player = RecordingPlayer::default();
        let outcome = execute_oneshot("error", Path::new("sounds"), &player);

        assert!(matches!(outcome, OneShotOutcome::Played(ref p) if p == Path::new("sounds/error.mp3")));
        assert_eq!(
            *player.played.lock().unwrap(),
            vec![PathBuf::from("sounds/error.mp3")]
        );
    }

    #[test]
    fn unknown_command_plays_nothing() {
        let player = RecordingPlayer::default();
        let outcome = execute_oneshot("fanfare", Path::new("sounds"), &player);

        assert!(matches!(outcome, OneShotOutcome::Unknown(ref e) if e.input == "fanfare"));
        assert!(player.played.lock().unwrap().is_empty());
    }

    #[test]
    fn command_word_is_case_sensitive() {
        let player = RecordingPlayer::default();
        assert!(matches!(
            execute_oneshot("SUCCESS", Path::new("sounds"), &player),
            OneShotOutcome::Unknown(_)
        ));
    }

    #[test]
    fn missing_success_sound_is_failed() {
        let player = crate::infrastructure::RodioSoundPlayer::new();
        let outcome = execute_oneshot("success", Path::new("/nonexistent/sounds"), &player);
        assert!(matches!(outcome, OneShotOutcome::Failed(ref e) if e.is_missing()));
    }

    #[test]
    fn silent_player_reports_muted() {
        let player = crate::infrastructure::NoOpSoundPlayer::new();
        let outcome = execute_oneshot("error", Path::new("sounds"), &player);
        assert!(matches!(outcome, OneShotOutcome::Muted(ref p) if p == Path::new("sounds/error.mp3")));
    }

    #[test]
    fn config_store_uses_given_path() {
        let store = config_store(Some(PathBuf::from("/tmp/echocode-test.json")));
        assert_eq!(store.path(), PathBuf::from("/tmp/echocode-test.json"));
    }
}
