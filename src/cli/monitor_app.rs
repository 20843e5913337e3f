//! Monitor app runner

use std::process::ExitCode;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::application::ports::{ConfigStore, KeyboardError, KeyboardState, SoundPlayer};
use crate::application::ShortcutMonitor;
use crate::domain::shortcut::ShortcutBinding;
use crate::infrastructure::{create_sound_player, ConfigWatcher, RdevKeyboard};

use super::app::{config_store, EXIT_ERROR, EXIT_SUCCESS};
use super::args::MonitorOptions;
use super::pid_file::{PidFile, PidFileError};
use super::presenter::Presenter;
use super::signals::{MonitorSignal, MonitorSignalHandler};

/// Run monitor mode until SIGINT/SIGTERM or a keyboard failure
pub async fn run_monitor(options: MonitorOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Load settings first; a broken file at startup is fatal
    let store = config_store(options.config_path.clone());
    let config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Acquire PID file; dropping it on any later return removes it
    let mut pid_file = PidFile::with_path(&options.pid_file);
    if let Err(e) = pid_file.acquire() {
        match e {
            PidFileError::AlreadyRunning(pid) => {
                presenter.error(&format!("Another monitor is already running (PID: {})", pid));
            }
            _ => {
                presenter.error(&e.to_string());
            }
        }
        return ExitCode::from(EXIT_ERROR);
    }

    if !store.exists() {
        presenter.warn(&format!(
            "No settings file at {}, every sound is disabled. Run `echocode config init`",
            store.path().display()
        ));
    }

    let keyboard = match RdevKeyboard::start() {
        Ok(k) => k,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let bindings = ShortcutBinding::defaults(&options.sounds_dir);
    let player = create_sound_player(options.mute);
    let mut monitor = ShortcutMonitor::new(bindings, config, player);

    // Setup signal handler (returns handler + sender for the watcher)
    let (mut signals, signal_tx) = match MonitorSignalHandler::new().await {
        Ok(s) => s,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Without a watcher, SIGHUP still reloads
    let watcher = match ConfigWatcher::start(&store.path(), move || {
        let _ = signal_tx.try_send(MonitorSignal::Reload);
    }) {
        Ok(w) => Some(w),
        Err(e) => {
            presenter.warn(&format!("{}; reload with SIGHUP instead", e));
            None
        }
    };

    presenter.monitor_status(&format!(
        "Started | PID: {} | Sounds: {} | Settings: {}",
        std::process::id(),
        options.sounds_dir.display(),
        store.path().display()
    ));
    if options.mute {
        presenter.info("Muted, shortcuts are detected but nothing is played");
    }
    presenter.start_spinner("Listening for shortcuts...");

    let result = monitor_loop(
        &mut monitor,
        &keyboard,
        &store,
        &mut signals,
        &presenter,
        options.interval,
    )
    .await;

    presenter.stop_spinner();
    if let Some(w) = watcher {
        w.stop();
    }
    let _ = pid_file.release();

    match result {
        Ok(()) => {
            presenter.monitor_status("Stopped");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Poll the keyboard every `period` until shutdown.
///
/// Reload messages replace the configuration between ticks. A keyboard
/// error ends the loop.
pub async fn monitor_loop<P, K, S>(
    monitor: &mut ShortcutMonitor<P>,
    keyboard: &K,
    store: &S,
    signals: &mut MonitorSignalHandler,
    presenter: &Presenter,
    period: Duration,
) -> Result<(), KeyboardError>
where
    P: SoundPlayer,
    K: KeyboardState,
    S: ConfigStore,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            signal = signals.recv() => match signal {
                Some(MonitorSignal::Reload) => reload_config(monitor, store, presenter).await,
                Some(MonitorSignal::Shutdown) | None => return Ok(()),
            },
            _ = ticker.tick() => {
                let snapshot = keyboard.snapshot()?;
                for event in monitor.poll(&snapshot) {
                    presenter.monitor_event(&event);
                }
            }
        }
    }
}

/// Replace the monitor's configuration with the stored one. On error the
/// previous configuration stays active.
pub async fn reload_config<P, S>(
    monitor: &mut ShortcutMonitor<P>,
    store: &S,
    presenter: &Presenter,
) where
    P: SoundPlayer,
    S: ConfigStore,
{
    match store.load().await {
        Ok(config) => {
            if &config != monitor.config() {
                presenter.info("Settings reloaded");
            }
            monitor.reload(config);
        }
        Err(e) => {
            presenter.warn(&format!("{}; keeping previous settings", e));
        }
    }
}
