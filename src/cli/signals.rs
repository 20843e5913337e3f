//! Signal handling for monitor mode

use colored::Colorize;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;

/// Messages delivered to the monitor loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorSignal {
    /// Re-read the settings file (SIGHUP or file change)
    Reload,
    /// Stop monitoring (SIGINT/SIGTERM)
    Shutdown,
}

/// Monitor signal handler
///
/// Handles OS signals and provides a channel for receiving messages from
/// other sources (e.g., the settings file watcher).
pub struct MonitorSignalHandler {
    receiver: mpsc::Receiver<MonitorSignal>,
}

impl MonitorSignalHandler {
    /// Create a new handler and start listening for OS signals.
    ///
    /// Returns the handler and a sender that other sources can use to
    /// deliver messages to the monitor loop.
    pub async fn new() -> Result<(Self, mpsc::Sender<MonitorSignal>), std::io::Error> {
        let (handler, tx) = Self::channel();

        // Setup SIGINT handler (shutdown)
        let tx_int = tx.clone();
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::spawn(async move {
            sigint.recv().await;
            eprintln!("{} Received SIGINT (shutdown)", "↓".cyan());
            let _ = tx_int.send(MonitorSignal::Shutdown).await;
        });

        // Setup SIGTERM handler (shutdown)
        let tx_term = tx.clone();
        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::spawn(async move {
            sigterm.recv().await;
            eprintln!("{} Received SIGTERM (shutdown)", "↓".cyan());
            let _ = tx_term.send(MonitorSignal::Shutdown).await;
        });

        // Setup SIGHUP handler (reload), may fire repeatedly
        let tx_hup = tx.clone();
        let mut sighup = signal(SignalKind::hangup())?;
        tokio::spawn(async move {
            while sighup.recv().await.is_some() {
                if tx_hup.send(MonitorSignal::Reload).await.is_err() {
                    break;
                }
            }
        });

        Ok((handler, tx))
    }

    /// Create a handler fed only through the returned sender
    pub fn channel() -> (Self, mpsc::Sender<MonitorSignal>) {
        let (tx, rx) = mpsc::channel(10);
        (Self { receiver: rx }, tx)
    }

    /// Wait for the next signal
    pub async fn recv(&mut self) -> Option<MonitorSignal> {
        self.receiver.recv().await
    }
}
