//! EchoCode CLI entry point

use std::process::ExitCode;

use clap::Parser;

use echocode::cli::{
    app::{config_store, run_oneshot, EXIT_ERROR},
    args::{Cli, Commands, MonitorOptions},
    config_cmd::handle_config_command,
    monitor_app::run_monitor,
    presenter::Presenter,
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = cli.validate() {
        e.exit();
    }
    let presenter = Presenter::new();
    let options = MonitorOptions::from(&cli);

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = config_store(cli.config);
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Route to appropriate handler
    match cli.oneshot.as_deref() {
        Some(command) => run_oneshot(command, &options.sounds_dir, options.mute).await,
        None => run_monitor(options).await,
    }
}
