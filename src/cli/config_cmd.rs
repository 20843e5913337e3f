//! Config command handler
//!
//! Every change rewrites the full settings file at once, first filling in
//! any known flag the file is missing with its default.

use crate::application::ports::ConfigStore;
use crate::domain::config::{SoundConfig, SoundFlag, ALL_FLAGS};
use crate::domain::error::ConfigError;

use super::args::ConfigAction;
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { flag, value } => {
            let enabled = parse_bool(&value).map_err(|_| ConfigError::ValidationError {
                key: flag.clone(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?;
            update_flag(store, presenter, &flag, |_| enabled).await
        }
        ConfigAction::Get { flag } => handle_get(store, presenter, &flag).await,
        ConfigAction::Enable { flag } => update_flag(store, presenter, &flag, |_| true).await,
        ConfigAction::Disable { flag } => update_flag(store, presenter, &flag, |_| false).await,
        ConfigAction::Toggle { flag } => update_flag(store, presenter, &flag, |v| !v).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

/// Load, apply `change` to the flag's current value, save the whole file
async fn update_flag<S, F>(
    store: &S,
    presenter: &Presenter,
    flag: &str,
    change: F,
) -> Result<(), ConfigError>
where
    S: ConfigStore,
    F: FnOnce(bool) -> bool,
{
    let flag = parse_flag(flag)?;

    let mut config = store.load().await?.fill_defaults();
    let enabled = change(config.is_enabled(flag));
    config.set(flag, enabled);

    store.save(&config).await?;
    let state = if enabled { "enabled" } else { "disabled" };
    presenter.success(&format!("{} {} ({} = {})", flag.label(), state, flag, enabled));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    flag: &str,
) -> Result<(), ConfigError> {
    let flag = parse_flag(flag)?;
    let config = store.load().await?;
    presenter.output(&describe(&config, flag));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for flag in ALL_FLAGS {
        presenter.key_value(flag.as_str(), &describe(&config, *flag));
    }
    for (key, value) in config.unknown_keys() {
        presenter.key_value(key, &format!("{} (unknown flag, ignored)", value));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Effective value of a flag, noting when it is only implied
fn describe(config: &SoundConfig, flag: SoundFlag) -> String {
    match config.get(flag) {
        Some(v) => v.to_string(),
        None => "false (not set)".to_string(),
    }
}

/// Validate a flag name
fn parse_flag(flag: &str) -> Result<SoundFlag, ConfigError> {
    flag.parse::<SoundFlag>()
        .map_err(|e| ConfigError::ValidationError {
            key: flag.to_string(),
            message: e.to_string(),
        })
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(()),
    }
}
