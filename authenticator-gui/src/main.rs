use std::path::{Path, PathBuf};

use iced::{Size, Task};

mod app;
mod config;
mod error;
mod logger;

use app::App;
use config::{Config, ConfigError};
use error::Error;

/// Reads the configuration file, a missing one meaning defaults.
fn load_config(path: &Path) -> Result<Config, Error> {
    match Config::from_file(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound) => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}

fn run() -> Result<(), Error> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_FILE_NAME));

    let config = load_config(&path)?;

    let log_level = match logger::parse_log_level().map_err(|e| Error::Logger(e.to_string()))? {
        Some(level) => level,
        None => config.log_level()?,
    };
    logger::setup_logger(log_level).map_err(|e| Error::Logger(e.to_string()))?;
    tracing::info!("Using configuration from {}", path.display());

    let app = App::new(&config);
    iced::application("Create Account", App::update, App::view)
        .theme(App::theme)
        .window_size(Size::new(560.0, 900.0))
        .run_with(move || (app, Task::none()))
        .map_err(|e| {
            tracing::error!("{}", e);
            e
        })?;

    Ok(())
}

fn main() {
    // The logger may not be set up yet, so errors go to stderr.
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
