use std::collections::HashMap;
use std::path::Path;

use authenticator_ui::{localize::Localizer, options::Options, theme::Theme};
use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::filter;

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    #[serde(default)]
    pub theme: ThemeName,
    /// Dial code prepended to phone numbers, "+1" if unset.
    pub dial_code: Option<String>,
    /// Overrides of the user-facing strings, by localization key.
    #[serde(default)]
    pub strings: HashMap<String, String>,
}

#[derive(PartialEq, Eq, Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Config field {0} is invalid: {1}")]
    InvalidField(&'static str, String),
    #[error("Config file not found")]
    NotFound,
    #[error("Error while reading file: {0}")]
    ReadingFile(String),
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| Self::from_slice(&file_content))?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    fn from_slice(content: &[u8]) -> Result<Self, ConfigError> {
        toml::from_slice::<Config>(content)
            .map_err(|e| ConfigError::ReadingFile(format!("Parsing configuration file: {}", e)))
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        match self.log_level.as_deref() {
            None | Some("info") => Ok(filter::LevelFilter::INFO),
            Some("debug") => Ok(filter::LevelFilter::DEBUG),
            Some("trace") => Ok(filter::LevelFilter::TRACE),
            Some(level) => Err(ConfigError::InvalidField(
                "log_level",
                format!("Unknown value '{}'", level),
            )),
        }
    }

    pub fn theme(&self) -> Theme {
        match self.theme {
            ThemeName::Light => Theme::light(),
            ThemeName::Dark => Theme::dark(),
        }
    }

    pub fn options(&self) -> Options {
        let options = Options::default().localizer(
            Localizer::english().with_overrides(
                self.strings
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone())),
            ),
        );
        match &self.dial_code {
            Some(dial_code) => options.dial_code(dial_code.clone()),
            None => options,
        }
    }
}
