use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("Failed to set up logging: {0}")]
    Logger(String),
    #[error("Application error: {0}")]
    Iced(#[from] iced::Error),
}
