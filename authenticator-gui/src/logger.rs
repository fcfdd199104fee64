use std::{error::Error, str::FromStr};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    prelude::*,
};

/// Targets of the windowing and rendering stack, too chatty to be useful here.
const NOISY_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "cosmic_text",
    "calloop",
    "sctk",
];

pub fn setup_logger(log_level: filter::LevelFilter) -> Result<(), Box<dyn Error>> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| {
                    !NOISY_TARGETS
                        .iter()
                        .any(|target| metadata.target().starts_with(target))
                })),
        )
        .try_init()?;

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}
