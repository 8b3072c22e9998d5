//! Configuration for the court booking voice agent

mod settings;

pub use settings::{
    load_settings, BookingConfig, ObservabilityConfig, ServerConfig, Settings, SpeechConfig,
};

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration source error: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
