//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Booking business configuration
    #[serde(default)]
    pub booking: BookingConfig,

    /// Speech bridge configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.booking.opening_hour >= self.booking.closing_hour {
            return Err(ConfigError::InvalidValue {
                field: "booking.opening_hour".to_string(),
                message: "Opening hour must be before closing hour".to_string(),
            });
        }

        if self.booking.closing_hour > 24 {
            return Err(ConfigError::InvalidValue {
                field: "booking.closing_hour".to_string(),
                message: "Closing hour must be within a day".to_string(),
            });
        }

        if self.booking.default_duration_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "booking.default_duration_minutes".to_string(),
                message: "Default duration must be positive".to_string(),
            });
        }

        if self.booking.price_per_hour < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "booking.price_per_hour".to_string(),
                message: "Price per hour cannot be negative".to_string(),
            });
        }

        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_timeout() -> u64 {
    30
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_seconds: default_timeout(),
            cors_enabled: default_true(),
        }
    }
}

/// Booking business configuration.
///
/// A single flat hourly rate covers every court; per-court pricing is a
/// venue concern outside this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Booking length when the utterance names none, in minutes
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,

    /// Flat court rate per hour
    #[serde(default = "default_price_per_hour")]
    pub price_per_hour: f64,

    /// ISO-4217 currency code for booking amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Purpose recorded on voice-created bookings
    #[serde(default = "default_purpose")]
    pub default_purpose: String,

    /// First bookable hour of the day (0-23)
    #[serde(default = "default_opening_hour")]
    pub opening_hour: u32,

    /// Hour the venue closes (bookings must end by then)
    #[serde(default = "default_closing_hour")]
    pub closing_hour: u32,
}

fn default_duration_minutes() -> u32 {
    60
}
fn default_price_per_hour() -> f64 {
    1200.0
}
fn default_currency() -> String {
    "THB".to_string()
}
fn default_purpose() -> String {
    "free_play".to_string()
}
fn default_opening_hour() -> u32 {
    7
}
fn default_closing_hour() -> u32 {
    22
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            default_duration_minutes: default_duration_minutes(),
            price_per_hour: default_price_per_hour(),
            currency: default_currency(),
            default_purpose: default_purpose(),
            opening_hour: default_opening_hour(),
            closing_hour: default_closing_hour(),
        }
    }
}

/// Speech bridge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Audio container format of synthesized replies
    #[serde(default = "default_audio_format")]
    pub audio_format: String,

    /// Default response locale tag when the caller names none
    #[serde(default = "default_language")]
    pub default_language: String,
}

fn default_audio_format() -> String {
    "ogg".to_string()
}
fn default_language() -> String {
    "ru-RU".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            audio_format: default_audio_format(),
            default_language: default_language(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (COURTVOICE_ prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder = builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("COURTVOICE")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}
