// ⚙️ Configuration - Environment-driven settings for the tracker binary

use std::env;

/// Distinguishes runtime behavior for different stages of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    /// Seed an empty store with the sample companies on startup
    pub seed_sample_data: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(
            &env::var("TRACKER_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("TRACKER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_sample_data = match env::var("TRACKER_SEED_SAMPLE_DATA") {
            Ok(value) => parse_flag(&value).ok_or(ConfigError::InvalidFlag {
                name: "TRACKER_SEED_SAMPLE_DATA",
                value,
            })?,
            Err(_) => true,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            seed_sample_data,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be one of 1/0/true/false/yes/no (got '{value}')")]
    InvalidFlag { name: &'static str, value: String },
}
