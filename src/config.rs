//! Configuration parsed once at startup from CLI arguments or environment.

use std::time::Duration;

use clap::Parser;
use landing_strapi::StrapiConfig;
use landing_telemetry::TelemetryConfig;
use secrecy::SecretString;

/// Service name reported in logs and traces.
pub const SERVICE_NAME: &str = "sales-landing";

/// Build version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sales landing page service configuration.
///
/// All values can be set via environment variables or CLI arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "sales-landing", about = "Sales representative landing pages")]
pub struct Config {
    /// HTTP listen address
    #[arg(long, env = "HTTP_ADDRESS", default_value = "0.0.0.0:3000")]
    pub http_address: String,

    /// Strapi base URL (e.g., https://cms.example.com)
    #[arg(long, env = "STRAPI_URL", default_value = "http://localhost:1337")]
    pub strapi_url: String,

    /// Strapi API token, sent as a bearer credential
    #[arg(long, env = "STRAPI_API_KEY")]
    pub strapi_api_key: Option<SecretString>,

    /// Strapi request timeout in seconds
    #[arg(long, env = "STRAPI_TIMEOUT_SECS", default_value = "10")]
    pub strapi_timeout_secs: u64,

    /// Brand name shown on pages
    #[arg(long, env = "SITE_NAME", default_value = "Karunia Motor")]
    pub site_name: String,

    /// Profile UIDs linked from the home page (comma-separated)
    #[arg(long, env = "SAMPLE_PROFILES")]
    pub sample_profiles: Option<String>,

    /// CORS allowed origins (comma-separated, or "*" for any)
    #[arg(long, env = "CORS_ALLOW_ORIGINS")]
    pub cors_allow_origins: Option<String>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long, env = "LOG_LEVEL", default_value = "INFO")]
    pub log_level: String,

    /// Use JSON log format
    #[arg(long, env = "JSON_LOGS", default_value = "true", action = clap::ArgAction::Set)]
    pub json_logs: bool,

    /// OpenTelemetry OTLP endpoint
    #[arg(long, env = "OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Sentry DSN for error tracking
    #[arg(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Environment name (e.g., "production", "development")
    #[arg(long, env = "ENVIRONMENT")]
    pub environment: Option<String>,
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("STRAPI_URL must start with http:// or https://, got {0:?}")]
    InvalidStrapiUrl(String),
    #[error("Strapi timeout must be > 0")]
    InvalidStrapiTimeout,
    #[error("Site name must not be empty")]
    EmptySiteName,
}

impl Config {
    /// Parse and validate configuration.
    pub fn init() -> anyhow::Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        let url = self.strapi_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidStrapiUrl(self.strapi_url.clone()));
        }
        if self.strapi_timeout_secs == 0 {
            return Err(ConfigError::InvalidStrapiTimeout);
        }
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::EmptySiteName);
        }
        Ok(())
    }

    /// Strapi request timeout as Duration.
    #[inline]
    pub const fn strapi_timeout(&self) -> Duration {
        Duration::from_secs(self.strapi_timeout_secs)
    }

    /// Strapi base URL without trailing slash.
    pub fn strapi_base_url(&self) -> &str {
        self.strapi_url.trim().trim_end_matches('/')
    }

    /// Content API client settings.
    pub fn strapi_config(&self) -> StrapiConfig {
        StrapiConfig::new(self.strapi_base_url())
            .with_api_key(self.strapi_api_key.clone())
            .with_timeout(self.strapi_timeout())
    }

    /// Sample profile UIDs, trimmed, empty entries removed.
    pub fn sample_profile_uids(&self) -> Vec<String> {
        self.sample_profiles
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|uid| !uid.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Logging and tracing settings.
    pub fn telemetry_config(&self) -> TelemetryConfig {
        TelemetryConfig {
            service_name: SERVICE_NAME,
            log_level: self.log_level.clone(),
            json_logs: self.json_logs,
            otlp_endpoint: self.otlp_endpoint.clone(),
            sentry_dsn: self.sentry_dsn.clone(),
            environment: self.environment.clone(),
            version: Some(VERSION.to_string()),
        }
    }
}
