//! Configuration module
//!
//! Configuration is read from the environment (a `.env` file is honoured when
//! present) and passed explicitly to the storage, detector and HTTP layers.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// Common constants
const SERVER_HOST: &str = "0.0.0.0";
const SERVER_PORT: u16 = 8000;
const UPLOAD_DIR: &str = "temp";
const MAX_UPLOAD_SIZE_MB: usize = 500;
const DETECTOR: &str = "stub";

/// Console log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!(
                "Invalid LOG_FORMAT '{}'. Must be 'compact' or 'json'",
                other
            )),
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    server_host: String,
    server_port: u16,
    upload_dir: PathBuf,
    max_upload_size_bytes: usize,
    cors_origins: Vec<String>,
    detector: String,
    environment: String,
    log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. `from_env` uses the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid SERVER_PORT '{}': {}", raw, e))?,
            None => SERVER_PORT,
        };

        let max_upload_size_mb = match lookup("MAX_UPLOAD_SIZE_MB") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| anyhow::anyhow!("Invalid MAX_UPLOAD_SIZE_MB '{}': {}", raw, e))?,
            None => MAX_UPLOAD_SIZE_MB,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let log_format = lookup("LOG_FORMAT")
            .map(|raw| raw.parse::<LogFormat>())
            .transpose()?
            .unwrap_or(LogFormat::Compact);

        let config = Config {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| SERVER_HOST.to_string()),
            server_port,
            upload_dir: PathBuf::from(
                lookup("UPLOAD_DIR").unwrap_or_else(|| UPLOAD_DIR.to_string()),
            ),
            max_upload_size_bytes: max_upload_size_mb.saturating_mul(1024 * 1024),
            cors_origins,
            detector: lookup("DETECTOR")
                .map(|s| s.trim().to_lowercase())
                .unwrap_or_else(|| DETECTOR.to_string()),
            environment,
            log_format,
        };

        config.validate()?;
        Ok(config)
    }

    /// Default configuration rooted at the given upload directory.
    pub fn for_upload_dir(upload_dir: impl Into<PathBuf>) -> Self {
        Config {
            server_host: SERVER_HOST.to_string(),
            server_port: SERVER_PORT,
            upload_dir: upload_dir.into(),
            max_upload_size_bytes: MAX_UPLOAD_SIZE_MB * 1024 * 1024,
            cors_origins: vec!["*".to_string()],
            detector: DETECTOR.to_string(),
            environment: "development".to_string(),
            log_format: LogFormat::Compact,
        }
    }

    /// Override the request body limit (in bytes).
    pub fn with_max_upload_size_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_size_bytes = bytes;
        self
    }

    /// Override the detector name.
    pub fn with_detector(mut self, detector: impl Into<String>) -> Self {
        self.detector = detector.into();
        self
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("SERVER_PORT must be greater than 0"));
        }
        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }
        if self.upload_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR must not be empty"));
        }
        if self.detector.is_empty() {
            return Err(anyhow::anyhow!("DETECTOR must not be empty"));
        }
        if self.is_production() && self.allows_any_origin() {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.max_upload_size_bytes
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn detector(&self) -> &str {
        &self.detector
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}
