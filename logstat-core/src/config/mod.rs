//! Analyzer configuration.
//!
//! Resolved in layers, later ones winning: built-in defaults, an optional TOML
//! file, then environment variables.

mod error;


pub use error::ConfigError;

use crate::analysis::DEFAULT_PAGE_SIZE;
use crate::logging::LogFormat;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";
pub const ENV_PAGE_SIZE: &str = "LOGSTAT_PAGE_SIZE";
pub const ENV_LOG_FORMAT: &str = "LOGSTAT_LOG_FORMAT";

pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Deployment tag stamped on every response envelope.
    pub environment: String,
    pub page_size: usize,
    pub log_format: LogFormat,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_format: LogFormat::Json,
        }
    }
}

/// On-disk shape. Every key is optional; `page_size` stays signed so a
/// negative value reports as an invalid page size rather than a TOML error.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    environment: Option<String>,
    page_size: Option<i64>,
    log_format: Option<String>,
}

impl AnalyzerConfig {
    /// Loads the config from an optional file and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Same as [`AnalyzerConfig::load`] with an explicit environment lookup.
    pub fn load_with(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(path) = path {
            let file = read_file(path)?;
            let origin = path.display().to_string();

            if let Some(environment) = file.environment {
                cfg.environment = environment;
            }
            if let Some(page_size) = file.page_size {
                cfg.page_size = positive_page_size(page_size, &page_size.to_string(), &origin)?;
            }
            if let Some(format) = file.log_format {
                cfg.log_format = parse_log_format(&format, &origin)?;
            }
        }

        if let Some(environment) = env(ENV_ENVIRONMENT).filter(|v| !v.is_empty()) {
            cfg.environment = environment;
        }
        if let Some(raw) = env(ENV_PAGE_SIZE) {
            let parsed = raw.trim().parse::<i64>().map_err(|_| ConfigError::InvalidPageSize {
                value: raw.clone(),
                origin: ENV_PAGE_SIZE.to_string(),
            })?;
            cfg.page_size = positive_page_size(parsed, &raw, ENV_PAGE_SIZE)?;
        }
        if let Some(raw) = env(ENV_LOG_FORMAT) {
            cfg.log_format = parse_log_format(&raw, ENV_LOG_FORMAT)?;
        }

        tracing::debug!(
            environment = %cfg.environment,
            page_size = cfg.page_size,
            "configuration resolved"
        );

        Ok(cfg)
    }
}

fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))
}

fn positive_page_size(value: i64, raw: &str, origin: &str) -> Result<usize, ConfigError> {
    usize::try_from(value)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ConfigError::InvalidPageSize {
            value: raw.to_string(),
            origin: origin.to_string(),
        })
}

fn parse_log_format(raw: &str, origin: &str) -> Result<LogFormat, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidLogFormat {
        value: raw.to_string(),
        origin: origin.to_string(),
    })
}
