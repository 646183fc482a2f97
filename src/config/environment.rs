// ABOUTME: Environment configuration for the history store and chart defaults
// ABOUTME: Parses DATABASE_URL, the store read timeout, and the fallback body weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable                    | Default                                  |
//! |-----------------------------|------------------------------------------|
//! | `DATABASE_URL`              | `sqlite:<data dir>/vitals/history.db`    |
//! | `VITALS_STORE_TIMEOUT_MS`   | unset (no timeout)                       |
//! | `VITALS_FALLBACK_WEIGHT_KG` | `70.0`                                   |

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use vitals_core::constants::charts::DEFAULT_FALLBACK_WEIGHT_KG;
use vitals_core::errors::{AppError, AppResult};

/// Store URL variable
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
/// Store read timeout variable, in milliseconds
pub const STORE_TIMEOUT_ENV: &str = "VITALS_STORE_TIMEOUT_MS";
/// Fallback body weight variable, in kilograms
pub const FALLBACK_WEIGHT_ENV: &str = "VITALS_FALLBACK_WEIGHT_KG";

/// Location of the metric history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// SQLite database file
    SQLite {
        /// Database file path
        path: PathBuf,
    },
    /// In-memory SQLite database
    SQLiteMemory,
    /// Process-local map, lost on exit
    Memory,
}

impl DatabaseUrl {
    /// Parse a store URL
    ///
    /// Bare paths are treated as SQLite files.
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        if s == "memory" || s.starts_with("memory://") {
            return Self::Memory;
        }
        s.strip_prefix("sqlite:").map_or_else(
            || Self::SQLite {
                path: PathBuf::from(s),
            },
            |rest| {
                if rest == ":memory:" {
                    Self::SQLiteMemory
                } else {
                    Self::SQLite {
                        path: PathBuf::from(rest.trim_start_matches("//")),
                    }
                }
            },
        )
    }

    /// URL understood by [`crate::store::HistoryDatabase::new`]
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::SQLiteMemory => "sqlite::memory:".to_owned(),
            Self::Memory => "memory://".to_owned(),
        }
    }

    /// Database file path, if the store lives on disk
    #[must_use]
    pub const fn file_path(&self) -> Option<&PathBuf> {
        match self {
            Self::SQLite { path } => Some(path),
            Self::SQLiteMemory | Self::Memory => None,
        }
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("./data"));
        Self::SQLite {
            path: base.join("vitals").join("history.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Runtime configuration for the chart engine and CLI
#[derive(Debug, Clone, PartialEq)]
pub struct ChartsConfig {
    /// Where metric history is stored
    pub database_url: DatabaseUrl,
    /// Upper bound on a single store read
    pub store_timeout: Option<Duration>,
    /// Weight assumed for BMR before any weigh-in exists
    pub fallback_weight_kg: f64,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            database_url: DatabaseUrl::default(),
            store_timeout: None,
            fallback_weight_kg: DEFAULT_FALLBACK_WEIGHT_KG,
        }
    }
}

impl ChartsConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        let database_url = env::var(DATABASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(DatabaseUrl::default, |value| {
                DatabaseUrl::parse_url(value.trim())
            });

        let store_timeout = env::var(STORE_TIMEOUT_ENV)
            .ok()
            .map(|raw| parse_timeout_ms(&raw))
            .transpose()?;

        let fallback_weight_kg = env_var_or(
            FALLBACK_WEIGHT_ENV,
            &DEFAULT_FALLBACK_WEIGHT_KG.to_string(),
        );
        let fallback_weight_kg = parse_fallback_weight(&fallback_weight_kg)?;

        let config = Self {
            database_url,
            store_timeout,
            fallback_weight_kg,
        };
        debug!("Loaded configuration: {}", config.summary());
        Ok(config)
    }

    /// One-line description for logs
    #[must_use]
    pub fn summary(&self) -> String {
        let timeout = self
            .store_timeout
            .map_or_else(|| "none".to_owned(), |t| format!("{}ms", t.as_millis()));
        format!(
            "store={}, read_timeout={timeout}, fallback_weight_kg={}",
            self.database_url, self.fallback_weight_kg
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a positive millisecond count
///
/// # Errors
///
/// Returns `ConfigInvalid` for non-numeric or zero values
pub fn parse_timeout_ms(raw: &str) -> AppResult<Duration> {
    let millis: u64 = raw.trim().parse().map_err(|e| {
        AppError::config(format!("{STORE_TIMEOUT_ENV} must be a whole number of milliseconds, got '{raw}'"))
            .with_source(e)
    })?;
    if millis == 0 {
        return Err(AppError::config(format!(
            "{STORE_TIMEOUT_ENV} must be greater than zero"
        )));
    }
    Ok(Duration::from_millis(millis))
}

/// Parse a positive, finite weight in kilograms
///
/// # Errors
///
/// Returns `ConfigInvalid` for non-numeric, non-finite or non-positive values
pub fn parse_fallback_weight(raw: &str) -> AppResult<f64> {
    let weight: f64 = raw.trim().parse().map_err(|e| {
        AppError::config(format!("{FALLBACK_WEIGHT_ENV} must be a number, got '{raw}'"))
            .with_source(e)
    })?;
    if !weight.is_finite() || weight <= 0.0 {
        return Err(AppError::config(format!(
            "{FALLBACK_WEIGHT_ENV} must be a positive number of kilograms, got {weight}"
        )));
    }
    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_core::errors::ErrorCode;

    #[test]
    fn test_database_url_parsing() {
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./test.db"),
            DatabaseUrl::SQLite {
                path: PathBuf::from("./test.db")
            }
        );
        assert_eq!(
            DatabaseUrl::parse_url("sqlite::memory:"),
            DatabaseUrl::SQLiteMemory
        );
        assert_eq!(DatabaseUrl::parse_url("memory://"), DatabaseUrl::Memory);
        assert_eq!(
            DatabaseUrl::parse_url("./some/path.db").to_connection_string(),
            "sqlite:./some/path.db"
        );
    }

    #[test]
    fn test_default_url_is_a_file() {
        let url = DatabaseUrl::default();
        assert!(url.file_path().is_some());
        assert!(url.to_connection_string().ends_with("history.db"));
    }

    #[test]
    fn test_timeout_parsing() {
        assert_eq!(parse_timeout_ms("250").unwrap(), Duration::from_millis(250));
        assert_eq!(
            parse_timeout_ms("0").unwrap_err().code,
            ErrorCode::ConfigInvalid
        );
        assert_eq!(
            parse_timeout_ms("soon").unwrap_err().code,
            ErrorCode::ConfigInvalid
        );
    }

    #[test]
    fn test_fallback_weight_parsing() {
        assert!((parse_fallback_weight(" 82.5 ").unwrap() - 82.5).abs() < f64::EPSILON);
        assert!(parse_fallback_weight("-1").is_err());
        assert!(parse_fallback_weight("NaN").is_err());
        assert!(parse_fallback_weight("heavy").is_err());
    }
}
