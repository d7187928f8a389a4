// ABOUTME: Environment configuration for the GymPro application layer
// ABOUTME: Reads data directory, history length and deployment mode from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

//! Environment-based configuration

use crate::constants::{defaults, env_config};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local use, the default
    #[default]
    Development,
    /// Long-lived installation
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the session file and user documents
    pub data_dir: PathBuf,
    /// Months shown by the consistency history
    pub history_months: usize,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            history_months: defaults::HISTORY_MONTHS,
            environment: Environment::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `GYMPRO_HISTORY_MONTHS` is not a number or the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let data_dir = env::var_os(env_config::DATA_DIR)
            .filter(|value| !value.is_empty())
            .map_or_else(default_data_dir, PathBuf::from);

        let history_months = match env::var(env_config::HISTORY_MONTHS) {
            Ok(value) => value
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} value '{value}'", env_config::HISTORY_MONTHS))?,
            Err(_) => defaults::HISTORY_MONTHS,
        };

        let environment = env::var(env_config::ENVIRONMENT)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let config = Self {
            data_dir,
            history_months,
            environment,
        };
        config.validate()?;

        info!(
            data_dir = %config.data_dir.display(),
            history_months = config.history_months,
            environment = %config.environment,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Replace the data directory (command-line override)
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the history length is zero or above the accepted
    /// maximum, or the data directory is empty
    pub fn validate(&self) -> Result<()> {
        if self.history_months == 0 || self.history_months > defaults::MAX_HISTORY_MONTHS {
            return Err(anyhow::anyhow!(
                "{} must be between 1 and {}, got {}",
                env_config::HISTORY_MONTHS,
                defaults::MAX_HISTORY_MONTHS,
                self.history_months
            ));
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("{} must not be empty", env_config::DATA_DIR));
        }
        Ok(())
    }

    /// Data directory
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Human-readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "GymPro Configuration:\n\
             - Data directory: {}\n\
             - History months: {}\n\
             - Environment: {}",
            self.data_dir.display(),
            self.history_months,
            self.environment
        )
    }
}

/// Platform data directory joined with the application directory name
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(defaults::FALLBACK_DATA_DIR),
        |dir| dir.join(defaults::APP_DIR_NAME),
    )
}
