// ABOUTME: Application-level constants for the GymPro binaries and services
// ABOUTME: Environment variable names, storage file names, and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

//! Application constants
//!
//! Domain constants (calendar labels, exercise catalog, input limits) live in
//! `gympro_core::constants`; this module holds what only the application
//! layer needs.

pub use gympro_core::constants::{calendar, catalog, limits};

/// Environment variable names read by configuration and logging
pub mod env_config {
    /// Root directory for stored data
    pub const DATA_DIR: &str = "GYMPRO_DATA_DIR";
    /// Number of months shown by the consistency history
    pub const HISTORY_MONTHS: &str = "GYMPRO_HISTORY_MONTHS";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Configuration defaults
pub mod defaults {
    /// Directory created under the platform data directory
    pub const APP_DIR_NAME: &str = "gympro";
    /// Fallback data directory when the platform has none
    pub const FALLBACK_DATA_DIR: &str = "./data";
    /// Months in the rolling consistency history
    pub const HISTORY_MONTHS: usize = 6;
    /// Upper bound accepted for the history length
    pub const MAX_HISTORY_MONTHS: usize = 120;
}

/// File layout inside the data directory
pub mod storage {
    /// Anonymous session document
    pub const SESSION_FILE: &str = "session.json";
    /// Directory holding one document per user
    pub const USERS_DIR: &str = "users";
    /// Extension of user documents
    pub const DOCUMENT_EXTENSION: &str = "json";
    /// Extension used while a document is being replaced
    pub const TEMP_EXTENSION: &str = "json.tmp";
}

/// Service names for structured logging
pub mod service_names {
    /// Command-line front end
    pub const GYMPRO_CLI: &str = "gympro-cli";
}
