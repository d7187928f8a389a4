// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro
// ABOUTME: Command modules for gympro-cli and the context they share
// ABOUTME: Stored-data commands receive the services, the session user and today's date

pub mod calc;
pub mod catalog;
pub mod log;
pub mod metrics;
pub mod photo;
pub mod profile;
pub mod records;

use chrono::NaiveDate;
use gympro::services::Services;
use uuid::Uuid;

/// Everything a stored-data command needs
pub struct Context {
    /// Services over the JSON store
    pub services: Services,
    /// Session owner
    pub user: Uuid,
    /// Local calendar date of the invocation
    pub today: NaiveDate,
    /// Default history length
    pub history_months: usize,
}
