// ABOUTME: Configuration module for the GymPro application layer
// ABOUTME: Environment-driven settings with command-line overrides applied by the binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

//! Configuration module

/// Environment variable configuration
pub mod environment;

pub use environment::{default_data_dir, AppConfig, Environment};
