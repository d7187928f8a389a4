// ABOUTME: Fitness metrics and consistency engine for the GymPro tracker
// ABOUTME: Stateless computations over profile and workout-log snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

#![deny(unsafe_code)]

//! # GymPro Intelligence
//!
//! Pure functions invoked every time a profile or the workout log changes.
//! Nothing here performs I/O, holds locks or keeps state between calls, so
//! the same snapshot always produces bit-identical results and any function
//! may run concurrently on shared immutable data.

/// Metric algorithms (body composition, consistency, load series, 1RM)
pub mod algorithms;

/// Published coefficients used by the algorithms
pub mod physiological_constants;

pub use algorithms::body_composition::{assess_body_fat, estimate_body_fat_percent, BodyFatError};
pub use algorithms::consistency::{month_stats, rolling_history};
pub use algorithms::load_series::{load_series, logged_exercise_names, LoadPoint, LoadSeries};
pub use algorithms::one_rep_max::estimate_one_rep_max;
