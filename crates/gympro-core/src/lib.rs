// ABOUTME: Core types and constants for the GymPro training tracker
// ABOUTME: Foundation crate with error handling, calendar keys, models and the exercise catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

#![deny(unsafe_code)]

//! # GymPro Core
//!
//! Foundation crate providing the shared value types of the GymPro tracker.
//! Every record here is a plain value recomputed from storage on each read,
//! so nothing in this crate performs I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Calendar labels and the exercise picklist
//! - **models**: Profile, exercise entries, workout log, records and summaries
//! - **parsing**: The single place where form strings become numbers

/// Unified error handling system with standard error codes
pub mod errors;

/// Calendar labels, limits and the exercise catalog
pub mod constants;

/// Core data models (profile, workout log, records, summaries)
pub mod models;

/// Form input coercion shared by every screen
pub mod parsing;

pub use errors::{AppError, AppResult, ErrorCode};
