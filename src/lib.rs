// ABOUTME: Main library entry point for the GymPro training tracker
// ABOUTME: Wires configuration, logging, storage backends and services around the metrics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

#![deny(unsafe_code)]

//! # GymPro
//!
//! A personal strength-training log with body-composition and consistency
//! metrics.
//!
//! ## Architecture
//!
//! - **`gympro-core`**: models, validation, error types, exercise catalog
//! - **`gympro-intelligence`**: the pure metrics engine (body fat,
//!   consistency, load series, one-rep max)
//! - **Store**: async persistence trait with in-memory and JSON-file backends
//! - **Services**: form validation plus engine calls plus persistence
//! - **Session**: anonymous identity owning the stored documents
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gympro::services::Services;
//! use gympro::store::MemoryStore;
//! use gympro::session::Session;
//! use gympro_core::models::NewExercise;
//! use std::sync::Arc;
//!
//! # async fn example() -> gympro::errors::AppResult<()> {
//! let services = Services::new(Arc::new(MemoryStore::new()));
//! let user = Session::anonymous().user_id();
//! let form = NewExercise {
//!     zone: "Pecho".into(),
//!     name: "Press Banca".into(),
//!     sets: "4".into(),
//!     reps: "8".into(),
//!     weight: "80".into(),
//!     ..NewExercise::default()
//! };
//! services
//!     .training
//!     .add_exercise(user, "2025-03-01".parse()?, &form)
//!     .await?;
//! # Ok(())
//! # }
//! ```

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Application services
pub mod services;

/// Anonymous session identity
pub mod session;

/// Storage backends
pub mod store;

pub use gympro_core::models;
pub use gympro_intelligence as intelligence;
