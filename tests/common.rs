// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory services and sample form builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `gympro`

use gympro::services::Services;
use gympro::store::{FitnessStore, MemoryStore};
use gympro_core::models::{DateKey, NewExercise, ProfileForm, Sex};
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Services over a fresh in-memory store, plus a fresh user id
pub fn memory_services() -> (Services, MemoryStore, Uuid) {
    init_test_logging();
    let store = MemoryStore::new();
    let shared: Arc<dyn FitnessStore> = Arc::new(store.clone());
    (Services::new(shared), store, Uuid::new_v4())
}

/// Parse a `YYYY-MM-DD` key
pub fn day(key: &str) -> DateKey {
    key.parse().unwrap()
}

/// Strength-exercise form
pub fn lift(zone: &str, name: &str, weight: &str) -> NewExercise {
    NewExercise {
        zone: zone.to_owned(),
        name: name.to_owned(),
        sets: "4".to_owned(),
        reps: "8".to_owned(),
        weight: weight.to_owned(),
        ..NewExercise::default()
    }
}

/// Cardio form
pub fn cardio(name: &str, minutes: &str) -> NewExercise {
    NewExercise {
        zone: "Cardio".to_owned(),
        name: name.to_owned(),
        minutes: minutes.to_owned(),
        ..NewExercise::default()
    }
}

/// Profile form for the male reference measurements (180 / 40 / 85)
pub fn male_reference_form() -> ProfileForm {
    ProfileForm {
        sex: Sex::Male,
        height: "180".to_owned(),
        weight: "82".to_owned(),
        neck: "40".to_owned(),
        waist: "85".to_owned(),
        ..ProfileForm::default()
    }
}
