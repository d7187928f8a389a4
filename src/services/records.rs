// ABOUTME: Personal record service storing failure sets with their one-rep-max estimate
// ABOUTME: Records are keyed by exercise name and only accepted for exercises already logged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use crate::constants::limits::MAX_WEIGHT_KG;
use crate::errors::{AppError, AppResult};
use crate::store::FitnessStore;
use chrono::NaiveDate;
use gympro_core::models::PersonalRecord;
use gympro_core::parsing::{parse_count, parse_measurement};
use gympro_intelligence::{estimate_one_rep_max, logged_exercise_names};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Raw text of the new-record form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordForm {
    /// Exercise selector (one of the logged names)
    pub exercise: String,
    /// Load field (kg)
    pub weight: String,
    /// Repetitions reached at failure
    pub reps: String,
}

/// Personal record service
#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn FitnessStore>,
}

impl RecordService {
    /// Create the service over `store`
    #[must_use]
    pub fn new(store: Arc<dyn FitnessStore>) -> Self {
        Self { store }
    }

    /// Validate `form`, estimate the 1RM and store the record dated `today`
    ///
    /// A record for the same exercise is replaced, whatever its load.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the exercise, load or repetitions are missing
    /// - the load exceeds the accepted range
    /// - the exercise has never been logged
    /// - the store fails
    pub async fn record_personal_record(
        &self,
        user: Uuid,
        form: &RecordForm,
        today: NaiveDate,
    ) -> AppResult<PersonalRecord> {
        let exercise = form.exercise.trim();
        if exercise.is_empty() {
            return Err(AppError::missing_field("exercise"));
        }
        let weight_kg =
            parse_measurement(&form.weight).ok_or_else(|| AppError::missing_field("weight"))?;
        if weight_kg > MAX_WEIGHT_KG {
            return Err(AppError::out_of_range(format!(
                "Load must be at most {MAX_WEIGHT_KG} kg"
            )));
        }
        let reps = parse_count(&form.reps).ok_or_else(|| AppError::missing_field("reps"))?;

        let log = self.store.load_workout_log(user).await?;
        if !logged_exercise_names(&log).iter().any(|name| name == exercise) {
            return Err(AppError::invalid_input(format!(
                "Exercise '{exercise}' has never been logged"
            )));
        }

        let record = PersonalRecord {
            weight_kg,
            reps,
            date: today,
            estimated_one_rep_max: estimate_one_rep_max(weight_kg, reps),
        };
        self.store
            .save_personal_record(user, exercise, record.clone())
            .await?;

        info!(
            user = %user,
            exercise,
            weight_kg,
            reps,
            one_rep_max = record.estimated_one_rep_max,
            "personal record saved"
        );
        Ok(record)
    }

    /// Records keyed by exercise name
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn list_personal_records(
        &self,
        user: Uuid,
    ) -> AppResult<BTreeMap<String, PersonalRecord>> {
        Ok(self.store.list_personal_records(user).await?)
    }
}
