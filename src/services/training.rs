// ABOUTME: Workout log editing plus consistency and progressive-overload queries
// ABOUTME: Appends and deletes entries atomically in the store and feeds log snapshots to the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use crate::errors::{AppError, AppResult};
use crate::store::FitnessStore;
use chrono::{NaiveDate, Utc};
use gympro_core::models::{
    DateKey, ExerciseEntry, ExerciseId, MonthStats, MonthSummary, NewExercise, WorkoutLog,
    YearMonth,
};
use gympro_intelligence::{self as engine, LoadSeries};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Workout log service
#[derive(Clone)]
pub struct TrainingService {
    store: Arc<dyn FitnessStore>,
}

impl TrainingService {
    /// Create the service over `store`
    #[must_use]
    pub fn new(store: Arc<dyn FitnessStore>) -> Self {
        Self { store }
    }

    /// Validate `form` and append it to the entries of `date`
    ///
    /// The entry id is the current time in milliseconds, bumped until it is
    /// unique within the log. Allocation happens inside the store's write
    /// section, so concurrent adds never share an id.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is invalid or the store fails
    pub async fn add_exercise(
        &self,
        user: Uuid,
        date: DateKey,
        form: &NewExercise,
    ) -> AppResult<ExerciseEntry> {
        let draft = form.validate()?;
        if !draft.is_catalog_exercise() {
            debug!(zone = %draft.zone, name = %draft.name, "logging exercise outside the catalog");
        }

        let entry = self
            .store
            .append_workout_entry(user, date, draft, Utc::now())
            .await?;

        info!(
            user = %user,
            date = %date,
            exercise = %entry.name,
            id = %entry.id,
            "exercise logged"
        );
        Ok(entry)
    }

    /// Remove the entry `id` from `date`; an emptied day is removed entirely
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `date` has no entry with that id, or an
    /// error if the store fails
    pub async fn delete_exercise(&self, user: Uuid, date: DateKey, id: ExerciseId) -> AppResult<()> {
        let Some(remaining) = self.store.remove_workout_entry(user, date, id).await? else {
            return Err(AppError::not_found(format!("Exercise {id} on {date}")));
        };
        info!(user = %user, date = %date, id = %id, remaining, "exercise deleted");
        Ok(())
    }

    /// Entries logged on `date`, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn workout_day(&self, user: Uuid, date: DateKey) -> AppResult<Vec<ExerciseEntry>> {
        Ok(self.store.load_workout_log(user).await?.day(date).to_vec())
    }

    /// Snapshot of the whole log
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn workout_log(&self, user: Uuid) -> AppResult<WorkoutLog> {
        Ok(self.store.load_workout_log(user).await?)
    }

    /// Trained-day statistics for `month`
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn month_stats(&self, user: Uuid, month: YearMonth) -> AppResult<MonthStats> {
        let log = self.store.load_workout_log(user).await?;
        Ok(engine::month_stats(&log, month))
    }

    /// Rolling consistency history ending at the month of `reference_date`
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn rolling_history(
        &self,
        user: Uuid,
        months_back: usize,
        reference_date: NaiveDate,
    ) -> AppResult<Vec<MonthSummary>> {
        let log = self.store.load_workout_log(user).await?;
        Ok(engine::rolling_history(&log, months_back, reference_date))
    }

    /// Max-load series of one exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn load_series(&self, user: Uuid, exercise: &str) -> AppResult<LoadSeries> {
        let log = self.store.load_workout_log(user).await?;
        let series = engine::load_series(&log, exercise);
        debug!(user = %user, exercise, points = series.len(), "built load series");
        Ok(series)
    }

    /// Distinct logged exercise names, sorted
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn logged_exercise_names(&self, user: Uuid) -> AppResult<Vec<String>> {
        let log = self.store.load_workout_log(user).await?;
        Ok(engine::logged_exercise_names(&log))
    }
}
