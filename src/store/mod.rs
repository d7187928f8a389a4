// ABOUTME: Persistence abstraction for per-user fitness documents
// ABOUTME: Pluggable async backends (in-memory, JSON files) injected into the services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

//! Storage layer
//!
//! Every user owns one [`UserDocument`] made of four collections: the
//! biometric profile, the date-keyed workout log, personal records keyed by
//! exercise name, and monthly photos keyed by month. Writes are whole-value
//! replacements at collection-entry granularity; the latest write wins.
//! Appending or removing a single workout entry runs inside the backend's
//! write critical section, so concurrent edits of one day are not lost.

/// JSON document per user on the local filesystem
pub mod json_file;
/// In-memory maps for tests and ephemeral sessions
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::errors::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gympro_core::models::{
    DateKey, ExerciseDraft, ExerciseEntry, ExerciseId, MonthlyPhoto, PersonalRecord,
    StoredProfile, WorkoutLog, YearMonth,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Failure inside a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed
    #[error("storage I/O failed for {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A stored document could not be decoded
    #[error("stored document {} is corrupt: {source}", path.display())]
    Corrupt {
        /// Document path
        path: PathBuf,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// A document could not be encoded
    #[error("failed to encode user document: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        let message = error.to_string();
        match error {
            StoreError::Io { .. } => Self::storage(message).with_source(error),
            StoreError::Corrupt { .. } | StoreError::Encode(_) => {
                Self::serialization(message).with_source(error)
            }
        }
    }
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Everything stored for one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDocument {
    /// Biometric profile and its last computed estimate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<StoredProfile>,
    /// Exercise entries per training date
    pub workouts: WorkoutLog,
    /// Best failure set per exercise name
    pub personal_records: BTreeMap<String, PersonalRecord>,
    /// Progress photo per month, keyed by [`YearMonth::photo_key`]
    pub monthly_photos: BTreeMap<String, MonthlyPhoto>,
}

impl UserDocument {
    /// Apply a whole-day replacement; an empty list removes the day
    pub fn replace_day(&mut self, date: DateKey, entries: Vec<ExerciseEntry>) {
        self.workouts.set_day(date, entries);
    }

    /// Turn `draft` into an entry with a fresh id and append it to `date`
    pub fn append_entry(
        &mut self,
        date: DateKey,
        draft: ExerciseDraft,
        now: DateTime<Utc>,
    ) -> ExerciseEntry {
        let entry = draft.into_entry(next_exercise_id(&self.workouts, now));
        self.workouts.push(date, entry.clone());
        entry
    }

    /// Remove entry `id` from `date`
    ///
    /// Returns the number of entries left on that date, or `None` when the
    /// date has no entry with that id.
    pub fn remove_entry(&mut self, date: DateKey, id: ExerciseId) -> Option<usize> {
        let mut entries = self.workouts.day(date).to_vec();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return None;
        }
        let remaining = entries.len();
        self.workouts.set_day(date, entries);
        Some(remaining)
    }
}

/// Current time in milliseconds, bumped until unique within `log`
fn next_exercise_id(log: &WorkoutLog, now: DateTime<Utc>) -> ExerciseId {
    let mut candidate = u64::try_from(now.timestamp_millis()).unwrap_or_default();
    while log.contains_id(ExerciseId(candidate)) {
        candidate += 1;
    }
    ExerciseId(candidate)
}

/// Storage backend for per-user fitness data
///
/// Implementations are internally synchronized and shared behind
/// `Arc<dyn FitnessStore>`.
#[async_trait]
pub trait FitnessStore: Send + Sync {
    /// Stored profile, if one was ever saved
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn load_profile(&self, user: Uuid) -> StoreResult<Option<StoredProfile>>;

    /// Replace the stored profile
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn save_profile(&self, user: Uuid, profile: StoredProfile) -> StoreResult<()>;

    /// Full workout log (empty when nothing was logged)
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn load_workout_log(&self, user: Uuid) -> StoreResult<WorkoutLog>;

    /// Replace the entry list of one date; an empty list removes the date
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn save_workout_day(
        &self,
        user: Uuid,
        date: DateKey,
        entries: Vec<ExerciseEntry>,
    ) -> StoreResult<()>;

    /// Append `draft` to `date` with an id unique within the user's log
    ///
    /// Id allocation and the append happen atomically with respect to other
    /// writes on the same store.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or written
    async fn append_workout_entry(
        &self,
        user: Uuid,
        date: DateKey,
        draft: ExerciseDraft,
        now: DateTime<Utc>,
    ) -> StoreResult<ExerciseEntry>;

    /// Remove entry `id` from `date`; an emptied date is removed
    ///
    /// Returns the entries left on `date`, or `None` if no entry matched, in
    /// which case nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or written
    async fn remove_workout_entry(
        &self,
        user: Uuid,
        date: DateKey,
        id: ExerciseId,
    ) -> StoreResult<Option<usize>>;

    /// Personal records keyed by exercise name
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn list_personal_records(
        &self,
        user: Uuid,
    ) -> StoreResult<BTreeMap<String, PersonalRecord>>;

    /// Store the record for `exercise`, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn save_personal_record(
        &self,
        user: Uuid,
        exercise: &str,
        record: PersonalRecord,
    ) -> StoreResult<()>;

    /// Monthly photos keyed by [`YearMonth::photo_key`]
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn list_monthly_photos(&self, user: Uuid)
        -> StoreResult<BTreeMap<String, MonthlyPhoto>>;

    /// Store the photo for `month`, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn save_monthly_photo(
        &self,
        user: Uuid,
        month: YearMonth,
        photo: MonthlyPhoto,
    ) -> StoreResult<()>;
}
