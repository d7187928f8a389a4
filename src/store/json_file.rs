// ABOUTME: Filesystem fitness store keeping one JSON document per user
// ABOUTME: Writes go through a temporary file and an atomic rename under a process-wide lock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use super::{FitnessStore, StoreError, StoreResult, UserDocument};
use crate::constants::storage::{DOCUMENT_EXTENSION, TEMP_EXTENSION, USERS_DIR};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gympro_core::models::{
    DateKey, ExerciseDraft, ExerciseEntry, ExerciseId, MonthlyPhoto, PersonalRecord,
    StoredProfile, WorkoutLog, YearMonth,
};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

/// Store rooted at a data directory
///
/// Layout: `<root>/users/<user-uuid>.json`. A missing document reads as an
/// empty one. Read-modify-write cycles are serialized by an async mutex, so
/// one store instance per data directory is expected.
#[derive(Debug)]
pub struct JsonFileStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store rooted at `root`; nothing is touched until first write
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Data directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document owned by `user`
    #[must_use]
    pub fn document_path(&self, user: Uuid) -> PathBuf {
        self.root
            .join(USERS_DIR)
            .join(format!("{user}.{DOCUMENT_EXTENSION}"))
    }

    async fn read_document(&self, user: Uuid) -> StoreResult<UserDocument> {
        let path = self.document_path(user);
        match fs::read(&path).await {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|source| {
                    warn!(path = %path.display(), error = %source, "user document is corrupt");
                    StoreError::Corrupt { path, source }
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(UserDocument::default()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    async fn write_document(&self, user: Uuid, document: &UserDocument) -> StoreResult<()> {
        let path = self.document_path(user);
        let users_dir = self.root.join(USERS_DIR);
        fs::create_dir_all(&users_dir)
            .await
            .map_err(|e| StoreError::io(users_dir, e))?;

        let bytes = serde_json::to_vec_pretty(document).map_err(StoreError::Encode)?;
        let temp_path = path.with_extension(TEMP_EXTENSION);
        fs::write(&temp_path, &bytes)
            .await
            .map_err(|e| StoreError::io(temp_path.clone(), e))?;
        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| StoreError::io(path.clone(), e))?;

        debug!(user = %user, bytes = bytes.len(), path = %path.display(), "wrote user document");
        Ok(())
    }

    async fn update<T: Send>(
        &self,
        user: Uuid,
        f: impl FnOnce(&mut UserDocument) -> T + Send,
    ) -> StoreResult<T> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document(user).await?;
        let outcome = f(&mut document);
        self.write_document(user, &document).await?;
        Ok(outcome)
    }
}

#[async_trait]
impl FitnessStore for JsonFileStore {
    async fn load_profile(&self, user: Uuid) -> StoreResult<Option<StoredProfile>> {
        Ok(self.read_document(user).await?.profile)
    }

    async fn save_profile(&self, user: Uuid, profile: StoredProfile) -> StoreResult<()> {
        self.update(user, |doc| doc.profile = Some(profile)).await
    }

    async fn load_workout_log(&self, user: Uuid) -> StoreResult<WorkoutLog> {
        Ok(self.read_document(user).await?.workouts)
    }

    async fn save_workout_day(
        &self,
        user: Uuid,
        date: DateKey,
        entries: Vec<ExerciseEntry>,
    ) -> StoreResult<()> {
        self.update(user, |doc| doc.replace_day(date, entries)).await
    }

    async fn append_workout_entry(
        &self,
        user: Uuid,
        date: DateKey,
        draft: ExerciseDraft,
        now: DateTime<Utc>,
    ) -> StoreResult<ExerciseEntry> {
        self.update(user, |doc| doc.append_entry(date, draft, now))
            .await
    }

    async fn remove_workout_entry(
        &self,
        user: Uuid,
        date: DateKey,
        id: ExerciseId,
    ) -> StoreResult<Option<usize>> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document(user).await?;
        let Some(remaining) = document.remove_entry(date, id) else {
            return Ok(None);
        };
        self.write_document(user, &document).await?;
        Ok(Some(remaining))
    }

    async fn list_personal_records(
        &self,
        user: Uuid,
    ) -> StoreResult<BTreeMap<String, PersonalRecord>> {
        Ok(self.read_document(user).await?.personal_records)
    }

    async fn save_personal_record(
        &self,
        user: Uuid,
        exercise: &str,
        record: PersonalRecord,
    ) -> StoreResult<()> {
        let exercise = exercise.to_owned();
        self.update(user, |doc| {
            doc.personal_records.insert(exercise, record);
        })
        .await
    }

    async fn list_monthly_photos(
        &self,
        user: Uuid,
    ) -> StoreResult<BTreeMap<String, MonthlyPhoto>> {
        Ok(self.read_document(user).await?.monthly_photos)
    }

    async fn save_monthly_photo(
        &self,
        user: Uuid,
        month: YearMonth,
        photo: MonthlyPhoto,
    ) -> StoreResult<()> {
        self.update(user, |doc| {
            doc.monthly_photos.insert(month.photo_key(), photo);
        })
        .await
    }
}
