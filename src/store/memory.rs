// ABOUTME: In-memory fitness store backed by a shared map of user documents
// ABOUTME: Used by tests and by sessions that should leave nothing on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use super::{FitnessStore, StoreResult, UserDocument};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gympro_core::models::{
    DateKey, ExerciseDraft, ExerciseEntry, ExerciseId, MonthlyPhoto, PersonalRecord,
    StoredProfile, WorkoutLog, YearMonth,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory store
///
/// Clones share the same maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Arc<RwLock<HashMap<Uuid, UserDocument>>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a document
    pub async fn user_count(&self) -> usize {
        self.documents.read().await.len()
    }

    async fn read<T>(&self, user: Uuid, f: impl FnOnce(&UserDocument) -> T + Send) -> T {
        let empty = UserDocument::default();
        let documents = self.documents.read().await;
        f(documents.get(&user).unwrap_or(&empty))
    }

    async fn update<T>(&self, user: Uuid, f: impl FnOnce(&mut UserDocument) -> T + Send) -> T {
        let mut documents = self.documents.write().await;
        f(documents.entry(user).or_default())
    }
}

#[async_trait]
impl FitnessStore for MemoryStore {
    async fn load_profile(&self, user: Uuid) -> StoreResult<Option<StoredProfile>> {
        Ok(self.read(user, |doc| doc.profile.clone()).await)
    }

    async fn save_profile(&self, user: Uuid, profile: StoredProfile) -> StoreResult<()> {
        self.update(user, |doc| doc.profile = Some(profile)).await;
        Ok(())
    }

    async fn load_workout_log(&self, user: Uuid) -> StoreResult<WorkoutLog> {
        Ok(self.read(user, |doc| doc.workouts.clone()).await)
    }

    async fn save_workout_day(
        &self,
        user: Uuid,
        date: DateKey,
        entries: Vec<ExerciseEntry>,
    ) -> StoreResult<()> {
        self.update(user, |doc| doc.replace_day(date, entries)).await;
        Ok(())
    }

    async fn append_workout_entry(
        &self,
        user: Uuid,
        date: DateKey,
        draft: ExerciseDraft,
        now: DateTime<Utc>,
    ) -> StoreResult<ExerciseEntry> {
        Ok(self
            .update(user, |doc| doc.append_entry(date, draft, now))
            .await)
    }

    async fn remove_workout_entry(
        &self,
        user: Uuid,
        date: DateKey,
        id: ExerciseId,
    ) -> StoreResult<Option<usize>> {
        Ok(self.update(user, |doc| doc.remove_entry(date, id)).await)
    }

    async fn list_personal_records(
        &self,
        user: Uuid,
    ) -> StoreResult<BTreeMap<String, PersonalRecord>> {
        Ok(self.read(user, |doc| doc.personal_records.clone()).await)
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
        .await;
        Ok(())
    }

    async fn list_monthly_photos(
        &self,
        user: Uuid,
    ) -> StoreResult<BTreeMap<String, MonthlyPhoto>> {
        Ok(self.read(user, |doc| doc.monthly_photos.clone()).await)
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
        .await;
        Ok(())
    }
}
