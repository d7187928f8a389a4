// ABOUTME: Biometric profile service computing the body-fat estimate on save
// ABOUTME: Unknown measurements are kept as unknown; the estimate is stored alongside the profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use crate::errors::AppResult;
use crate::store::FitnessStore;
use gympro_core::models::{MissingFields, ProfileForm, StoredProfile};
use gympro_intelligence::{assess_body_fat, BodyFatError};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Outcome of saving a profile
#[derive(Debug, Clone, PartialEq)]
pub struct SavedProfile {
    /// What was persisted
    pub stored: StoredProfile,
    /// Why the estimate is unavailable, when it is
    pub estimate_error: Option<BodyFatError>,
}

impl SavedProfile {
    /// Measurements still needed for the body-fat estimate
    #[must_use]
    pub fn missing_for_body_fat(&self) -> MissingFields {
        self.stored.profile.missing_fields() & self.stored.profile.body_fat_requirements()
    }
}

/// Profile service
#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn FitnessStore>,
}

impl ProfileService {
    /// Create the service over `store`
    #[must_use]
    pub fn new(store: Arc<dyn FitnessStore>) -> Self {
        Self { store }
    }

    /// Parse `form`, estimate body fat and replace the stored profile
    ///
    /// An unavailable estimate is not an error; the profile is saved with
    /// `calculated_fat` unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn save_profile(&self, user: Uuid, form: &ProfileForm) -> AppResult<SavedProfile> {
        let parsed = form.parse();
        let estimate = assess_body_fat(&parsed.profile);
        if let Err(reason) = &estimate {
            debug!(user = %user, %reason, "body-fat estimate unavailable");
        }

        let stored = StoredProfile {
            profile: parsed.profile,
            calculated_fat: estimate.as_ref().ok().copied(),
        };
        self.store.save_profile(user, stored.clone()).await?;

        info!(
            user = %user,
            sex = %stored.profile.sex,
            body_fat = ?stored.calculated_fat,
            missing = ?parsed.missing.field_names(),
            "profile saved"
        );
        Ok(SavedProfile {
            stored,
            estimate_error: estimate.err(),
        })
    }

    /// Stored profile, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn load_profile(&self, user: Uuid) -> AppResult<Option<StoredProfile>> {
        Ok(self.store.load_profile(user).await?)
    }
}
