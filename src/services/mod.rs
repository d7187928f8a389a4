// ABOUTME: Application service layer between front ends and the storage backend
// ABOUTME: Validates form input, runs the metrics engine, and persists the results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

//! Application services
//!
//! Each service holds only the injected store. All of them take the user id
//! per call, so one instance serves any number of sessions.

/// Monthly progress photos and the photo-annotated history
pub mod photos;
/// Biometric profile with its body-fat estimate
pub mod profile;
/// Personal records and one-rep-max estimates
pub mod records;
/// Workout log editing and training metrics
pub mod training;

pub use photos::{HistoryRow, PhotoService};
pub use profile::{ProfileService, SavedProfile};
pub use records::{RecordForm, RecordService};
pub use training::TrainingService;

use crate::store::FitnessStore;
use std::sync::Arc;

/// All services wired to one store
#[derive(Clone)]
pub struct Services {
    /// Workout log and metrics
    pub training: TrainingService,
    /// Biometric profile
    pub profile: ProfileService,
    /// Personal records
    pub records: RecordService,
    /// Monthly photos
    pub photos: PhotoService,
}

impl Services {
    /// Build every service on top of `store`
    #[must_use]
    pub fn new(store: Arc<dyn FitnessStore>) -> Self {
        Self {
            training: TrainingService::new(Arc::clone(&store)),
            profile: ProfileService::new(Arc::clone(&store)),
            records: RecordService::new(Arc::clone(&store)),
            photos: PhotoService::new(store),
        }
    }
}
