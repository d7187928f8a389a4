// ABOUTME: Personal record and monthly progress photo models
// ABOUTME: Records are keyed by exercise name, photos by month, latest write wins for both
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Best failure set logged for one exercise
///
/// Stored under the exercise name; a new record replaces the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Load lifted (kg)
    pub weight_kg: f64,
    /// Repetitions reached at failure
    pub reps: u32,
    /// Day the record was logged
    pub date: NaiveDate,
    /// Estimated single-repetition maximum (kg)
    pub estimated_one_rep_max: u32,
}

/// Progress photo attached to a calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPhoto {
    /// Already-encoded image (typically a `data:image/jpeg;base64,...` URL)
    pub image: String,
    /// Day the photo was uploaded
    pub date: NaiveDate,
}
