// ABOUTME: Core data models for the GymPro training tracker
// ABOUTME: Re-exports calendar keys, profile, exercise, workout log, record and summary types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

//! Data models
//!
//! All records are immutable values identified only by their natural key
//! (a date, an exercise name, a month). They are rebuilt from storage on every
//! read, so none of them carries interior mutability.

/// `YYYY-MM-DD` date keys and calendar months
pub mod calendar;
/// Training zones, exercise entries and the entry form
pub mod exercise;
/// Anthropometric profile and its form
pub mod profile;
/// Personal records and monthly progress photos
pub mod records;
/// Derived per-month consistency statistics
pub mod summary;
/// Date-keyed workout log
pub mod workout_log;

pub use calendar::{DateKey, YearMonth};
pub use exercise::{ExerciseDraft, ExerciseEntry, ExerciseId, NewExercise, Zone};
pub use profile::{BiometricProfile, MissingFields, ParsedProfile, ProfileForm, Sex, StoredProfile};
pub use records::{MonthlyPhoto, PersonalRecord};
pub use summary::{MonthStats, MonthSummary};
pub use workout_log::WorkoutLog;
