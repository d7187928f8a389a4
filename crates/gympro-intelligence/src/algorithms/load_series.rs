// ABOUTME: Progressive-overload series extraction from the workout log
// ABOUTME: Heaviest logged load per date for one exercise, in chronological order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use gympro_core::models::{DateKey, WorkoutLog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Minimum number of points needed to draw a trend
pub const MIN_TREND_POINTS: usize = 2;

/// Heaviest load of one exercise on one date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadPoint {
    /// Training date
    pub date: DateKey,
    /// Maximum load among that date's matching entries (kg)
    pub max_weight: f64,
}

/// Chronological max-load series of one exercise
///
/// Dates without a weighted matching entry are skipped, never zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSeries {
    exercise: String,
    points: Vec<LoadPoint>,
}

impl LoadSeries {
    /// Exercise the series was built for
    #[must_use]
    pub fn exercise(&self) -> &str {
        &self.exercise
    }

    /// Points in ascending date order
    #[must_use]
    pub fn points(&self) -> &[LoadPoint] {
        &self.points
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no date matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether there are enough points to show a trend
    ///
    /// Fewer than two points is a valid series; callers show a
    /// "not enough data" state instead of a chart.
    #[must_use]
    pub fn is_trendable(&self) -> bool {
        self.points.len() >= MIN_TREND_POINTS
    }

    /// Heaviest load in the whole series
    #[must_use]
    pub fn max_weight(&self) -> Option<f64> {
        self.points.iter().map(|p| p.max_weight).reduce(f64::max)
    }

    /// Most recent point
    #[must_use]
    pub fn latest(&self) -> Option<&LoadPoint> {
        self.points.last()
    }

    /// Change from the first to the last point (kg)
    #[must_use]
    pub fn total_progress(&self) -> Option<f64> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.is_trendable() => {
                Some(last.max_weight - first.max_weight)
            }
            _ => None,
        }
    }

    /// Each point as a percentage of the series maximum (bar heights)
    #[must_use]
    pub fn relative_heights(&self) -> Vec<f64> {
        match self.max_weight() {
            Some(max) if max > 0.0 => self
                .points
                .iter()
                .map(|p| p.max_weight / max * 100.0)
                .collect(),
            _ => vec![0.0; self.points.len()],
        }
    }
}

/// Max-load series of `exercise_name` across the whole log
///
/// Names match exactly. Entries without a usable load (cardio entries, or
/// loads that are not finite) are ignored when taking the per-date maximum.
///
/// # Example
///
/// ```rust
/// use gympro_core::models::WorkoutLog;
/// use gympro_intelligence::load_series;
///
/// let series = load_series(&WorkoutLog::new(), "Press Banca");
/// assert!(series.is_empty());
/// assert!(!series.is_trendable());
/// ```
#[must_use]
pub fn load_series(log: &WorkoutLog, exercise_name: &str) -> LoadSeries {
    let points = log
        .days()
        .filter_map(|(date, entries)| {
            entries
                .iter()
                .filter(|entry| entry.name == exercise_name)
                .filter_map(|entry| entry.weight_kg)
                .filter(|weight| weight.is_finite())
                .reduce(f64::max)
                .map(|max_weight| LoadPoint { date, max_weight })
        })
        .collect();

    LoadSeries {
        exercise: exercise_name.to_owned(),
        points,
    }
}

/// Distinct exercise names logged anywhere, sorted
#[must_use]
pub fn logged_exercise_names(log: &WorkoutLog) -> Vec<String> {
    log.days()
        .flat_map(|(_, entries)| entries.iter().map(|entry| entry.name.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use gympro_core::models::{ExerciseEntry, ExerciseId, Zone};

    fn lift(id: u64, name: &str, weight: f64) -> ExerciseEntry {
        ExerciseEntry {
            id: ExerciseId(id),
            zone: Zone::Chest,
            name: name.to_owned(),
            sets: Some(3),
            reps: Some(8),
            weight_kg: Some(weight),
            minutes: None,
        }
    }

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_same_day_takes_maximum() {
        let mut log = WorkoutLog::new();
        log.push(key("2025-03-01"), lift(1, "Press Banca", 80.0));
        log.push(key("2025-03-01"), lift(2, "Press Banca", 85.0));
        log.push(key("2025-03-01"), lift(3, "Aperturas", 120.0));

        let series = load_series(&log, "Press Banca");
        assert_eq!(series.len(), 1);
        assert!((series.points()[0].max_weight - 85.0).abs() < f64::EPSILON);
        assert!(!series.is_trendable());
    }

    #[test]
    fn test_points_are_chronological_and_skip_other_days() {
        let mut log = WorkoutLog::new();
        log.push(key("2025-03-10"), lift(1, "Press Banca", 90.0));
        log.push(key("2024-12-31"), lift(2, "Press Banca", 70.0));
        log.push(key("2025-01-15"), lift(3, "Sentadilla", 120.0));
        log.push(key("2025-02-01"), lift(4, "Press Banca", 80.0));

        let series = load_series(&log, "Press Banca");
        let dates: Vec<String> = series.points().iter().map(|p| p.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-12-31", "2025-02-01", "2025-03-10"]);
        assert!(series.is_trendable());
        assert_eq!(series.total_progress(), Some(20.0));
        assert_eq!(series.latest().unwrap().date, key("2025-03-10"));
    }

    #[test]
    fn test_unweighted_entries_are_ignored() {
        let mut log = WorkoutLog::new();
        let mut timed = lift(1, "Remo", 0.0);
        timed.zone = Zone::Cardio;
        timed.weight_kg = None;
        timed.minutes = Some(20.0);
        log.push(key("2025-03-01"), timed);

        assert!(load_series(&log, "Remo").is_empty());
    }

    #[test]
    fn test_relative_heights() {
        let mut log = WorkoutLog::new();
        log.push(key("2025-03-01"), lift(1, "Press Banca", 50.0));
        log.push(key("2025-03-08"), lift(2, "Press Banca", 100.0));
        let heights = load_series(&log, "Press Banca").relative_heights();
        assert_eq!(heights, vec![50.0, 100.0]);
    }

    #[test]
    fn test_logged_exercise_names_are_distinct_and_sorted() {
        let mut log = WorkoutLog::new();
        log.push(key("2025-03-01"), lift(1, "Sentadilla", 100.0));
        log.push(key("2025-03-01"), lift(2, "Press Banca", 80.0));
        log.push(key("2025-03-02"), lift(3, "Press Banca", 82.5));
        assert_eq!(
            logged_exercise_names(&log),
            vec!["Press Banca".to_owned(), "Sentadilla".to_owned()]
        );
    }

    #[test]
    fn test_name_match_is_exact() {
        let mut log = WorkoutLog::new();
        log.push(key("2025-03-01"), lift(1, "press banca", 80.0));
        assert!(load_series(&log, "Press Banca").is_empty());
    }
}
