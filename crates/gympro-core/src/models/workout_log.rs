// ABOUTME: Date-keyed workout log mapping each training day to its ordered entries
// ABOUTME: Absent dates mean no training; day order follows the YYYY-MM-DD key order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use super::{DateKey, ExerciseEntry, ExerciseId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full workout log of one user
///
/// Serializes as a JSON object keyed by `YYYY-MM-DD`, each value the day's
/// entries in insertion order.
///
/// # Examples
///
/// ```rust
/// use gympro_core::models::WorkoutLog;
///
/// let log: WorkoutLog = serde_json::from_str(r#"{
///     "2025-03-03": [{"id": 1, "zone": "Pecho", "name": "Press Banca", "weight_kg": 80.0}]
/// }"#).unwrap();
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutLog {
    days: BTreeMap<DateKey, Vec<ExerciseEntry>>,
}

impl WorkoutLog {
    /// Empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries logged on `date` (empty slice if none)
    #[must_use]
    pub fn day(&self, date: DateKey) -> &[ExerciseEntry] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Replace the entries of a day; an empty list removes the day
    pub fn set_day(&mut self, date: DateKey, entries: Vec<ExerciseEntry>) {
        if entries.is_empty() {
            self.days.remove(&date);
        } else {
            self.days.insert(date, entries);
        }
    }

    /// Append one entry to a day
    pub fn push(&mut self, date: DateKey, entry: ExerciseEntry) {
        self.days.entry(date).or_default().push(entry);
    }

    /// Days in ascending date order
    pub fn days(&self) -> impl Iterator<Item = (DateKey, &[ExerciseEntry])> {
        self.days.iter().map(|(date, entries)| (*date, entries.as_slice()))
    }

    /// Dates with at least one entry, ascending
    pub fn trained_dates(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.days
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(date, _)| *date)
    }

    /// Whether `id` is already used anywhere in the log
    #[must_use]
    pub fn contains_id(&self, id: ExerciseId) -> bool {
        self.days.values().flatten().any(|entry| entry.id == id)
    }

    /// Number of date keys present
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the log has no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<(DateKey, Vec<ExerciseEntry>)> for WorkoutLog {
    fn from_iter<I: IntoIterator<Item = (DateKey, Vec<ExerciseEntry>)>>(iter: I) -> Self {
        let mut log = Self::new();
        for (date, entries) in iter {
            log.days.entry(date).or_default().extend(entries);
        }
        log
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::Zone;

    fn entry(id: u64, name: &str) -> ExerciseEntry {
        ExerciseEntry {
            id: ExerciseId(id),
            zone: Zone::Chest,
            name: name.to_owned(),
            sets: Some(3),
            reps: Some(10),
            weight_kg: Some(60.0),
            minutes: None,
        }
    }

    #[test]
    fn test_set_day_with_empty_list_removes_day() {
        let date: DateKey = "2025-01-15".parse().unwrap();
        let mut log = WorkoutLog::new();
        log.push(date, entry(1, "Press Banca"));
        assert_eq!(log.day(date).len(), 1);

        log.set_day(date, Vec::new());
        assert!(log.is_empty());
        assert!(log.day(date).is_empty());
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let date: DateKey = "2025-01-15".parse().unwrap();
        let mut log = WorkoutLog::new();
        log.push(date, entry(2, "Aperturas"));
        log.push(date, entry(1, "Press Banca"));
        let names: Vec<&str> = log.day(date).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Aperturas", "Press Banca"]);
        assert!(log.contains_id(ExerciseId(1)));
        assert!(!log.contains_id(ExerciseId(3)));
    }

    #[test]
    fn test_serialized_keys_are_date_strings() {
        let mut log = WorkoutLog::new();
        log.push("2025-02-01".parse().unwrap(), entry(1, "Press Banca"));
        let json = serde_json::to_value(&log).unwrap();
        assert!(json.get("2025-02-01").is_some());
    }

    #[test]
    fn test_rejects_malformed_keys_on_load() {
        let raw = r#"{"2025-2-1": []}"#;
        assert!(serde_json::from_str::<WorkoutLog>(raw).is_err());
    }

    #[test]
    fn test_trained_dates_skip_empty_days() {
        let raw = r#"{"2025-02-01": [], "2025-02-02": [{"id": 1, "zone": "Piernas", "name": "Sentadilla", "weight_kg": 100.0}]}"#;
        let log: WorkoutLog = serde_json::from_str(raw).unwrap();
        let dates: Vec<String> = log.trained_dates().map(|d| d.to_string()).collect();
        assert_eq!(dates, vec!["2025-02-02"]);
    }
}
