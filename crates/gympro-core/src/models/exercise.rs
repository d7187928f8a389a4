// ABOUTME: Exercise entry model, training zones and the new-entry form
// ABOUTME: Strength entries carry sets/reps/load, cardio entries carry minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use crate::constants::catalog;
use crate::constants::limits::{MAX_EXERCISE_NAME_LEN, MAX_MINUTES, MAX_WEIGHT_KG};
use crate::errors::{AppError, AppResult};
use crate::parsing::{parse_count, parse_measurement};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Muscle group or activity category
///
/// Filters the exercise picklist and decides which fields an entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    /// Chest
    #[serde(rename = "Pecho")]
    Chest,
    /// Back
    #[serde(rename = "Espalda")]
    Back,
    /// Legs
    #[serde(rename = "Piernas")]
    Legs,
    /// Arms
    #[serde(rename = "Brazos")]
    Arms,
    /// Forearms
    #[serde(rename = "Antebrazos")]
    Forearms,
    /// Core
    #[serde(rename = "Abdomen")]
    Abs,
    /// Timed cardio work
    #[serde(rename = "Cardio")]
    Cardio,
}

impl Zone {
    /// Every zone in picklist order
    pub const ALL: [Self; 7] = [
        Self::Chest,
        Self::Back,
        Self::Legs,
        Self::Arms,
        Self::Forearms,
        Self::Abs,
        Self::Cardio,
    ];

    /// Label shown in the zone selector (also the stored value)
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Chest => "Pecho",
            Self::Back => "Espalda",
            Self::Legs => "Piernas",
            Self::Arms => "Brazos",
            Self::Forearms => "Antebrazos",
            Self::Abs => "Abdomen",
            Self::Cardio => "Cardio",
        }
    }

    /// Cardio entries log minutes instead of sets, reps and load
    #[must_use]
    pub const fn is_timed(&self) -> bool {
        matches!(self, Self::Cardio)
    }

    /// Exercise names offered for this zone
    #[must_use]
    pub const fn exercises(&self) -> &'static [&'static str] {
        catalog::exercises_for(*self)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Zone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|zone| zone.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(Zone::label).collect();
                AppError::invalid_input(format!(
                    "Unknown zone: '{wanted}'. Valid options: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// Entry identifier: creation time in milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseId(pub u64);

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExerciseId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| AppError::invalid_format(format!("Invalid entry id '{s}'")).with_source(e))
    }
}

/// One logged exercise on a training day
///
/// Entries are created from a validated [`ExerciseDraft`], appended to the
/// day, and deleted by id. They are never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Unique id within the log
    pub id: ExerciseId,
    /// Category of the exercise
    pub zone: Zone,
    /// Exercise label (e.g. "Press Banca")
    pub name: String,
    /// Number of sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Repetitions per set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Load in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Duration of a timed entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<f64>,
}

impl ExerciseEntry {
    /// Whether the entry is a timed (cardio) entry
    #[must_use]
    pub const fn is_timed(&self) -> bool {
        self.zone.is_timed()
    }
}

/// Raw text of the add-exercise sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewExercise {
    /// Zone selector
    pub zone: String,
    /// Exercise selector
    pub name: String,
    /// Sets field
    pub sets: String,
    /// Reps field
    pub reps: String,
    /// Load field (kg)
    pub weight: String,
    /// Minutes field (cardio)
    pub minutes: String,
}

impl NewExercise {
    /// Validate the form into a typed draft
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the zone is empty or unknown
    /// - the exercise name is empty or too long
    /// - a strength entry has no usable load
    /// - a cardio entry has no usable duration
    /// - a load or duration exceeds the accepted range
    pub fn validate(&self) -> AppResult<ExerciseDraft> {
        if self.zone.trim().is_empty() {
            return Err(AppError::missing_field("zone"));
        }
        let zone: Zone = self.zone.parse()?;

        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if name.chars().count() > MAX_EXERCISE_NAME_LEN {
            return Err(AppError::out_of_range(format!(
                "Exercise name exceeds {MAX_EXERCISE_NAME_LEN} characters"
            )));
        }

        if zone.is_timed() {
            let minutes =
                parse_measurement(&self.minutes).ok_or_else(|| AppError::missing_field("minutes"))?;
            if minutes > MAX_MINUTES {
                return Err(AppError::out_of_range(format!(
                    "Duration must be at most {MAX_MINUTES} minutes"
                )));
            }
            return Ok(ExerciseDraft {
                zone,
                name: name.to_owned(),
                sets: None,
                reps: None,
                weight_kg: None,
                minutes: Some(minutes),
            });
        }

        let weight_kg =
            parse_measurement(&self.weight).ok_or_else(|| AppError::missing_field("weight"))?;
        if weight_kg > MAX_WEIGHT_KG {
            return Err(AppError::out_of_range(format!(
                "Load must be at most {MAX_WEIGHT_KG} kg"
            )));
        }

        Ok(ExerciseDraft {
            zone,
            name: name.to_owned(),
            sets: parse_count(&self.sets),
            reps: parse_count(&self.reps),
            weight_kg: Some(weight_kg),
            minutes: None,
        })
    }
}

/// Validated exercise waiting for an id
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDraft {
    /// Category of the exercise
    pub zone: Zone,
    /// Trimmed exercise label
    pub name: String,
    /// Number of sets
    pub sets: Option<u32>,
    /// Repetitions per set
    pub reps: Option<u32>,
    /// Load in kilograms (strength only)
    pub weight_kg: Option<f64>,
    /// Duration (cardio only)
    pub minutes: Option<f64>,
}

impl ExerciseDraft {
    /// Whether the name comes from the zone's picklist
    #[must_use]
    pub fn is_catalog_exercise(&self) -> bool {
        catalog::is_listed(self.zone, &self.name)
    }

    /// Stamp the draft with its id
    #[must_use]
    pub fn into_entry(self, id: ExerciseId) -> ExerciseEntry {
        ExerciseEntry {
            id,
            zone: self.zone,
            name: self.name,
            sets: self.sets,
            reps: self.reps,
            weight_kg: self.weight_kg,
            minutes: self.minutes,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn strength_form(weight: &str) -> NewExercise {
        NewExercise {
            zone: "Pecho".into(),
            name: "Press Banca".into(),
            sets: "4".into(),
            reps: "8".into(),
            weight: weight.into(),
            minutes: String::new(),
        }
    }

    #[test]
    fn test_strength_form_validates() {
        let draft = strength_form("82.5").validate().unwrap();
        assert_eq!(draft.zone, Zone::Chest);
        assert_eq!(draft.sets, Some(4));
        assert_eq!(draft.reps, Some(8));
        assert_eq!(draft.weight_kg, Some(82.5));
        assert!(draft.minutes.is_none());
        assert!(draft.is_catalog_exercise());
    }

    #[test]
    fn test_strength_form_requires_weight() {
        let err = strength_form("").validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert!(err.message.contains("weight"));
    }

    #[test]
    fn test_cardio_form_uses_minutes() {
        let form = NewExercise {
            zone: "cardio".into(),
            name: "Cinta".into(),
            minutes: "30".into(),
            weight: "999".into(),
            ..NewExercise::default()
        };
        let draft = form.validate().unwrap();
        assert_eq!(draft.minutes, Some(30.0));
        assert!(draft.weight_kg.is_none());
        assert!(draft.sets.is_none());
    }

    #[test]
    fn test_form_rejects_unknown_zone_and_missing_name() {
        let mut form = strength_form("50");
        form.zone = "Cuello".into();
        assert_eq!(form.validate().unwrap_err().code, ErrorCode::InvalidInput);

        let mut form = strength_form("50");
        form.name = "   ".into();
        assert_eq!(
            form.validate().unwrap_err().code,
            ErrorCode::MissingRequiredField
        );
    }

    #[test]
    fn test_entry_serializes_zone_label() {
        let entry = strength_form("60")
            .validate()
            .unwrap()
            .into_entry(ExerciseId(1_700_000_000_000));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["zone"], "Pecho");
        assert_eq!(json["id"], 1_700_000_000_000_u64);
        assert!(json.get("minutes").is_none());
    }
}
