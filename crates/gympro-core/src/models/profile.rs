// ABOUTME: Anthropometric profile model with typed optional measurements
// ABOUTME: ProfileForm carries raw screen text, parsing yields a profile plus missing-field flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use crate::errors::AppError;
use crate::parsing::{parse_measurement, usable};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex selector of the profile screen
///
/// Chooses between the two circumference formulas for body fat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male formula (height, neck, waist)
    #[default]
    Male,
    /// Female formula (height, neck, waist, hip)
    Female,
}

impl Sex {
    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" | "hombre" => Ok(Self::Male),
            "female" | "f" | "mujer" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

bitflags! {
    /// Set of profile measurements that are absent or unusable
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct MissingFields: u16 {
        /// Height in centimeters
        const HEIGHT = 1 << 0;
        /// Body weight in kilograms
        const WEIGHT = 1 << 1;
        /// Neck circumference
        const NECK = 1 << 2;
        /// Waist circumference
        const WAIST = 1 << 3;
        /// Hip circumference
        const HIP = 1 << 4;
        /// Chest circumference
        const CHEST = 1 << 5;
        /// Arm circumference
        const ARMS = 1 << 6;
        /// Thigh circumference
        const THIGH = 1 << 7;
    }
}

impl MissingFields {
    /// Human-readable field names contained in the set
    #[must_use]
    pub fn field_names(self) -> Vec<&'static str> {
        [
            (Self::HEIGHT, "height"),
            (Self::WEIGHT, "weight"),
            (Self::NECK, "neck"),
            (Self::WAIST, "waist"),
            (Self::HIP, "hip"),
            (Self::CHEST, "chest"),
            (Self::ARMS, "arms"),
            (Self::THIGH, "thigh"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect()
    }
}

/// Anthropometric profile with every measurement optional
///
/// `None` means "unknown". Lengths are centimeters, weight is kilograms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    /// Selects the body-fat formula
    #[serde(default)]
    pub sex: Sex,
    /// Height (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Body weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Neck circumference (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neck_cm: Option<f64>,
    /// Waist circumference at the navel (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    /// Hip circumference (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
    /// Chest circumference (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest_cm: Option<f64>,
    /// Arm circumference (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arms_cm: Option<f64>,
    /// Thigh circumference (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thigh_cm: Option<f64>,
}

impl BiometricProfile {
    /// Measurements that are absent or unusable
    #[must_use]
    pub fn missing_fields(&self) -> MissingFields {
        [
            (self.height_cm, MissingFields::HEIGHT),
            (self.weight_kg, MissingFields::WEIGHT),
            (self.neck_cm, MissingFields::NECK),
            (self.waist_cm, MissingFields::WAIST),
            (self.hip_cm, MissingFields::HIP),
            (self.chest_cm, MissingFields::CHEST),
            (self.arms_cm, MissingFields::ARMS),
            (self.thigh_cm, MissingFields::THIGH),
        ]
        .into_iter()
        .filter(|(value, _)| usable(*value).is_none())
        .fold(MissingFields::empty(), |acc, (_, flag)| acc | flag)
    }

    /// Measurements the body-fat formula needs for this profile's sex
    #[must_use]
    pub const fn body_fat_requirements(&self) -> MissingFields {
        match self.sex {
            Sex::Male => MissingFields::HEIGHT
                .union(MissingFields::NECK)
                .union(MissingFields::WAIST),
            Sex::Female => MissingFields::HEIGHT
                .union(MissingFields::NECK)
                .union(MissingFields::WAIST)
                .union(MissingFields::HIP),
        }
    }
}

/// Raw text of the profile screen, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    /// Selected sex
    pub sex: Sex,
    /// Height field
    pub height: String,
    /// Weight field
    pub weight: String,
    /// Neck field
    pub neck: String,
    /// Waist field
    pub waist: String,
    /// Hip field
    pub hip: String,
    /// Chest field
    pub chest: String,
    /// Arms field
    pub arms: String,
    /// Thigh field
    pub thigh: String,
}

impl ProfileForm {
    /// Convert every field to a typed measurement in one pass
    #[must_use]
    pub fn parse(&self) -> ParsedProfile {
        let profile = BiometricProfile {
            sex: self.sex,
            height_cm: parse_measurement(&self.height),
            weight_kg: parse_measurement(&self.weight),
            neck_cm: parse_measurement(&self.neck),
            waist_cm: parse_measurement(&self.waist),
            hip_cm: parse_measurement(&self.hip),
            chest_cm: parse_measurement(&self.chest),
            arms_cm: parse_measurement(&self.arms),
            thigh_cm: parse_measurement(&self.thigh),
        };
        let missing = profile.missing_fields();
        ParsedProfile { profile, missing }
    }
}

/// Outcome of parsing a [`ProfileForm`]
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedProfile {
    /// Typed profile; unknown fields are `None`
    pub profile: BiometricProfile,
    /// Fields that were blank or not usable numbers
    pub missing: MissingFields,
}

impl ParsedProfile {
    /// Fields the body-fat estimate still needs
    #[must_use]
    pub fn missing_for_body_fat(&self) -> MissingFields {
        self.missing & self.profile.body_fat_requirements()
    }
}

/// Profile document as persisted, with the estimate computed at save time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    /// Measurements
    #[serde(flatten)]
    pub profile: BiometricProfile,
    /// Body-fat percentage at save time, if it could be computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_fat: Option<f64>,
}
