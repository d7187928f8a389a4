// ABOUTME: Body-fat percentage estimate from circumference measurements
// ABOUTME: U.S. Navy method with explicit handling of missing inputs and log-domain failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use crate::physiological_constants::navy_body_fat::{
    FEMALE_CIRCUMFERENCE_COEF, FEMALE_HEIGHT_COEF, FEMALE_INTERCEPT, MALE_CIRCUMFERENCE_COEF,
    MALE_HEIGHT_COEF, MALE_INTERCEPT, SIRI_NUMERATOR, SIRI_OFFSET,
};
use gympro_core::models::{BiometricProfile, MissingFields, Sex};
use gympro_core::parsing::usable;
use thiserror::Error;

/// Why a body-fat estimate is unavailable
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BodyFatError {
    /// Required measurements are absent or not usable numbers
    #[error("missing measurements: {}", .0.field_names().join(", "))]
    MissingInputs(MissingFields),

    /// The circumference difference fed to the logarithm is not positive
    #[error("circumference term for {sex} formula must be positive, got {argument}")]
    NonPositiveCircumference {
        /// Formula that was selected
        sex: Sex,
        /// Value of `waist - neck` (male) or `waist + hip - neck` (female)
        argument: f64,
    },

    /// The formula produced a non-finite value (density term of zero)
    #[error("body-fat formula did not produce a finite value")]
    NonFinite,

    /// The formula produced a percentage that is zero or negative
    #[error("body-fat estimate {percent}% is outside the physiological range")]
    OutOfPhysiologicalRange {
        /// Rounded formula output
        percent: f64,
    },
}

/// Estimate body fat, rounded to one decimal place
///
/// Returns `None` when the estimate is unavailable for any reason. Use
/// [`assess_body_fat`] to learn which one.
///
/// # Example
///
/// ```rust
/// use gympro_core::models::{BiometricProfile, Sex};
/// use gympro_intelligence::estimate_body_fat_percent;
///
/// let profile = BiometricProfile {
///     sex: Sex::Male,
///     height_cm: Some(180.0),
///     neck_cm: Some(40.0),
///     waist_cm: Some(85.0),
///     ..BiometricProfile::default()
/// };
/// assert_eq!(estimate_body_fat_percent(&profile), Some(13.7));
/// ```
#[must_use]
pub fn estimate_body_fat_percent(profile: &BiometricProfile) -> Option<f64> {
    assess_body_fat(profile).ok()
}

/// Estimate body fat with the reason for any failure
///
/// Formulas (centimeters, base-10 logarithms):
///
/// - male: `495 / (1.0324 - 0.19077·log10(waist - neck) + 0.1554·log10(height)) - 450`
/// - female: `495 / (1.29579 - 0.35004·log10(waist + hip - neck) + 0.2210·log10(height)) - 450`
///
/// # Errors
///
/// - `MissingInputs` if height, neck or waist (and hip for the female formula) is unknown
/// - `NonPositiveCircumference` if the logarithm argument is zero or negative
/// - `NonFinite` if the result is not a finite number
/// - `OutOfPhysiologicalRange` if the rounded result is not positive
pub fn assess_body_fat(profile: &BiometricProfile) -> Result<f64, BodyFatError> {
    let missing = profile.missing_fields() & profile.body_fat_requirements();
    let (Some(height), Some(neck), Some(waist)) = (
        usable(profile.height_cm),
        usable(profile.neck_cm),
        usable(profile.waist_cm),
    ) else {
        return Err(BodyFatError::MissingInputs(missing));
    };

    let (argument, intercept, circumference_coef, height_coef) = match profile.sex {
        Sex::Male => (
            waist - neck,
            MALE_INTERCEPT,
            MALE_CIRCUMFERENCE_COEF,
            MALE_HEIGHT_COEF,
        ),
        Sex::Female => {
            let hip = usable(profile.hip_cm).ok_or(BodyFatError::MissingInputs(missing))?;
            (
                waist + hip - neck,
                FEMALE_INTERCEPT,
                FEMALE_CIRCUMFERENCE_COEF,
                FEMALE_HEIGHT_COEF,
            )
        }
    };

    if argument <= 0.0 {
        return Err(BodyFatError::NonPositiveCircumference {
            sex: profile.sex,
            argument,
        });
    }

    let density = height_coef.mul_add(
        height.log10(),
        circumference_coef.mul_add(-argument.log10(), intercept),
    );
    let percent = SIRI_NUMERATOR / density - SIRI_OFFSET;
    if !percent.is_finite() {
        return Err(BodyFatError::NonFinite);
    }

    let percent = round_to_tenth(percent);
    if percent <= 0.0 {
        return Err(BodyFatError::OutOfPhysiologicalRange { percent });
    }

    Ok(percent)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
