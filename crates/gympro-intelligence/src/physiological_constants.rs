// ABOUTME: Published coefficients for the body-composition and strength estimators
// ABOUTME: U.S. Navy circumference method and Epley one-rep-max constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

//! Physiological constants based on sports science research

/// U.S. Navy circumference method (metric form, base-10 logarithms)
///
/// References:
/// - Hodgdon, J.A. & Beckett, M.B. (1984). "Prediction of percent body fat for U.S. Navy men
///   and women from body circumferences and height." Naval Health Research Center, Reports 84-11 and 84-29.
pub mod navy_body_fat {
    /// Numerator of the density-to-fat conversion (Siri equation, 495 / density - 450)
    pub const SIRI_NUMERATOR: f64 = 495.0;
    /// Offset of the Siri equation
    pub const SIRI_OFFSET: f64 = 450.0;

    /// Male density intercept
    pub const MALE_INTERCEPT: f64 = 1.0324;
    /// Male coefficient on `log10(waist - neck)`
    pub const MALE_CIRCUMFERENCE_COEF: f64 = 0.19077;
    /// Male coefficient on `log10(height)`
    pub const MALE_HEIGHT_COEF: f64 = 0.1554;

    /// Female density intercept
    pub const FEMALE_INTERCEPT: f64 = 1.29579;
    /// Female coefficient on `log10(waist + hip - neck)`
    pub const FEMALE_CIRCUMFERENCE_COEF: f64 = 0.35004;
    /// Female coefficient on `log10(height)`
    pub const FEMALE_HEIGHT_COEF: f64 = 0.2210;
}

/// Repetition-based strength estimation
///
/// Reference: Epley, B. (1985). "Poundage Chart." Boyd Epley Workout. Lincoln, NE.
pub mod strength {
    /// Repetitions per unit of extra load in the Epley formula: `w * (1 + reps / 30)`
    pub const EPLEY_REPS_DIVISOR: f64 = 30.0;
}
