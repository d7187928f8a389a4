// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Calendar labels, input limits and the fixed exercise picklist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

//! Constants module
//!
//! Pure data constants grouped by domain.

/// Exercise picklist per body zone
pub mod catalog;

/// Calendar presentation constants
pub mod calendar {
    /// Month names shown in the calendar header and the history screen
    pub const MONTH_LABELS: [&str; 12] = [
        "Enero",
        "Febrero",
        "Marzo",
        "Abril",
        "Mayo",
        "Junio",
        "Julio",
        "Agosto",
        "Septiembre",
        "Octubre",
        "Noviembre",
        "Diciembre",
    ];

    /// Weekday initials for the calendar grid, starting on Sunday
    pub const WEEKDAY_INITIALS: [&str; 7] = ["D", "L", "M", "X", "J", "V", "S"];

    /// Text format of a workout date key
    pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

    /// Length of a `YYYY-MM-DD` key
    pub const DATE_KEY_LEN: usize = 10;

    /// Largest year a four-digit date key can carry
    pub const MAX_KEY_YEAR: i32 = 9999;
}

/// Input limits applied when validating forms
pub mod limits {
    /// Maximum length of an exercise name
    pub const MAX_EXERCISE_NAME_LEN: usize = 80;

    /// Upper bound for a logged load in kilograms
    pub const MAX_WEIGHT_KG: f64 = 1000.0;

    /// Upper bound for a timed (cardio) entry in minutes
    pub const MAX_MINUTES: f64 = 1440.0;
}
