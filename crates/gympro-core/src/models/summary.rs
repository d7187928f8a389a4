// ABOUTME: Derived training consistency statistics for calendar months
// ABOUTME: MonthStats backs the calendar counter, MonthSummary backs the history screen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use super::YearMonth;
use serde::{Deserialize, Serialize};

/// Trained-day statistics of one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthStats {
    /// Days with at least one logged entry
    pub trained_days: u32,
    /// Calendar days in the month
    pub total_days: u32,
    /// `trained_days / total_days` as a rounded percentage
    pub percent: u32,
}

/// One row of the rolling consistency history (derived, never persisted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The month summarized
    pub month: YearMonth,
    /// Display label of the month
    pub month_label: String,
    /// Calendar year
    pub year: i32,
    /// Days with at least one logged entry
    pub trained_day_count: u32,
    /// Rounded percentage of days trained, in `0..=100`
    pub percent_of_days_trained: u32,
}

impl MonthSummary {
    /// Pair a month with its statistics
    #[must_use]
    pub fn new(month: YearMonth, stats: MonthStats) -> Self {
        Self {
            month,
            month_label: month.label().to_owned(),
            year: month.year(),
            trained_day_count: stats.trained_days,
            percent_of_days_trained: stats.percent,
        }
    }
}
