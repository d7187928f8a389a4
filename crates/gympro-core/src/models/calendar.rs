// ABOUTME: Calendar keys used by the workout log and the monthly history
// ABOUTME: DateKey preserves the exact YYYY-MM-DD text contract, YearMonth validates month ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use crate::constants::calendar::{DATE_KEY_FORMAT, DATE_KEY_LEN, MAX_KEY_YEAR, MONTH_LABELS};
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A training date in its storage form `YYYY-MM-DD`
///
/// The text form is zero padded and always ten characters long, so ordering
/// keys as strings orders them chronologically. The same text is the
/// document id in the external store. Years are limited to `0..=9999`.
///
/// # Examples
///
/// ```rust
/// use gympro_core::models::DateKey;
///
/// let key: DateKey = "2025-03-07".parse().unwrap();
/// assert_eq!(key.to_string(), "2025-03-07");
/// assert!("2025-3-7".parse::<DateKey>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Build a key from a calendar date
    ///
    /// # Errors
    ///
    /// Returns `AppError::out_of_range` if the year does not fit in four digits
    pub fn new(date: NaiveDate) -> AppResult<Self> {
        if (0..=MAX_KEY_YEAR).contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(AppError::out_of_range(format!(
                "Year {} cannot be written as a YYYY-MM-DD key",
                date.year()
            )))
        }
    }

    /// Build a key from numeric parts (month and day are 1-based)
    ///
    /// # Errors
    ///
    /// Returns `AppError::out_of_range` if the parts do not name a real date
    pub fn from_ymd(year: i32, month: u32, day: u32) -> AppResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            AppError::out_of_range(format!("{year}-{month}-{day} is not a calendar date"))
        })?;
        Self::new(date)
    }

    /// The underlying calendar date
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Calendar month containing this date
    #[must_use]
    pub fn year_month(self) -> YearMonth {
        YearMonth::from_date(self.0)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let shape_ok = bytes.len() == DATE_KEY_LEN
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shape_ok {
            return Err(AppError::invalid_format(format!(
                "Date key '{s}' must look like YYYY-MM-DD"
            )));
        }
        let date = NaiveDate::parse_from_str(s, DATE_KEY_FORMAT).map_err(|e| {
            AppError::invalid_format(format!("Date key '{s}' is not a calendar date"))
                .with_source(e)
        })?;
        Self::new(date)
    }
}

impl From<DateKey> for NaiveDate {
    fn from(key: DateKey) -> Self {
        key.0
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A calendar month, always valid (month in `1..=12`)
///
/// Stored as the first day of the month so every derived value (length,
/// first weekday, neighbours) comes straight from `chrono`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// Build a month from a year and a 1-based month number
    ///
    /// # Errors
    ///
    /// Returns `AppError::out_of_range` if `month` is not in `1..=12` or the
    /// year is outside the supported calendar
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| {
                AppError::out_of_range(format!(
                    "Month {month} of year {year} is not a calendar month"
                ))
            })
    }

    /// Month containing `date`
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    /// Calendar year
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// 1-based month number
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// First day of the month
    #[must_use]
    pub const fn first_day(self) -> NaiveDate {
        self.0
    }

    /// Number of calendar days, accounting for leap years
    #[must_use]
    pub fn days_in_month(self) -> u32 {
        match self.month() {
            4 | 6 | 9 | 11 => 30,
            2 if NaiveDate::from_ymd_opt(self.year(), 2, 29).is_some() => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Weekday of the first day, counted from Sunday = 0
    ///
    /// This is the number of blank cells before day 1 in a Sunday-first grid.
    #[must_use]
    pub fn leading_blank_days(self) -> u32 {
        self.first_weekday().num_days_from_sunday()
    }

    /// Weekday of the first day
    #[must_use]
    pub fn first_weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// The month before, if representable
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.0.checked_sub_months(Months::new(1)).map(Self)
    }

    /// The month after, if representable
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add_months(Months::new(1)).map(Self)
    }

    /// Display label of the month
    #[must_use]
    pub fn label(self) -> &'static str {
        MONTH_LABELS[self.0.month0() as usize]
    }

    /// Document id of the month's progress photo: `"{year}-{zero-based month}"`
    #[must_use]
    pub fn photo_key(self) -> String {
        format!("{}-{}", self.year(), self.0.month0())
    }

    /// Whether `key` falls inside this month
    #[must_use]
    pub fn contains(self, key: DateKey) -> bool {
        Self::from_date(key.date()) == self
    }

    /// Every date key of the month, in order
    #[must_use]
    pub fn date_keys(self) -> Vec<DateKey> {
        self.0
            .iter_days()
            .take(self.days_in_month() as usize)
            .filter_map(|date| DateKey::new(date).ok())
            .collect()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::invalid_format(format!("Month '{s}' must look like YYYY-MM"));
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
