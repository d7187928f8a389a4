// ABOUTME: Training consistency aggregation over the date-keyed workout log
// ABOUTME: Trained days per month, percentage of the month trained, rolling monthly history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use chrono::NaiveDate;
use gympro_core::models::{MonthStats, MonthSummary, WorkoutLog, YearMonth};
use std::iter;
use tracing::trace;

/// Trained-day statistics for one calendar month
///
/// A day counts as trained when its date key lies in `month` and its entry
/// list is non-empty. `percent` is `round(trained / total * 100)`.
///
/// # Example
///
/// ```rust
/// use gympro_core::models::{WorkoutLog, YearMonth};
/// use gympro_intelligence::month_stats;
///
/// let stats = month_stats(&WorkoutLog::new(), YearMonth::new(2024, 2).unwrap());
/// assert_eq!(stats.total_days, 29);
/// assert_eq!(stats.percent, 0);
/// ```
#[must_use]
pub fn month_stats(log: &WorkoutLog, month: YearMonth) -> MonthStats {
    let trained_days = log
        .trained_dates()
        .filter(|date| month.contains(*date))
        .count() as u32;
    let total_days = month.days_in_month();
    let percent = (f64::from(trained_days) / f64::from(total_days) * 100.0).round() as u32;

    MonthStats {
        trained_days,
        total_days,
        percent,
    }
}

/// Consistency history of `months_back` consecutive months, most recent first
///
/// The first row is the month containing `reference_date`. The result is a
/// snapshot: calling again after the log changes builds a new one.
#[must_use]
pub fn rolling_history(
    log: &WorkoutLog,
    months_back: usize,
    reference_date: NaiveDate,
) -> Vec<MonthSummary> {
    let start = YearMonth::from_date(reference_date);
    let history: Vec<MonthSummary> = iter::successors(Some(start), |month| month.previous())
        .take(months_back)
        .map(|month| MonthSummary::new(month, month_stats(log, month)))
        .collect();

    trace!(
        months = history.len(),
        reference = %reference_date,
        "built rolling consistency history"
    );
    history
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use gympro_core::models::{DateKey, ExerciseEntry, ExerciseId, Zone};

    fn entry(id: u64) -> ExerciseEntry {
        ExerciseEntry {
            id: ExerciseId(id),
            zone: Zone::Legs,
            name: "Sentadilla".to_owned(),
            sets: Some(5),
            reps: Some(5),
            weight_kg: Some(100.0),
            minutes: None,
        }
    }

    fn log_with(dates: &[&str]) -> WorkoutLog {
        let mut log = WorkoutLog::new();
        for (i, date) in dates.iter().enumerate() {
            log.push(date.parse::<DateKey>().unwrap(), entry(i as u64));
        }
        log
    }

    #[test]
    fn test_ten_days_in_thirty_day_month() {
        let dates: Vec<String> = (1..=10).map(|d| format!("2025-04-{d:02}")).collect();
        let refs: Vec<&str> = dates.iter().map(String::as_str).collect();
        let stats = month_stats(&log_with(&refs), YearMonth::new(2025, 4).unwrap());
        assert_eq!(
            stats,
            MonthStats {
                trained_days: 10,
                total_days: 30,
                percent: 33
            }
        );
    }

    #[test]
    fn test_other_months_and_empty_days_do_not_count() {
        let mut log = log_with(&["2025-03-31", "2025-04-01", "2024-04-02", "2025-05-01"]);
        log.set_day("2025-04-03".parse().unwrap(), Vec::new());
        let stats = month_stats(&log, YearMonth::new(2025, 4).unwrap());
        assert_eq!(stats.trained_days, 1);
    }

    #[test]
    fn test_percent_is_rounded_to_whole_number() {
        // 1 of 28 days is 3.57%
        let stats = month_stats(&log_with(&["2023-02-10"]), YearMonth::new(2023, 2).unwrap());
        assert_eq!(stats.total_days, 28);
        assert_eq!(stats.percent, 4);
    }

    #[test]
    fn test_full_month_is_one_hundred_percent() {
        let month = YearMonth::new(2024, 2).unwrap();
        let dates: Vec<String> = month.date_keys().iter().map(ToString::to_string).collect();
        let refs: Vec<&str> = dates.iter().map(String::as_str).collect();
        assert_eq!(month_stats(&log_with(&refs), month).percent, 100);
    }

    #[test]
    fn test_rolling_history_is_most_recent_first_across_years() {
        let log = log_with(&["2025-01-05", "2024-12-24", "2024-12-25", "2024-08-01"]);
        let reference = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        let history = rolling_history(&log, 6, reference);

        assert_eq!(history.len(), 6);
        let months: Vec<String> = history.iter().map(|m| m.month.to_string()).collect();
        assert_eq!(
            months,
            vec!["2025-02", "2025-01", "2024-12", "2024-11", "2024-10", "2024-09"]
        );
        assert_eq!(history[0].month_label, "Febrero");
        assert_eq!(history[1].trained_day_count, 1);
        assert_eq!(history[2].trained_day_count, 2);
        assert_eq!(history[2].year, 2024);
        assert!(history.iter().all(|m| m.percent_of_days_trained <= 100));
    }

    #[test]
    fn test_rolling_history_zero_months_is_empty() {
        let reference = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        assert!(rolling_history(&WorkoutLog::new(), 0, reference).is_empty());
    }
}
