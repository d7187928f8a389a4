// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro
// ABOUTME: Output formatting helpers for gympro-cli
// ABOUTME: Text renderings of entries, the month calendar, history rows, load series and the profile

use gympro::constants::calendar::WEEKDAY_INITIALS;
use gympro::services::HistoryRow;
use gympro_core::models::{
    ExerciseEntry, MissingFields, MonthStats, StoredProfile, WorkoutLog, YearMonth,
};
use gympro_intelligence::LoadSeries;

const BAR_WIDTH: f64 = 30.0;

/// List the measurements the body-fat estimate still needs
pub fn print_missing_measurements(missing: MissingFields) {
    if !missing.is_empty() {
        println!("Missing for body fat: {}", missing.field_names().join(", "));
    }
}

/// One line per entry, in insertion order
pub fn print_entries(entries: &[ExerciseEntry]) {
    if entries.is_empty() {
        println!("  (rest day)");
        return;
    }
    for entry in entries {
        let detail = if entry.is_timed() {
            format!("{} min", entry.minutes.unwrap_or_default())
        } else {
            let sets = entry.sets.map_or_else(|| "-".to_owned(), |s| s.to_string());
            let reps = entry.reps.map_or_else(|| "-".to_owned(), |r| r.to_string());
            format!(
                "{sets}x{reps} @ {} kg",
                entry.weight_kg.unwrap_or_default()
            )
        };
        println!("  #{:<14} {:<10} {:<28} {detail}", entry.id, entry.zone, entry.name);
    }
}

/// Sunday-first calendar grid with trained days starred
pub fn print_calendar(month: YearMonth, log: &WorkoutLog, stats: MonthStats) {
    println!(
        "{} {}  {}/{} days trained ({}%)",
        month.label(),
        month.year(),
        stats.trained_days,
        stats.total_days,
        stats.percent
    );
    let header: Vec<String> = WEEKDAY_INITIALS.iter().map(|d| format!("{d:>4}")).collect();
    println!("{}", header.concat());

    let mut line = "    ".repeat(month.leading_blank_days() as usize);
    let mut column = month.leading_blank_days();
    for date in month.date_keys() {
        let marker = if log.day(date).is_empty() { ' ' } else { '*' };
        line.push_str(&format!("{:>3}{marker}", date.date().format("%-d")));
        column += 1;
        if column % 7 == 0 {
            println!("{}", line.trim_end());
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }
}

/// One line per month, most recent first
pub fn print_history(rows: &[HistoryRow]) {
    for row in rows {
        let photo = row
            .photo
            .as_ref()
            .map_or_else(|| "no photo".to_owned(), |p| format!("photo {}", p.date));
        println!(
            "{:<11} {}  {:>3}% ({} days)  {photo}",
            row.summary.month_label,
            row.summary.year,
            row.summary.percent_of_days_trained,
            row.summary.trained_day_count
        );
    }
}

/// Horizontal bars scaled to the heaviest load
pub fn print_series(series: &LoadSeries) {
    if series.is_empty() {
        println!("No weighted sets logged for {}", series.exercise());
        return;
    }
    println!("{}", series.exercise());
    for (point, height) in series.points().iter().zip(series.relative_heights()) {
        let bar = "#".repeat((height / 100.0 * BAR_WIDTH).round() as usize);
        println!("  {}  {bar:<30} {} kg", point.date, point.max_weight);
    }
    match series.total_progress() {
        Some(progress) => println!("Progress: {progress:+} kg"),
        None => println!("Not enough data to show a trend"),
    }
}

/// Measurements and stored estimate
pub fn print_profile(stored: &StoredProfile) {
    let profile = &stored.profile;
    let fields = [
        ("Height", profile.height_cm, "cm"),
        ("Weight", profile.weight_kg, "kg"),
        ("Neck", profile.neck_cm, "cm"),
        ("Waist", profile.waist_cm, "cm"),
        ("Hip", profile.hip_cm, "cm"),
        ("Chest", profile.chest_cm, "cm"),
        ("Arms", profile.arms_cm, "cm"),
        ("Thigh", profile.thigh_cm, "cm"),
    ];
    println!("Sex: {}", profile.sex);
    for (label, value, unit) in fields {
        match value {
            Some(value) => println!("{label:<7} {value} {unit}"),
            None => println!("{label:<7} --"),
        }
    }
    match stored.calculated_fat {
        Some(fat) => println!("Body fat: {fat:.1}%"),
        None => println!("Body fat: --"),
    }
}
