// ABOUTME: Criterion benchmarks for the metrics engine
// ABOUTME: Measures rolling history, load series and body-fat estimation over synthetic logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

//! Criterion benchmarks for the metrics engine.
//!
//! Logs are generated with one to three entries per training day over a
//! span of years, which is the shape a long-term user accumulates.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gympro::intelligence::{
    estimate_body_fat_percent, load_series, logged_exercise_names, rolling_history,
};
use gympro::models::{
    BiometricProfile, DateKey, ExerciseEntry, ExerciseId, Sex, WorkoutLog, Zone,
};

const EXERCISES: [(&str, Zone); 4] = [
    ("Press Banca", Zone::Chest),
    ("Sentadilla", Zone::Legs),
    ("Peso Muerto", Zone::Back),
    ("Curl con Barra", Zone::Arms),
];

/// Synthetic log with a session every other day
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_log(training_days: usize) -> WorkoutLog {
    let Some(start) = NaiveDate::from_ymd_opt(2020, 1, 1) else {
        return WorkoutLog::new();
    };
    let mut log = WorkoutLog::new();
    let mut id = 0_u64;
    for day in 0..training_days {
        let Ok(date) = DateKey::new(start + Duration::days(2 * day as i64)) else {
            continue;
        };
        for slot in 0..=(day % 3) {
            let (name, zone) = EXERCISES[(day + slot) % EXERCISES.len()];
            id += 1;
            log.push(
                date,
                ExerciseEntry {
                    id: ExerciseId(id),
                    zone,
                    name: name.to_owned(),
                    sets: Some(4),
                    reps: Some(8),
                    weight_kg: Some(40.0 + (day % 60) as f64),
                    minutes: None,
                },
            );
        }
    }
    log
}

fn bench_rolling_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_history");
    let reference = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default();

    for days in [30, 365, 1500] {
        let log = generate_log(days);
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::new("six_months", days), &log, |b, log| {
            b.iter(|| rolling_history(black_box(log), black_box(6), black_box(reference)));
        });
        group.bench_with_input(BenchmarkId::new("five_years", days), &log, |b, log| {
            b.iter(|| rolling_history(black_box(log), black_box(60), black_box(reference)));
        });
    }

    group.finish();
}

fn bench_load_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_series");

    for days in [30, 365, 1500] {
        let log = generate_log(days);
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::new("press_banca", days), &log, |b, log| {
            b.iter(|| load_series(black_box(log), black_box("Press Banca")));
        });
        group.bench_with_input(BenchmarkId::new("exercise_names", days), &log, |b, log| {
            b.iter(|| logged_exercise_names(black_box(log)));
        });
    }

    group.finish();
}

fn bench_body_fat(c: &mut Criterion) {
    let male = BiometricProfile {
        sex: Sex::Male,
        height_cm: Some(180.0),
        neck_cm: Some(40.0),
        waist_cm: Some(85.0),
        ..BiometricProfile::default()
    };
    let female = BiometricProfile {
        sex: Sex::Female,
        height_cm: Some(165.0),
        neck_cm: Some(32.0),
        waist_cm: Some(70.0),
        hip_cm: Some(95.0),
        ..BiometricProfile::default()
    };

    c.bench_function("body_fat_male", |b| {
        b.iter(|| estimate_body_fat_percent(black_box(&male)));
    });
    c.bench_function("body_fat_female", |b| {
        b.iter(|| estimate_body_fat_percent(black_box(&female)));
    });
}

criterion_group!(benches, bench_rolling_history, bench_load_series, bench_body_fat);
criterion_main!(benches);
