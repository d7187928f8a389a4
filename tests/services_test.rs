// ABOUTME: Integration tests for the application services over an in-memory store
// ABOUTME: Covers exercise logging, deletion, metrics queries, profiles, records and photos
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use gympro::errors::ErrorCode;
use gympro::models::{ExerciseId, MissingFields, ProfileForm, Sex, YearMonth, Zone};
use gympro::services::photos::image_data_url;
use gympro::services::{RecordForm, Services};
use gympro::store::{FitnessStore, JsonFileStore};
use gympro_intelligence::BodyFatError;
use std::collections::HashSet;
use std::sync::Arc;
use tempfile::TempDir;
use uuid::Uuid;

use common::{cardio, day, lift, male_reference_form, memory_services};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

// === Training ===

#[tokio::test]
async fn test_add_exercise_appends_in_order_with_unique_ids() {
    let (services, _, user) = memory_services();
    let training = &services.training;
    let date = day("2025-03-03");

    let first = training
        .add_exercise(user, date, &lift("Pecho", "Press Banca", "80"))
        .await
        .unwrap();
    let second = training
        .add_exercise(user, date, &lift("Pecho", "Press Banca", "82.5"))
        .await
        .unwrap();
    let third = training
        .add_exercise(user, date, &cardio("Cinta", "25"))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(second.id, third.id);
    assert_eq!(first.zone, Zone::Chest);
    assert_eq!(third.minutes, Some(25.0));
    assert_eq!(third.weight_kg, None);

    let entries = training.workout_day(user, date).await.unwrap();
    let ids: Vec<ExerciseId> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[tokio::test]
async fn test_add_exercise_rejects_invalid_forms() {
    let (services, store, user) = memory_services();
    let date = day("2025-03-03");

    let no_weight = lift("Pecho", "Press Banca", "");
    let error = services
        .training
        .add_exercise(user, date, &no_weight)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);

    let no_minutes = cardio("Bicicleta", "0");
    assert!(services
        .training
        .add_exercise(user, date, &no_minutes)
        .await
        .is_err());

    let unknown_zone = lift("Cuello", "Press Banca", "80");
    assert!(services
        .training
        .add_exercise(user, date, &unknown_zone)
        .await
        .is_err());

    assert!(store.load_workout_log(user).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_exercise_removes_entry_and_empty_day() {
    let (services, _, user) = memory_services();
    let training = &services.training;
    let date = day("2025-03-04");

    let keep = training
        .add_exercise(user, date, &lift("Espalda", "Dominadas", "10"))
        .await
        .unwrap();
    let drop = training
        .add_exercise(user, date, &lift("Espalda", "Remo con Barra", "60"))
        .await
        .unwrap();

    training.delete_exercise(user, date, drop.id).await.unwrap();
    let remaining = training.workout_day(user, date).await.unwrap();
    assert_eq!(remaining, vec![keep.clone()]);

    training.delete_exercise(user, date, keep.id).await.unwrap();
    assert!(training.workout_log(user).await.unwrap().is_empty());

    let error = training
        .delete_exercise(user, date, keep.id)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_month_stats_and_history_follow_the_log() {
    let (services, _, user) = memory_services();
    let training = &services.training;

    for d in ["2025-04-01", "2025-04-02", "2025-04-02", "2025-04-30", "2025-03-15"] {
        training
            .add_exercise(user, day(d), &lift("Piernas", "Sentadilla", "100"))
            .await
            .unwrap();
    }

    let april = training
        .month_stats(user, YearMonth::new(2025, 4).unwrap())
        .await
        .unwrap();
    assert_eq!(april.trained_days, 3);
    assert_eq!(april.total_days, 30);
    assert_eq!(april.percent, 10);

    let history = training
        .rolling_history(user, 3, date("2025-04-20"))
        .await
        .unwrap();
    let counts: Vec<u32> = history.iter().map(|m| m.trained_day_count).collect();
    assert_eq!(counts, vec![3, 1, 0]);
    assert_eq!(history[1].month_label, "Marzo");
}

#[tokio::test]
async fn test_load_series_and_names() {
    let (services, _, user) = memory_services();
    let training = &services.training;

    training
        .add_exercise(user, day("2025-02-01"), &lift("Pecho", "Press Banca", "80"))
        .await
        .unwrap();
    training
        .add_exercise(user, day("2025-02-01"), &lift("Pecho", "Press Banca", "85"))
        .await
        .unwrap();
    training
        .add_exercise(user, day("2025-02-08"), &lift("Pecho", "Press Banca", "87.5"))
        .await
        .unwrap();
    training
        .add_exercise(user, day("2025-02-08"), &cardio("Remo", "15"))
        .await
        .unwrap();

    let series = training.load_series(user, "Press Banca").await.unwrap();
    let maxima: Vec<f64> = series.points().iter().map(|p| p.max_weight).collect();
    assert_eq!(maxima, vec![85.0, 87.5]);
    assert_eq!(series.total_progress(), Some(2.5));

    assert!(training.load_series(user, "Remo").await.unwrap().is_empty());
    assert_eq!(
        training.logged_exercise_names(user).await.unwrap(),
        vec!["Press Banca".to_owned(), "Remo".to_owned()]
    );
}

/// Add `count` entries to one day from parallel tasks and check none is lost
async fn check_parallel_adds_keep_every_entry(services: Services, user: Uuid, count: u64) {
    let date = day("2025-03-03");
    let mut handles = Vec::new();
    for n in 0..count {
        let services = services.clone();
        handles.push(tokio::spawn(async move {
            let weight = (60 + n).to_string();
            services
                .training
                .add_exercise(user, date, &lift("Pecho", "Press Banca", &weight))
                .await
                .unwrap()
        }));
    }

    let mut returned = HashSet::new();
    for handle in handles {
        returned.insert(handle.await.unwrap().id);
    }
    assert_eq!(returned.len() as u64, count);

    let stored = services.training.workout_day(user, date).await.unwrap();
    assert_eq!(stored.len() as u64, count);
    let stored_ids: HashSet<ExerciseId> = stored.iter().map(|e| e.id).collect();
    assert_eq!(stored_ids, returned);

    // Deleting one id removes exactly one entry
    let victim = stored[0].id;
    services
        .training
        .delete_exercise(user, date, victim)
        .await
        .unwrap();
    let after = services.training.workout_day(user, date).await.unwrap();
    assert_eq!(after.len() as u64, count - 1);
    assert!(after.iter().all(|e| e.id != victim));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_parallel_adds_on_memory_store() {
    let (services, _, user) = memory_services();
    check_parallel_adds_keep_every_entry(services, user, 20).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_parallel_adds_on_json_file_store() {
    let dir = TempDir::new().unwrap();
    let store: Arc<dyn FitnessStore> = Arc::new(JsonFileStore::new(dir.path()));
    check_parallel_adds_keep_every_entry(Services::new(store), Uuid::new_v4(), 20).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_deletes_of_distinct_entries() {
    let (services, _, user) = memory_services();
    let date = day("2025-03-05");
    let mut ids = Vec::new();
    for weight in ["50", "55", "60", "65", "70", "75"] {
        let entry = services
            .training
            .add_exercise(user, date, &lift("Piernas", "Sentadilla", weight))
            .await
            .unwrap();
        ids.push(entry.id);
    }

    let mut handles = Vec::new();
    for id in ids {
        let services = services.clone();
        handles.push(tokio::spawn(async move {
            services.training.delete_exercise(user, date, id).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert!(services.training.workout_log(user).await.unwrap().is_empty());
}

// === Profile ===

#[tokio::test]
async fn test_save_profile_stores_estimate() {
    let (services, _, user) = memory_services();

    let saved = services
        .profile
        .save_profile(user, &male_reference_form())
        .await
        .unwrap();
    assert_eq!(saved.stored.calculated_fat, Some(13.7));
    assert!(saved.estimate_error.is_none());
    assert!(saved.missing_for_body_fat().is_empty());

    let loaded = services.profile.load_profile(user).await.unwrap().unwrap();
    assert_eq!(loaded, saved.stored);
    assert_eq!(loaded.profile.weight_kg, Some(82.0));
}

#[tokio::test]
async fn test_save_incomplete_female_profile_keeps_unknowns() {
    let (services, _, user) = memory_services();
    let form = ProfileForm {
        sex: Sex::Female,
        height: "165".to_owned(),
        neck: "32".to_owned(),
        waist: "70".to_owned(),
        hip: "abc".to_owned(),
        ..ProfileForm::default()
    };

    let saved = services.profile.save_profile(user, &form).await.unwrap();
    assert_eq!(saved.stored.calculated_fat, None);
    assert_eq!(saved.stored.profile.hip_cm, None);
    assert_eq!(saved.missing_for_body_fat(), MissingFields::HIP);
    assert_eq!(
        saved.estimate_error,
        Some(BodyFatError::MissingInputs(MissingFields::HIP))
    );
    assert!(services.profile.load_profile(user).await.unwrap().is_some());
}

// === Records ===

#[tokio::test]
async fn test_personal_record_requires_logged_exercise_and_latest_wins() {
    let (services, _, user) = memory_services();
    let today = date("2025-05-10");
    let form = RecordForm {
        exercise: "Press Banca".to_owned(),
        weight: "100".to_owned(),
        reps: "5".to_owned(),
    };

    let error = services
        .records
        .record_personal_record(user, &form, today)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    services
        .training
        .add_exercise(user, day("2025-05-09"), &lift("Pecho", "Press Banca", "90"))
        .await
        .unwrap();

    let record = services
        .records
        .record_personal_record(user, &form, today)
        .await
        .unwrap();
    assert_eq!(record.estimated_one_rep_max, 117);
    assert_eq!(record.date, today);

    let lighter = RecordForm {
        weight: "95".to_owned(),
        reps: "2".to_owned(),
        ..form
    };
    services
        .records
        .record_personal_record(user, &lighter, date("2025-05-17"))
        .await
        .unwrap();

    let records = services.records.list_personal_records(user).await.unwrap();
    assert_eq!(records.len(), 1);
    let stored = &records["Press Banca"];
    assert_eq!(stored.reps, 2);
    assert_eq!(stored.estimated_one_rep_max, 101);
}

#[tokio::test]
async fn test_personal_record_validation() {
    let (services, _, user) = memory_services();
    let today = date("2025-05-10");

    let missing_reps = RecordForm {
        exercise: "Sentadilla".to_owned(),
        weight: "140".to_owned(),
        reps: String::new(),
    };
    let error = services
        .records
        .record_personal_record(user, &missing_reps, today)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);

    let blank_name = RecordForm {
        exercise: "  ".to_owned(),
        ..missing_reps
    };
    assert!(services
        .records
        .record_personal_record(user, &blank_name, today)
        .await
        .is_err());
}

// === Photos ===

#[tokio::test]
async fn test_history_with_photos_joins_by_month() {
    let (services, _, user) = memory_services();
    let march = YearMonth::new(2025, 3).unwrap();

    services
        .training
        .add_exercise(user, day("2025-03-10"), &lift("Brazos", "Curl con Barra", "30"))
        .await
        .unwrap();
    services
        .photos
        .save_monthly_photo(
            user,
            march,
            image_data_url("image/png", b"png-bytes"),
            date("2025-03-31"),
        )
        .await
        .unwrap();

    let rows = services
        .photos
        .history_with_photos(user, 6, date("2025-04-02"))
        .await
        .unwrap();
    assert_eq!(rows.len(), 6);
    assert!(rows[0].photo.is_none());
    assert_eq!(rows[1].summary.month, march);
    assert_eq!(rows[1].summary.trained_day_count, 1);
    assert_eq!(
        rows[1].photo.as_ref().map(|p| p.date),
        Some(date("2025-03-31"))
    );
    assert!(rows[2..].iter().all(|row| row.photo.is_none()));
}

#[tokio::test]
async fn test_save_monthly_photo_rejects_non_images() {
    let (services, _, user) = memory_services();
    let month = YearMonth::new(2025, 1).unwrap();
    let today = date("2025-01-20");

    let error = services
        .photos
        .save_monthly_photo(user, month, String::new(), today)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);

    let error = services
        .photos
        .save_monthly_photo(user, month, "data:text/plain;base64,AAAA".to_owned(), today)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}
