// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro
// ABOUTME: Personal record commands for gympro-cli
// ABOUTME: Registers failure sets and lists the stored records with their 1RM estimates

use anyhow::Result;
use gympro::services::RecordForm;

use super::Context;

/// Store a failure set dated today
pub async fn record(context: &Context, exercise: String, weight: String, reps: String) -> Result<()> {
    let form = RecordForm {
        exercise,
        weight,
        reps,
    };
    let record = context
        .services
        .records
        .record_personal_record(context.user, &form, context.today)
        .await?;
    println!(
        "PR {}: {} kg x {} (1RM est. {} kg)",
        form.exercise.trim(),
        record.weight_kg,
        record.reps,
        record.estimated_one_rep_max
    );
    Ok(())
}

/// Print every stored record
pub async fn list(context: &Context) -> Result<()> {
    let records = context
        .services
        .records
        .list_personal_records(context.user)
        .await?;
    if records.is_empty() {
        println!("No personal records yet");
    }
    for (exercise, record) in &records {
        println!(
            "{exercise:<28} {:>7} kg x {:<3} 1RM est. {:>4} kg  {}",
            record.weight_kg, record.reps, record.estimated_one_rep_max, record.date
        );
    }
    Ok(())
}
