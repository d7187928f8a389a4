// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro
// ABOUTME: Workout log commands for gympro-cli
// ABOUTME: Handles add, delete and show operations on one training day

use anyhow::Result;
use gympro_core::models::{DateKey, ExerciseId, NewExercise};
use tracing::info;

use super::Context;
use crate::helpers::display::print_entries;

fn day_or_today(context: &Context, date: Option<DateKey>) -> Result<DateKey> {
    match date {
        Some(date) => Ok(date),
        None => Ok(DateKey::new(context.today)?),
    }
}

/// Append an exercise to a day
pub async fn add(context: &Context, date: Option<DateKey>, form: &NewExercise) -> Result<()> {
    let date = day_or_today(context, date)?;
    let entry = context
        .services
        .training
        .add_exercise(context.user, date, form)
        .await?;
    info!("Logged {} on {date}", entry.name);
    println!("Added #{} {} to {date}", entry.id, entry.name);
    Ok(())
}

/// Delete one entry from a day
pub async fn delete(context: &Context, date: DateKey, id: ExerciseId) -> Result<()> {
    context
        .services
        .training
        .delete_exercise(context.user, date, id)
        .await?;
    println!("Deleted #{id} from {date}");
    Ok(())
}

/// Print the entries of a day
pub async fn show(context: &Context, date: Option<DateKey>) -> Result<()> {
    let date = day_or_today(context, date)?;
    let entries = context
        .services
        .training
        .workout_day(context.user, date)
        .await?;
    println!("{date}");
    print_entries(&entries);
    Ok(())
}
