// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro
// ABOUTME: Report commands for gympro-cli
// ABOUTME: Monthly calendar, rolling consistency history and max-load series

use anyhow::{bail, Result};
use gympro::constants::defaults::MAX_HISTORY_MONTHS;
use gympro_core::models::YearMonth;

use super::Context;
use crate::helpers::display::{print_calendar, print_history, print_series};

/// Trained days of a month as a calendar grid
pub async fn stats(context: &Context, month: Option<YearMonth>) -> Result<()> {
    let month = month.unwrap_or_else(|| YearMonth::from_date(context.today));
    let log = context.services.training.workout_log(context.user).await?;
    let stats = context
        .services
        .training
        .month_stats(context.user, month)
        .await?;
    print_calendar(month, &log, stats);
    Ok(())
}

/// Rolling history with photo markers
pub async fn history(context: &Context, months: Option<usize>) -> Result<()> {
    let months = months.unwrap_or(context.history_months);
    if months == 0 || months > MAX_HISTORY_MONTHS {
        bail!("months must be between 1 and {MAX_HISTORY_MONTHS}, got {months}");
    }
    let rows = context
        .services
        .photos
        .history_with_photos(context.user, months, context.today)
        .await?;
    print_history(&rows);
    Ok(())
}

/// Max-load series of one exercise, or the list of logged names
pub async fn series(context: &Context, exercise: Option<String>) -> Result<()> {
    let Some(exercise) = exercise else {
        let names = context
            .services
            .training
            .logged_exercise_names(context.user)
            .await?;
        if names.is_empty() {
            println!("No exercises logged yet");
        }
        for name in names {
            println!("{name}");
        }
        return Ok(());
    };

    let series = context
        .services
        .training
        .load_series(context.user, &exercise)
        .await?;
    print_series(&series);
    Ok(())
}
