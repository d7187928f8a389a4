// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro
// ABOUTME: Monthly photo command for gympro-cli
// ABOUTME: Reads an image file, encodes it as a data URL and attaches it to a month

use anyhow::{anyhow, Context as _, Result};
use gympro::services::photos::{image_data_url, mime_for_path};
use gympro_core::models::YearMonth;
use std::path::Path;

use super::Context;

/// Attach `file` to `month` (current month by default)
pub async fn set(context: &Context, month: Option<YearMonth>, file: &Path) -> Result<()> {
    let month = month.unwrap_or_else(|| YearMonth::from_date(context.today));
    let mime = mime_for_path(file)
        .ok_or_else(|| anyhow!("{} is not a jpg, png, webp or gif file", file.display()))?;
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let photo = context
        .services
        .photos
        .save_monthly_photo(context.user, month, image_data_url(mime, &bytes), context.today)
        .await?;
    println!(
        "Photo for {} {} saved ({} bytes encoded)",
        month.label(),
        month.year(),
        photo.image.len()
    );
    Ok(())
}
