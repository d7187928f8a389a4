// ABOUTME: Monthly progress photo service and the photo-annotated consistency history
// ABOUTME: Photos are stored as data URLs keyed by month and joined onto the rolling history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use crate::errors::{AppError, AppResult};
use crate::store::FitnessStore;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::NaiveDate;
use gympro_core::models::{MonthSummary, MonthlyPhoto, YearMonth};
use gympro_intelligence::rolling_history;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

const DATA_URL_PREFIX: &str = "data:image/";

/// One history row with the photo of that month, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow {
    /// Consistency figures of the month
    #[serde(flatten)]
    pub summary: MonthSummary,
    /// Photo attached to the month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<MonthlyPhoto>,
}

/// Encode raw image bytes as a `data:` URL
#[must_use]
pub fn image_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Image MIME type guessed from a file extension
#[must_use]
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

/// Monthly photo service
#[derive(Clone)]
pub struct PhotoService {
    store: Arc<dyn FitnessStore>,
}

impl PhotoService {
    /// Create the service over `store`
    #[must_use]
    pub fn new(store: Arc<dyn FitnessStore>) -> Self {
        Self { store }
    }

    /// Attach `image` (an image data URL) to `month`, replacing any previous photo
    ///
    /// # Errors
    ///
    /// Returns an error if the image is empty or not an image data URL, or
    /// the store fails
    pub async fn save_monthly_photo(
        &self,
        user: Uuid,
        month: YearMonth,
        image: String,
        today: NaiveDate,
    ) -> AppResult<MonthlyPhoto> {
        if image.trim().is_empty() {
            return Err(AppError::missing_field("image"));
        }
        if !image.starts_with(DATA_URL_PREFIX) {
            return Err(AppError::invalid_format(
                "Photo must be an image data URL (data:image/...)",
            ));
        }

        let photo = MonthlyPhoto { image, date: today };
        self.store
            .save_monthly_photo(user, month, photo.clone())
            .await?;
        info!(
            user = %user,
            month = %month,
            bytes = photo.image.len(),
            "monthly photo saved"
        );
        Ok(photo)
    }

    /// Rolling history joined with the photo of each month
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn history_with_photos(
        &self,
        user: Uuid,
        months_back: usize,
        reference_date: NaiveDate,
    ) -> AppResult<Vec<HistoryRow>> {
        let log = self.store.load_workout_log(user).await?;
        let mut photos = self.store.list_monthly_photos(user).await?;

        Ok(rolling_history(&log, months_back, reference_date)
            .into_iter()
            .map(|summary| {
                let photo = photos.remove(&summary.month.photo_key());
                HistoryRow { summary, photo }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_data_url() {
        assert_eq!(
            image_data_url("image/png", b"abc"),
            "data:image/png;base64,YWJj"
        );
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("march.JPG")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("a/b/c.webp")), Some("image/webp"));
        assert_eq!(mime_for_path(Path::new("notes.txt")), None);
        assert_eq!(mime_for_path(Path::new("no_extension")), None);
    }
}
