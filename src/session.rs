// ABOUTME: Anonymous user identity persisted in the data directory
// ABOUTME: A random UUID is minted on first use and reused by every later invocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use crate::constants::storage::SESSION_FILE;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

/// Anonymous session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user_id: Uuid,
    created_at: DateTime<Utc>,
}

impl Session {
    /// Fresh identity that is not persisted anywhere
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    /// Identity owning the stored documents
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// When the identity was minted
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Load `<data_dir>/session.json`, creating it on first use
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be read or written, or
    /// exists but does not hold a session
    pub async fn load_or_create(data_dir: &Path) -> AppResult<Self> {
        let path = data_dir.join(SESSION_FILE);
        match fs::read(&path).await {
            Ok(bytes) => {
                let session: Self = serde_json::from_slice(&bytes).map_err(|e| {
                    AppError::serialization(format!(
                        "session file {} is invalid: {e}",
                        path.display()
                    ))
                    .with_source(e)
                })?;
                debug!(user = %session.user_id, "resumed session");
                Ok(session)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let session = Self::anonymous();
                fs::create_dir_all(data_dir).await.map_err(|e| {
                    AppError::storage(format!("cannot create {}: {e}", data_dir.display()))
                        .with_source(e)
                })?;
                let bytes = serde_json::to_vec_pretty(&session)?;
                fs::write(&path, bytes).await.map_err(|e| {
                    AppError::storage(format!("cannot write {}: {e}", path.display()))
                        .with_source(e)
                })?;
                info!(user = %session.user_id, path = %path.display(), "created anonymous session");
                Ok(session)
            }
            Err(e) => Err(AppError::storage(format!("cannot read {}: {e}", path.display()))
                .with_source(e)),
        }
    }
}
