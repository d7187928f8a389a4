// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro
// ABOUTME: Biometric profile commands for gympro-cli

use anyhow::Result;
use gympro_core::models::ProfileForm;
use gympro_intelligence::BodyFatError;

use super::Context;
use crate::helpers::display::{print_missing_measurements, print_profile};

/// Replace the stored profile
pub async fn set(context: &Context, form: &ProfileForm) -> Result<()> {
    let saved = context
        .services
        .profile
        .save_profile(context.user, form)
        .await?;
    print_profile(&saved.stored);
    match saved.estimate_error {
        Some(BodyFatError::MissingInputs(missing)) => print_missing_measurements(missing),
        Some(reason) => println!("Body fat unavailable: {reason}"),
        None => {}
    }
    Ok(())
}

/// Print the stored profile
pub async fn show(context: &Context) -> Result<()> {
    match context.services.profile.load_profile(context.user).await? {
        Some(stored) => print_profile(&stored),
        None => println!("No profile saved yet"),
    }
    Ok(())
}
