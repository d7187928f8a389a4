// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro
// ABOUTME: Stateless calculator commands for gympro-cli
// ABOUTME: Body-fat estimate from measurements and one-rep max from a failure set

use anyhow::{bail, Result};
use gympro_core::models::ProfileForm;
use gympro_intelligence::{assess_body_fat, estimate_one_rep_max, BodyFatError};

use crate::helpers::display::print_missing_measurements;

/// Print the body-fat estimate or why it is unavailable
pub fn body_fat(form: &ProfileForm) {
    let parsed = form.parse();
    match assess_body_fat(&parsed.profile) {
        Ok(percent) => println!("Body fat ({}): {percent:.1}%", parsed.profile.sex),
        Err(BodyFatError::MissingInputs(missing)) => {
            println!("Body fat: --");
            print_missing_measurements(missing);
        }
        Err(reason) => println!("Body fat: -- ({reason})"),
    }
}

/// Print the estimated one-rep max
pub fn one_rm(weight_kg: f64, reps: u32) -> Result<()> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        bail!("weight must be a positive number of kilograms, got {weight_kg}");
    }
    println!(
        "{weight_kg} kg x {reps}: estimated 1RM {} kg",
        estimate_one_rep_max(weight_kg, reps)
    );
    Ok(())
}
