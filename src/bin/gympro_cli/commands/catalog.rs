// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro
// ABOUTME: Exercise picklist command for gympro-cli

use gympro_core::models::Zone;

/// Print the picklist of one zone, or of every zone
pub fn show(zone: Option<Zone>) {
    let zones: &[Zone] = match &zone {
        Some(zone) => std::slice::from_ref(zone),
        None => &Zone::ALL,
    };
    for zone in zones {
        let kind = if zone.is_timed() { "minutes" } else { "kg" };
        println!("{} ({kind})", zone.label());
        for exercise in zone.exercises() {
            println!("  - {exercise}");
        }
    }
}
