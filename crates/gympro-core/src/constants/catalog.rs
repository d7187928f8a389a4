// ABOUTME: Fixed exercise picklist grouped by body zone
// ABOUTME: Drives the zone and exercise selectors of the workout logger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

use crate::models::Zone;

/// Chest exercises
pub const CHEST: &[&str] = &[
    "Press Banca",
    "Press Inclinado",
    "Aperturas",
    "Flexiones",
    "Cruce de Poleas",
];

/// Back exercises
pub const BACK: &[&str] = &[
    "Dominadas",
    "Remo con Barra",
    "Jalón al Pecho",
    "Remo Gironda",
    "Peso Muerto",
];

/// Leg exercises
pub const LEGS: &[&str] = &[
    "Sentadilla",
    "Prensa",
    "Extensiones de Cuádriceps",
    "Curl Femoral",
    "Gemelos",
];

/// Arm exercises
pub const ARMS: &[&str] = &[
    "Curl con Barra",
    "Curl Martillo",
    "Extensiones de Tríceps",
    "Press Francés",
];

/// Forearm exercises
pub const FOREARMS: &[&str] = &["Curl de Muñeca", "Curl Inverso", "Paseo del Granjero"];

/// Core exercises
pub const ABS: &[&str] = &["Crunch", "Plancha", "Elevación de Piernas", "Rueda Abdominal"];

/// Timed cardio activities
pub const CARDIO: &[&str] = &["Cinta", "Bicicleta", "Elíptica", "Remo", "Escaladora"];

/// Exercise names offered for a zone
#[must_use]
pub const fn exercises_for(zone: Zone) -> &'static [&'static str] {
    match zone {
        Zone::Chest => CHEST,
        Zone::Back => BACK,
        Zone::Legs => LEGS,
        Zone::Arms => ARMS,
        Zone::Forearms => FOREARMS,
        Zone::Abs => ABS,
        Zone::Cardio => CARDIO,
    }
}

/// Whether `name` is part of the picklist for `zone`
#[must_use]
pub fn is_listed(zone: Zone, name: &str) -> bool {
    exercises_for(zone).contains(&name)
}
