// ABOUTME: Centralized coercion of form strings into typed numeric values
// ABOUTME: Blank, non-numeric, non-finite and non-positive inputs all become "unknown"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

//! Form input parsing
//!
//! Every screen collects numbers as text. Conversion happens here and only
//! here, so an unknown measurement is always `None` and never a silent zero.

/// Parse a body measurement or load (centimeters, kilograms, minutes)
///
/// Returns `None` for blank input, text that is not a number, and any value
/// that is not finite and strictly positive.
#[must_use]
pub fn parse_measurement(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Parse a non-negative whole count (sets, repetitions)
///
/// `"0"` is a valid count. Fractions, negatives and blanks are `None`.
#[must_use]
pub fn parse_count(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u32>().ok()
}

/// Keep only usable measurements from an already-typed value
#[must_use]
pub fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_measurement_accepts_decimals_and_whitespace() {
        assert_eq!(parse_measurement(" 82.5 "), Some(82.5));
        assert_eq!(parse_measurement("180"), Some(180.0));
    }

    #[test]
    fn test_parse_measurement_rejects_unknowns() {
        assert_eq!(parse_measurement(""), None);
        assert_eq!(parse_measurement("   "), None);
        assert_eq!(parse_measurement("abc"), None);
        assert_eq!(parse_measurement("0"), None);
        assert_eq!(parse_measurement("-3"), None);
        assert_eq!(parse_measurement("NaN"), None);
        assert_eq!(parse_measurement("inf"), None);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count(" 12"), Some(12));
        assert_eq!(parse_count("4.5"), None);
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn test_usable_filters_invalid_values() {
        assert_eq!(usable(Some(40.0)), Some(40.0));
        assert_eq!(usable(Some(f64::NAN)), None);
        assert_eq!(usable(Some(-1.0)), None);
        assert_eq!(usable(None), None);
    }
}
