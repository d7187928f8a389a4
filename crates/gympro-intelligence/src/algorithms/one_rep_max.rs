// ABOUTME: One-rep-max estimate from a set taken to failure
// ABOUTME: Epley approximation rounded to whole kilograms

use crate::physiological_constants::strength::EPLEY_REPS_DIVISOR;

/// Estimate the single-repetition maximum of a set taken to failure
///
/// `round(weight_kg * (1 + reps / 30))`. Zero repetitions yields the load
/// itself. Negative or non-finite loads are a caller bug; the cast
/// saturates them to `0`.
///
/// # Example
///
/// ```rust
/// use gympro_intelligence::estimate_one_rep_max;
///
/// assert_eq!(estimate_one_rep_max(100.0, 5), 117);
/// assert_eq!(estimate_one_rep_max(100.0, 0), 100);
/// ```
#[must_use]
pub fn estimate_one_rep_max(weight_kg: f64, reps: u32) -> u32 {
    (weight_kg * (1.0 + f64::from(reps) / EPLEY_REPS_DIVISOR)).round() as u32
}
