// ABOUTME: Metric algorithms over profile and workout-log snapshots
// ABOUTME: Body fat, monthly consistency, progressive-overload series and one-rep max

//! Algorithm module
//!
//! Each submodule is a closed-form computation with no iteration state.
//! Unavailable results are `None` (or an empty series), never an error the
//! caller has to unwind.

pub mod body_composition;
pub mod consistency;
pub mod load_series;
pub mod one_rep_max;
