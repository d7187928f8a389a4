// ABOUTME: Unified error types re-exported from gympro-core for the application layer
// ABOUTME: Services return AppResult; storage and engine errors convert into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPro

pub use gympro_core::errors::{AppError, AppResult, ErrorCode};
