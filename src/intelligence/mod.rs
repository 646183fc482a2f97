// ABOUTME: Derived health metric calculations
// ABOUTME: Currently basal metabolic rate from body weight and profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Basal metabolic rate (Mifflin-St Jeor)
pub mod bmr;

pub use bmr::{compute_bmr, compute_bmr_with_config, BmrConfig};
