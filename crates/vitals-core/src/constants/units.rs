// ABOUTME: Unit conversion constants for distance and energy display
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Days per week
pub const DAYS_PER_WEEK: u32 = 7;

/// Days per year (approximation used by the year view)
pub const DAYS_PER_YEAR: u32 = 365;
