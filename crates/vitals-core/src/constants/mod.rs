// ABOUTME: Workspace-wide constants organized by domain
// ABOUTME: Unit conversions, chart period presets, and BMR formula coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion constants
pub mod units;

/// Chart window presets and limits
pub mod charts;

/// Mifflin-St Jeor coefficients
pub mod bmr;
