// ABOUTME: Rolling window presets used by the chart periods
// ABOUTME: Span, bucket width, and window limits for week, month, and year views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::units::{DAYS_PER_WEEK, DAYS_PER_YEAR};

/// Week view: one bucket per day
pub const WEEK_SPAN_DAYS: u32 = DAYS_PER_WEEK;
/// Week view bucket width
pub const WEEK_BUCKET_DAYS: u32 = 1;

/// Month view: 30 days in six 5-day buckets
pub const MONTH_SPAN_DAYS: u32 = 30;
/// Month view bucket width
pub const MONTH_BUCKET_DAYS: u32 = 5;

/// Year view: 365 days in quarter-sized buckets (the last one truncated)
pub const YEAR_SPAN_DAYS: u32 = DAYS_PER_YEAR;
/// Year view bucket width
pub const YEAR_BUCKET_DAYS: u32 = 90;

/// Largest window any preset produces
pub const MAX_PRESET_SPAN_DAYS: u32 = YEAR_SPAN_DAYS;

/// Default body weight used when a weight series has no history at all
pub const DEFAULT_FALLBACK_WEIGHT_KG: f64 = 70.0;
