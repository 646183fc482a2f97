// ABOUTME: Rolling date window resolution for chart queries
// ABOUTME: Produces the ascending run of calendar days ending at an anchor day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Duration, Local};
use vitals_core::errors::{AppError, AppResult};
use vitals_core::models::CalendarDay;

/// The caller's current local calendar day
#[must_use]
pub fn today() -> CalendarDay {
    Local::now().date_naive()
}

/// First and last day of a `span_days` window ending at `anchor`
///
/// # Errors
///
/// Returns `InvalidInput` if `span_days` is zero or the window would start
/// before the earliest representable date
pub fn window_bounds(span_days: u32, anchor: CalendarDay) -> AppResult<(CalendarDay, CalendarDay)> {
    if span_days == 0 {
        return Err(AppError::invalid_input("span_days must be at least 1"));
    }
    let start = anchor
        .checked_sub_signed(Duration::days(i64::from(span_days) - 1))
        .ok_or_else(|| {
            AppError::invalid_input(format!(
                "A {span_days}-day window ending {anchor} starts before the supported date range"
            ))
        })?;
    Ok((start, anchor))
}

/// Select `span_days` consecutive days ending at `anchor`, inclusive, oldest first
///
/// Days without data are included; the window only describes the calendar.
///
/// # Errors
///
/// Returns `InvalidInput` if `span_days` is zero
pub fn select_window(span_days: u32, anchor: CalendarDay) -> AppResult<Vec<CalendarDay>> {
    let (start, _) = window_bounds(span_days, anchor)?;
    Ok(start.iter_days().take(span_days as usize).collect())
}

/// [`select_window`] anchored at the local current day
///
/// # Errors
///
/// Returns `InvalidInput` if `span_days` is zero
pub fn select_window_ending_today(span_days: u32) -> AppResult<Vec<CalendarDay>> {
    select_window(span_days, today())
}
