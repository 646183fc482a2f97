// ABOUTME: Bucket aggregation of daily metric points over a resolved window
// ABOUTME: Sum for flow metrics, zero-ignoring average with carry-forward for stock metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Bucket Aggregator
//!
//! Partitions a window of calendar days into consecutive chunks of
//! `bucket_days` days (oldest first, the final chunk possibly shorter) and
//! collapses the points inside each chunk into one [`Bucket`].
//!
//! # Policies
//!
//! - [`AggregationPolicy::Sum`]: total of the chunk's values. Days without a
//!   point contribute zero, so an empty chunk is `0.0`.
//! - [`AggregationPolicy::AverageIgnoringZero`]: mean of the chunk's values
//!   that are strictly positive. Zeros are "not measured" and are left out of
//!   the denominator. A chunk with no positive value repeats the value of the
//!   nearest earlier chunk that had one, or `fallback` when no earlier chunk
//!   did.
//!
//! Points dated outside the window are ignored and non-finite values are
//! treated as missing days.

use super::labels::format_label;
use std::collections::HashMap;
use vitals_core::errors::{AppError, AppResult};
use vitals_core::models::{AggregationPolicy, Bucket, CalendarDay, LabelFormat, MetricPoint};

/// Aggregate `points` over `window` into `ceil(window.len() / bucket_days)` buckets
///
/// `window` is expected in ascending order, as produced by
/// [`select_window`](super::window::select_window). Each bucket is labeled
/// from its last day.
///
/// # Errors
///
/// Returns `InvalidInput` if `bucket_days` is zero or `window` is empty
pub fn aggregate(
    points: &[MetricPoint],
    window: &[CalendarDay],
    bucket_days: u32,
    policy: AggregationPolicy,
    label_format: LabelFormat,
    fallback: f64,
) -> AppResult<Vec<Bucket>> {
    if bucket_days == 0 {
        return Err(AppError::invalid_input("bucket_days must be at least 1"));
    }
    if window.is_empty() {
        return Err(AppError::invalid_input(
            "Cannot aggregate over an empty window",
        ));
    }

    let values_by_day = index_by_day(points);
    let mut last_valid: Option<f64> = None;

    let buckets = window
        .chunks(bucket_days as usize)
        .filter_map(|chunk| {
            let (&start, &end) = (chunk.first()?, chunk.last()?);
            let values: Vec<f64> = chunk
                .iter()
                .filter_map(|day| values_by_day.get(day))
                .flatten()
                .copied()
                .collect();

            let value = match policy {
                AggregationPolicy::Sum => values.iter().sum::<f64>(),
                AggregationPolicy::AverageIgnoringZero => {
                    match mean_of_positive(&values) {
                        Some(mean) => {
                            last_valid = Some(mean);
                            mean
                        }
                        None => last_valid.unwrap_or(fallback),
                    }
                }
            };

            Some(Bucket {
                label: format_label(end, label_format),
                value,
                start,
                end,
                sample_count: values.len(),
            })
        })
        .collect();

    Ok(buckets)
}

/// Group finite point values by day
fn index_by_day(points: &[MetricPoint]) -> HashMap<CalendarDay, Vec<f64>> {
    let mut by_day: HashMap<CalendarDay, Vec<f64>> = HashMap::with_capacity(points.len());
    for point in points.iter().filter(|p| p.value.is_finite()) {
        by_day.entry(point.date).or_default().push(point.value);
    }
    by_day
}

/// Mean of the strictly positive values, `None` when there are none
fn mean_of_positive(values: &[f64]) -> Option<f64> {
    let (sum, count) = values
        .iter()
        .filter(|v| **v > 0.0)
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
