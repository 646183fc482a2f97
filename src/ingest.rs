// ABOUTME: Batch ingestion of provider samples into the history store
// ABOUTME: Collapses same-day samples per metric policy and skips invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sample ingestion
//!
//! Providers report raw samples, several per day for some metrics. The store
//! keeps one value per day, so a batch is collapsed before it is written:
//! flow metrics add their samples up, stock metrics keep the last non-zero
//! reading of the day.

use crate::store::{ensure_stored_metric, HistoryStore};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};
use vitals_core::errors::AppResult;
use vitals_core::models::{AggregationPolicy, CalendarDay, MetricKind};

/// One raw reading from a provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Day the reading belongs to
    pub date: CalendarDay,
    /// Reading in the metric's storage unit
    pub value: f64,
}

impl Sample {
    /// Create a sample
    #[must_use]
    pub const fn new(date: CalendarDay, value: f64) -> Self {
        Self { date, value }
    }
}

/// Outcome of an ingestion batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    /// Samples accepted into the batch
    pub accepted: usize,
    /// Samples dropped for being negative or non-finite
    pub skipped: usize,
    /// Distinct days written to the store
    pub days_written: usize,
    /// Stock-metric days whose samples were all zero, left untouched in the store
    pub days_without_reading: usize,
}

/// A batch reduced to at most one value per day
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollapsedBatch {
    /// Value to write for each day, oldest first
    pub days: BTreeMap<CalendarDay, f64>,
    /// Samples rejected for being negative or non-finite
    pub skipped: usize,
    /// Days that only had zero readings under the zero-ignoring policy
    pub days_without_reading: usize,
}

/// Collapse `samples` to one value per day under `policy`
///
/// Under `AverageIgnoringZero` a zero is "no reading": a day only gets a
/// value once one of its samples is positive, so a zero never overwrites a
/// stored reading.
#[must_use]
pub fn collapse_samples(samples: &[Sample], policy: AggregationPolicy) -> CollapsedBatch {
    let mut days: BTreeMap<CalendarDay, f64> = BTreeMap::new();
    let mut zero_days: BTreeSet<CalendarDay> = BTreeSet::new();
    let mut skipped = 0;

    for sample in samples {
        if !sample.value.is_finite() || sample.value < 0.0 {
            skipped += 1;
            continue;
        }
        match policy {
            AggregationPolicy::Sum => *days.entry(sample.date).or_insert(0.0) += sample.value,
            AggregationPolicy::AverageIgnoringZero => {
                if sample.value > 0.0 {
                    days.insert(sample.date, sample.value);
                } else {
                    zero_days.insert(sample.date);
                }
            }
        }
    }

    let days_without_reading = zero_days.iter().filter(|d| !days.contains_key(*d)).count();
    CollapsedBatch {
        days,
        skipped,
        days_without_reading,
    }
}

/// Write a provider batch for `metric` through [`HistoryStore::upsert`]
///
/// Each collapsed day overwrites the stored value for that day. Stock-metric
/// days without a positive reading are not written.
///
/// # Errors
///
/// Returns `InvalidInput` for derived metrics and propagates store errors;
/// days written before a store failure stay written
pub async fn ingest_samples<S: HistoryStore + ?Sized>(
    store: &S,
    metric: MetricKind,
    samples: &[Sample],
) -> AppResult<IngestReport> {
    ensure_stored_metric(metric)?;

    let batch = collapse_samples(samples, metric.default_policy());
    if batch.skipped > 0 {
        warn!(%metric, skipped = batch.skipped, "Skipped negative or non-finite samples");
    }
    if batch.days_without_reading > 0 {
        debug!(
            %metric,
            days = batch.days_without_reading,
            "Left days with only zero readings unchanged"
        );
    }

    for (day, value) in &batch.days {
        store.upsert(metric, *day, *value).await?;
    }

    let report = IngestReport {
        accepted: samples.len() - batch.skipped,
        skipped: batch.skipped,
        days_written: batch.days.len(),
        days_without_reading: batch.days_without_reading,
    };
    info!(
        %metric,
        accepted = report.accepted,
        skipped = report.skipped,
        days = report.days_written,
        "Ingested samples"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> CalendarDay {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_flow_samples_are_summed_per_day() {
        let samples = [
            Sample::new(day(4), 1200.0),
            Sample::new(day(4), 800.0),
            Sample::new(day(5), 300.0),
        ];
        let batch = collapse_samples(&samples, AggregationPolicy::Sum);
        assert_eq!(batch.skipped, 0);
        assert!((batch.days[&day(4)] - 2000.0).abs() < f64::EPSILON);
        assert!((batch.days[&day(5)] - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stock_samples_keep_last_non_zero() {
        let samples = [
            Sample::new(day(4), 71.0),
            Sample::new(day(4), 70.4),
            Sample::new(day(4), 0.0),
        ];
        let batch = collapse_samples(&samples, AggregationPolicy::AverageIgnoringZero);
        assert!((batch.days[&day(4)] - 70.4).abs() < f64::EPSILON);
        assert_eq!(batch.days_without_reading, 0);
    }

    #[test]
    fn test_stock_day_with_only_zeros_is_not_written() {
        let samples = [
            Sample::new(day(4), 0.0),
            Sample::new(day(4), 0.0),
            Sample::new(day(5), 0.0),
            Sample::new(day(5), 69.8),
        ];
        let batch = collapse_samples(&samples, AggregationPolicy::AverageIgnoringZero);
        assert!(!batch.days.contains_key(&day(4)));
        assert!((batch.days[&day(5)] - 69.8).abs() < f64::EPSILON);
        assert_eq!(batch.days_without_reading, 1);
    }

    #[test]
    fn test_invalid_samples_are_skipped() {
        let samples = [
            Sample::new(day(4), -5.0),
            Sample::new(day(4), f64::NAN),
            Sample::new(day(4), f64::INFINITY),
        ];
        let batch = collapse_samples(&samples, AggregationPolicy::Sum);
        assert_eq!(batch.skipped, 3);
        assert!(batch.days.is_empty());
    }

    #[test]
    fn test_sample_deserializes_from_json() {
        let sample: Sample = serde_json::from_str(r#"{"date":"2024-03-04","value":12.5}"#).unwrap();
        assert_eq!(sample, Sample::new(day(4), 12.5));
    }
}
