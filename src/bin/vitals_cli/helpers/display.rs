// ABOUTME: Output formatting helpers for vitals-cli
// ABOUTME: Chart tables, JSON series, ingest summaries, and BMR results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use vitals_charts::ingest::IngestReport;
use vitals_core::errors::AppResult;
use vitals_core::models::{Bucket, Gender, MetricKind, Profile};

const BAR_WIDTH: usize = 30;

#[derive(Serialize)]
struct SeriesOutput<'a> {
    metric: MetricKind,
    unit: &'static str,
    buckets: &'a [Bucket],
}

/// Print a series as a table with a proportional bar per bucket
pub fn display_series_table(metric: MetricKind, buckets: &[Bucket]) {
    println!("\n{metric} ({})", metric.display_unit());
    println!("{}", "=".repeat(60));

    let max = buckets.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    for bucket in buckets {
        let bar_len = if max > 0.0 {
            ((bucket.value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        println!(
            "{:>9} {:>12.1}  {}",
            bucket.label,
            bucket.value,
            "#".repeat(bar_len)
        );
    }

    if let (Some(first), Some(last)) = (buckets.first(), buckets.last()) {
        println!("{}", "=".repeat(60));
        println!("   {} .. {}", first.start, last.end);
    }
}

/// Print a series as pretty JSON
pub fn display_series_json(metric: MetricKind, buckets: &[Bucket]) -> AppResult<()> {
    let output = SeriesOutput {
        metric,
        unit: metric.display_unit(),
        buckets,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print an ingestion summary
pub fn display_ingest_report(metric: MetricKind, report: &IngestReport) {
    println!("\nImported {metric}");
    println!("   Samples accepted: {}", report.accepted);
    println!("   Samples skipped:  {}", report.skipped);
    println!("   Days written:     {}", report.days_written);
    if report.days_without_reading > 0 {
        println!("   Days left as-is:  {}", report.days_without_reading);
    }
}

/// Print a single BMR result
pub fn display_bmr(weight_kg: f64, profile: &Profile, kcal: f64) {
    let gender = match profile.gender {
        Gender::Male => "male",
        Gender::Female => "female",
    };
    println!(
        "BMR for {weight_kg} kg, {} y, {} cm, {gender}: {kcal:.1} kcal/day",
        profile.age, profile.height_cm
    );
}
