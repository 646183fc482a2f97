// ABOUTME: Chart and BMR commands for vitals-cli
// ABOUTME: Resolves preset or custom windows and prints bucketed series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::warn;
use vitals_charts::charts::{today, ChartSeriesBuilder, SeriesQuery};
use vitals_charts::config::ChartsConfig;
use vitals_charts::intelligence::compute_bmr;
use vitals_charts::store::HistoryDatabase;
use vitals_core::constants::charts::MAX_PRESET_SPAN_DAYS;
use vitals_core::errors::AppResult;
use vitals_core::models::{CalendarDay, ChartPeriod, LabelFormat, MetricKind, Profile, TimeWindow};

use crate::helpers::display::{display_bmr, display_series_json, display_series_table};

type Result<T> = AppResult<T>;

/// Parsed `chart` arguments
pub struct ChartRequest {
    pub metric: MetricKind,
    pub period: Option<ChartPeriod>,
    /// Custom `(span_days, bucket_days)`, takes precedence over `period`
    pub custom: Option<(u32, u32)>,
    pub anchor: Option<CalendarDay>,
    pub fallback_kg: f64,
    pub profile: Option<Profile>,
    pub json: bool,
}

/// Build and print the requested series
pub async fn chart(
    store: &HistoryDatabase,
    config: &ChartsConfig,
    request: &ChartRequest,
) -> Result<()> {
    let window = resolve_window(request)?;
    let anchor = request.anchor.unwrap_or_else(today);

    let mut query = SeriesQuery::new(request.metric, window, anchor).with_fallback(request.fallback_kg);
    if let Some(profile) = request.profile {
        query = query.with_profile(profile);
    }

    let buckets = ChartSeriesBuilder::new(store)
        .with_read_timeout(config.store_timeout)
        .build_series(&query)
        .await?;

    if request.json {
        display_series_json(request.metric, &buckets)?;
    } else {
        display_series_table(request.metric, &buckets);
    }
    Ok(())
}

/// Print BMR for a single weight
pub fn bmr(weight_kg: f64, profile: &Profile) -> Result<()> {
    let kcal = compute_bmr(weight_kg, profile)?;
    display_bmr(weight_kg, profile, kcal);
    Ok(())
}

fn resolve_window(request: &ChartRequest) -> Result<TimeWindow> {
    match (request.custom, request.period) {
        (Some((span, bucket)), _) => {
            if span > MAX_PRESET_SPAN_DAYS {
                warn!("A {span}-day window is longer than any preset and may read slowly");
            }
            TimeWindow::new(span, bucket, LabelFormat::for_window(span, bucket))
        }
        (None, Some(period)) => Ok(period.window()),
        (None, None) => Ok(ChartPeriod::Week.window()),
    }
}
