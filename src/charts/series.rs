// ABOUTME: Chart series orchestration from history store to chart-ready buckets
// ABOUTME: Window resolution, store read, aggregation, display scaling, and derived BMR series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Chart Series Builder
//!
//! One parameterized pipeline serves every metric and period:
//!
//! 1. resolve the rolling window ending at the query's anchor day
//! 2. read the metric's points for that range from the [`HistoryStore`]
//! 3. aggregate them into buckets under the query's policy
//! 4. convert values into the metric's display unit
//!
//! Basal metabolic rate has no history of its own. Its series is the body
//! weight series (zero-ignoring average, carried forward) mapped bucket by
//! bucket through [`compute_bmr`], labels unchanged.

use super::aggregator::aggregate;
use super::window::{select_window, window_bounds};
use crate::intelligence::bmr::compute_bmr;
use crate::store::HistoryStore;
use std::time::Duration;
use tokio::time;
use tracing::debug;
use vitals_core::errors::{AppError, AppResult};
use vitals_core::models::{
    AggregationPolicy, Bucket, CalendarDay, ChartPeriod, MetricKind, MetricPoint, Profile,
    TimeWindow,
};

/// Everything needed to build one series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesQuery {
    /// Metric to chart
    pub metric: MetricKind,
    /// Span, bucket width, and label granularity
    pub window: TimeWindow,
    /// Aggregation policy; ignored for BMR, which always averages weight
    pub policy: AggregationPolicy,
    /// Value used by `AverageIgnoringZero` when no earlier bucket has data,
    /// in the metric's storage unit (kilograms of body weight for BMR).
    /// Required for stock metrics and BMR; there is no universal default.
    pub fallback: Option<f64>,
    /// Last day of the window, usually today
    pub anchor: CalendarDay,
    /// Required for BMR series
    pub profile: Option<Profile>,
}

impl SeriesQuery {
    /// Query using the metric's default policy and no fallback
    #[must_use]
    pub const fn new(metric: MetricKind, window: TimeWindow, anchor: CalendarDay) -> Self {
        Self {
            metric,
            window,
            policy: metric.default_policy(),
            fallback: None,
            anchor,
            profile: None,
        }
    }

    /// Query for one of the UI period presets
    #[must_use]
    pub const fn for_period(metric: MetricKind, period: ChartPeriod, anchor: CalendarDay) -> Self {
        Self::new(metric, period.window(), anchor)
    }

    /// Override the aggregation policy
    #[must_use]
    pub const fn with_policy(mut self, policy: AggregationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the fallback used before any valid stock value exists
    #[must_use]
    pub const fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Attach the profile needed for BMR
    #[must_use]
    pub const fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }
}

/// Builds chart-ready bucket series from a history store
///
/// Holds no state between calls: identical store contents and queries give
/// identical series.
pub struct ChartSeriesBuilder<'a, S: HistoryStore + ?Sized> {
    store: &'a S,
    read_timeout: Option<Duration>,
}

impl<'a, S: HistoryStore + ?Sized> ChartSeriesBuilder<'a, S> {
    /// Builder reading from `store` without a read timeout
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            store,
            read_timeout: None,
        }
    }

    /// Bound every store read; an elapsed read fails with `StoreUnavailable`
    #[must_use]
    pub const fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Build the series described by `query`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a BMR query without a profile, a BMR or
    /// zero-ignoring-average query without a fallback, or a non-positive
    /// resolved weight, and propagates store errors unchanged
    pub async fn build_series(&self, query: &SeriesQuery) -> AppResult<Vec<Bucket>> {
        if query.metric == MetricKind::BasalMetabolicRate {
            let profile = query.profile.as_ref().ok_or_else(|| {
                AppError::invalid_input("A profile is required to build a BMR series")
            })?;
            let fallback_weight_kg = required_fallback(query)?;
            return self
                .build_bmr_series(query.window, query.anchor, fallback_weight_kg, profile)
                .await;
        }

        // Sum never consults the fallback
        let fallback = match query.policy {
            AggregationPolicy::Sum => query.fallback.unwrap_or_default(),
            AggregationPolicy::AverageIgnoringZero => required_fallback(query)?,
        };

        let buckets = self
            .build_stored_series(
                query.metric,
                query.window,
                query.policy,
                query.anchor,
                fallback,
            )
            .await?;

        Ok(buckets
            .into_iter()
            .map(|bucket| Bucket {
                value: query.metric.to_display_value(bucket.value),
                ..bucket
            })
            .collect())
    }

    /// Series for a UI period preset with the metric's default policy
    ///
    /// `fallback` is always passed explicitly; flow metrics ignore it.
    ///
    /// # Errors
    ///
    /// Same as [`build_series`](Self::build_series)
    pub async fn build_period_series(
        &self,
        metric: MetricKind,
        period: ChartPeriod,
        anchor: CalendarDay,
        fallback: f64,
        profile: Option<Profile>,
    ) -> AppResult<Vec<Bucket>> {
        let mut query = SeriesQuery::for_period(metric, period, anchor).with_fallback(fallback);
        query.profile = profile;
        self.build_series(&query).await
    }

    /// BMR series: the weight series mapped pointwise through Mifflin-St Jeor
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a bucket resolves to a non-positive weight
    /// (no weight history and a non-positive `fallback_weight_kg`), and
    /// propagates store errors unchanged
    pub async fn build_bmr_series(
        &self,
        window: TimeWindow,
        anchor: CalendarDay,
        fallback_weight_kg: f64,
        profile: &Profile,
    ) -> AppResult<Vec<Bucket>> {
        let weight_buckets = self
            .build_stored_series(
                MetricKind::BodyWeight,
                window,
                AggregationPolicy::AverageIgnoringZero,
                anchor,
                fallback_weight_kg,
            )
            .await?;

        weight_buckets
            .into_iter()
            .map(|bucket| {
                let bmr = compute_bmr(bucket.value, profile)?;
                Ok(Bucket {
                    value: bmr,
                    ..bucket
                })
            })
            .collect()
    }

    async fn build_stored_series(
        &self,
        metric: MetricKind,
        window: TimeWindow,
        policy: AggregationPolicy,
        anchor: CalendarDay,
        fallback: f64,
    ) -> AppResult<Vec<Bucket>> {
        let days = select_window(window.span_days(), anchor)?;
        let (from, to) = window_bounds(window.span_days(), anchor)?;
        let points = self.read_points(metric, from, to).await?;

        let buckets = aggregate(
            &points,
            &days,
            window.bucket_days(),
            policy,
            window.label_format(),
            fallback,
        )?;

        debug!(
            %metric,
            %from,
            %to,
            points = points.len(),
            buckets = buckets.len(),
            ?policy,
            "Built chart series"
        );
        Ok(buckets)
    }

    async fn read_points(
        &self,
        metric: MetricKind,
        from: CalendarDay,
        to: CalendarDay,
    ) -> AppResult<Vec<MetricPoint>> {
        match self.read_timeout {
            Some(limit) => time::timeout(limit, self.store.read(metric, from, to))
                .await
                .map_err(|_| {
                    AppError::store_unavailable(format!(
                        "Reading {metric} history timed out after {}ms",
                        limit.as_millis()
                    ))
                })?,
            None => self.store.read(metric, from, to).await,
        }
    }
}

fn required_fallback(query: &SeriesQuery) -> AppResult<f64> {
    query.fallback.ok_or_else(|| {
        AppError::invalid_input(format!(
            "A fallback value is required for {} series with no earlier data",
            query.metric
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryHistoryStore;
    use chrono::{Duration as DayDelta, NaiveDate};
    use vitals_core::errors::ErrorCode;
    use vitals_core::models::{Gender, LabelFormat};

    fn anchor() -> CalendarDay {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[tokio::test]
    async fn test_distance_is_reported_in_kilometers() {
        let store = InMemoryHistoryStore::new();
        store.upsert(MetricKind::Distance, anchor(), 4200.0).await.unwrap();

        let buckets = ChartSeriesBuilder::new(&store)
            .build_series(&SeriesQuery::for_period(
                MetricKind::Distance,
                ChartPeriod::Week,
                anchor(),
            ))
            .await
            .unwrap();
        assert!((buckets[6].value - 4.2).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_bmr_without_profile_is_rejected() {
        let store = InMemoryHistoryStore::new();
        let query = SeriesQuery::for_period(MetricKind::BasalMetabolicRate, ChartPeriod::Week, anchor())
            .with_fallback(70.0);
        let err = ChartSeriesBuilder::new(&store)
            .build_series(&query)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[tokio::test]
    async fn test_stock_query_without_fallback_is_rejected() {
        let store = InMemoryHistoryStore::new();
        let builder = ChartSeriesBuilder::new(&store);

        let weight = SeriesQuery::for_period(MetricKind::BodyWeight, ChartPeriod::Week, anchor());
        let err = builder.build_series(&weight).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        let bmr = SeriesQuery::for_period(MetricKind::BasalMetabolicRate, ChartPeriod::Week, anchor())
            .with_profile(Profile {
                age: 25,
                height_cm: 170.0,
                gender: Gender::Male,
            });
        let err = builder.build_series(&bmr).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[tokio::test]
    async fn test_bmr_maps_weight_buckets() {
        let store = InMemoryHistoryStore::new();
        store
            .upsert(MetricKind::BodyWeight, anchor() - DayDelta::days(1), 70.0)
            .await
            .unwrap();
        let window = TimeWindow::new(2, 1, LabelFormat::DayOfWeek).unwrap();
        let profile = Profile {
            age: 25,
            height_cm: 170.0,
            gender: Gender::Male,
        };

        let buckets = ChartSeriesBuilder::new(&store)
            .build_bmr_series(window, anchor(), 60.0, &profile)
            .await
            .unwrap();
        // Saturday has 70 kg; Sunday has no weigh-in and carries 70 kg forward
        assert_eq!(buckets.len(), 2);
        assert!((buckets[0].value - 1642.5).abs() < 1e-9);
        assert!((buckets[1].value - 1642.5).abs() < 1e-9);
        assert_eq!(buckets[0].label, "Sat");
    }
}
