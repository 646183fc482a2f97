// ABOUTME: Chart window description, UI period presets, label formats, and buckets
// ABOUTME: TimeWindow validates its span/bucket invariants at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::metric::CalendarDay;
use crate::constants::charts::{
    MONTH_BUCKET_DAYS, MONTH_SPAN_DAYS, WEEK_BUCKET_DAYS, WEEK_SPAN_DAYS, YEAR_BUCKET_DAYS,
    YEAR_SPAN_DAYS,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity of generated bucket labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    /// Abbreviated weekday, e.g. `Mon`
    DayOfWeek,
    /// Abbreviated month and day, e.g. `Mar 10`
    MonthDay,
    /// Abbreviated month and year, e.g. `Mar 2024`
    MonthYear,
}

impl LabelFormat {
    /// `chrono` format string for this label granularity
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::DayOfWeek => "%a",
            Self::MonthDay => "%b %-d",
            Self::MonthYear => "%b %Y",
        }
    }

    /// Label granularity for a custom window, matching the presets it resembles
    ///
    /// Daily buckets over at most a week read best as weekdays, sub-monthly
    /// buckets as dates, anything wider as months.
    #[must_use]
    pub const fn for_window(span_days: u32, bucket_days: u32) -> Self {
        if bucket_days <= WEEK_BUCKET_DAYS && span_days <= WEEK_SPAN_DAYS {
            Self::DayOfWeek
        } else if bucket_days < MONTH_SPAN_DAYS {
            Self::MonthDay
        } else {
            Self::MonthYear
        }
    }
}

/// Rolling chart window: how many days, how wide each bucket is, how buckets are labeled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    span_days: u32,
    bucket_days: u32,
    label_format: LabelFormat,
}

impl TimeWindow {
    /// Create a window description
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `span_days` or `bucket_days` is zero
    pub fn new(span_days: u32, bucket_days: u32, label_format: LabelFormat) -> AppResult<Self> {
        if span_days == 0 {
            return Err(AppError::invalid_input("span_days must be at least 1"));
        }
        if bucket_days == 0 {
            return Err(AppError::invalid_input("bucket_days must be at least 1"));
        }
        Ok(Self {
            span_days,
            bucket_days,
            label_format,
        })
    }

    /// Number of days in the window
    #[must_use]
    pub const fn span_days(&self) -> u32 {
        self.span_days
    }

    /// Number of days per bucket (the last bucket may be shorter)
    #[must_use]
    pub const fn bucket_days(&self) -> u32 {
        self.bucket_days
    }

    /// Label granularity
    #[must_use]
    pub const fn label_format(&self) -> LabelFormat {
        self.label_format
    }

    /// `ceil(span_days / bucket_days)`
    #[must_use]
    pub const fn bucket_count(&self) -> u32 {
        self.span_days.div_ceil(self.bucket_days)
    }
}

/// UI period presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartPeriod {
    /// Last 7 days, one bar per day
    Week,
    /// Last 30 days in 5-day buckets
    Month,
    /// Last 365 days in 90-day buckets
    Year,
}

impl ChartPeriod {
    /// Resolve the preset into a window description
    #[must_use]
    pub const fn window(&self) -> TimeWindow {
        let (span_days, bucket_days, label_format) = match self {
            Self::Week => (WEEK_SPAN_DAYS, WEEK_BUCKET_DAYS, LabelFormat::DayOfWeek),
            Self::Month => (MONTH_SPAN_DAYS, MONTH_BUCKET_DAYS, LabelFormat::MonthDay),
            Self::Year => (YEAR_SPAN_DAYS, YEAR_BUCKET_DAYS, LabelFormat::MonthYear),
        };
        // Preset constants are all non-zero
        TimeWindow {
            span_days,
            bucket_days,
            label_format,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartPeriod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" | "w" => Ok(Self::Week),
            "month" | "m" => Ok(Self::Month),
            "year" | "y" => Ok(Self::Year),
            other => Err(AppError::invalid_input(format!(
                "Unknown chart period: {other}"
            ))),
        }
    }
}

/// One aggregated, labeled point of a chart-ready series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Label derived from the bucket's last day
    pub label: String,
    /// Aggregated value in the metric's display unit
    pub value: f64,
    /// First day covered by the bucket
    pub start: CalendarDay,
    /// Last day covered by the bucket
    pub end: CalendarDay,
    /// Number of stored points that fell inside the bucket
    pub sample_count: usize,
}
