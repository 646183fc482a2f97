// ABOUTME: Metric kinds tracked per calendar day and their aggregation semantics
// ABOUTME: MetricKind, MetricPoint, AggregationPolicy, and the CalendarDay alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::METERS_PER_KM;
use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A time-zone-normalized calendar day with no time component
pub type CalendarDay = NaiveDate;

/// How the daily values inside one bucket collapse into a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationPolicy {
    /// Flow metrics: add every value, missing days contribute zero
    Sum,
    /// Stock metrics: mean of strictly positive values, carried forward when a
    /// bucket has none
    AverageIgnoringZero,
}

/// Health metric tracked per calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Food energy eaten (kcal)
    FoodEnergy,
    /// Active energy burned (kcal)
    BurnedEnergy,
    /// Step count
    Steps,
    /// Walking/running distance, stored in meters
    Distance,
    /// Water intake (ml)
    Water,
    /// Body weight (kg)
    BodyWeight,
    /// Basal metabolic rate (kcal/day), derived from body weight and never stored
    BasalMetabolicRate,
}

impl MetricKind {
    /// Every metric kind, stored ones first
    pub const ALL: [Self; 7] = [
        Self::FoodEnergy,
        Self::BurnedEnergy,
        Self::Steps,
        Self::Distance,
        Self::Water,
        Self::BodyWeight,
        Self::BasalMetabolicRate,
    ];

    /// Stable storage key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FoodEnergy => "food_energy",
            Self::BurnedEnergy => "burned_energy",
            Self::Steps => "steps",
            Self::Distance => "distance",
            Self::Water => "water",
            Self::BodyWeight => "body_weight",
            Self::BasalMetabolicRate => "basal_metabolic_rate",
        }
    }

    /// Aggregation policy the metric is charted with by default
    #[must_use]
    pub const fn default_policy(&self) -> AggregationPolicy {
        match self {
            Self::FoodEnergy | Self::BurnedEnergy | Self::Steps | Self::Distance | Self::Water => {
                AggregationPolicy::Sum
            }
            Self::BodyWeight | Self::BasalMetabolicRate => AggregationPolicy::AverageIgnoringZero,
        }
    }

    /// Derived metrics are computed from other series and have no history of their own
    #[must_use]
    pub const fn is_derived(&self) -> bool {
        matches!(self, Self::BasalMetabolicRate)
    }

    /// Unit shown next to charted values
    #[must_use]
    pub const fn display_unit(&self) -> &'static str {
        match self {
            Self::FoodEnergy | Self::BurnedEnergy => "kcal",
            Self::Steps => "steps",
            Self::Distance => "km",
            Self::Water => "ml",
            Self::BodyWeight => "kg",
            Self::BasalMetabolicRate => "kcal/day",
        }
    }

    /// Unit values are stored and ingested in
    #[must_use]
    pub const fn storage_unit(&self) -> &'static str {
        match self {
            Self::Distance => "m",
            other => other.display_unit(),
        }
    }

    /// Convert a stored value into its display unit
    #[must_use]
    pub fn to_display_value(&self, stored: f64) -> f64 {
        match self {
            Self::Distance => stored / METERS_PER_KM,
            _ => stored,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "food_energy" | "food" | "calories" => Ok(Self::FoodEnergy),
            "burned_energy" | "burned" | "active_energy" => Ok(Self::BurnedEnergy),
            "steps" => Ok(Self::Steps),
            "distance" => Ok(Self::Distance),
            "water" => Ok(Self::Water),
            "body_weight" | "weight" => Ok(Self::BodyWeight),
            "basal_metabolic_rate" | "bmr" => Ok(Self::BasalMetabolicRate),
            other => Err(AppError::invalid_input(format!(
                "Unknown metric kind: {other}"
            ))),
        }
    }
}

/// One day's value for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Day the value belongs to
    pub date: CalendarDay,
    /// Raw value in the metric's storage unit
    pub value: f64,
}

impl MetricPoint {
    /// Create a new point
    #[must_use]
    pub const fn new(date: CalendarDay, value: f64) -> Self {
        Self { date, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_kind_round_trips_through_storage_key() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.as_str().parse::<MetricKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_metric_kind_aliases() {
        assert_eq!("weight".parse::<MetricKind>().unwrap(), MetricKind::BodyWeight);
        assert_eq!("BMR".parse::<MetricKind>().unwrap(), MetricKind::BasalMetabolicRate);
        assert!("heart_rate".parse::<MetricKind>().is_err());
    }

    #[test]
    fn test_flow_and_stock_policies() {
        assert_eq!(MetricKind::Steps.default_policy(), AggregationPolicy::Sum);
        assert_eq!(
            MetricKind::BodyWeight.default_policy(),
            AggregationPolicy::AverageIgnoringZero
        );
    }

    #[test]
    fn test_distance_is_stored_in_meters() {
        assert_eq!(MetricKind::Distance.storage_unit(), "m");
        assert_eq!(MetricKind::Steps.storage_unit(), "steps");
    }

    #[test]
    fn test_distance_displays_in_kilometers() {
        assert!((MetricKind::Distance.to_display_value(5250.0) - 5.25).abs() < f64::EPSILON);
        assert!((MetricKind::Water.to_display_value(500.0) - 500.0).abs() < f64::EPSILON);
    }
}
