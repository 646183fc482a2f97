// ABOUTME: Chart engine module organization
// ABOUTME: Window selection, bucket aggregation, label formatting, and series building
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Chart engine
//!
//! Turns sparse per-day metric history into fixed-length, labeled bucket
//! series for weekly, monthly and yearly charts.

/// Calendar-bucket aggregation under sum and zero-ignoring-average policies
pub mod aggregator;
/// Human-readable bucket labels
pub mod labels;
/// Store-to-series orchestration
pub mod series;
/// Rolling date windows
pub mod window;

pub use aggregator::aggregate;
pub use labels::format_label;
pub use series::{ChartSeriesBuilder, SeriesQuery};
pub use window::{select_window, select_window_ending_today, today, window_bounds};
