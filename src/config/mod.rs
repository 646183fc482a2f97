// ABOUTME: Configuration module organization
// ABOUTME: Environment-driven settings for the store URL, read timeout, and chart defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based configuration
pub mod environment;

pub use environment::{ChartsConfig, DatabaseUrl};
