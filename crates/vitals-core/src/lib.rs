// ABOUTME: Core types and constants for the vitals daily-metric chart engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitals Core
//!
//! Foundation crate providing shared types and constants for the vitals
//! chart engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Metric kinds, daily points, chart windows, buckets, and profiles
//! - **constants**: Unit conversions, chart presets, and BMR coefficients

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (metrics, chart windows, buckets, profile)
pub mod models;
