// ABOUTME: Re-exports helper modules for vitals-cli
// ABOUTME: Output formatting and store preparation utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod store;
