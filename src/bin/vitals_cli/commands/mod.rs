// ABOUTME: Re-exports command modules for vitals-cli
// ABOUTME: History editing and chart rendering commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod chart;
pub mod history;
