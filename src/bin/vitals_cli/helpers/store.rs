// ABOUTME: History store preparation for vitals-cli
// ABOUTME: Creates the data directory of file-backed SQLite stores before connecting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use tracing::debug;
use vitals_charts::config::DatabaseUrl;
use vitals_core::errors::AppResult;

/// Create the parent directory of an on-disk database if it is missing
pub fn ensure_parent_dir(url: &DatabaseUrl) -> AppResult<()> {
    let Some(parent) = url.file_path().and_then(|path| path.parent()) else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }
    debug!("Creating data directory {}", parent.display());
    fs::create_dir_all(parent)?;
    Ok(())
}
