// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Settings for the surfaces around the scoring engine.
///
/// The engine's own thresholds, weights, and tier bounds are fixed constants
/// and deliberately not configurable — identical input must always produce
/// identical output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Largest upload accepted for analysis, in bytes.
    pub max_upload_bytes: u64,
    /// Log a SHA-256 fingerprint of each upload. The bytes themselves are
    /// never stored.
    pub fingerprint_uploads: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 50 * 1024 * 1024,
            fingerprint_uploads: true,
        }
    }
}
