// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Proofwerk.
//
// The scoring engine itself never fails — malformed uploads degrade to zero
// dimensions upstream. These variants cover the extraction gate and the
// surfaces around the engine (I/O, serialization, pluggable strategies).

use thiserror::Error;

/// Top-level error type for all Proofwerk operations.
#[derive(Debug, Error)]
pub enum ProofwerkError {
    // -- Extraction errors --
    #[error("invalid pixel sample: {0}")]
    InvalidSample(String),

    #[error("upload of {actual} bytes exceeds the {limit} byte limit")]
    UploadTooLarge { actual: u64, limit: u64 },

    // -- Scoring strategies --
    #[error("scoring strategy '{strategy}' failed: {detail}")]
    Strategy { strategy: String, detail: String },

    // -- Surroundings --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ProofwerkError>;
