// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// proofwerk-analysis — Feature extraction and scoring for Proofwerk.
//
// Provides the feature extractor (raster decode, PDF nominal substitution,
// edge sampling), the deterministic print-suitability scoring engine, the
// edge-crowding detector, and the pluggable scoring-strategy seam.

pub mod edge;
pub mod extract;
pub mod narrative;
pub mod scoring;
pub mod strategy;

// Re-export the primary entry points so callers can use
// `proofwerk_analysis::score` etc.
pub use extract::FeatureExtractor;
pub use scoring::score;
pub use strategy::{HeuristicScorer, ScoreStrategy, score_with_fallback};
