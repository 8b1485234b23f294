// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scoring strategy seam.
//
// The deterministic heuristic engine is the default strategy. Alternative
// scorers (e.g. a hosted vision model) implement the same trait and are
// selected by the caller up front; a failing strategy falls back to the
// heuristic engine rather than mixing the two inside one scoring pass.

use tracing::warn;

use proofwerk_core::error::Result;
use proofwerk_core::types::{Asset, SuitabilityReport};

use crate::scoring;

/// A pluggable producer of suitability reports.
pub trait ScoreStrategy {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Produce a full suitability report for the asset.
    fn evaluate(&self, asset: &Asset) -> Result<SuitabilityReport>;
}

/// The built-in deterministic scorer. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl ScoreStrategy for HeuristicScorer {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn evaluate(&self, asset: &Asset) -> Result<SuitabilityReport> {
        Ok(scoring::score(asset))
    }
}

/// Evaluate with the caller-selected strategy, falling back to the
/// deterministic engine when it fails.
pub fn score_with_fallback(primary: &dyn ScoreStrategy, asset: &Asset) -> SuitabilityReport {
    match primary.evaluate(asset) {
        Ok(report) => report,
        Err(err) => {
            warn!(
                strategy = primary.name(),
                %err,
                "Scoring strategy failed; falling back to the heuristic engine"
            );
            scoring::score(asset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proofwerk_core::error::ProofwerkError;

    struct AlwaysFails;

    impl ScoreStrategy for AlwaysFails {
        fn name(&self) -> &'static str {
            "always-fails"
        }

        fn evaluate(&self, _asset: &Asset) -> Result<SuitabilityReport> {
            Err(ProofwerkError::Strategy {
                strategy: self.name().into(),
                detail: "unavailable".into(),
            })
        }
    }

    fn asset() -> Asset {
        Asset {
            format_token: "png".into(),
            content_is_raster: true,
            byte_size: 3 * 1024 * 1024,
            width_px: 3000,
            height_px: 4500,
            edge_sample: None,
        }
    }

    #[test]
    fn heuristic_scorer_matches_the_engine() {
        let asset = asset();
        let direct = scoring::score(&asset);
        let via_strategy = HeuristicScorer.evaluate(&asset).unwrap();
        assert_eq!(direct, via_strategy);
    }

    #[test]
    fn failing_strategy_falls_back_to_heuristic() {
        let asset = asset();
        let report = score_with_fallback(&AlwaysFails, &asset);
        assert_eq!(report, scoring::score(&asset));
    }
}
