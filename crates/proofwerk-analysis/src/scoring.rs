// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Deterministic print-suitability scoring.
//
// Four weighted sub-scores (resolution, file size, colour mode, format) are
// combined into a 0-100 total, which selects one of five readiness tiers.
// Threshold ladders are ordered (threshold, score) tables evaluated
// first-match-wins so every boundary can be tested exactly. Identical input
// always produces identical output.

use tracing::debug;

use proofwerk_core::types::{
    Asset, REFERENCE_DPI, SafePrintSize, ScoreBreakdown, SuitabilityReport, Tier,
};

use crate::narrative;

/// Pixel floor for a full-marks resolution score: an 8 x 10 in print at the
/// reference DPI, checked per axis rather than as total megapixels.
pub(crate) const FULL_MARKS_WIDTH_PX: u32 = 2400;
pub(crate) const FULL_MARKS_HEIGHT_PX: u32 = 3000;

/// Megapixel ladder for assets below the per-axis floor. First match wins.
const MEGAPIXEL_LADDER: [(f64, u32); 3] = [(4.0, 85), (2.0, 65), (1.0, 45)];
const MEGAPIXEL_FLOOR_SCORE: u32 = 20;

/// File-size ladder in mebibytes, inclusive upper bounds. First match wins.
const SIZE_LADDER_MB: [(f64, u32); 3] = [(5.0, 100), (10.0, 85), (15.0, 60)];
const SIZE_FLOOR_SCORE: u32 = 30;

const BYTES_PER_MB: f64 = 1_048_576.0;
const PIXELS_PER_MEGAPIXEL: f64 = 1_000_000.0;

/// Raster content is assumed RGB, not yet converted for print. Non-raster,
/// non-PDF content gets the same raster default — there is no third branch.
const COLOR_SCORE_RGB_RASTER: u32 = 70;
/// Colour profile unknown for vector/PDF content.
const COLOR_SCORE_PDF: u32 = 50;

/// Extension tokens that print cleanly without conversion.
const PREFERRED_FORMATS: [&str; 3] = ["png", "jpg", "jpeg"];
const FORMAT_SCORE_PREFERRED: u32 = 100;
const FORMAT_SCORE_PDF: u32 = 90;
const FORMAT_SCORE_OTHER: u32 = 50;

/// Sub-score weights. Must sum to 1.0.
const WEIGHT_RESOLUTION: f64 = 0.40;
const WEIGHT_SIZE: f64 = 0.30;
const WEIGHT_COLOR: f64 = 0.20;
const WEIGHT_FORMAT: f64 = 0.10;

/// Tier ladder over the total, inclusive lower bounds, highest first.
/// Anything below the last bound is `PrintFailureLikely`.
const TIER_LADDER: [(u32, Tier); 4] = [
    (90, Tier::PrintReady),
    (75, Tier::Great),
    (60, Tier::NeedsOptimization),
    (40, Tier::HighRisk),
];

/// Score an asset for print suitability.
///
/// Pure and total: zero-dimension assets collapse to the lowest resolution
/// score and a 0.0 x 0.0 safe print size instead of failing.
pub fn score(asset: &Asset) -> SuitabilityReport {
    let breakdown = breakdown(asset);
    let tier = tier_for(breakdown.total);
    let safe_print = safe_print_size(asset.width_px, asset.height_px);
    let issues = narrative::issue_report(asset, safe_print);

    debug!(
        resolution = breakdown.resolution,
        size = breakdown.size,
        color = breakdown.color,
        format = breakdown.format,
        total = breakdown.total,
        tier = %tier,
        "Asset scored"
    );

    SuitabilityReport {
        breakdown,
        tier,
        issues,
        safe_print,
    }
}

/// Compute the four sub-scores and their weighted, rounded total.
pub fn breakdown(asset: &Asset) -> ScoreBreakdown {
    let resolution = resolution_score(asset.width_px, asset.height_px);
    let size = size_score(asset.byte_size);
    let color = color_score(asset);
    let format = format_score(&asset.format_token);

    let total = (f64::from(resolution) * WEIGHT_RESOLUTION
        + f64::from(size) * WEIGHT_SIZE
        + f64::from(color) * WEIGHT_COLOR
        + f64::from(format) * WEIGHT_FORMAT)
        .round() as u32;

    ScoreBreakdown {
        resolution,
        size,
        color,
        format,
        total,
    }
}

/// Select the readiness tier for a total score.
pub fn tier_for(total: u32) -> Tier {
    for (floor, tier) in TIER_LADDER {
        if total >= floor {
            return tier;
        }
    }
    Tier::PrintFailureLikely
}

/// Largest physical print size at the reference DPI.
pub fn safe_print_size(width_px: u32, height_px: u32) -> SafePrintSize {
    SafePrintSize {
        width_in: f64::from(width_px) / f64::from(REFERENCE_DPI),
        height_in: f64::from(height_px) / f64::from(REFERENCE_DPI),
    }
}

fn resolution_score(width_px: u32, height_px: u32) -> u32 {
    if width_px >= FULL_MARKS_WIDTH_PX && height_px >= FULL_MARKS_HEIGHT_PX {
        return 100;
    }
    let megapixels = f64::from(width_px) * f64::from(height_px) / PIXELS_PER_MEGAPIXEL;
    for (floor, value) in MEGAPIXEL_LADDER {
        if megapixels >= floor {
            return value;
        }
    }
    MEGAPIXEL_FLOOR_SCORE
}

fn size_score(byte_size: u64) -> u32 {
    let megabytes = byte_size as f64 / BYTES_PER_MB;
    for (cap, value) in SIZE_LADDER_MB {
        if megabytes <= cap {
            return value;
        }
    }
    SIZE_FLOOR_SCORE
}

/// Colour mode is judged from the content class alone; pixel data is never
/// consulted at this stage.
fn color_score(asset: &Asset) -> u32 {
    if !asset.content_is_raster && asset.format_token == "pdf" {
        COLOR_SCORE_PDF
    } else {
        COLOR_SCORE_RGB_RASTER
    }
}

fn format_score(format_token: &str) -> u32 {
    if PREFERRED_FORMATS.contains(&format_token) {
        FORMAT_SCORE_PREFERRED
    } else if format_token == "pdf" {
        FORMAT_SCORE_PDF
    } else {
        FORMAT_SCORE_OTHER
    }
}
