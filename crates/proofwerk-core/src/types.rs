// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Proofwerk print-suitability analyzer.

use serde::{Deserialize, Serialize};

use crate::error::{ProofwerkError, Result};

/// Fixed resolution used to convert pixel dimensions to physical inches,
/// regardless of any DPI metadata embedded in the upload.
pub const REFERENCE_DPI: u32 = 300;

/// Nominal pixel dimensions substituted for PDF uploads: US Letter
/// (8.5 x 11 in) at the reference DPI. PDFs are never rendered.
pub const PDF_NOMINAL_WIDTH_PX: u32 = 2550;
pub const PDF_NOMINAL_HEIGHT_PX: u32 = 3300;

/// A single uploaded design as seen by the scoring engine.
///
/// Constructed once by the feature extractor and immutable afterwards.
/// Dimension-extraction failures surface as zero width/height rather than
/// errors, and collapse to the lowest resolution score downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    /// Lower-cased file-extension token ("png", "jpg", "pdf", or "unknown"
    /// when the file name carries no extension).
    pub format_token: String,
    /// True iff the declared MIME type begins with "image/".
    pub content_is_raster: bool,
    /// Upload size in bytes.
    pub byte_size: u64,
    /// Pixel width; 0 when extraction failed or the format is not raster.
    pub width_px: u32,
    /// Pixel height; 0 when extraction failed or the format is not raster.
    pub height_px: u32,
    /// Downsampled border sample, present only for raster uploads that
    /// decoded successfully.
    pub edge_sample: Option<EdgeSample>,
}

impl Asset {
    /// Build a PDF asset with the nominal Letter-at-reference-DPI dimensions
    /// substituted. PDFs never carry an edge sample.
    pub fn pdf(byte_size: u64, content_is_raster: bool) -> Self {
        Self {
            format_token: "pdf".into(),
            content_is_raster,
            byte_size,
            width_px: PDF_NOMINAL_WIDTH_PX,
            height_px: PDF_NOMINAL_HEIGHT_PX,
            edge_sample: None,
        }
    }
}

/// A small raw pixel sample of a decoded upload, aspect-fit within the
/// nominal 100 x 100 grid (the short axis may land under 100).
///
/// Channel order is R, G, B followed by any extra channels. Modelled as an
/// explicit type rather than a bare buffer so "no sample" is an `Option`,
/// not a zero-length sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSample {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl EdgeSample {
    /// Nominal sample edge length in pixels. Border-band geometry is derived
    /// from this constant, never from the actual sample dimensions.
    pub const NOMINAL_EDGE: u32 = 100;

    /// Wrap a raw interleaved pixel buffer.
    ///
    /// Requires at least 3 channels and a buffer of exactly
    /// `width * height * channels` bytes.
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        if channels < 3 {
            return Err(ProofwerkError::InvalidSample(format!(
                "need at least 3 channels, got {channels}"
            )));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(ProofwerkError::InvalidSample(format!(
                "buffer is {} bytes, expected {} for {}x{}x{}",
                data.len(),
                expected,
                width,
                height,
                channels
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Actual sample width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Actual sample height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of interleaved channels per pixel.
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// The R, G, B values at `(x, y)`. Coordinates must be in bounds.
    pub fn rgb(&self, x: u32, y: u32) -> (u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height);
        let idx = (y as usize * self.width as usize + x as usize) * self.channels as usize;
        (self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }
}

/// The four weighted sub-scores and their rounded weighted total.
///
/// Each sub-score takes one of a fixed discrete set of values per category;
/// the total is always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub resolution: u32,
    pub size: u32,
    pub color: u32,
    pub format: u32,
    pub total: u32,
}

/// Print-readiness classification bands over the total score.
///
/// Bands are contiguous and exhaustive over 0..=100; the total selects
/// exactly one tier. Label, display color, and summary are fixed per tier
/// and passed through to presentation layers unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    PrintReady,
    Great,
    NeedsOptimization,
    HighRisk,
    PrintFailureLikely,
}

impl Tier {
    /// Human-facing tier name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PrintReady => "Print-Ready",
            Self::Great => "Great",
            Self::NeedsOptimization => "Needs Optimization",
            Self::HighRisk => "High Risk",
            Self::PrintFailureLikely => "Print Failure Likely",
        }
    }

    /// Display-color token, opaque to this crate.
    pub fn color(&self) -> &'static str {
        match self {
            Self::PrintReady => "#22c55e",
            Self::Great => "#84cc16",
            Self::NeedsOptimization => "#eab308",
            Self::HighRisk => "#f97316",
            Self::PrintFailureLikely => "#ef4444",
        }
    }

    /// Canned one-sentence summary shown next to the score.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::PrintReady => {
                "Your design is print-ready! Sharp, properly sized, and formatted correctly."
            }
            Self::Great => "Your design looks good. Minor optimizations could help perfect it.",
            Self::NeedsOptimization => {
                "Your design needs some adjustments before printing for best results."
            }
            Self::HighRisk => "Your design has significant issues that may cause print problems.",
            Self::PrintFailureLikely => {
                "Your design will likely fail to print properly. Consider recreating at higher quality."
            }
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Largest physical print size the upload supports at the reference DPI.
///
/// Full precision in the struct; the `Display` impl is the single rendering
/// used anywhere the figure appears in human-readable text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafePrintSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl std::fmt::Display for SafePrintSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.1} \u{00d7} {:.1} in at {} DPI",
            self.width_in, self.height_in, REFERENCE_DPI
        )
    }
}

/// Human-readable issue narratives, one per inspected dimension.
///
/// Computed from the same asset fields as the sub-scores (plus the
/// edge-crowding verdict for `layout`), but independent of the numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueReport {
    pub resolution: String,
    pub color: String,
    pub layout: String,
    pub format: String,
}

/// Full output of one scoring pass over an [`Asset`].
#[derive(Debug, Clone, PartialEq)]
pub struct SuitabilityReport {
    pub breakdown: ScoreBreakdown,
    pub tier: Tier,
    pub issues: IssueReport,
    pub safe_print: SafePrintSize,
}

impl SuitabilityReport {
    /// Flatten into the wire shape consumed by the HTTP layer and the
    /// report renderer.
    pub fn to_score_result(&self, asset: &Asset) -> ScoreResult {
        ScoreResult {
            width_px: asset.width_px,
            height_px: asset.height_px,
            file_size: asset.byte_size,
            format_type: asset.format_token.clone(),
            max_print_width_in: self.safe_print.width_in,
            max_print_height_in: self.safe_print.height_in,
            total_score: self.breakdown.total,
            tier: self.tier.label().into(),
            tier_color: self.tier.color().into(),
            summary: self.tier.summary().into(),
            issues: self.issues.clone(),
        }
    }
}

/// JSON result object returned to callers. Field names are a stable
/// contract shared with the report renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub width_px: u32,
    pub height_px: u32,
    pub file_size: u64,
    pub format_type: String,
    pub max_print_width_in: f64,
    pub max_print_height_in: f64,
    pub total_score: u32,
    pub tier: String,
    pub tier_color: String,
    pub summary: String,
    pub issues: IssueReport,
}
