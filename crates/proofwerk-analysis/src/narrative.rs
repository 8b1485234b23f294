// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Issue narrative assembly.
//
// Builds the four human-readable issue strings from already-computed asset
// fields. The layout narrative comes from the edge-crowding detector; the
// rest are plain formatting over the same predicates the sub-scores use.
// Physical sizes always render through `SafePrintSize`'s Display so the
// structured figures and the prose never disagree.

use proofwerk_core::types::{Asset, IssueReport, SafePrintSize};

use crate::edge;
use crate::scoring::{FULL_MARKS_HEIGHT_PX, FULL_MARKS_WIDTH_PX};

/// Assemble the full issue report for an asset.
pub fn issue_report(asset: &Asset, safe_print: SafePrintSize) -> IssueReport {
    IssueReport {
        resolution: resolution_issue(asset, safe_print),
        color: color_issue(asset),
        layout: edge::layout_issue(asset.edge_sample.as_ref()).into(),
        format: format_issue(&asset.format_token),
    }
}

fn resolution_issue(asset: &Asset, safe_print: SafePrintSize) -> String {
    if asset.width_px >= FULL_MARKS_WIDTH_PX && asset.height_px >= FULL_MARKS_HEIGHT_PX {
        format!("Resolution is excellent. This design prints sharply up to {safe_print}.")
    } else if megapixels(asset) >= 2.0 {
        format!("Resolution is serviceable. Keep prints at or below {safe_print} to stay sharp.")
    } else {
        format!(
            "Resolution is low for print. Maximum usable size is {safe_print}; re-export at a higher resolution for larger prints."
        )
    }
}

fn color_issue(asset: &Asset) -> String {
    if !asset.content_is_raster && asset.format_token == "pdf" {
        "PDF color profile could not be verified. Confirm CMYK output with your printer before production.".into()
    } else {
        "Colors appear to be RGB. Convert to CMYK before printing to avoid color shifts.".into()
    }
}

fn format_issue(format_token: &str) -> String {
    match format_token {
        "png" | "jpg" | "jpeg" => {
            format!(
                "{} is a print-friendly format. No conversion needed.",
                format_token.to_uppercase()
            )
        }
        "pdf" => "PDF preserves vector content and embedded fonts. Good choice for print.".into(),
        _ => "This format may not print reliably. Export as PNG, JPG, or PDF instead.".into(),
    }
}

fn megapixels(asset: &Asset) -> f64 {
    f64::from(asset.width_px) * f64::from(asset.height_px) / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::safe_print_size;

    fn raster(width_px: u32, height_px: u32, token: &str) -> Asset {
        Asset {
            format_token: token.into(),
            content_is_raster: true,
            byte_size: 1024,
            width_px,
            height_px,
            edge_sample: None,
        }
    }

    #[test]
    fn resolution_narrative_embeds_safe_print_size() {
        let asset = raster(3000, 4500, "png");
        let report = issue_report(&asset, safe_print_size(3000, 4500));
        assert!(
            report
                .resolution
                .contains("10.0 \u{00d7} 15.0 in at 300 DPI"),
            "narrative was: {}",
            report.resolution
        );
        assert!(report.resolution.starts_with("Resolution is excellent"));
    }

    #[test]
    fn low_resolution_narrative_still_formats_size() {
        let asset = raster(600, 900, "png");
        let report = issue_report(&asset, safe_print_size(600, 900));
        assert!(report.resolution.contains("2.0 \u{00d7} 3.0 in at 300 DPI"));
        assert!(report.resolution.starts_with("Resolution is low"));
    }

    #[test]
    fn color_narrative_branches_like_the_color_score() {
        let rgb = issue_report(&raster(100, 100, "png"), safe_print_size(100, 100));
        assert!(rgb.color.contains("RGB"));

        let pdf = Asset::pdf(1024, false);
        let report = issue_report(&pdf, safe_print_size(pdf.width_px, pdf.height_px));
        assert!(report.color.contains("PDF color profile"));
    }

    #[test]
    fn format_narrative_names_the_token() {
        let report = issue_report(&raster(100, 100, "jpg"), safe_print_size(100, 100));
        assert!(report.format.starts_with("JPG"));

        let report = issue_report(&raster(100, 100, "bmp"), safe_print_size(100, 100));
        assert!(report.format.contains("Export as PNG, JPG, or PDF"));
    }

    #[test]
    fn layout_narrative_defaults_to_clear_without_sample() {
        let report = issue_report(&raster(100, 100, "png"), safe_print_size(100, 100));
        assert_eq!(report.layout, edge::CLEAR_NARRATIVE);
    }
}
