// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Edge-crowding detector.
//
// Flags probable missing margin or bleed by scanning a fixed-width band
// around the border of the downsampled edge sample for content that is not
// near-white. The band thickness is derived from the nominal 100 px sample
// edge, not from the actual sample dimensions.

use proofwerk_core::types::EdgeSample;
use tracing::debug;

/// Channel value at or above which a pixel counts as near-white.
const NEAR_WHITE_MIN: u8 = 250;

/// Border band as a percentage of the nominal sample edge.
const EDGE_BAND_PCT: u32 = 3;

/// Band thickness in pixels, fixed against the nominal edge.
const EDGE_BAND_PX: u32 = EdgeSample::NOMINAL_EDGE * EDGE_BAND_PCT / 100;

/// Narrative when border content is found.
pub const CROWDED_NARRATIVE: &str =
    "Potential edge crowding detected. Consider adding safe margin or bleed area.";

/// Narrative when the border is clear (or no sample exists to inspect).
pub const CLEAR_NARRATIVE: &str = "Good margins detected. No bleed issues found.";

/// Scan the border band for non-near-white content.
///
/// The scan is row-major (top to bottom, left to right within a row) and
/// stops at the first qualifying pixel.
pub fn detect(sample: &EdgeSample) -> bool {
    let width = sample.width();
    let height = sample.height();

    for y in 0..height {
        for x in 0..width {
            if !in_band(x, y, width, height) {
                continue;
            }
            let (r, g, b) = sample.rgb(x, y);
            if r < NEAR_WHITE_MIN || g < NEAR_WHITE_MIN || b < NEAR_WHITE_MIN {
                debug!(x, y, r, g, b, "Border content found");
                return true;
            }
        }
    }
    false
}

/// Whether `(x, y)` lies within the border band of a `width` x `height`
/// sample. Samples smaller than twice the band are border everywhere.
fn in_band(x: u32, y: u32, width: u32, height: u32) -> bool {
    x < EDGE_BAND_PX
        || y < EDGE_BAND_PX
        || x >= width.saturating_sub(EDGE_BAND_PX)
        || y >= height.saturating_sub(EDGE_BAND_PX)
}

/// Map a possibly-absent sample to the layout narrative. Assets without a
/// sample (PDFs, failed decodes) always report clear margins.
pub fn layout_issue(sample: Option<&EdgeSample>) -> &'static str {
    match sample {
        Some(sample) if detect(sample) => CROWDED_NARRATIVE,
        _ => CLEAR_NARRATIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_sample(width: u32, height: u32) -> Vec<u8> {
        vec![255u8; width as usize * height as usize * 3]
    }

    fn with_pixel(mut data: Vec<u8>, width: u32, x: u32, y: u32, value: u8) -> Vec<u8> {
        let idx = (y as usize * width as usize + x as usize) * 3;
        data[idx] = value;
        data[idx + 1] = value;
        data[idx + 2] = value;
        data
    }

    #[test]
    fn all_white_sample_is_clear() {
        let sample = EdgeSample::new(100, 100, 3, white_sample(100, 100)).unwrap();
        assert!(!detect(&sample));
        assert_eq!(layout_issue(Some(&sample)), CLEAR_NARRATIVE);
    }

    #[test]
    fn dark_pixel_in_band_triggers() {
        let data = with_pixel(white_sample(100, 100), 100, 1, 1, 0);
        let sample = EdgeSample::new(100, 100, 3, data).unwrap();
        assert!(detect(&sample));
        assert_eq!(layout_issue(Some(&sample)), CROWDED_NARRATIVE);
    }

    #[test]
    fn dark_pixel_in_center_does_not_trigger() {
        let data = with_pixel(white_sample(100, 100), 100, 50, 50, 0);
        let sample = EdgeSample::new(100, 100, 3, data).unwrap();
        assert!(!detect(&sample));
    }

    #[test]
    fn band_boundary_is_exact() {
        // (3, 3) is the first pixel outside a 3 px band.
        let inside = with_pixel(white_sample(100, 100), 100, 2, 50, 0);
        let sample = EdgeSample::new(100, 100, 3, inside).unwrap();
        assert!(detect(&sample));

        let outside = with_pixel(white_sample(100, 100), 100, 3, 3, 0);
        let sample = EdgeSample::new(100, 100, 3, outside).unwrap();
        assert!(!detect(&sample));

        // Right edge: x = width - 3 is back inside the band.
        let right = with_pixel(white_sample(100, 100), 100, 97, 50, 0);
        let sample = EdgeSample::new(100, 100, 3, right).unwrap();
        assert!(detect(&sample));
    }

    #[test]
    fn near_white_threshold_is_exact() {
        // 250 in every channel is still near-white; 249 is content.
        let data = with_pixel(white_sample(100, 100), 100, 0, 0, 250);
        let sample = EdgeSample::new(100, 100, 3, data).unwrap();
        assert!(!detect(&sample));

        let data = with_pixel(white_sample(100, 100), 100, 0, 0, 249);
        let sample = EdgeSample::new(100, 100, 3, data).unwrap();
        assert!(detect(&sample));
    }

    #[test]
    fn band_width_comes_from_nominal_edge_not_sample_size() {
        // A 40 px wide sample keeps the same 3 px band.
        let data = with_pixel(white_sample(40, 100), 40, 20, 50, 0);
        let sample = EdgeSample::new(40, 100, 3, data).unwrap();
        assert!(!detect(&sample), "center of a narrow sample is not border");

        let data = with_pixel(white_sample(40, 100), 40, 38, 50, 0);
        let sample = EdgeSample::new(40, 100, 3, data).unwrap();
        assert!(detect(&sample));
    }

    #[test]
    fn tiny_sample_is_all_border() {
        // 5 px wide: bands from both sides overlap, every column qualifies.
        let data = with_pixel(white_sample(5, 5), 5, 2, 2, 0);
        let sample = EdgeSample::new(5, 5, 3, data).unwrap();
        assert!(detect(&sample));
    }

    #[test]
    fn alpha_channel_is_ignored() {
        // RGBA sample with a transparent-black alpha everywhere: only the
        // first three channels matter.
        let mut data = Vec::with_capacity(10 * 10 * 4);
        for _ in 0..(10 * 10) {
            data.extend_from_slice(&[255, 255, 255, 0]);
        }
        let sample = EdgeSample::new(10, 10, 4, data).unwrap();
        assert!(!detect(&sample));
    }

    #[test]
    fn missing_sample_reports_clear() {
        assert_eq!(layout_issue(None), CLEAR_NARRATIVE);
    }
}
