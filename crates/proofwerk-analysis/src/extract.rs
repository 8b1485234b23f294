// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Feature extractor — turns raw upload bytes into a scoring `Asset`.
//
// Raster uploads are decoded with the `image` crate and downsampled into a
// small aspect-fit RGB border sample. PDF uploads are never rendered: US
// Letter nominal dimensions at the reference DPI are substituted, and the
// document is opened only for a page-count sanity log. Decode failures
// degrade to zero dimensions instead of propagating into the scorer; the
// only surfaced error is the upload size gate.

use image::DynamicImage;
use image::imageops::FilterType;
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument, warn};

use proofwerk_core::config::AppConfig;
use proofwerk_core::error::{ProofwerkError, Result};
use proofwerk_core::types::{Asset, EdgeSample};

/// Builds [`Asset`]s from uploaded file bytes.
pub struct FeatureExtractor {
    config: AppConfig,
}

impl FeatureExtractor {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(AppConfig::default())
    }

    /// Extract scoring features from an upload.
    ///
    /// `file_name` supplies the extension token and `mime_type` the content
    /// class. Malformed content never fails: undecodable uploads come back
    /// with zero dimensions and no edge sample.
    #[instrument(skip(self, bytes), fields(bytes_len = bytes.len()))]
    pub fn extract(&self, bytes: &[u8], file_name: &str, mime_type: Option<&str>) -> Result<Asset> {
        let byte_size = bytes.len() as u64;
        if byte_size > self.config.max_upload_bytes {
            return Err(ProofwerkError::UploadTooLarge {
                actual: byte_size,
                limit: self.config.max_upload_bytes,
            });
        }

        if self.config.fingerprint_uploads {
            debug!(
                fingerprint = %hex::encode(Sha256::digest(bytes)),
                "Upload fingerprinted"
            );
        }

        let format_token = format_token(file_name);
        let content_is_raster = mime_type.is_some_and(|m| m.starts_with("image/"));

        if format_token == "pdf" {
            return Ok(extract_pdf(bytes, content_is_raster));
        }
        if content_is_raster {
            return Ok(extract_raster(bytes, format_token, byte_size));
        }

        // Neither a PDF nor declared raster content: nothing to decode.
        debug!(token = %format_token, "Non-raster upload, no dimensions extracted");
        Ok(Asset {
            format_token,
            content_is_raster: false,
            byte_size,
            width_px: 0,
            height_px: 0,
            edge_sample: None,
        })
    }
}

/// PDFs score on nominal dimensions regardless of actual page geometry.
/// The document is opened only to log its page count.
fn extract_pdf(bytes: &[u8], content_is_raster: bool) -> Asset {
    match lopdf::Document::load_mem(bytes) {
        Ok(document) => debug!(pages = document.get_pages().len(), "PDF parsed"),
        Err(err) => warn!(
            %err,
            "PDF did not parse cleanly; scoring on nominal dimensions anyway"
        ),
    }
    Asset::pdf(bytes.len() as u64, content_is_raster)
}

fn extract_raster(bytes: &[u8], format_token: String, byte_size: u64) -> Asset {
    match image::load_from_memory(bytes) {
        Ok(img) => {
            let (width_px, height_px) = (img.width(), img.height());
            let edge_sample = match downsample(&img) {
                Ok(sample) => Some(sample),
                Err(err) => {
                    warn!(%err, "Could not build edge sample");
                    None
                }
            };
            info!(width_px, height_px, "Raster decoded");
            Asset {
                format_token,
                content_is_raster: true,
                byte_size,
                width_px,
                height_px,
                edge_sample,
            }
        }
        Err(err) => {
            warn!(%err, "Could not decode raster upload; degrading to zero dimensions");
            Asset {
                format_token,
                content_is_raster: true,
                byte_size,
                width_px: 0,
                height_px: 0,
                edge_sample: None,
            }
        }
    }
}

/// Aspect-fit the decoded image within the nominal sample grid and strip it
/// down to interleaved RGB.
fn downsample(img: &DynamicImage) -> Result<EdgeSample> {
    let thumb = img.resize(
        EdgeSample::NOMINAL_EDGE,
        EdgeSample::NOMINAL_EDGE,
        FilterType::Lanczos3,
    );
    let rgb = thumb.to_rgb8();
    EdgeSample::new(rgb.width(), rgb.height(), 3, rgb.into_raw())
}

/// Lower-cased extension token of a file name, "unknown" when absent.
fn format_token(file_name: &str) -> String {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| "unknown".into())
}
