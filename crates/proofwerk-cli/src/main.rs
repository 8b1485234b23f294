// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Proofwerk — deterministic print-suitability scoring.
//
// Entry point. Initialises logging, reads the file named on the command
// line, runs feature extraction and the heuristic scorer, and prints either
// a human summary or the JSON wire shape.

use std::path::PathBuf;

use clap::Parser;

use proofwerk_analysis::FeatureExtractor;
use proofwerk_core::config::AppConfig;
use proofwerk_core::error::Result;
use proofwerk_core::human_errors::humanize_error;
use proofwerk_core::types::{REFERENCE_DPI, ScoreResult};

#[derive(Debug, Parser)]
#[command(
    name = "proofwerk",
    version,
    about = "Score a design file for print suitability"
)]
struct Cli {
    /// File to analyze (PNG, JPG, or PDF).
    file: PathBuf,

    /// Declared MIME type; inferred from the extension when omitted.
    #[arg(long)]
    mime: Option<String>,

    /// Emit the JSON result object instead of the human summary.
    #[arg(long)]
    json: bool,

    /// Largest upload accepted, in bytes.
    #[arg(long)]
    max_bytes: Option<u64>,
}

fn main() {
    // Logs go to stderr so `--json` output stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "Proofwerk starting");
    if let Err(err) = run(&cli) {
        let human = humanize_error(&err);
        eprintln!("{} {}", human.message, human.suggestion);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let bytes = std::fs::read(&cli.file)?;
    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime = cli.mime.clone().or_else(|| guess_mime(&file_name));

    let mut config = AppConfig::default();
    if let Some(max_bytes) = cli.max_bytes {
        config.max_upload_bytes = max_bytes;
    }

    let extractor = FeatureExtractor::new(config);
    let asset = extractor.extract(&bytes, &file_name, mime.as_deref())?;
    let report = proofwerk_analysis::score(&asset);
    let result = report.to_score_result(&asset);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result);
    }
    Ok(())
}

/// Best-effort MIME guess from the extension, for when the caller does not
/// declare one. Unknown extensions stay undeclared rather than guessing.
fn guess_mime(file_name: &str) -> Option<String> {
    let extension = std::path::Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "avif" => "image/avif",
        "pdf" => "application/pdf",
        _ => return None,
    };
    Some(mime.into())
}

fn print_summary(result: &ScoreResult) {
    println!(
        "{} ({}/100) \u{2014} {}",
        result.tier, result.total_score, result.summary
    );
    println!(
        "  Dimensions:     {} \u{00d7} {} px ({:.1} MB)",
        result.width_px,
        result.height_px,
        result.file_size as f64 / 1_048_576.0
    );
    println!(
        "  Max print size: {:.1} \u{00d7} {:.1} in at {} DPI",
        result.max_print_width_in, result.max_print_height_in, REFERENCE_DPI
    );
    println!("  Resolution:     {}", result.issues.resolution);
    println!("  Color:          {}", result.issues.color);
    println!("  Layout:         {}", result.issues.layout);
    println!("  Format:         {}", result.issues.format);
}
