// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the proofwerk-analysis crate. Benchmarks the full
// heuristic scoring pass including the edge-band scan on a worst-case
// all-white 100x100 sample (no early exit anywhere in the band).

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use proofwerk_analysis::scoring;
use proofwerk_core::types::{Asset, EdgeSample};

fn bench_heuristic_score(c: &mut Criterion) {
    let sample = EdgeSample::new(100, 100, 3, vec![255u8; 100 * 100 * 3])
        .expect("valid synthetic sample");
    let asset = Asset {
        format_token: "png".into(),
        content_is_raster: true,
        byte_size: 3 * 1024 * 1024,
        width_px: 3000,
        height_px: 4500,
        edge_sample: Some(sample),
    };

    c.bench_function("heuristic score (all-white 100x100 sample)", |b| {
        b.iter(|| black_box(scoring::score(black_box(&asset))));
    });
}

criterion_group!(benches, bench_heuristic_score);
criterion_main!(benches);
