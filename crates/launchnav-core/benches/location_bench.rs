// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for location parsing and normalization in
// the launchnav-core crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use launchnav_core::location::parse_location;
use launchnav_core::Location;

/// Coordinate text, the path that pays for number parsing and reformatting.
fn bench_parse_coordinate_text(c: &mut Criterion) {
    c.bench_function("parse_location (coords)", |b| {
        b.iter(|| black_box(parse_location(black_box(" 51.507351 , -0.127758 "))));
    });
}

/// Place names bail out on the first non-digit.
fn bench_parse_place_name(c: &mut Criterion) {
    c.bench_function("parse_location (name)", |b| {
        b.iter(|| black_box(parse_location(black_box("Buckingham Palace, London"))));
    });
}

fn bench_normalize_pair(c: &mut Criterion) {
    let loc = Location::from([50.1, -4.0]);
    c.bench_function("normalize (pair)", |b| {
        b.iter(|| black_box(black_box(&loc).normalize()));
    });
}

criterion_group!(
    benches,
    bench_parse_coordinate_text,
    bench_parse_place_name,
    bench_normalize_pair,
);
criterion_main!(benches);
