//! Criterion benchmarks for pricer_core term structure lookups.
//!
//! Measures interpolation and curve/surface queries across pillar counts
//! to characterise the cost of the binary-search bracket.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::market_data::curves::{InterpolatedCurve, YieldCurve};
use pricer_core::market_data::surfaces::{InterpolatedVolSurface, VolatilitySurface};
use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};

/// Pillar times from 0.25y in quarterly steps, rates on a gentle upward slope.
fn generate_pillars(n: usize) -> (Vec<f64>, Vec<f64>) {
    let times: Vec<f64> = (1..=n).map(|i| i as f64 * 0.25).collect();
    let rates: Vec<f64> = times.iter().map(|&t| 0.02 + 0.002 * t.sqrt()).collect();
    (times, rates)
}

/// Benchmark linear interpolation lookup.
fn bench_linear_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_interpolation");

    for size in [10, 100, 1000] {
        let (xs, ys) = generate_pillars(size);
        let interp = LinearInterpolator::new(&xs, &ys).unwrap();
        let mid = xs[size / 2] + 0.1;

        group.bench_with_input(BenchmarkId::new("lookup", size), &interp, |b, interp| {
            b.iter(|| interp.interpolate(black_box(mid)));
        });
    }

    group.finish();
}

/// Benchmark discount factor and forward rate queries on an interpolated curve.
fn bench_yield_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("yield_curve");

    for size in [10, 100] {
        let (times, rates) = generate_pillars(size);
        let curve = InterpolatedCurve::new(&times, &rates).unwrap();

        group.bench_with_input(BenchmarkId::new("discount_factor", size), &curve, |b, curve| {
            b.iter(|| curve.discount_factor(black_box(1.7)));
        });

        group.bench_with_input(BenchmarkId::new("forward_rate", size), &curve, |b, curve| {
            b.iter(|| curve.forward_rate(black_box(1.0), black_box(2.0)));
        });

        group.bench_with_input(BenchmarkId::new("parallel_shift", size), &curve, |b, curve| {
            b.iter(|| curve.parallel_shift(black_box(1.0)));
        });
    }

    group.finish();
}

/// Benchmark bilinear volatility lookup on square grids.
fn bench_vol_surface(c: &mut Criterion) {
    let mut group = c.benchmark_group("vol_surface");

    for size in [5, 20, 50] {
        let strikes: Vec<f64> = (0..size).map(|i| 50.0 + i as f64 * 100.0 / size as f64).collect();
        let tenors: Vec<f64> = (1..=size).map(|j| j as f64 * 0.25).collect();
        let vols: Vec<Vec<f64>> = strikes
            .iter()
            .map(|&k| tenors.iter().map(|&t| 0.2 + 0.0005 * (k - 100.0).abs() - 0.01 * t.ln()).collect())
            .collect();
        let surface = InterpolatedVolSurface::new(&strikes, &tenors, &vols).unwrap();

        group.bench_with_input(BenchmarkId::new("volatility", size), &surface, |b, surface| {
            b.iter(|| surface.volatility(black_box(97.5), black_box(0.8)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_linear_interpolation,
    bench_yield_curve,
    bench_vol_surface
);
criterion_main!(benches);
