//! Indicator and formatting benchmarks.
//!
//! Run with: `cargo bench --package ohlcdash-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ohlcdash_bench::{SIZES, synthetic_closes, synthetic_series};
use ohlcdash_lib::{
    IndicatorConfig, IndicatorEngine, IndicatorSelection, OutputFormat, bollinger, ema, macd,
    rsi, sma,
};
use std::hint::black_box;

const SEED: u64 = 0x5eed;

fn indicator_benchmark(c: &mut Criterion) {
    let config = IndicatorConfig::default();
    let mut group = c.benchmark_group("indicators");

    for len in SIZES {
        let closes = synthetic_closes(len, SEED);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("sma", len), &closes, |b, closes| {
            b.iter(|| sma(black_box(closes), config.sma));
        });
        group.bench_with_input(BenchmarkId::new("ema", len), &closes, |b, closes| {
            b.iter(|| ema(black_box(closes), config.ema));
        });
        group.bench_with_input(BenchmarkId::new("macd", len), &closes, |b, closes| {
            b.iter(|| {
                macd(
                    black_box(closes),
                    config.macd_fast,
                    config.macd_slow,
                    config.macd_signal,
                )
            });
        });
        group.bench_with_input(BenchmarkId::new("rsi", len), &closes, |b, closes| {
            b.iter(|| rsi(black_box(closes), config.rsi));
        });
        group.bench_with_input(BenchmarkId::new("bollinger", len), &closes, |b, closes| {
            b.iter(|| {
                bollinger(
                    black_box(closes),
                    config.bollinger,
                    config.bollinger_multiplier,
                )
            });
        });
    }

    group.finish();
}

fn engine_benchmark(c: &mut Criterion) {
    let engine = IndicatorEngine::with_defaults();
    let selection = IndicatorSelection::all();
    let mut group = c.benchmark_group("engine");

    for len in SIZES {
        let series = synthetic_series(len, SEED);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("enrich_all", len), &series, |b, series| {
            b.iter(|| engine.enrich(black_box(series.clone()), &selection));
        });
    }

    group.finish();
}

fn format_benchmark(c: &mut Criterion) {
    let engine = IndicatorEngine::with_defaults();
    let selection = IndicatorSelection::all();
    let mut group = c.benchmark_group("format");

    for len in SIZES {
        let series = engine.enrich(synthetic_series(len, SEED), &selection);
        group.throughput(Throughput::Elements(len as u64));

        for format in [OutputFormat::Csv, OutputFormat::Table, OutputFormat::Json] {
            group.bench_with_input(
                BenchmarkId::new(format.to_string(), len),
                &series,
                |b, series| {
                    b.iter(|| {
                        let mut out = Vec::with_capacity(len * 128);
                        format.write_series(series, &selection, &mut out).unwrap();
                        out
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, indicator_benchmark, engine_benchmark, format_benchmark);
criterion_main!(benches);
