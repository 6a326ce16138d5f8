// ============================================================================
// Storage Quantity Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - checked operations through the operand contract
// 2. Conversion - unit lookup plus rate application
// 3. Formatting - grouped display rendering across magnitudes
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use storage_units::prelude::*;

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let a = Quantity::new(UnitKind::Megabyte, 1234.5).unwrap();
    let b = Quantity::new(UnitKind::Megabyte, 67.89).unwrap();

    group.bench_function("checked_add_quantity", |bench| {
        bench.iter(|| black_box(a).checked_add(black_box(&b)))
    });

    group.bench_function("checked_add_number", |bench| {
        bench.iter(|| black_box(a).checked_add(black_box(42.0)))
    });

    group.bench_function("checked_div_floor", |bench| {
        bench.iter(|| black_box(a).checked_div(black_box(&b)))
    });

    group.finish();
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    let q = Quantity::new(UnitKind::Megabyte, 5.0).unwrap();

    // Long names resolve on the first table pass, symbols on the second
    for target in ["gigabyte", "gb", "yb"] {
        group.bench_with_input(BenchmarkId::new("convert", target), &target, |bench, target| {
            bench.iter(|| black_box(q).convert(black_box(target)))
        });
    }

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    for magnitude in [1.5, 1234.5, 1234567.891, 1.0e18] {
        let q = Quantity::new(UnitKind::Gigabyte, magnitude).unwrap();
        group.bench_with_input(
            BenchmarkId::new("grouped", magnitude),
            &q,
            |bench, q| bench.iter(|| black_box(q).to_string()),
        );
    }

    let raw = Quantity::new(UnitKind::Gigabyte, 1234567.891)
        .unwrap()
        .with_formatting(false);
    group.bench_function("raw", |bench| bench.iter(|| black_box(raw).to_string()));

    group.finish();
}

criterion_group!(
    benches,
    benchmark_arithmetic,
    benchmark_conversion,
    benchmark_formatting
);
criterion_main!(benches);
