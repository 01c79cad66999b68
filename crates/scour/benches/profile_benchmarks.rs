//! Profiling and cleaning pipeline performance benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use scour::{Dataset, Profiler, Row, Scour, Value};

/// Generate a realistic sales dataset with mixed types, gaps, and
/// duplicates.
fn generate_sales_data(rows: usize) -> Dataset {
    let regions = ["north", "south", "east", "west"];
    let products = ["widget", "gadget", "gizmo"];

    let rows = (0..rows)
        .map(|i| {
            let mut row = Row::new();
            row.insert("order_id".to_string(), Value::Number(i as f64));
            row.insert(
                "region".to_string(),
                if i % 17 == 0 {
                    Value::Null
                } else {
                    Value::Str(regions[i % regions.len()].to_string())
                },
            );
            row.insert(
                "product".to_string(),
                Value::Str(products[i % products.len()].to_string()),
            );
            row.insert(
                "qty".to_string(),
                if i % 11 == 0 {
                    Value::Str(String::new())
                } else {
                    Value::Str(((i % 50) + 1).to_string())
                },
            );
            row.insert(
                "total".to_string(),
                Value::Number(9.99 + (i % 100) as f64 * 0.5),
            );
            row
        })
        .collect();

    Dataset::new(rows)
}

fn bench_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile");

    for &rows in &[100usize, 1_000, 10_000] {
        let dataset = generate_sales_data(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &dataset, |b, data| {
            let profiler = Profiler::new();
            b.iter(|| profiler.profile(black_box(data)));
        });
    }

    group.finish();
}

fn bench_clean_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean_pipeline");

    for &rows in &[100usize, 1_000, 10_000] {
        let dataset = generate_sales_data(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &dataset, |b, data| {
            let engine = Scour::new();
            b.iter(|| engine.clean(black_box(data)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_profile, bench_clean_pipeline);
criterion_main!(benches);
