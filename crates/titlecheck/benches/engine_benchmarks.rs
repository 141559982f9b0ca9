//! Rule engine performance benchmarks.
//!
//! Measures rule evaluation on preloaded tables, clean and dirty.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use titlecheck::{COLUMNS, DataTable, RuleEngine, TitleChecker};

/// Build a table; every `dirty_every`th row breaks several rules.
fn generate_table(rows: usize, dirty_every: Option<usize>) -> DataTable {
    let headers = COLUMNS.iter().map(|c| c.name.to_string()).collect();

    let data = (0..rows)
        .map(|row| {
            let dirty = dirty_every.is_some_and(|n| row % n == 0);
            let values = [
                if dirty { "GTI000000".to_string() } else { format!("GTI{:06}", row) },
                "Film".to_string(),
                if dirty { "Amélie".to_string() } else { format!("Title {}", row) },
                String::new(),
                "95".to_string(),
                "Jane Doe".to_string(),
                "John Smith".to_string(),
                "Acme Pictures".to_string(),
                "2019".to_string(),
                if dirty { "AU".to_string() } else { "36".to_string() },
                "12".to_string(),
                "Yes".to_string(),
                if dirty { "18".to_string() } else { "9".to_string() },
                "Mild themes".to_string(),
                if dirty { String::new() } else { "Low".to_string() },
                "None".to_string(),
                if dirty { "Extreme".to_string() } else { "Medium".to_string() },
                "None".to_string(),
                "None".to_string(),
                "High".to_string(),
                "No".to_string(),
                "No".to_string(),
                if dirty { "2021-03-15".to_string() } else { "03/15/2021".to_string() },
            ];
            values.into_iter().map(Some).collect()
        })
        .collect();

    DataTable::new(headers, data)
}

/// Benchmark the full rule set on clean tables.
fn bench_clean_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_clean");
    let engine = RuleEngine::new();

    for rows in [100, 1_000, 10_000].iter() {
        let table = generate_table(*rows, None);

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| black_box(engine.validate(table).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark the full rule set as the share of bad rows grows.
fn bench_dirty_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_dirty");
    let engine = RuleEngine::new();

    for every in [100, 10, 2].iter() {
        let table = generate_table(5_000, Some(*every));

        group.throughput(Throughput::Elements(5_000));
        group.bench_with_input(BenchmarkId::new("dirty_every", every), &table, |b, table| {
            b.iter(|| black_box(engine.validate(table).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark row-grouped message rendering on a dirty report.
fn bench_row_messages(c: &mut Criterion) {
    let table = generate_table(5_000, Some(5));
    let report = TitleChecker::new().validate_table(&table).unwrap();

    c.bench_function("row_messages", |b| b.iter(|| black_box(report.row_messages())));
}

criterion_group!(benches, bench_clean_tables, bench_dirty_tables, bench_row_messages);
criterion_main!(benches);
