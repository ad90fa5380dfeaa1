use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eureject::distance::DistanceScorer;
use eureject::retention::{RetainedSet, ScoredRow};
use eureject::schema::ColumnSchema;
use eureject::stats::Standardization;
use std::path::Path;
use std::sync::Arc;

/// Deterministic pseudo-random distances
fn make_distances(n: usize) -> Vec<f64> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 11) as f64 / (1u64 << 53) as f64 * 10.0
        })
        .collect()
}

/// Benchmark streaming rows through the retention selector
fn bench_retention(c: &mut Criterion) {
    let mut group = c.benchmark_group("retention");
    let n = 100_000;
    let distances = make_distances(n);
    let source: Arc<Path> = Arc::from(Path::new("sims.txt"));
    let fields: Vec<Box<[u8]>> = ["0.1", "0.2", "0.3"].iter().map(|f| Box::from(f.as_bytes())).collect();

    for capacity in [10, 1_000, 10_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &k| {
            b.iter(|| {
                let mut set = RetainedSet::new(k, ColumnSchema::new(["a", "b", "c"]));
                for (i, &distance) in distances.iter().enumerate() {
                    if set.admits(distance) {
                        set.insert(ScoredRow {
                            distance,
                            source_file: Arc::clone(&source),
                            line_number: i + 2,
                            fields: fields.clone(),
                        });
                    }
                }
                black_box(set.len())
            });
        });
    }

    group.finish();
}

/// Benchmark standardizing and scoring rows
fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");

    for width in [4, 32, 128] {
        let columns = ColumnSchema::new((0..width).map(|i| format!("s{}", i)));
        let standardization =
            Standardization::supplied(&columns, vec![0.5; width], vec![2.0; width]).unwrap();
        let observed = make_distances(width);
        let scorer = DistanceScorer::new(standardization, &observed).unwrap();
        let rows: Vec<Vec<f64>> = (0..1_000).map(|i| make_distances(width + i)[i..].to_vec()).collect();

        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &rows, |b, rows| {
            let mut buffer = Vec::with_capacity(width);
            b.iter(|| {
                let mut total = 0.0;
                for row in rows {
                    buffer.clear();
                    buffer.extend_from_slice(row);
                    total += scorer.score(&mut buffer).unwrap();
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_retention, bench_scoring);
criterion_main!(benches);
