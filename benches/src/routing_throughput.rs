use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use storeroute::prelude::*;

fn make_batch(count: usize) -> Vec<KeyedTransaction> {
    (0..count)
        .map(|i| {
            // Every tenth record misses its sku and dead-letters
            let sku = if i % 10 == 0 {
                None
            } else {
                Some(format!("Item-{i}"))
            };
            ItemTransaction::new(
                Some(format!("Store-{}", i % 8)),
                sku,
                OperationType::Restock,
                i as i64,
                33.2,
            )
            .into_keyed()
        })
        .collect()
}

/// Benchmark routing throughput into in-memory sinks
fn bench_memory_sink_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_sink_routing");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let router = Router::new(MemorySink::new(), MemorySink::new());
                    (router, make_batch(count))
                },
                |(router, records)| {
                    for record in records {
                        black_box(router.route(record).ok());
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark the decision table alone, without delivery
fn bench_table_select(c: &mut Criterion) {
    let table = RouteTable::standard();
    let batch = make_batch(1_000);

    c.bench_function("table_select_1000", |b| {
        b.iter(|| {
            for record in &batch {
                black_box(table.select(&record.value));
            }
        });
    });
}

criterion_group!(benches, bench_memory_sink_routing, bench_table_select);
criterion_main!(benches);
