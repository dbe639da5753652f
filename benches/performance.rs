//! Performance benchmarks for the observable store.

use beacon_store::{EventChannel, MemoryStore, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

#[derive(Clone)]
struct Entry {
    id: String,
    value: u64,
}

impl Record for Entry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Benchmark writes with varying listener counts
fn bench_set_with_listeners(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_with_listeners");

    for listeners in [0usize, 1, 10, 100] {
        group.bench_with_input(
            BenchmarkId::new("listeners", listeners),
            &listeners,
            |b, &count| {
                let store = MemoryStore::new();
                for _ in 0..count {
                    store.on_before_set(|event| {
                        black_box(&event.new_value);
                        Ok(())
                    });
                    store.on_after_set(|event| {
                        black_box(&event.value);
                        Ok(())
                    });
                }

                let mut i = 0u64;
                b.iter(|| {
                    i += 1;
                    store
                        .set(Entry {
                            id: format!("{}", i % 1000),
                            value: i,
                        })
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark lookups at varying store sizes
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for size in [100u64, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("records", size), &size, |b, &size| {
            let store = MemoryStore::new();
            for i in 0..size {
                store
                    .set(Entry {
                        id: format!("{i}"),
                        value: i,
                    })
                    .unwrap();
            }

            let mut i = 0u64;
            b.iter(|| {
                i += 1;
                black_box(store.get(&format!("{}", i % size)));
            });
        });
    }

    group.finish();
}

/// Benchmark raw channel publish with varying listener counts
fn bench_publish(c: &mut Criterion) {
    let mut group = c.benchmark_group("publish");

    for listeners in [1usize, 10, 100] {
        group.bench_with_input(
            BenchmarkId::new("listeners", listeners),
            &listeners,
            |b, &count| {
                let channel: EventChannel<u64> = EventChannel::new();
                for _ in 0..count {
                    channel.subscribe(|event: &u64| {
                        black_box(*event);
                        Ok(())
                    });
                }

                b.iter(|| {
                    channel.publish(&42).unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_set_with_listeners, bench_get, bench_publish);
criterion_main!(benches);
