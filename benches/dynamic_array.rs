use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use learn_collections::collections::contiguous::DynamicArray;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Inserting at index 0 shifts every element, so both containers are `O(n)` per insert.
fn bench_head_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("head_insert");

    for size in SIZES.iter() {
        group.bench_with_input(BenchmarkId::new("DynamicArray", size), size, |b, &size| {
            b.iter(|| {
                let mut arr = DynamicArray::new();
                for i in 0..size {
                    arr.insert(0, black_box(i));
                }
                arr
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..size {
                    vec.insert(0, black_box(i));
                }
                vec
            });
        });
    }

    group.finish();
}

/// Overwrites every element in place, which never resizes.
fn bench_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("writes");

    for size in SIZES.iter() {
        group.bench_with_input(BenchmarkId::new("DynamicArray", size), size, |b, &size| {
            let mut arr: DynamicArray<usize> = (0..size).collect();
            b.iter(|| {
                for i in 0..size {
                    arr.replace(i, black_box(size - i));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), size, |b, &size| {
            let mut vec: Vec<usize> = (0..size).collect();
            b.iter(|| {
                for i in 0..size {
                    vec[i] = black_box(size - i);
                }
            });
        });
    }

    group.finish();
}

/// Removes every element from the end. DynamicArray halves its capacity as it goes, Vec never
/// shrinks.
fn bench_tail_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("tail_remove");

    for size in SIZES.iter() {
        group.bench_with_input(BenchmarkId::new("DynamicArray", size), size, |b, &size| {
            b.iter_batched(
                || (0..size).collect::<DynamicArray<usize>>(),
                |mut arr| {
                    while let Some(value) = arr.pop() {
                        black_box(value);
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), size, |b, &size| {
            b.iter_batched(
                || (0..size).collect::<Vec<usize>>(),
                |mut vec| {
                    while let Some(value) = vec.pop() {
                        black_box(value);
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_head_insert, bench_writes, bench_tail_remove);
criterion_main!(benches);
