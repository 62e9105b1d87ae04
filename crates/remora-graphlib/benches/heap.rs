use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{thread_rng, Rng};
use remora_graphlib::collections::DataMap;
use remora_graphlib::{Heap, HeapMode, Id, Node};
use std::hint::black_box;

fn random_items(n: usize) -> Vec<Node> {
    let mut rng = thread_rng();
    (0..n)
        .map(|i| {
            let mut item = Node::new(i);
            item.set("key", rng.gen_range(0.0..1.0f64));
            item
        })
        .collect()
}

fn bench_heapify(c: &mut Criterion) {
    let mut group = c.benchmark_group("heapify");
    for &n in &[100usize, 1_000, 10_000] {
        let items = random_items(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter_batched(
                || items.clone(),
                |items| black_box(Heap::heapify(items, "key", HeapMode::Min).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_heapsort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heapsort");
    for &n in &[100usize, 1_000, 10_000] {
        let items = random_items(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter_batched(
                || Heap::heapify(items.clone(), "key", HeapMode::Min).unwrap(),
                |mut heap| {
                    while let Some(item) = heap.extract() {
                        black_box(item);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");
    for &n in &[1_000usize, 10_000] {
        let items = random_items(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter_batched(
                || Heap::heapify(items.clone(), "key", HeapMode::Min).unwrap(),
                |mut heap| {
                    for i in (0..n).step_by(7) {
                        let mut data = DataMap::default();
                        data.insert("key".to_string(), (-1.0 - i as f64).into());
                        heap.modify(&Id::from(i), data).unwrap();
                    }
                    black_box(heap);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_heapify, bench_heapsort, bench_decrease_key);
criterion_main!(benches);
