use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use binpack_core::prelude::*;

fn generate_items(count: usize, min_size: u32, max_size: u32) -> Vec<Item> {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| Item::new(rng.gen_range(min_size..=max_size), rng.gen_range(min_size..=max_size)))
        .collect()
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("engines");
    let counts = vec![50, 100, 200];

    for count in counts {
        let items = generate_items(count, 8, 64);
        group.throughput(Throughput::Elements(count as u64));

        for (name, algo) in [
            ("Guillotine", AlgorithmFamily::Guillotine),
            ("MaximalRectangle", AlgorithmFamily::MaximalRectangle),
            ("Shelf", AlgorithmFamily::Shelf),
            ("Skyline", AlgorithmFamily::Skyline),
        ] {
            group.bench_with_input(BenchmarkId::new(name, count), &items, |b, items| {
                b.iter(|| {
                    let opts = BinManagerOptions::builder()
                        .bin_size(1024, 1024)
                        .pack_algo(algo)
                        .build();
                    let mut mgr = BinManager::new(opts).unwrap();
                    mgr.add_items(items.clone());
                    mgr.execute().unwrap();
                    black_box(mgr.bins().len())
                });
            });
        }
    }

    group.finish();
}

fn bench_sorting_heuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting_heuristics");
    let items = generate_items(150, 8, 64);

    for sort in [
        SortOrder::DescArea,
        SortOrder::AscArea,
        SortOrder::DescShortSide,
        SortOrder::DescPerimeter,
    ] {
        group.bench_function(format!("{sort:?}"), |b| {
            b.iter(|| {
                let opts = BinManagerOptions::builder()
                    .bin_size(1024, 1024)
                    .pack_algo(AlgorithmFamily::Guillotine)
                    .sorting_heuristic(sort)
                    .build();
                let mut mgr = BinManager::new(opts).unwrap();
                mgr.add_items(items.clone());
                mgr.execute().unwrap();
                black_box(mgr.bins().len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engines, bench_sorting_heuristics);
criterion_main!(benches);
