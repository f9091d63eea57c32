use std::path::Path;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use numgen::sort::{
    ascending, descending, sort_dyn, sort_fn_ptr, sort_inlined, sort_static, sort_with, sorter,
    Descending,
};
use numgen::{generate, Fixture, GeneratorConfig, Tier};
use tempfile::TempDir;

/// The 1,000, 10,000 and 100,000 value tiers.
const EXPONENTS: [u32; 3] = [2, 3, 4];

fn load(dir: &Path, tier: Tier) -> Vec<i32> {
    Fixture::open(dir.join(tier.file_name()))
        .and_then(|f| f.numbers())
        .unwrap()
        .into_iter()
        .map(|n| i32::try_from(n).unwrap())
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let config = GeneratorConfig {
        out_dir: dir.path().to_path_buf(),
        tiers: EXPONENTS.iter().map(|&e| Tier::new(e).unwrap()).collect(),
        seed: Some(0),
    };
    generate(&config).unwrap();

    let mut group = c.benchmark_group("exchange_sort");
    group.sample_size(10);

    for &tier in &config.tiers {
        let numbers = load(dir.path(), tier);
        let count = tier.count();

        let mut run = |name: &str, f: &dyn Fn(&mut [i32])| {
            group.bench_with_input(BenchmarkId::new(name, count), &numbers, |b, numbers| {
                b.iter_batched_ref(
                    || numbers.clone(),
                    |v| f(v.as_mut_slice()),
                    BatchSize::LargeInput,
                )
            });
        };

        run("inlined", &sort_inlined);
        run("fn_ptr", &|v| sort_fn_ptr(v, ascending));
        run("static", &sort_static::<Descending>);
        run("factory", &sorter(|a, b| if a > b { 1 } else { -1 }));
        run("generic_closure", &|v| {
            sort_with(v, |a, b| if a > b { 1 } else { -1 })
        });
        run("generic_fn_item", &|v| sort_with(v, descending));
        run("dyn", &|v| sort_dyn(v, &descending));
    }

    group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
