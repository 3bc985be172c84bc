//! Benchmarks for branch generation.
//!
//! # Benchmarks
//!
//! - **`generate_default`**: the default 7×6 bounded board with relax factor 0.1.
//! - **`generate_large_torus`**: a 40×30 toroidal board with relax factor 0.4,
//!   exercising deep carving and the wrap-around neighbor lookups.
//!
//! Each benchmark runs over three fixed seeds so results are reproducible.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use sakura_core::{Grid, Topology};
use sakura_generator::{BranchGenerator, RelaxFactor, RoundSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate(
    c: &mut Criterion,
    name: &str,
    (width, height): (usize, usize),
    topology: Topology,
    relax: f64,
) {
    let generator = BranchGenerator::new(RelaxFactor::new(relax).unwrap());
    let mut grid = Grid::new(width, height).unwrap();
    grid.set_topology(topology);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = RoundSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(&mut grid, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate_default(c: &mut Criterion) {
    bench_generate(c, "generate_default", (7, 6), Topology::Bounded, 0.1);
}

fn bench_generate_large_torus(c: &mut Criterion) {
    bench_generate(c, "generate_large_torus", (40, 30), Topology::Toroidal, 0.4);
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_generate_default,
        bench_generate_large_torus
);
criterion_main!(benches);
