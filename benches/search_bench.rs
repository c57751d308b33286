//! Criterion benchmarks for the peptide search.
//!
//! Uses cheap synthetic fitness functions so the numbers reflect engine
//! overhead (breeding, evaluation bookkeeping, truncation) rather than the
//! cost of a real oracle.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use peptide_ga::ga::operators::{generate_random_population, mutate, recombine};
use peptide_ga::ga::{infallible, SearchConfig, SearchEngine};
use peptide_ga::random::create_rng;

// ===========================================================================
// Synthetic fitness: count of hydrophobic residues
// ===========================================================================

fn hydrophobic_count(seq: &str) -> f64 {
    seq.bytes()
        .filter(|b| matches!(b, b'A' | b'I' | b'L' | b'M' | b'F' | b'V' | b'W'))
        .count() as f64
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_hydrophobic");
    group.sample_size(10);

    for (pop, offspring, gen) in [(50usize, 25usize, 50usize), (100, 50, 30), (200, 100, 20)] {
        let config = SearchConfig::default()
            .with_population_size(pop)
            .with_offspring_count(offspring)
            .with_max_num_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_o{}_g{}", pop, offspring, gen), pop),
            &config,
            |b, c| {
                b.iter(|| {
                    let engine = SearchEngine::new(infallible(hydrophobic_count), black_box(c.clone()))
                        .expect("valid config");
                    black_box(engine.search().expect("infallible fitness"))
                })
            },
        );
    }
    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");
    let mut rng = create_rng(42);
    let pop = generate_random_population(64, &mut rng);

    group.bench_function("recombine", |b| {
        let mut i = 0usize;
        b.iter(|| {
            i = (i + 1) % 63;
            black_box(recombine(&pop[i], &pop[i + 1], &mut rng))
        })
    });

    let mut rng = create_rng(7);
    group.bench_function("mutate", |b| {
        let mut i = 0usize;
        b.iter(|| {
            i = (i + 1) % 64;
            black_box(mutate(&pop[i], &mut rng))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_search, bench_operators);
criterion_main!(benches);
