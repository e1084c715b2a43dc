//! Criterion benchmarks for u-evolve.
//!
//! Uses OneMax over grouped bitstrings to measure selection and loop
//! overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_evolve::bitstring::{BitstringMember, GroupEncoding};
use u_evolve::ea::{
    stop, EaConfig, EvolutionaryAlgorithm, PopulationMember, Roulette, SelectionStrategy,
    StochasticUniversal, Tournament, Truncation,
};
use u_evolve::RandomSource;

// ===========================================================================
// OneMax: maximize the number of set bits
// ===========================================================================

struct OneMax;

impl GroupEncoding for OneMax {
    const GROUPS: &'static [usize] = &[8; 8];

    fn evaluate_fitness(member: &BitstringMember<Self>) -> f64 {
        member.bits().iter().filter(|&&b| b).count() as f64
    }
}

type Member = BitstringMember<OneMax>;

fn sorted_population(n: usize) -> Vec<Member> {
    let mut rng = RandomSource::from_seed(42);
    let mut population: Vec<Member> = (0..n).map(|_| Member::random(&mut rng)).collect();
    for member in &mut population {
        member.evaluate();
    }
    population.sort_by(u_evolve::ea::fitness_descending);
    population
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    let strategies: Vec<(&str, Box<dyn SelectionStrategy<Member>>)> = vec![
        ("truncation", Box::new(Truncation::new(0.2))),
        ("roulette", Box::new(Roulette)),
        ("sus", Box::new(StochasticUniversal)),
        ("tournament", Box::new(Tournament::new(5, 0.8))),
    ];

    for &n in &[100usize, 1000] {
        let population = sorted_population(n);
        for (name, strategy) in &strategies {
            group.bench_with_input(BenchmarkId::new(*name, n), &population, |b, pop| {
                let mut rng = RandomSource::from_seed(7);
                b.iter(|| {
                    let selected = strategy.select(black_box(pop), 2 * n, &mut rng);
                    black_box(selected.len())
                })
            });
        }
    }
    group.finish();
}

fn bench_onemax_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ea_onemax");
    group.sample_size(10);

    for (pop, last, parallel) in [(50usize, 50usize, false), (200, 50, false), (200, 50, true)] {
        let config = EaConfig::default()
            .with_population_size(pop)
            .with_elite_count(2)
            .with_parallel(parallel)
            .with_seed(42);
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, last + 1), label),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut ea = EvolutionaryAlgorithm::<Member>::with_config(config.clone());
                    ea.set_selection_strategy(Tournament::new(3, 0.9));
                    ea.set_stop_condition(stop::after_generation(last));
                    black_box(ea.run())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_selection, bench_onemax_run);
criterion_main!(benches);
