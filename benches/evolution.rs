//! Benchmarks for the genetic algorithm.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use genetic_monkeys::{
    Alphabet, Target,
    compute::evolution::{FitnessEvaluator, GenomeRng, Population},
};

const TARGET: &str = "METHINKS IT IS LIKE A WEASEL";

fn bench_evolve_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve_step");

    let alphabet = Alphabet::default();
    let evaluator = FitnessEvaluator::new(Target::new(TARGET, &alphabet).unwrap());

    for size in [100, 1000, 10_000] {
        let mut rng = GenomeRng::new(42);
        let population =
            Population::random(size, TARGET.len(), &alphabet, &evaluator, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                black_box(population.evolve(0.2, 0.01, &alphabet, &mut rng).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_random_population(c: &mut Criterion) {
    let alphabet = Alphabet::default();
    let evaluator = FitnessEvaluator::new(Target::new(TARGET, &alphabet).unwrap());
    let mut rng = GenomeRng::new(7);

    c.bench_function("random_population_1000", |b| {
        b.iter(|| {
            black_box(
                Population::random(1000, TARGET.len(), &alphabet, &evaluator, &mut rng).unwrap(),
            );
        });
    });
}

criterion_group!(benches, bench_evolve_step, bench_random_population);
criterion_main!(benches);
