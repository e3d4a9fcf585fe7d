//! Genetic Monkeys CLI - Evolve a population toward a target string.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::PathBuf;

use genetic_monkeys::{
    Alphabet, EvolutionConfig, EvolutionEngine, RandomSampler, Target,
    compute::{DEFAULT_ITERATIONS, evolution::GenomeRng},
    schema::FitnessDistribution,
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("--example") => print_example_config(),
        Some("--random") if args.len() > 2 => run_random(&args[2], args.get(3)),
        Some(target) if !target.starts_with("--") => run_genetic(target, args.get(2)),
        _ => {
            print_usage(args.first().map_or("genetic-monkeys", String::as_str));
            std::process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <TARGET> [config.json]", program);
    eprintln!("       {} --random <TARGET> [iterations]", program);
    eprintln!("       {} --example", program);
    eprintln!();
    eprintln!("Evolve a population of typing monkeys until one types TARGET.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  TARGET       Sequence of uppercase letters and spaces");
    eprintln!("  config.json  Path to evolution configuration file (optional)");
    eprintln!(
        "  iterations   Random samples for the baseline (default: {})",
        DEFAULT_ITERATIONS
    );
    eprintln!();
    eprintln!("Example configuration is printed with --example flag.");
}

fn run_genetic(target: &str, config_path: Option<&String>) {
    let config = match config_path {
        Some(path) => EvolutionConfig::from_json_file(PathBuf::from(path)).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
        None => EvolutionConfig::default(),
    };

    let mut engine = EvolutionEngine::new(target, config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let result = engine
        .run_with_callback(|report| {
            println!(
                "Gen {:>3} [{:>3}/{}] {}",
                report.generation,
                report.fittest_score,
                report.genome_length,
                report.fittest_genome
            );
        })
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    println!(
        "Elapsed: {} ns",
        (result.stats.elapsed_seconds * 1e9).round() as u128
    );
    println!(
        "Typing speed: {} wpm",
        result.stats.words_per_minute().round() as u64
    );
    print_distribution(&result.distribution);
}

fn run_random(target: &str, iterations: Option<&String>) {
    let iterations = match iterations {
        Some(s) => s.parse::<u64>().unwrap_or_else(|e| {
            eprintln!("Error parsing iterations {:?}: {}", s, e);
            std::process::exit(1);
        }),
        None => DEFAULT_ITERATIONS,
    };

    let alphabet = Alphabet::default();
    let target = Target::new(target, &alphabet).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let sampler = RandomSampler::new(target, alphabet);
    let mut rng = GenomeRng::random();
    let result = sampler.run(iterations, &mut rng).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let elapsed_ns = (result.elapsed_seconds * 1e9).round() as u128;
    println!(
        "Elapsed: {} s ({} ns)",
        (result.elapsed_seconds / 10.0).round() as u64 * 10,
        elapsed_ns
    );
    println!(
        "Typing speed: {} wpm",
        result.words_per_minute().round() as u64
    );
    println!(
        "Fittest: [{}/{}] {}",
        result.best_score, result.genome_length, result.best_genome
    );
    print_distribution(&result.distribution);
}

fn print_distribution(distribution: &FitnessDistribution) {
    println!("Distribution:");
    for (score, count) in distribution.iter() {
        println!("{}\t{}", score, count);
    }
}

fn print_example_config() {
    let config = EvolutionConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing config: {}", e);
            std::process::exit(1);
        }
    }
}
