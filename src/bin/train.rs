//! Headless training CLI.
//!
//! Evolves a population without rendering and prints a training report.
//!
//! Usage:
//!   cargo run --bin train -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin train                          # Default config
//!   cargo run --bin train -- --seed 42 -g 10       # Reproducible, 10 generations
//!   cargo run --bin train -- --config neat.json --json

use anyhow::{Context, Result};
use flappy_neat::evaluation::{evaluate_genomes, TickControl};
use flappy_neat::evolution::{seeded_rng, EvolutionConfig, NetworkGenome, Population};
use flappy_neat::game::Tuning;
use flappy_neat::logging;
use std::env;
use std::path::PathBuf;

/// Tick cap when neither the config nor the command line sets one, so a
/// flawless flock cannot keep a headless run going forever.
const DEFAULT_MAX_TICKS: u64 = 20_000;

#[derive(Debug, Default)]
struct TrainArgs {
    config: Option<PathBuf>,
    seed: Option<u64>,
    generations: Option<u32>,
    max_ticks: Option<u64>,
    json: bool,
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let train_args = parse_args(&args);
    logging::init_stderr();

    let mut config = match &train_args.config {
        Some(path) => EvolutionConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EvolutionConfig::default(),
    };
    if train_args.seed.is_some() {
        config.seed = train_args.seed;
    }
    if let Some(generations) = train_args.generations {
        config.max_generations = generations;
    }
    config.validate()?;
    let max_ticks = train_args
        .max_ticks
        .or(config.max_ticks_per_generation)
        .unwrap_or(DEFAULT_MAX_TICKS);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              FLAPPY BIRD NEAT TRAINER                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Population:     {}", config.population_size);
    println!("  Generations:    {}", config.max_generations);
    println!(
        "  Threshold:      {} ({:?})",
        config.fitness_threshold, config.fitness_criterion
    );
    println!("  Hidden Nodes:   {}", config.hidden_nodes);
    println!("  Max Ticks:      {}", max_ticks);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Training...");
    println!();

    let tuning = Tuning::evolution();
    let mut rng = seeded_rng(config.seed);
    let mut population = Population::new(config, &mut rng);
    let report = population.run(&mut rng, |genomes, _, rng| {
        evaluate_genomes(
            genomes,
            NetworkGenome::network,
            &tuning,
            Some(max_ticks),
            rng,
            |_| Ok(TickControl::Continue),
        )
    })?;

    println!("{}", report.to_text());

    if train_args.json {
        let filename = format!(
            "train_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())
            .with_context(|| format!("writing {}", filename))?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> TrainArgs {
    let mut parsed = TrainArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    parsed.config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    parsed.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-g" | "--generations" => {
                if i + 1 < args.len() {
                    parsed.generations = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--max-ticks" => {
                if i + 1 < args.len() {
                    parsed.max_ticks = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--json" => {
                parsed.json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    parsed
}

fn print_help() {
    println!("Flappy Bird NEAT Trainer");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin train -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>     JSON evolution config");
    println!("    -s, --seed <S>          Random seed for reproducibility");
    println!("    -g, --generations <N>   Generation limit (default: 50)");
    println!(
        "    -t, --max-ticks <T>     Tick cap per generation (default: {})",
        DEFAULT_MAX_TICKS
    );
    println!("    --json                  Save JSON report");
    println!("    -h, --help              Show this help");
}
