//! Flappy Bird in the terminal: play it yourself or watch a population learn.

use anyhow::{bail, Context, Result};
use flappy_neat::classic::{process_input, process_tick, ClassicGame, ClassicInput};
use flappy_neat::evaluation::{evaluate_genomes, TickControl};
use flappy_neat::evolution::{seeded_rng, EvolutionConfig, NetworkGenome, Population};
use flappy_neat::game::Tuning;
use flappy_neat::logging;
use flappy_neat::ui::{poll_until, render_classic, render_generation, KeyAction, TerminalGuard};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Options for `evolve`.
#[derive(Debug, Default)]
struct EvolveOptions {
    config: Option<PathBuf>,
    seed: Option<u64>,
    generations: Option<u32>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("play") => run_play(),
        Some("evolve") => run_evolve(parse_evolve_args(&args[2..])?),
        Some("--version") | Some("-v") => {
            println!("flappy-neat {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some("--help") | Some("-h") => {
            print_help();
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Run 'flappy-neat --help' for usage.");
            std::process::exit(1);
        }
    }
}

fn parse_evolve_args(args: &[String]) -> Result<EvolveOptions> {
    let mut options = EvolveOptions::default();
    let mut i = 0;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("-c" | "--config", Some(path)) => {
                options.config = Some(PathBuf::from(path));
                i += 1;
            }
            ("-s" | "--seed", Some(seed)) => {
                options.seed = Some(seed.parse().context("--seed expects a number")?);
                i += 1;
            }
            ("-g" | "--generations", Some(count)) => {
                options.generations =
                    Some(count.parse().context("--generations expects a number")?);
                i += 1;
            }
            (flag, _) => bail!("unexpected argument for evolve: {}", flag),
        }
        i += 1;
    }
    Ok(options)
}

fn load_config(options: &EvolveOptions) -> Result<EvolutionConfig> {
    let mut config = match &options.config {
        Some(path) => EvolutionConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EvolutionConfig::default(),
    };
    if options.seed.is_some() {
        config.seed = options.seed;
    }
    if let Some(generations) = options.generations {
        config.max_generations = generations;
    }
    config.validate()?;
    Ok(config)
}

fn run_play() -> Result<()> {
    logging::init_file(Path::new(logging::LOG_FILE)).context("opening log file")?;

    let mut rng = seeded_rng(None);
    let mut game = ClassicGame::new(&mut rng);
    let interval = Duration::from_millis(game.tuning.tick_interval_ms());
    let mut best = 0;

    let mut guard = TerminalGuard::enter().context("setting up terminal")?;
    'session: loop {
        let deadline = Instant::now() + interval;
        guard.terminal().draw(|frame| render_classic(frame, &game))?;

        for action in poll_until(deadline)? {
            match action {
                KeyAction::Quit => {
                    process_input(&mut game, ClassicInput::Quit);
                    break 'session;
                }
                KeyAction::Flap if game.is_over() => {
                    best = best.max(game.score());
                    game = ClassicGame::new(&mut rng);
                }
                KeyAction::Flap => process_input(&mut game, ClassicInput::Flap),
                KeyAction::Other => process_input(&mut game, ClassicInput::Other),
            }
        }

        process_tick(&mut game, &mut rng);
    }
    drop(guard);

    best = best.max(game.score());
    println!("Final score: {} (best {})", game.score(), best);
    Ok(())
}

fn run_evolve(options: EvolveOptions) -> Result<()> {
    let config = load_config(&options)?;
    logging::init_file(Path::new(logging::LOG_FILE)).context("opening log file")?;
    info!(
        population = config.population_size,
        generations = config.max_generations,
        seed = ?config.seed,
        "starting evolution"
    );

    let tuning = Tuning::evolution();
    let interval = Duration::from_millis(tuning.tick_interval_ms());
    let max_ticks = config.max_ticks_per_generation;
    let mut rng = seeded_rng(config.seed);
    let mut population = Population::new(config, &mut rng);

    let mut guard = TerminalGuard::enter().context("setting up terminal")?;
    let report = population.run(&mut rng, |genomes, generation, rng| {
        evaluate_genomes(
            genomes,
            NetworkGenome::network,
            &tuning,
            max_ticks,
            rng,
            |state| {
                let deadline = Instant::now() + interval;
                guard
                    .terminal()
                    .draw(|frame| render_generation(frame, state, generation))?;
                let quit = poll_until(deadline)?.contains(&KeyAction::Quit);
                Ok(if quit {
                    TickControl::Quit
                } else {
                    TickControl::Continue
                })
            },
        )
    })?;
    drop(guard);

    println!("{}", report.to_text());
    Ok(())
}

fn print_help() {
    println!("Flappy Bird NEAT");
    println!();
    println!("USAGE:");
    println!("    flappy-neat [COMMAND] [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    play                   Play the game yourself (default)");
    println!("    evolve                 Watch a population learn to fly");
    println!();
    println!("EVOLVE OPTIONS:");
    println!("    -c, --config <PATH>    JSON evolution config");
    println!("    -s, --seed <N>         Random seed for reproducibility");
    println!("    -g, --generations <N>  Generation limit");
    println!();
    println!("KEYS:");
    println!("    Space, Up, Enter       Flap (restart after game over)");
    println!("    q, Esc, Ctrl-C         Quit");
    println!();
    println!("    --version              Show version information");
    println!("    --help                 Show this help message");
}
