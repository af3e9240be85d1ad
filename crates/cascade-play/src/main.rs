//! Self-play driver for the tiered opponent.
//!
//! The configured side is played by the [`MoveSelector`](cascade_engine::MoveSelector),
//! the other side by uniformly random legal moves. Chosen moves are applied
//! to the real game state with the full rules, and when the side to move has
//! nothing legal the driver tells checkmate from stalemate.

mod report;

use cascade_engine::{
    enumerate_moves, Chooser, EngineConfig, GameState, RandomChooser, StandardRules,
};
use clap::Parser;
use report::Reporter;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Plays the tiered heuristic opponent against a random mover.
#[derive(Parser)]
#[command(name = "cascade-play")]
#[command(about = "Plays the tiered heuristic opponent against a random mover")]
struct Args {
    /// Engine config file (TOML). Defaults to ./cascade.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting position in FEN
    #[arg(long)]
    fen: Option<String>,

    /// RNG seed, overriding the config
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many plies
    #[arg(long, default_value = "200")]
    max_plies: u32,

    /// Print one JSON object per line instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::load_or_default()?,
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut state = match &args.fen {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::startpos(),
    };
    info!(side = %config.side, seed = ?config.seed, fen = %state.to_fen(), "starting game");

    let rules = StandardRules;
    let mut engine = config.build_selector(rules);
    // The random side gets its own stream so a seed reproduces the whole game.
    let mut opponent = match config.seed {
        Some(seed) => RandomChooser::seeded(seed.wrapping_add(1)),
        None => RandomChooser::from_entropy(),
    };
    let mut reporter = Reporter::new(std::io::stdout().lock(), args.json);

    for ply in 1..=args.max_plies {
        let mover = state.current_player();
        let played = if mover == engine.side() {
            engine.decide(&state).map(|d| (d.mv, Some(d.tier)))
        } else {
            let moves = enumerate_moves(&rules, &state, mover);
            opponent.choose(&moves).map(|&mv| (mv, None))
        };

        let Some((mv, tier)) = played else {
            let outcome = rules.outcome(&state);
            info!(ply, outcome = ?outcome, "game over");
            reporter.finish(&state, outcome)?;
            return Ok(());
        };

        reporter.record(ply, mover, mv, tier)?;
        state = rules.play(&state, mv);
    }

    info!(max_plies = args.max_plies, "ply limit reached");
    reporter.finish(&state, None)?;
    Ok(())
}
