use std::path::PathBuf;

use agent::{client::Client, strategy::PlayerKind};
use clap::Parser;
use engine::{EngineConfig, EngineError, Session};
use tracing::{info, Level};

/// Pits a scripted player against the adaptive opponent.
#[derive(Parser, Debug)]
#[command(name = "agent")]
struct Args {
    /// rock, paper, scissors, random, cycle, mirror or wsls
    #[arg(long, default_value = "random")]
    player: PlayerKind,
    #[arg(long, default_value_t = 10)]
    games: u32,
    #[arg(long, default_value_t = 100)]
    max_rounds: u32,
    /// Seeds both the player and the opponent
    #[arg(long)]
    seed: Option<u64>,
    /// JSON engine configuration
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), EngineError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let session = Session::new(config)?;
    let mut client = Client::new(args.player.build(), session, args.seed.unwrap_or_default());

    let mut losses = 0;
    let mut best_streak = 0;
    let mut total_rounds = 0;
    for game in 1..=args.games {
        let summary = client.play_game(args.max_rounds)?;
        info!(
            "Game {}: {} rounds, best streak {}, fires {}, {}",
            game,
            summary.rounds,
            summary.best_streak,
            summary.fire_count,
            if summary.lost { "lost" } else { "survived" }
        );
        losses += u32::from(summary.lost);
        best_streak = best_streak.max(summary.best_streak);
        total_rounds += summary.rounds;
    }
    info!(
        "{:?} player: {} games, {} rounds, lost {}, best streak {}",
        args.player, args.games, total_rounds, losses, best_streak
    );
    Ok(())
}
