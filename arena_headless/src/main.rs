//! Headless arena runner
//!
//! Plays a full match without rendering, logging every event, and prints a
//! summary at the end.

mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use game_core::Arena;

use session::{configure, load_config, run_match, EventLog, PlayerMode};

#[derive(Parser)]
#[command(name = "arena_headless")]
#[command(about = "Run a paddle arena match without a display", long_about = None)]
struct Cli {
    /// JSON config file; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for serve directions
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// How the player paddle is driven
    #[arg(long, value_enum, default_value_t = PlayerMode::Ai)]
    player: PlayerMode,

    /// Frames per second fed to the fixed-step loop
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Give up after this much simulated time
    #[arg(long, default_value_t = 600.0)]
    max_seconds: f32,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = configure(load_config(cli.config.as_deref())?, cli.player);
    let mut arena = Arena::new(config, cli.seed)?;
    log::info!("starting match, player mode {:?}", cli.player);

    let mut events = EventLog::default();
    let report = run_match(&mut arena, cli.player, cli.fps, cli.max_seconds, &mut events);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let snapshot = &report.snapshot;
        println!(
            "Player {} - {} Opponent after {:.1}s",
            snapshot.player_score, snapshot.opponent_score, report.seconds
        );
        match snapshot.winner {
            Some(winner) => println!("Winner: {winner:?}"),
            None => println!("No winner"),
        }
        println!(
            "{} paddle hits, {} wall hits, {} serves",
            report.paddle_hits, report.wall_hits, report.serves
        );
    }

    Ok(())
}
