//! Headless match session: config loading, event logging and the frame loop.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use game_core::{Arena, ArenaSnapshot, Config, Control, EventSink, GameEvent, ShakeHint, Side};
use serde::Serialize;

/// Who moves the player paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerMode {
    /// Same tracking AI as the opponent
    Ai,
    /// Scripted human input sweeping up and down
    Sweep,
    /// Human paddle that never moves
    Idle,
}

/// Load a JSON config (missing fields take defaults), or defaults if no path
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

/// Stand-in for the audio and camera-shake collaborators: logs and tallies
#[derive(Debug, Default)]
pub struct EventLog {
    pub paddle_hits: u32,
    pub wall_hits: u32,
    pub serves: u32,
    pub points: Vec<Side>,
    pub strongest_shake: Option<ShakeHint>,
}

impl EventSink for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PaddleHit { side } => {
                self.paddle_hits += 1;
                log::debug!("paddle hit: {side:?}");
            }
            GameEvent::WallHit => {
                self.wall_hits += 1;
                log::debug!("wall hit");
            }
            GameEvent::Scored { scorer } => {
                self.points.push(*scorer);
                log::info!("point to {scorer:?}");
            }
            GameEvent::GameOver { winner } => log::info!("match over, {winner:?} wins"),
            GameEvent::Launched => {
                self.serves += 1;
                log::debug!("serve");
            }
        }

        if let Some(hint) = event.shake_hint() {
            let stronger = self
                .strongest_shake
                .map_or(true, |current| hint.magnitude > current.magnitude);
            if stronger {
                self.strongest_shake = Some(hint);
            }
        }
    }
}

/// Summary printed when the session ends
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub finished: bool,
    pub seconds: f32,
    pub paddle_hits: u32,
    pub wall_hits: u32,
    pub serves: u32,
    pub snapshot: ArenaSnapshot,
}

/// Apply the player mode to a config before the arena is built
pub fn configure(mut config: Config, mode: PlayerMode) -> Config {
    config.player_control = match mode {
        PlayerMode::Ai => Control::Ai,
        PlayerMode::Sweep | PlayerMode::Idle => Control::Human,
    };
    config
}

/// Drive `arena` at `fps` frames per second until the match ends or
/// `max_seconds` of simulated time have passed
pub fn run_match(
    arena: &mut Arena,
    mode: PlayerMode,
    fps: f32,
    max_seconds: f32,
    events: &mut EventLog,
) -> MatchReport {
    let frame_dt = 1.0 / fps.max(1.0);
    let mut elapsed: f32 = 0.0;

    while !arena.match_state().is_game_over() && elapsed < max_seconds {
        if mode == PlayerMode::Sweep {
            arena.set_intent(Side::Player, (elapsed * 1.5).sin());
        }
        arena.advance(frame_dt, events);
        elapsed += frame_dt;
    }

    if !arena.match_state().is_game_over() {
        log::warn!("stopping after {max_seconds}s without a winner");
    }

    MatchReport {
        finished: arena.match_state().is_game_over(),
        seconds: elapsed,
        paddle_hits: events.paddle_hits,
        wall_hits: events.wall_hits,
        serves: events.serves,
        snapshot: arena.snapshot(),
    }
}
