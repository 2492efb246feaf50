//! Simulation events and the sink trait presentation code listens through.
//!
//! The core never plays sounds or shakes cameras itself. It records what
//! happened during a tick and hands each event to an [`EventSink`] the caller
//! passes in.

use serde::{Deserialize, Serialize};

use crate::{Params, Side};

/// Something the presentation layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    PaddleHit { side: Side },
    WallHit,
    Scored { scorer: Side },
    GameOver { winner: Side },
    Launched,
}

/// Cosmetic camera-shake request attached to a hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeHint {
    pub duration: f32,
    pub magnitude: f32,
}

impl GameEvent {
    /// Paddle hits shake harder than wall hits; nothing else shakes
    pub fn shake_hint(&self) -> Option<ShakeHint> {
        let (duration, magnitude) = match self {
            GameEvent::PaddleHit { .. } => Params::PADDLE_SHAKE,
            GameEvent::WallHit => Params::WALL_SHAKE,
            _ => return None,
        };
        Some(ShakeHint {
            duration,
            magnitude,
        })
    }
}

/// Receiver for simulation events (audio, camera shake, UI refresh...)
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&mut self, _event: &GameEvent) {}
}

impl EventSink for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}

/// Events that occurred during the current tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    items: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, event: GameEvent) {
        self.items.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ball_hit_paddle(&self) -> bool {
        self.iter().any(|e| matches!(e, GameEvent::PaddleHit { .. }))
    }

    pub fn ball_hit_wall(&self) -> bool {
        self.iter().any(|e| matches!(e, GameEvent::WallHit))
    }

    /// Who scored this tick, if anyone
    pub fn scorer(&self) -> Option<Side> {
        self.iter().find_map(|e| match e {
            GameEvent::Scored { scorer } => Some(*scorer),
            _ => None,
        })
    }

    pub fn launched(&self) -> bool {
        self.iter().any(|e| matches!(e, GameEvent::Launched))
    }

    /// Hand every event to `sink`, in the order they happened
    pub fn dispatch<S: EventSink + ?Sized>(&self, sink: &mut S) {
        for event in &self.items {
            sink.on_event(event);
        }
    }
}
