use serde::{Deserialize, Serialize};

use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    Playing,
    GameOver,
}

/// Scores and match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchState {
    pub player: u8,
    pub opponent: u8,
    pub score_to_win: u8,
    phase: MatchPhase,
    winner: Option<Side>,
}

impl MatchState {
    pub fn new(score_to_win: u8) -> Self {
        Self {
            player: 0,
            opponent: 0,
            score_to_win,
            phase: MatchPhase::Playing,
            winner: None,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == MatchPhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn score(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// Award a point to `scorer`. Returns the winner if this point ended the
    /// match. Scores are frozen once the match is over.
    pub fn record_point(&mut self, scorer: Side) -> Option<Side> {
        if self.is_game_over() {
            return None;
        }

        let score = match scorer {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        };
        *score = score.saturating_add(1);

        if *score >= self.score_to_win {
            self.phase = MatchPhase::GameOver;
            self.winner = Some(scorer);
        }
        self.winner
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Deferred ball launch after a point.
///
/// A pending launch remembers the match generation it was scheduled in and
/// only fires if that generation is still current, so bumping the generation
/// on restart kills any launch left over from the previous match.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelaunchTimer {
    generation: u32,
    pending: Option<PendingLaunch>,
}

#[derive(Debug, Clone, Copy)]
struct PendingLaunch {
    remaining: f32,
    generation: u32,
}

impl RelaunchTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Schedule a launch `delay` seconds from now, replacing any pending one
    pub fn schedule(&mut self, delay: f32) {
        self.pending = Some(PendingLaunch {
            remaining: delay.max(0.0),
            generation: self.generation,
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Start a new match generation. Launches scheduled before this point
    /// are stale and will never fire.
    pub fn next_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn current(&self) -> Option<PendingLaunch> {
        self.pending.filter(|p| p.generation == self.generation)
    }

    pub fn is_pending(&self) -> bool {
        self.current().is_some()
    }

    pub fn remaining(&self) -> Option<f32> {
        self.current().map(|p| p.remaining)
    }

    /// Count down by `dt`. Returns true exactly once, on the update where a
    /// launch from the current generation comes due.
    pub fn update(&mut self, dt: f32) -> bool {
        let Some(mut pending) = self.pending else {
            return false;
        };

        if pending.generation != self.generation {
            self.pending = None;
            return false;
        }

        pending.remaining -= dt;
        if pending.remaining <= 0.0 {
            self.pending = None;
            return true;
        }

        self.pending = Some(pending);
        false
    }
}

/// Intents queued by the input collaborator, applied at the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(Side, f32)>, // (side, intent)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_intent(&mut self, side: Side, intent: f32) {
        self.inputs.push((side, intent));
    }

    pub fn pop_inputs(&mut self) -> Vec<(Side, f32)> {
        std::mem::take(&mut self.inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_point_increments() {
        let mut state = MatchState::new(5);
        assert_eq!(state.record_point(Side::Player), None);
        assert_eq!(state.record_point(Side::Player), None);
        assert_eq!(state.record_point(Side::Opponent), None);
        assert_eq!(state.score(Side::Player), 2);
        assert_eq!(state.score(Side::Opponent), 1);
        assert!(state.is_playing());
    }

    #[test]
    fn test_record_point_reaches_win_score() {
        let mut state = MatchState::new(3);
        state.record_point(Side::Opponent);
        state.record_point(Side::Opponent);
        assert_eq!(state.record_point(Side::Opponent), Some(Side::Opponent));
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Some(Side::Opponent));
    }

    #[test]
    fn test_scores_frozen_after_game_over() {
        let mut state = MatchState::new(1);
        state.record_point(Side::Player);
        assert_eq!(state.record_point(Side::Opponent), None);
        assert_eq!(state.record_point(Side::Player), None);
        assert_eq!((state.player, state.opponent), (1, 0));
        assert_eq!(state.winner(), Some(Side::Player));
    }

    #[test]
    fn test_relaunch_fires_after_delay() {
        let mut timer = RelaunchTimer::new();
        timer.schedule(0.5);
        assert!(timer.is_pending());

        assert!(!timer.update(0.25));
        assert_eq!(timer.remaining(), Some(0.25));
        assert!(timer.update(0.25), "Fires once the delay has elapsed");
        assert!(!timer.is_pending());
        assert!(!timer.update(0.25), "One-shot");
    }

    #[test]
    fn test_relaunch_cancel() {
        let mut timer = RelaunchTimer::new();
        timer.schedule(0.0);
        timer.cancel();
        assert!(!timer.update(0.02));
    }

    #[test]
    fn test_relaunch_dropped_on_new_generation() {
        let mut timer = RelaunchTimer::new();
        timer.schedule(0.0);
        timer.next_generation();
        assert_eq!(timer.generation(), 1);
        assert!(!timer.is_pending());
        assert_eq!(timer.remaining(), None);
        assert!(!timer.update(0.02), "Stale launch is dropped, not fired");
        assert!(timer.pending.is_none());

        timer.schedule(0.0);
        assert!(timer.update(0.02), "Launches scheduled in the new generation fire");
    }

    #[test]
    fn test_input_queue_push_and_pop() {
        let mut queue = InputQueue::new();
        queue.push_intent(Side::Player, -1.0);
        queue.push_intent(Side::Opponent, 0.5);

        assert_eq!(queue.inputs.len(), 2);
        let inputs = queue.pop_inputs();
        assert_eq!(inputs, vec![(Side::Player, -1.0), (Side::Opponent, 0.5)]);
        assert!(queue.inputs.is_empty());
    }

    #[test]
    fn test_input_queue_clear() {
        let mut queue = InputQueue::new();
        queue.push_intent(Side::Player, 1.0);
        queue.clear();
        assert_eq!(queue.inputs.len(), 0);
    }
}
