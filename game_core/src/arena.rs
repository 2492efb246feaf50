//! The arena owns every entity and resource of a match and drives the
//! fixed-timestep loop. Presentation code talks to it through intents in,
//! events and snapshots out.

use glam::Vec2;
use hecs::World;
use serde::Serialize;

use crate::{
    create_paddle, step, Ball, Config, ConfigError, EventSink, Events, GameRng, InputQueue,
    MatchPhase, MatchState, Paddle, RelaunchTimer, Side, Time,
};

/// Read-only view of the arena for UI code
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArenaSnapshot {
    pub tick: u64,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub player_paddle_y: f32,
    pub opponent_paddle_y: f32,
    pub player_score: u8,
    pub opponent_score: u8,
    pub phase: MatchPhase,
    pub winner: Option<Side>,
}

pub struct Arena {
    world: World,
    config: Config,
    time: Time,
    match_state: MatchState,
    events: Events,
    input: InputQueue,
    rng: GameRng,
    relaunch: RelaunchTimer,
    accumulator: f32,
    tick: u64,
}

impl Arena {
    /// Build a fresh match. Fails if `config` is inconsistent.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut arena = Self {
            world: World::new(),
            time: Time::new(config.fixed_dt, 0.0),
            match_state: MatchState::new(config.win_score),
            events: Events::new(),
            input: InputQueue::new(),
            rng: GameRng::new(seed),
            relaunch: RelaunchTimer::new(),
            accumulator: 0.0,
            tick: 0,
            config,
        };
        arena.populate();

        if arena.config.launch_on_start {
            for (_entity, ball) in arena.world.query_mut::<&mut Ball>() {
                ball.launch(&mut arena.rng);
            }
        } else {
            arena.relaunch.schedule(arena.config.relaunch_delay);
        }

        log::info!(
            "arena ready: first to {}, seed {}",
            arena.config.win_score,
            seed
        );
        Ok(arena)
    }

    fn populate(&mut self) {
        self.world.clear();
        for side in Side::ALL {
            create_paddle(&mut self.world, side, &self.config);
        }
        self.world.spawn((Ball::from_config(&self.config),));
    }

    /// Queue an intent for a human-driven paddle; applied on the next tick
    pub fn set_intent(&mut self, side: Side, intent: f32) {
        self.input.push_intent(side, intent);
    }

    /// Run exactly one fixed step and report its events to `sink`
    pub fn tick<S: EventSink + ?Sized>(&mut self, sink: &mut S) {
        self.time.dt = self.config.fixed_dt;
        step(
            &mut self.world,
            &self.time,
            &self.config,
            &mut self.match_state,
            &mut self.events,
            &mut self.input,
            &mut self.rng,
            &mut self.relaunch,
        );
        self.time.now += self.time.dt;
        self.tick += 1;

        self.events.dispatch(sink);
    }

    /// Feed a variable frame delta and run as many fixed steps as fit.
    /// Returns the number of steps run.
    pub fn advance<S: EventSink + ?Sized>(&mut self, frame_dt: f32, sink: &mut S) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }

        // Clamp dt to prevent large jumps
        self.accumulator += frame_dt.min(self.config.max_frame_dt);

        let mut ticks = 0;
        while self.accumulator >= self.config.fixed_dt {
            self.accumulator -= self.config.fixed_dt;
            self.tick(sink);
            ticks += 1;
        }
        ticks
    }

    /// Throw the current match away and start over with the same config.
    /// The ball waits at the centre for a freshly scheduled launch.
    pub fn restart(&mut self) {
        self.relaunch.next_generation();
        self.populate();
        self.match_state = MatchState::new(self.config.win_score);
        self.events.clear();
        self.input.clear();
        self.time = Time::new(self.config.fixed_dt, 0.0);
        self.accumulator = 0.0;
        self.tick = 0;
        self.relaunch.schedule(self.config.relaunch_delay);

        log::info!("match restarted (generation {})", self.relaunch.generation());
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn relaunch_pending(&self) -> bool {
        self.relaunch.is_pending()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    pub fn snapshot(&self) -> ArenaSnapshot {
        let ball = self.ball();
        let paddle_y = |side: Side| self.paddle(side).map_or(0.0, |p| p.y);

        ArenaSnapshot {
            tick: self.tick,
            ball_pos: ball.map_or(Vec2::ZERO, |b| b.pos),
            ball_vel: ball.map_or(Vec2::ZERO, |b| b.vel),
            player_paddle_y: paddle_y(Side::Player),
            opponent_paddle_y: paddle_y(Side::Opponent),
            player_score: self.match_state.player,
            opponent_score: self.match_state.opponent,
            phase: self.match_state.phase(),
            winner: self.match_state.winner(),
        }
    }
}
