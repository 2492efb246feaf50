pub mod arena;
pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod params;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use events::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one fixed tick of the arena simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    match_state: &mut MatchState,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut GameRng,
    relaunch: &mut RelaunchTimer,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (human intents, then AI tracking)
    ingest_intents(world, input);
    drive_ai(world);

    // 2. Move paddles based on intents
    move_paddles(world, time);

    // 3. Move ball
    move_ball(world, time);

    // 4. Check collisions (ball vs walls, paddles)
    check_collisions(world, config, events);

    // 5. Check scoring (ball exited arena)
    check_scoring(world, config, match_state, relaunch, events);

    // 6. Advance the relaunch timer, serving the ball if it came due
    tick_relaunch(world, time, match_state, relaunch, rng, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((
        Paddle::from_config(side, config),
        config.driver(side),
        PaddleIntent::new(),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
