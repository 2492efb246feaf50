use crate::{Ball, Events, GameEvent, GameRng, MatchState, RelaunchTimer, Time};
use hecs::World;

/// Count down the pending relaunch and serve the ball when it comes due
pub fn tick_relaunch(
    world: &mut World,
    time: &Time,
    match_state: &MatchState,
    relaunch: &mut RelaunchTimer,
    rng: &mut GameRng,
    events: &mut Events,
) {
    if !relaunch.update(time.dt) {
        return;
    }

    if match_state.is_game_over() {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.launch(rng);
        events.push(GameEvent::Launched);
        log::trace!("ball launched with velocity {:?}", ball.vel);
    }
}
