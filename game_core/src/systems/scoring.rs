use crate::{Ball, Config, Events, GameEvent, MatchState, RelaunchTimer, Side};
use hecs::World;

/// Check if ball left the arena (scoring)
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    match_state: &mut MatchState,
    relaunch: &mut RelaunchTimer,
    events: &mut Events,
) {
    if match_state.is_game_over() {
        return;
    }

    let Some((_entity, ball)) = world.query_mut::<&mut Ball>().into_iter().next() else {
        log::debug!("no ball in the arena, skipping score check");
        return;
    };

    let scorer = if ball.pos.x > config.out_of_bounds_x {
        // Past the opponent's paddle
        Side::Player
    } else if ball.pos.x < -config.out_of_bounds_x {
        Side::Opponent
    } else {
        return;
    };

    let winner = match_state.record_point(scorer);
    events.push(GameEvent::Scored { scorer });
    log::info!(
        "{:?} scored ({} - {})",
        scorer,
        match_state.player,
        match_state.opponent
    );

    match winner {
        Some(winner) => {
            // Leave the ball where it is; no relaunch after the final point
            ball.stop();
            relaunch.cancel();
            events.push(GameEvent::GameOver { winner });
            log::info!("game over, {:?} wins", winner);
        }
        None => {
            ball.reset_to_center();
            relaunch.schedule(config.relaunch_delay);
        }
    }
}
