use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply queued external intents to human-driven paddles.
/// The latest intent per side wins and persists until replaced.
pub fn ingest_intents(world: &mut World, queue: &mut InputQueue) {
    for (side, value) in queue.pop_inputs() {
        for (_entity, (paddle, driver, intent)) in
            world.query_mut::<(&Paddle, &PaddleDriver, &mut PaddleIntent)>()
        {
            if paddle.side == side && *driver == PaddleDriver::Human {
                intent.value = clamp_intent(value);
            }
        }
    }
}

/// Point AI paddles at the ball's height
pub fn drive_ai(world: &mut World) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    for (_entity, (paddle, driver, intent)) in
        world.query_mut::<(&Paddle, &PaddleDriver, &mut PaddleIntent)>()
    {
        if let PaddleDriver::Ai { dead_zone } = *driver {
            // No ball to track: hold position
            intent.value = ball_y.map_or(0.0, |y| ai_intent(y - paddle.y, dead_zone));
        }
    }
}

/// Full speed toward the target once it is outside the dead zone
pub fn ai_intent(offset: f32, dead_zone: f32) -> f32 {
    if offset.abs() > dead_zone {
        offset.signum()
    } else {
        0.0
    }
}
