use crate::{Ball, Config, Events, Paddle, Surface};
use hecs::World;

/// Check ball collisions with walls and paddles.
///
/// Contacts are resolved immediately so the new velocity is in place before
/// the next integration step.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddles first so the ball can be borrowed mutably
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if resolve_wall(ball, config.wall_y) {
            events.push(ball.on_collision(Surface::Wall));
        }

        // At most one paddle contact per tick
        if let Some(paddle) = paddles.iter().find(|p| touches(p, ball)) {
            let hit_offset = paddle.hit_offset_ratio(ball.pos.y);

            // Push ball out to the paddle face
            let facing = paddle.side.facing();
            ball.pos.x = paddle.x + facing * (paddle.half_width + ball.radius);

            events.push(ball.on_collision(Surface::Paddle {
                side: paddle.side,
                hit_offset,
            }));
            log::debug!(
                "paddle hit ({:?}) offset {:.2}, speed now {:.2}",
                paddle.side,
                hit_offset,
                ball.speed()
            );
        }
    }
}

/// Clamp the ball inside the walls. True if it was heading into one.
fn resolve_wall(ball: &mut Ball, wall_y: f32) -> bool {
    let limit = wall_y - ball.radius;
    if ball.pos.y >= limit && ball.vel.y > 0.0 {
        ball.pos.y = limit;
        true
    } else if ball.pos.y <= -limit && ball.vel.y < 0.0 {
        ball.pos.y = -limit;
        true
    } else {
        false
    }
}

/// Ball overlaps the paddle box and is moving toward the paddle
fn touches(paddle: &Paddle, ball: &Ball) -> bool {
    let dx = (ball.pos.x - paddle.x).abs();
    let dy = (ball.pos.y - paddle.y).abs();
    let approaching = ball.vel.x * paddle.side.facing() < 0.0;

    approaching && dx < paddle.half_width + ball.radius && dy < paddle.half_height + ball.radius
}
