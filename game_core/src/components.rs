use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Config, GameEvent, GameRng, Params};

/// Which end of the arena a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,   // Left, negative x
    Opponent, // Right, positive x
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Horizontal direction a ball travels after leaving this side's paddle
    pub fn facing(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Opponent => -1.0,
        }
    }
}

/// Clamp a raw intent into [-1, 1]; anything non-finite means "hold"
pub fn clamp_intent(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Paddle component - vertical-only mover at a fixed x
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub speed: f32,      // units per second at full intent
    pub boundary_y: f32, // y stays within [-boundary_y, boundary_y]
    pub half_height: f32,
    pub half_width: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, speed: f32, boundary_y: f32) -> Self {
        Self {
            side,
            x,
            y: 0.0,
            speed,
            boundary_y,
            half_height: Params::PADDLE_HALF_HEIGHT,
            half_width: Params::PADDLE_HALF_WIDTH,
        }
    }

    pub fn from_config(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: 0.0,
            speed: config.paddle_speed(side),
            boundary_y: config.paddle_boundary_y,
            half_height: config.paddle_half_height,
            half_width: config.paddle_half_width,
        }
    }

    /// Move by `intent * speed * dt` and clamp to the travel boundary.
    /// Returns the new position.
    pub fn update(&mut self, intent: f32, dt: f32) -> f32 {
        let intent = clamp_intent(intent);
        self.y = (self.y + intent * self.speed * dt).clamp(-self.boundary_y, self.boundary_y);
        self.y
    }

    /// Normalized contact point: 0 at the centre, +/-1 at the ends
    pub fn hit_offset_ratio(&self, ball_y: f32) -> f32 {
        if self.half_height <= f32::EPSILON {
            return 0.0;
        }
        let ratio = (ball_y - self.y) / self.half_height;
        if ratio.is_finite() {
            ratio.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Who decides where a paddle goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddleDriver {
    /// Intent supplied from outside each tick
    Human,
    /// Chases the ball's y, holding still inside the dead zone
    Ai { dead_zone: f32 },
}

/// Movement intent for paddle, in [-1, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleIntent {
    pub value: f32, // -1 = toward lower bound, 0 = hold, 1 = toward upper bound
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// What the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// `hit_offset` is the paddle's hit-offset ratio at contact
    Paddle { side: Side, hit_offset: f32 },
    Wall,
}

/// Ball component - the only free-moving body in the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub base_speed: f32,
    pub speed_increase: f32,
    pub max_speed: f32,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            base_speed: Params::BALL_SPEED_BASE,
            speed_increase: Params::BALL_SPEED_INCREASE,
            max_speed: Params::BALL_SPEED_MAX,
            radius: Params::BALL_RADIUS,
        }
    }

    /// Resting ball at the arena centre using the configured speeds
    pub fn from_config(config: &Config) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            base_speed: config.ball_speed_base,
            speed_increase: config.ball_speed_increase,
            max_speed: config.ball_speed_max,
            radius: config.ball_radius,
        }
    }

    pub fn with_speeds(mut self, base: f32, increase: f32, max: f32) -> Self {
        self.base_speed = base;
        self.speed_increase = increase;
        self.max_speed = max;
        self
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn is_resting(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    /// Straight-line motion, no gravity or drag
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Apply the bounce for `surface` and return the event to report.
    ///
    /// Paddle hits speed the ball up by `speed_increase` (capped at
    /// `max_speed`), reverse its horizontal direction and replace the
    /// vertical direction with the hit offset, so the contact point aims the
    /// return. Wall hits only flip the vertical component.
    pub fn on_collision(&mut self, surface: Surface) -> GameEvent {
        match surface {
            Surface::Paddle { side, hit_offset } => {
                let new_speed = (self.speed() + self.speed_increase).min(self.max_speed);

                let mut dir_x = -self.vel.normalize_or_zero().x;
                if dir_x.abs() <= f32::EPSILON {
                    dir_x = side.facing();
                }
                let dir_y = if hit_offset.is_finite() { hit_offset } else { 0.0 };

                let dir = Vec2::new(dir_x, dir_y)
                    .try_normalize()
                    .unwrap_or(Vec2::new(side.facing(), 0.0));
                self.vel = dir * new_speed;

                GameEvent::PaddleHit { side }
            }
            Surface::Wall => {
                self.vel.y = -self.vel.y;
                GameEvent::WallHit
            }
        }
    }

    /// Serve at base speed: random horizontal sign, shallow random vertical
    pub fn launch(&mut self, rng: &mut GameRng) {
        let x = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let y = rng
            .0
            .gen_range(-Params::LAUNCH_SPREAD_Y..=Params::LAUNCH_SPREAD_Y);

        // x is +/-1, so the vector can never be zero
        self.vel = Vec2::new(x, y).normalize() * self.base_speed;
    }

    /// Park the ball at the centre. The caller schedules the next launch.
    pub fn reset_to_center(&mut self) {
        self.pos = Vec2::ZERO;
        self.vel = Vec2::ZERO;
    }

    /// Freeze in place (used when the match ends)
    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_paddle_moves_with_intent() {
        let mut paddle = Paddle::new(Side::Player, -8.0, 10.0, 4.5);
        let y = paddle.update(1.0, 0.1);
        assert!((y - 1.0).abs() < EPS);
        let y = paddle.update(-0.5, 0.1);
        assert!((y - 0.5).abs() < EPS);
    }

    #[test]
    fn test_paddle_clamps_to_boundary() {
        let mut paddle = Paddle::new(Side::Player, -8.0, 10.0, 4.5);
        for _ in 0..100 {
            paddle.update(1.0, 0.1);
        }
        assert_eq!(paddle.y, 4.5);
        for _ in 0..100 {
            paddle.update(-1.0, 0.1);
        }
        assert_eq!(paddle.y, -4.5);
    }

    #[test]
    fn test_paddle_clamps_out_of_range_intent() {
        let mut paddle = Paddle::new(Side::Opponent, 8.0, 10.0, 4.5);
        paddle.update(7.0, 0.1);
        assert!((paddle.y - 1.0).abs() < EPS, "Intent should clamp to 1");

        paddle.update(f32::NAN, 0.1);
        assert!((paddle.y - 1.0).abs() < EPS, "NaN intent should hold");
    }

    #[test]
    fn test_hit_offset_ratio() {
        let mut paddle = Paddle::new(Side::Player, -8.0, 10.0, 4.5);
        paddle.half_height = 2.0;
        paddle.y = 1.0;
        assert_eq!(paddle.hit_offset_ratio(1.0), 0.0);
        assert!((paddle.hit_offset_ratio(2.0) - 0.5).abs() < EPS);
        assert_eq!(paddle.hit_offset_ratio(10.0), 1.0, "Clamped at the top");
        assert_eq!(paddle.hit_offset_ratio(-10.0), -1.0, "Clamped at the bottom");
    }

    #[test]
    fn test_hit_offset_ratio_zero_height_paddle() {
        let mut paddle = Paddle::new(Side::Player, -8.0, 10.0, 4.5);
        paddle.half_height = 0.0;
        assert_eq!(paddle.hit_offset_ratio(3.0), 0.0);
    }

    #[test]
    fn test_paddle_hit_centre_returns_flat() {
        let mut ball =
            Ball::new(Vec2::new(0.0, 2.0), Vec2::new(4.0, 3.0)).with_speeds(6.0, 0.3, 15.0);
        let event = ball.on_collision(Surface::Paddle {
            side: Side::Opponent,
            hit_offset: 0.0,
        });

        assert_eq!(event, GameEvent::PaddleHit { side: Side::Opponent });
        assert!(ball.vel.x < 0.0, "Horizontal direction should reverse");
        assert!(ball.vel.y.abs() < EPS, "Centre hit should return flat");
        assert!((ball.speed() - 5.3).abs() < EPS);
    }

    #[test]
    fn test_paddle_hit_offset_steers_return() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(-6.0, 0.0));
        ball.on_collision(Surface::Paddle {
            side: Side::Player,
            hit_offset: 1.0,
        });
        assert!(ball.vel.x > 0.0);
        assert!(ball.vel.y > 0.0, "Top-edge hit should send the ball up");
        assert!((ball.vel.x - ball.vel.y).abs() < EPS, "Ratio 1 gives 45 degrees");
    }

    #[test]
    fn test_paddle_hit_caps_speed() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(14.9, 0.0)).with_speeds(6.0, 0.3, 15.0);
        ball.on_collision(Surface::Paddle {
            side: Side::Opponent,
            hit_offset: 0.2,
        });
        assert!((ball.speed() - 15.0).abs() < EPS);
    }

    #[test]
    fn test_paddle_hit_on_vertical_ball_uses_paddle_facing() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(0.0, 5.0));
        ball.on_collision(Surface::Paddle {
            side: Side::Player,
            hit_offset: 0.0,
        });
        assert!(ball.vel.x > 0.0, "Should leave toward the opponent");
        assert!(ball.vel.y.abs() < EPS);
    }

    #[test]
    fn test_wall_hit_flips_vertical_only() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(4.0, 3.0));
        let event = ball.on_collision(Surface::Wall);
        assert_eq!(event, GameEvent::WallHit);
        assert_eq!(ball.vel, Vec2::new(4.0, -3.0));
    }

    #[test]
    fn test_launch_speed_and_direction() {
        let mut rng = GameRng::new(7);
        for _ in 0..50 {
            let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
            ball.launch(&mut rng);
            assert!((ball.speed() - ball.base_speed).abs() < EPS);
            assert!(ball.vel.x.abs() > ball.vel.y.abs(), "Launch must stay shallow");
        }
    }

    #[test]
    fn test_reset_to_center() {
        let mut ball = Ball::new(Vec2::new(11.0, -3.0), Vec2::new(8.0, 1.0));
        ball.reset_to_center();
        assert_eq!(ball.pos, Vec2::ZERO);
        assert!(ball.is_resting());
    }

    #[test]
    fn test_side_facing() {
        assert_eq!(Side::Player.facing(), 1.0);
        assert_eq!(Side::Opponent.facing(), -1.0);
        assert_eq!(Side::Player.other(), Side::Opponent);
    }
}
