use serde::{Deserialize, Serialize};

use crate::{ConfigError, PaddleDriver, Params, Side};

/// How a paddle is controlled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Human,
    Ai,
}

/// Arena configuration. Fixed for the lifetime of an arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub wall_y: f32,
    pub out_of_bounds_x: f32,
    pub paddle_x: f32,
    pub paddle_half_width: f32,
    pub paddle_half_height: f32,
    pub paddle_boundary_y: f32,
    pub player_paddle_speed: f32,
    pub opponent_paddle_speed: f32,
    pub player_control: Control,
    pub opponent_control: Control,
    pub ai_dead_zone: f32,
    pub ball_radius: f32,
    pub ball_speed_base: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub relaunch_delay: f32,
    pub win_score: u8,
    pub launch_on_start: bool,
    pub fixed_dt: f32,
    pub max_frame_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wall_y: Params::WALL_Y,
            out_of_bounds_x: Params::OUT_OF_BOUNDS_X,
            paddle_x: Params::PADDLE_X,
            paddle_half_width: Params::PADDLE_HALF_WIDTH,
            paddle_half_height: Params::PADDLE_HALF_HEIGHT,
            paddle_boundary_y: Params::PADDLE_BOUNDARY_Y,
            player_paddle_speed: Params::PLAYER_PADDLE_SPEED,
            opponent_paddle_speed: Params::AI_PADDLE_SPEED,
            player_control: Control::Human,
            opponent_control: Control::Ai,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            relaunch_delay: Params::RELAUNCH_DELAY,
            win_score: Params::WIN_SCORE,
            launch_on_start: true,
            fixed_dt: Params::FIXED_DT,
            max_frame_dt: Params::MAX_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => -self.paddle_x,
            Side::Opponent => self.paddle_x,
        }
    }

    pub fn paddle_speed(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.player_paddle_speed,
            Side::Opponent => self.opponent_paddle_speed,
        }
    }

    pub fn control(&self, side: Side) -> Control {
        match side {
            Side::Player => self.player_control,
            Side::Opponent => self.opponent_control,
        }
    }

    pub fn driver(&self, side: Side) -> PaddleDriver {
        match self.control(side) {
            Control::Human => PaddleDriver::Human,
            Control::Ai => PaddleDriver::Ai {
                dead_zone: self.ai_dead_zone,
            },
        }
    }

    /// Fastest ball that still lands inside a paddle's contact band on some tick
    pub fn max_tunnel_free_speed(&self) -> f32 {
        2.0 * (self.paddle_half_width + self.ball_radius) / self.fixed_dt
    }

    /// Check every constraint the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("wall_y", self.wall_y),
            ("out_of_bounds_x", self.out_of_bounds_x),
            ("paddle_x", self.paddle_x),
            ("paddle_half_width", self.paddle_half_width),
            ("paddle_half_height", self.paddle_half_height),
            ("paddle_boundary_y", self.paddle_boundary_y),
            ("player_paddle_speed", self.player_paddle_speed),
            ("opponent_paddle_speed", self.opponent_paddle_speed),
            ("ai_dead_zone", self.ai_dead_zone),
            ("ball_radius", self.ball_radius),
            ("ball_speed_base", self.ball_speed_base),
            ("ball_speed_max", self.ball_speed_max),
            ("ball_speed_increase", self.ball_speed_increase),
            ("relaunch_delay", self.relaunch_delay),
            ("fixed_dt", self.fixed_dt),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        for (field, value) in [
            ("wall_y", self.wall_y),
            ("out_of_bounds_x", self.out_of_bounds_x),
            ("player_paddle_speed", self.player_paddle_speed),
            ("opponent_paddle_speed", self.opponent_paddle_speed),
            ("ball_speed_base", self.ball_speed_base),
            ("fixed_dt", self.fixed_dt),
            ("max_frame_dt", self.max_frame_dt),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("paddle_x", self.paddle_x),
            ("paddle_half_width", self.paddle_half_width),
            ("paddle_half_height", self.paddle_half_height),
            ("paddle_boundary_y", self.paddle_boundary_y),
            ("ai_dead_zone", self.ai_dead_zone),
            ("ball_radius", self.ball_radius),
            ("ball_speed_increase", self.ball_speed_increase),
            ("relaunch_delay", self.relaunch_delay),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.ball_speed_max < self.ball_speed_base {
            return Err(ConfigError::MaxBelowBase {
                base: self.ball_speed_base,
                max: self.ball_speed_max,
            });
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }

        if self.paddle_x >= self.out_of_bounds_x {
            return Err(ConfigError::PaddlesOutOfBounds {
                paddle_x: self.paddle_x,
                out_of_bounds_x: self.out_of_bounds_x,
            });
        }

        if self.wall_y <= self.ball_radius {
            return Err(ConfigError::BallWiderThanArena {
                ball_radius: self.ball_radius,
                wall_y: self.wall_y,
            });
        }

        // Paddle contact is sampled once per tick, so a single step must not
        // clear the whole contact band
        let limit = self.max_tunnel_free_speed();
        if self.ball_speed_max >= limit {
            return Err(ConfigError::BallTooFast {
                max: self.ball_speed_max,
                limit,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), -8.0, "Player paddle X position");
        assert_eq!(config.paddle_x(Side::Opponent), 8.0, "Opponent paddle X position");
    }

    #[test]
    fn test_config_driver_follows_control() {
        let mut config = Config::new();
        assert_eq!(config.driver(Side::Player), PaddleDriver::Human);
        assert_eq!(
            config.driver(Side::Opponent),
            PaddleDriver::Ai { dead_zone: 0.5 }
        );

        config.player_control = Control::Ai;
        config.ai_dead_zone = 0.2;
        assert_eq!(config.driver(Side::Player), PaddleDriver::Ai { dead_zone: 0.2 });
    }

    #[test]
    fn test_rejects_max_below_base() {
        let config = Config {
            ball_speed_base: 6.0,
            ball_speed_max: 5.0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MaxBelowBase { base: 6.0, max: 5.0 })
        );
    }

    #[test]
    fn test_rejects_zero_win_score() {
        let config = Config {
            win_score: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinScore));
    }

    #[test]
    fn test_rejects_negative_dead_zone() {
        let config = Config {
            ai_dead_zone: -0.1,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "ai_dead_zone",
                value: -0.1
            })
        );
    }

    #[test]
    fn test_rejects_non_positive_fixed_dt() {
        let config = Config {
            fixed_dt: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "fixed_dt", .. })
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let config = Config {
            ball_speed_max: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "ball_speed_max",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_ball_wider_than_arena() {
        let config = Config {
            wall_y: 0.1,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BallWiderThanArena {
                ball_radius: 0.25,
                wall_y: 0.1
            })
        );

        let config = Config {
            wall_y: 0.25,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallWiderThanArena { .. })
        ));
    }

    #[test]
    fn test_rejects_ball_fast_enough_to_skip_paddles() {
        let config = Config {
            ball_speed_max: 80.0,
            ..Config::default()
        };
        // 2 * (0.25 + 0.25) / 0.02
        assert!((config.max_tunnel_free_speed() - 50.0).abs() < 1e-3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallTooFast { max, .. }) if max == 80.0
        ));

        let config = Config {
            ball_speed_max: 49.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_paddles_past_out_of_bounds() {
        let config = Config {
            paddle_x: 12.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddlesOutOfBounds { .. })
        ));
    }
}
