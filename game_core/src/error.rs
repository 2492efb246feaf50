use thiserror::Error;

/// Rejected arena configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("ball_speed_max ({max}) is below ball_speed_base ({base})")]
    MaxBelowBase { base: f32, max: f32 },

    #[error("win_score must be at least 1")]
    ZeroWinScore,

    #[error("paddle_x ({paddle_x}) must be inside out_of_bounds_x ({out_of_bounds_x})")]
    PaddlesOutOfBounds { paddle_x: f32, out_of_bounds_x: f32 },

    #[error("ball_radius ({ball_radius}) leaves no room between walls at +/-{wall_y}")]
    BallWiderThanArena { ball_radius: f32, wall_y: f32 },

    #[error("ball_speed_max ({max}) can skip past a paddle in one tick; keep it below {limit}")]
    BallTooFast { max: f32, limit: f32 },
}
