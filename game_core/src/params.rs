/// Default tuning parameters for the arena
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const WALL_Y: f32 = 5.0; // Top/bottom walls at +/- this
    pub const OUT_OF_BOUNDS_X: f32 = 10.0; // Ball past this scores

    // Paddle
    pub const PADDLE_X: f32 = 8.0; // Player at -X, opponent at +X
    pub const PADDLE_HALF_WIDTH: f32 = 0.25;
    pub const PADDLE_HALF_HEIGHT: f32 = 1.0;
    pub const PADDLE_BOUNDARY_Y: f32 = 4.5;
    pub const PLAYER_PADDLE_SPEED: f32 = 10.0; // units per second
    pub const AI_PADDLE_SPEED: f32 = 7.0; // slower than the player on purpose
    pub const AI_DEAD_ZONE: f32 = 0.5;

    // Ball
    pub const BALL_RADIUS: f32 = 0.25;
    pub const BALL_SPEED_BASE: f32 = 6.0;
    pub const BALL_SPEED_MAX: f32 = 15.0;
    pub const BALL_SPEED_INCREASE: f32 = 0.3; // Added to speed on paddle hit
    pub const LAUNCH_SPREAD_Y: f32 = 0.5; // Vertical launch component in [-0.5, 0.5]
    pub const RELAUNCH_DELAY: f32 = 1.0; // seconds

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Cosmetic shake hints (duration, magnitude)
    pub const PADDLE_SHAKE: (f32, f32) = (0.15, 0.1);
    pub const WALL_SHAKE: (f32, f32) = (0.1, 0.05);

    // Physics
    pub const FIXED_DT: f32 = 0.02; // 50 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
