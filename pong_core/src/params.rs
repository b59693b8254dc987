use glam::Vec2;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Movement
    pub const SPEED: f32 = 3.0; // units per second, paddles and balls
    pub const BOUNCE_SPEEDUP: f32 = 0.1; // added to ball speed per bounce

    // Collision box shared by paddles and balls
    pub const COLLISION_WIDTH: f32 = 0.472;
    pub const COLLISION_HEIGHT: f32 = 0.78;

    // Paddle
    pub const PADDLE_X: f32 = 3.08;
    pub const PADDLE_VERTICAL_BOUND: f32 = 1.712;
    pub const PADDLE_SCALE: Vec2 = Vec2::new(0.64, 1.28);

    // Ball
    pub const BALL_VERTICAL_BOUND: f32 = 2.2;
    pub const BALL_HORIZONTAL_BOUND: f32 = 4.17;
    pub const BALL_SCALE: Vec2 = Vec2::new(0.32, 0.32);
    pub const MAX_BALLS: usize = 3;
    pub const SERVE_MAX_ANGLE: f32 = std::f32::consts::FRAC_PI_3; // from horizontal

    // Win banner
    pub const BANNER_SCALE: Vec2 = Vec2::new(6.0, 1.5);

    // Score
    pub const WIN_SCORE: u32 = 3; // First to 3 wins

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
