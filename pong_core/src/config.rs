use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub speed: f32,
    pub bounce_speedup: f32,
    pub collision_size: Vec2,
    pub paddle_x: f32,
    pub paddle_bound: f32,
    pub ball_vertical_bound: f32,
    pub ball_horizontal_bound: f32,
    pub win_score: u32,
    pub initial_balls: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: Params::SPEED,
            bounce_speedup: Params::BOUNCE_SPEEDUP,
            collision_size: Vec2::new(Params::COLLISION_WIDTH, Params::COLLISION_HEIGHT),
            paddle_x: Params::PADDLE_X,
            paddle_bound: Params::PADDLE_VERTICAL_BOUND,
            ball_vertical_bound: Params::BALL_VERTICAL_BOUND,
            ball_horizontal_bound: Params::BALL_HORIZONTAL_BOUND,
            win_score: Params::WIN_SCORE,
            initial_balls: 1,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle based on its side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => -self.paddle_x,
            Side::Right => self.paddle_x,
        }
    }
}
