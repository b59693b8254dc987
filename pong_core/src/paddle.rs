use std::fmt;

use glam::{Mat4, Vec2};

use crate::collision::Aabb;
use crate::components::{ControlMode, Side};
use crate::config::Config;
use crate::params::Params;

/// A player's paddle. Only `position.y` moves after construction.
#[derive(Debug, Clone)]
pub struct Paddle {
    side: Side,
    position: Vec2,
    direction: f32, // -1 = down, 0 = stop, 1 = up
    score: u32,
    control: ControlMode,
    speed: f32,
    bound: f32,
    win_score: u32,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            position: Vec2::new(config.paddle_x(side), 0.0),
            direction: 0.0,
            score: 0,
            control: ControlMode::Player,
            speed: config.speed,
            bound: config.paddle_bound,
            win_score: config.win_score,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn control(&self) -> ControlMode {
        self.control
    }

    pub fn is_cpu(&self) -> bool {
        self.control == ControlMode::Cpu
    }

    pub fn set_up(&mut self) {
        self.direction = 1.0;
    }

    pub fn set_down(&mut self) {
        self.direction = -1.0;
    }

    pub fn set_neutral(&mut self) {
        self.direction = 0.0;
    }

    /// Place the paddle at `y` without any bound handling
    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
    }

    pub fn increase_score(&mut self) {
        self.score += 1;
    }

    /// True once this paddle reached the winning score
    pub fn check_score(&self) -> bool {
        self.score >= self.win_score
    }

    pub fn toggle_control(&mut self) {
        self.control = self.control.toggled();
        if self.control == ControlMode::Player {
            self.set_neutral();
        }
    }

    /// Recenter and clear direction and score; control mode is kept
    pub fn reset(&mut self) {
        self.position.y = 0.0;
        self.direction = 0.0;
        self.score = 0;
    }

    pub fn update(&mut self, dt: f32) {
        match self.control {
            ControlMode::Player => {
                self.position.y += self.direction * self.speed * dt;
                self.position.y = self.position.y.clamp(-self.bound, self.bound);
            }
            ControlMode::Cpu => {
                if self.direction == 0.0 {
                    self.set_down();
                }

                let mut y = self.position.y + self.direction * self.speed * dt;

                // Reflect the overshoot back off the bound. A long step can
                // carry it past the opposite bound too, so keep folding.
                while y >= self.bound || y <= -self.bound {
                    if y >= self.bound {
                        self.set_down();
                        y = 2.0 * self.bound - y;
                    } else {
                        self.set_up();
                        y = -2.0 * self.bound - y;
                    }
                    // Landing exactly on a bound counts as inside
                    if y.abs() <= self.bound {
                        break;
                    }
                }
                self.position.y = y;
            }
        }
    }

    pub fn collision_box(&self, size: Vec2) -> Aabb {
        Aabb::anchored(self.position, size)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position.extend(0.0))
            * Mat4::from_scale(Params::PADDLE_SCALE.extend(1.0))
    }
}

impl fmt::Display for Paddle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Paddle ({}, {:?}):\n\tX: {}\n\tY: {}\n\tScore: {}",
            self.side, self.control, self.position.x, self.position.y, self.score
        )
    }
}
