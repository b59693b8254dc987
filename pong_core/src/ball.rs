use std::fmt;

use glam::{Mat4, Vec2};
use rand::Rng;

use crate::collision::Aabb;
use crate::components::Side;
use crate::config::Config;
use crate::paddle::Paddle;
use crate::params::Params;
use crate::resources::GameRng;

/// A pong ball. Speed grows with every bounce until the next reset.
#[derive(Debug, Clone)]
pub struct Ball {
    position: Vec2,
    direction: Vec2,
    bounces: u32,
    owner: Side,
    enabled: bool,
    speed: f32,
    bounce_speedup: f32,
    size: Vec2,
    vertical_bound: f32,
    horizontal_bound: f32,
}

impl Ball {
    /// Disabled ball at the centre with a random direction
    pub fn new(config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self {
            position: Vec2::ZERO,
            direction: Vec2::ZERO,
            bounces: 0,
            owner: Side::Left,
            enabled: false,
            speed: config.speed,
            bounce_speedup: config.bounce_speedup,
            size: config.collision_size,
            vertical_bound: config.ball_vertical_bound,
            horizontal_bound: config.ball_horizontal_bound,
        };
        ball.set_random_direction(rng);
        ball
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Vec2) {
        self.direction = direction;
    }

    pub fn bounces(&self) -> u32 {
        self.bounces
    }

    /// Current speed in units per second
    pub fn speed(&self) -> f32 {
        self.speed + self.bounce_speedup * self.bounces as f32
    }

    pub fn owner(&self) -> Side {
        self.owner
    }

    pub fn set_owner(&mut self, owner: Side) {
        self.owner = owner;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pick a new direction: a uniform angle within `SERVE_MAX_ANGLE` of
    /// the +X axis, mirrored to the left on a coin flip. The ball is owned
    /// by the side it travels away from.
    pub fn set_random_direction(&mut self, rng: &mut GameRng) {
        let theta: f32 = rng.0.gen_range(-Params::SERVE_MAX_ANGLE..Params::SERVE_MAX_ANGLE);
        let mut direction = Vec2::new(theta.cos(), theta.sin());
        if rng.0.gen_bool(0.5) {
            direction.x = -direction.x;
        }

        self.direction = direction;
        self.owner = if direction.x > 0.0 {
            Side::Left
        } else {
            Side::Right
        };
    }

    /// Award a point when the ball crossed a scoring boundary.
    /// Leaving on the left scores for the right paddle and vice versa.
    pub fn is_out_of_bounds(&self, left: &mut Paddle, right: &mut Paddle) -> bool {
        if self.position.x <= -self.horizontal_bound {
            right.increase_score();
            return true;
        }

        if self.position.x >= self.horizontal_bound {
            left.increase_score();
            return true;
        }

        false
    }

    pub fn reset(&mut self, rng: &mut GameRng) {
        self.position = Vec2::ZERO;
        self.bounces = 0;
        self.set_random_direction(rng);
    }

    /// Advance one tick against `paddle` and the top/bottom walls.
    /// Returns whether the paddle was hit.
    pub fn update(&mut self, dt: f32, paddle: &Paddle) -> bool {
        let speed = self.speed();
        let next = self.position + self.direction * speed * dt;

        let paddle_box = paddle.collision_box(self.size);
        let old_box = Aabb::anchored(self.position, self.size);
        let new_box = Aabb::anchored(next, self.size);

        let old_x = old_box.overlaps_x(&paddle_box);
        let old_y = old_box.overlaps_y(&paddle_box);
        let new_x = new_box.overlaps_x(&paddle_box);
        let new_y = new_box.overlaps_y(&paddle_box);

        let mut hit_paddle = false;

        if new_x && new_y {
            // Reverse only along the axis the ball entered through
            if old_x != new_x {
                self.direction.x = -self.direction.x;
            }
            if old_y != new_y {
                self.direction.y = -self.direction.y;
            }
            self.bounces += 1;
            hit_paddle = true;
        }

        if next.y >= self.vertical_bound || next.y <= -self.vertical_bound {
            self.direction.y = -self.direction.y;
            self.bounces += 1;
        }

        self.position += self.direction * speed * dt;
        hit_paddle
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position.extend(0.0))
            * Mat4::from_scale(Params::BALL_SCALE.extend(1.0))
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position:\n\tX: {}\n\tY: {}\nVelocity:\n\tX: {}\n\tY: {}\n\tSpeed: {}\n\tBounces: {}",
            self.position.x,
            self.position.y,
            self.direction.x,
            self.direction.y,
            self.speed(),
            self.bounces
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Config, GameRng) {
        (Config::new(), GameRng::new(12345)) // Fixed seed for deterministic tests
    }

    fn ball_at(config: &Config, rng: &mut GameRng, pos: Vec2, dir: Vec2) -> Ball {
        let mut ball = Ball::new(config, rng);
        ball.set_position(pos);
        ball.set_direction(dir);
        ball
    }

    #[test]
    fn test_new_ball_is_disabled_at_centre() {
        let (config, mut rng) = setup();
        let ball = Ball::new(&config, &mut rng);
        assert!(!ball.is_enabled());
        assert_eq!(ball.position(), Vec2::ZERO);
        assert_eq!(ball.bounces(), 0);
        assert!((ball.direction().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_random_direction_sets_owner_from_x_sign() {
        let (config, mut rng) = setup();
        let mut ball = Ball::new(&config, &mut rng);
        let mut seen_left = false;
        let mut seen_right = false;
        for _ in 0..64 {
            ball.set_random_direction(&mut rng);
            let expected = if ball.direction().x > 0.0 {
                Side::Left
            } else {
                Side::Right
            };
            assert_eq!(ball.owner(), expected);
            seen_left |= expected == Side::Left;
            seen_right |= expected == Side::Right;
        }
        assert!(seen_left && seen_right, "Both serve sides should occur");
    }

    #[test]
    fn test_serve_is_never_steep() {
        let (config, mut rng) = setup();
        let mut ball = Ball::new(&config, &mut rng);
        let min_x = Params::SERVE_MAX_ANGLE.cos();
        for _ in 0..1000 {
            ball.reset(&mut rng);
            assert!(ball.direction().x.abs() >= min_x - 1e-6);
            assert!((ball.direction().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_moves_freely_in_open_field() {
        let (config, mut rng) = setup();
        let paddle = Paddle::new(Side::Right, &config);
        let mut ball = ball_at(&config, &mut rng, Vec2::ZERO, Vec2::new(1.0, 0.0));

        let hit = ball.update(0.1, &paddle);

        assert!(!hit);
        assert!((ball.position().x - 0.3).abs() < 1e-6);
        assert_eq!(ball.bounces(), 0);
    }

    #[test]
    fn test_bounces_off_top_wall() {
        let (config, mut rng) = setup();
        let paddle = Paddle::new(Side::Right, &config);
        let mut ball = ball_at(&config, &mut rng, Vec2::new(0.0, 2.15), Vec2::new(0.0, 1.0));

        ball.update(0.1, &paddle);

        assert_eq!(ball.direction().y, -1.0, "Y direction should flip");
        assert_eq!(ball.bounces(), 1);
        assert!(ball.position().y < 2.15, "Ball should move back down");
    }

    #[test]
    fn test_bounces_off_bottom_wall() {
        let (config, mut rng) = setup();
        let paddle = Paddle::new(Side::Left, &config);
        let mut ball = ball_at(&config, &mut rng, Vec2::new(0.0, -2.15), Vec2::new(0.0, -1.0));

        ball.update(0.1, &paddle);

        assert_eq!(ball.direction().y, 1.0);
        assert_eq!(ball.bounces(), 1);
    }

    #[test]
    fn test_hits_right_paddle_head_on() {
        let (config, mut rng) = setup();
        let paddle = Paddle::new(Side::Right, &config);
        // Ball box right edge at 2.5 + 0.472 = 2.972, paddle box starts at 3.08
        let mut ball = ball_at(&config, &mut rng, Vec2::new(2.5, 0.0), Vec2::new(1.0, 0.0));

        let hit = ball.update(0.1, &paddle);

        assert!(hit, "Ball should hit the paddle");
        assert_eq!(ball.direction().x, -1.0, "X direction should flip");
        assert_eq!(ball.direction().y, 0.0, "Y untouched when already aligned");
        assert_eq!(ball.bounces(), 1);
        assert!(ball.position().x < 2.5, "Ball should travel back");
    }

    #[test]
    fn test_hits_left_paddle_head_on() {
        let (config, mut rng) = setup();
        let paddle = Paddle::new(Side::Left, &config);
        // Paddle box spans x in [-3.08, -2.608]
        let mut ball = ball_at(&config, &mut rng, Vec2::new(-2.5, 0.2), Vec2::new(-1.0, 0.0));

        let hit = ball.update(0.1, &paddle);

        assert!(hit);
        assert_eq!(ball.direction().x, 1.0);
    }

    #[test]
    fn test_enters_paddle_from_above_flips_y() {
        let (config, mut rng) = setup();
        let paddle = Paddle::new(Side::Right, &config);
        // Aligned in X, ball box bottom at 1.0 - 0.78 = 0.22 above paddle top 0.0
        let mut ball = ball_at(&config, &mut rng, Vec2::new(3.0, 1.0), Vec2::new(0.0, -1.0));

        let hit = ball.update(0.1, &paddle);

        assert!(hit);
        assert_eq!(ball.direction(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_speed_increases_after_paddle_hit() {
        let (config, mut rng) = setup();
        let paddle = Paddle::new(Side::Right, &config);
        let mut ball = ball_at(&config, &mut rng, Vec2::new(2.5, 0.0), Vec2::new(1.0, 0.0));

        ball.update(0.1, &paddle);

        assert!((ball.speed() - 3.1).abs() < 1e-6);
    }

    #[test]
    fn test_speed_follows_config_tuning() {
        let config = Config {
            speed: 2.0,
            bounce_speedup: 0.5,
            ..Config::new()
        };
        let mut rng = GameRng::new(12345);
        let paddle = Paddle::new(Side::Right, &config);
        let mut ball = ball_at(&config, &mut rng, Vec2::new(2.5, 0.0), Vec2::new(1.0, 0.0));
        assert_eq!(ball.speed(), 2.0);

        assert!(ball.update(0.1, &paddle));

        assert!((ball.speed() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_missing_paddle_vertically_is_no_hit() {
        let (config, mut rng) = setup();
        let paddle = Paddle::new(Side::Right, &config);
        let mut ball = ball_at(&config, &mut rng, Vec2::new(2.5, 1.9), Vec2::new(1.0, 0.0));

        let hit = ball.update(0.1, &paddle);

        assert!(!hit);
        assert_eq!(ball.direction().x, 1.0);
    }

    #[test]
    fn test_out_of_bounds_left_scores_right() {
        let (config, mut rng) = setup();
        let mut left = Paddle::new(Side::Left, &config);
        let mut right = Paddle::new(Side::Right, &config);
        let ball = ball_at(&config, &mut rng, Vec2::new(-4.18, 0.0), Vec2::new(-1.0, 0.0));

        assert!(ball.is_out_of_bounds(&mut left, &mut right));
        assert_eq!(right.score(), 1, "Right player should score");
        assert_eq!(left.score(), 0, "Left player should not score");
    }

    #[test]
    fn test_out_of_bounds_right_scores_left() {
        let (config, mut rng) = setup();
        let mut left = Paddle::new(Side::Left, &config);
        let mut right = Paddle::new(Side::Right, &config);
        let ball = ball_at(&config, &mut rng, Vec2::new(4.18, 0.0), Vec2::new(1.0, 0.0));

        assert!(ball.is_out_of_bounds(&mut left, &mut right));
        assert_eq!(left.score(), 1);
        assert_eq!(right.score(), 0);
    }

    #[test]
    fn test_in_bounds_scores_nothing() {
        let (config, mut rng) = setup();
        let mut left = Paddle::new(Side::Left, &config);
        let mut right = Paddle::new(Side::Right, &config);
        let ball = ball_at(&config, &mut rng, Vec2::new(4.16, 0.0), Vec2::new(1.0, 0.0));

        assert!(!ball.is_out_of_bounds(&mut left, &mut right));
        assert_eq!(left.score(), 0);
        assert_eq!(right.score(), 0);
    }

    #[test]
    fn test_reset_recentres_and_clears_bounces() {
        let (config, mut rng) = setup();
        let paddle = Paddle::new(Side::Right, &config);
        let mut ball = ball_at(&config, &mut rng, Vec2::new(2.5, 0.0), Vec2::new(1.0, 0.0));
        ball.update(0.1, &paddle);
        assert_eq!(ball.bounces(), 1);

        ball.reset(&mut rng);

        assert_eq!(ball.position(), Vec2::ZERO);
        assert_eq!(ball.bounces(), 0);
        assert!((ball.direction().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_display_dump() {
        let (config, mut rng) = setup();
        let ball = Ball::new(&config, &mut rng);
        let dump = ball.to_string();
        assert!(dump.contains("Bounces: 0"));
        assert!(dump.contains("Speed: 3"));
    }
}
