use crate::components::Side;
use crate::{Ball, Events, Paddle};

/// Apply paddle movement for this step
pub fn move_paddles(paddles: &mut [Paddle; 2], dt: f32) {
    for paddle in paddles.iter_mut() {
        paddle.update(dt);
    }
}

/// Move every enabled ball. Each ball is tested against the paddle on the
/// half of the field it is in; a hit hands ownership to that side.
pub fn move_balls(balls: &mut [Ball], paddles: &[Paddle; 2], dt: f32, events: &mut Events) {
    for ball in balls.iter_mut().filter(|b| b.is_enabled()) {
        let side = if ball.position().x < 0.0 {
            Side::Left
        } else {
            Side::Right
        };

        let bounces_before = ball.bounces();
        let hit_paddle = ball.update(dt, &paddles[side.index()]);
        let wall_bounces = ball.bounces() - bounces_before - u32::from(hit_paddle);

        if hit_paddle {
            ball.set_owner(side);
            events.ball_hit_paddle = true;
        }
        if wall_bounces > 0 {
            events.ball_hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, GameRng};
    use glam::Vec2;

    fn setup() -> (Config, GameRng, [Paddle; 2], Events) {
        let config = Config::new();
        let paddles = [
            Paddle::new(Side::Left, &config),
            Paddle::new(Side::Right, &config),
        ];
        (config, GameRng::new(12345), paddles, Events::new())
    }

    fn enabled_ball(config: &Config, rng: &mut GameRng, pos: Vec2, dir: Vec2) -> Ball {
        let mut ball = Ball::new(config, rng);
        ball.set_position(pos);
        ball.set_direction(dir);
        ball.enable();
        ball
    }

    #[test]
    fn test_move_paddles_updates_both() {
        let (_config, _rng, mut paddles, _events) = setup();
        paddles[0].set_up();
        paddles[1].set_down();

        move_paddles(&mut paddles, 0.1);

        assert!(paddles[0].position().y > 0.0);
        assert!(paddles[1].position().y < 0.0);
    }

    #[test]
    fn test_disabled_balls_stay_put() {
        let (config, mut rng, paddles, mut events) = setup();
        let mut balls = vec![enabled_ball(&config, &mut rng, Vec2::ZERO, Vec2::X)];
        balls[0].disable();

        move_balls(&mut balls, &paddles, 0.1, &mut events);

        assert_eq!(balls[0].position(), Vec2::ZERO);
    }

    #[test]
    fn test_right_paddle_hit_takes_ownership() {
        let (config, mut rng, paddles, mut events) = setup();
        let mut balls = vec![enabled_ball(&config, &mut rng, Vec2::new(2.5, 0.0), Vec2::X)];
        balls[0].set_owner(Side::Left);

        move_balls(&mut balls, &paddles, 0.1, &mut events);

        assert_eq!(balls[0].owner(), Side::Right);
        assert!(events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_left_half_uses_left_paddle() {
        let (config, mut rng, paddles, mut events) = setup();
        let mut balls = vec![enabled_ball(
            &config,
            &mut rng,
            Vec2::new(-2.5, 0.2),
            Vec2::NEG_X,
        )];
        balls[0].set_owner(Side::Right);

        move_balls(&mut balls, &paddles, 0.1, &mut events);

        assert_eq!(balls[0].owner(), Side::Left);
        assert_eq!(balls[0].direction().x, 1.0);
    }

    #[test]
    fn test_wall_bounce_sets_event() {
        let (config, mut rng, paddles, mut events) = setup();
        let mut balls = vec![enabled_ball(&config, &mut rng, Vec2::new(0.0, 2.15), Vec2::Y)];

        move_balls(&mut balls, &paddles, 0.1, &mut events);

        assert!(events.ball_hit_wall);
        assert!(!events.ball_hit_paddle);
    }
}
