use crate::components::Side;
use crate::{Ball, Events, GameRng, Paddle};

/// Check if any enabled ball left the field; score it and serve it again
pub fn check_scoring(
    balls: &mut [Ball],
    paddles: &mut [Paddle; 2],
    events: &mut Events,
    rng: &mut GameRng,
) {
    let [left, right] = paddles;

    for ball in balls.iter_mut().filter(|b| b.is_enabled()) {
        if !ball.is_out_of_bounds(left, right) {
            continue;
        }

        if ball.position().x < 0.0 {
            events.right_scored = true;
            log::info!("{} scores ({} - {})", Side::Right, left.score(), right.score());
        } else {
            events.left_scored = true;
            log::info!("{} scores ({} - {})", Side::Left, left.score(), right.score());
        }

        ball.reset(rng);
    }
}

/// The side that reached the winning score, if any
pub fn check_winner(paddles: &[Paddle; 2]) -> Option<Side> {
    paddles.iter().find(|p| p.check_score()).map(|p| p.side())
}
