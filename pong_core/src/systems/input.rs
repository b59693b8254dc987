use crate::input::InputState;
use crate::paddle::Paddle;

/// Turn held keys into paddle directions. CPU paddles steer themselves.
pub fn apply_paddle_input(paddles: &mut [Paddle; 2], input: &InputState) {
    for paddle in paddles.iter_mut().filter(|p| !p.is_cpu()) {
        match input.paddle_axis(paddle.side()) {
            1 => paddle.set_up(),
            -1 => paddle.set_down(),
            _ => paddle.set_neutral(),
        }
    }
}
