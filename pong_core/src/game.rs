use crate::components::Side;
use crate::fsm::{MatchAction, MatchFsm, MatchState, TransitionResult};
use crate::input::{Command, InputState};
use crate::render::{banner_matrix, DrawSink, TextureId};
use crate::systems::*;
use crate::{Ball, Config, Events, GameRng, Paddle, Params};

/// A whole match: both paddles, the ball pool, and the match state.
pub struct Match {
    config: Config,
    paddles: [Paddle; 2],
    balls: [Ball; Params::MAX_BALLS],
    active_balls: usize,
    fsm: MatchFsm,
    events: Events,
    rng: GameRng,
}

impl Match {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let paddles = [
            Paddle::new(Side::Left, &config),
            Paddle::new(Side::Right, &config),
        ];
        let balls = std::array::from_fn(|_| Ball::new(&config, &mut rng));

        let mut game = Self {
            active_balls: 0,
            config,
            paddles,
            balls,
            fsm: MatchFsm::new(),
            events: Events::new(),
            rng,
        };
        game.set_ball_count(game.config.initial_balls);
        game
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn active_ball_count(&self) -> usize {
        self.active_balls
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn winner(&self) -> Option<Side> {
        check_winner(&self.paddles)
    }

    /// Advance the match by one frame
    pub fn update(&mut self, dt: f32, input: &InputState) {
        self.events.clear();

        // Clamp dt to prevent large jumps
        let clamped_dt = dt.clamp(0.0, Params::MAX_DT);

        // Fixed micro-steps for stable physics
        let mut remaining_dt = clamped_dt;
        while remaining_dt > 0.0 {
            let step_dt = remaining_dt.min(Params::FIXED_DT);
            remaining_dt -= step_dt;
            self.step(step_dt, input);
        }

        self.check_win();
    }

    fn step(&mut self, dt: f32, input: &InputState) {
        apply_paddle_input(&mut self.paddles, input);

        if !self.fsm.is_playing() {
            return;
        }

        move_paddles(&mut self.paddles, dt);
        move_balls(&mut self.balls, &self.paddles, dt, &mut self.events);
        check_scoring(&mut self.balls, &mut self.paddles, &mut self.events, &mut self.rng);
        self.check_win();
    }

    fn check_win(&mut self) {
        if self.fsm.is_won() {
            return;
        }
        if let Some(winner) = self.winner() {
            self.fsm.transition(MatchAction::Win);
            log::info!(
                "{} wins {} - {}",
                winner,
                self.paddle(Side::Left).score(),
                self.paddle(Side::Right).score()
            );
        }
    }

    /// Apply a discrete command. Quit is the caller's business.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Quit => {}
            Command::TogglePause => {
                self.toggle_pause();
            }
            Command::Restart => {
                self.restart();
            }
            Command::SetBallCount(count) => self.set_ball_count(count),
            Command::ToggleCpu(side) => {
                let paddle = self.paddle_mut(side);
                paddle.toggle_control();
                log::info!("{} is now {:?}", side, paddle.control());
            }
            Command::DebugDump => self.debug_dump(),
        }
    }

    pub fn toggle_pause(&mut self) -> TransitionResult {
        match self.fsm.state() {
            MatchState::Paused => self.fsm.transition(MatchAction::Resume),
            _ => self.fsm.transition(MatchAction::Pause),
        }
    }

    /// Start a new match after a win: scores, paddles and balls reset
    pub fn restart(&mut self) -> TransitionResult {
        let result = self.fsm.transition(MatchAction::Restart);
        if result.success {
            for paddle in self.paddles.iter_mut() {
                paddle.reset();
            }
            for ball in self.balls.iter_mut() {
                ball.reset(&mut self.rng);
            }
            log::info!("Match restarted with {} ball(s)", self.active_balls);
        }
        result
    }

    /// Enable the first `count` balls of the pool. Newly enabled balls are
    /// served from the centre.
    pub fn set_ball_count(&mut self, count: usize) {
        let count = count.clamp(1, Params::MAX_BALLS);
        for (i, ball) in self.balls.iter_mut().enumerate() {
            if i < count {
                if !ball.is_enabled() {
                    ball.reset(&mut self.rng);
                    ball.enable();
                }
            } else {
                ball.disable();
            }
        }
        if count != self.active_balls {
            log::debug!("Ball count {} -> {}", self.active_balls, count);
        }
        self.active_balls = count;
    }

    pub fn debug_dump(&self) {
        for paddle in &self.paddles {
            log::info!("{}", paddle);
        }
        for (i, ball) in self.balls.iter().enumerate().filter(|(_, b)| b.is_enabled()) {
            log::info!("Ball {}:\n{}", i, ball);
        }
    }

    /// Issue one draw call per visible entity
    pub fn render(&self, sink: &mut impl DrawSink) {
        for paddle in &self.paddles {
            sink.draw(paddle.model_matrix(), TextureId::paddle(paddle.side()));
        }
        for ball in self.balls.iter().filter(|b| b.is_enabled()) {
            sink.draw(ball.model_matrix(), TextureId::ball(ball.owner()));
        }
        if self.fsm.is_won() {
            if let Some(winner) = self.winner() {
                sink.draw(banner_matrix(), TextureId::banner(winner));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::render::DrawList;
    use glam::Vec2;

    fn new_match() -> Match {
        Match::new(Config::new(), GameRng::new(12345))
    }

    #[test]
    fn test_new_match_has_one_ball() {
        let game = new_match();
        assert_eq!(game.state(), MatchState::Playing);
        assert_eq!(game.active_ball_count(), 1);
        assert_eq!(game.balls().iter().filter(|b| b.is_enabled()).count(), 1);
        assert_eq!(game.balls().len(), Params::MAX_BALLS);
    }

    #[test]
    fn test_set_ball_count_clamps() {
        let mut game = new_match();
        game.set_ball_count(10);
        assert_eq!(game.active_ball_count(), 3);
        game.set_ball_count(0);
        assert_eq!(game.active_ball_count(), 1);
        assert!(game.balls()[0].is_enabled());
        assert!(!game.balls()[1].is_enabled());
    }

    #[test]
    fn test_update_moves_held_paddle() {
        let mut game = new_match();
        let mut input = InputState::new();
        input.key_down(Key::W);

        game.update(0.05, &input);

        assert!(game.paddle(Side::Left).position().y > 0.0);
        assert_eq!(game.paddle(Side::Right).position().y, 0.0);
    }

    #[test]
    fn test_released_input_stops_paddle() {
        let mut game = new_match();
        let mut input = InputState::new();
        input.key_down(Key::W);
        game.update(0.05, &input);
        let y = game.paddle(Side::Left).position().y;
        assert!(y > 0.0);

        input.release_all();
        game.update(0.05, &input);

        assert_eq!(game.paddle(Side::Left).position().y, y);
        assert_eq!(game.paddle(Side::Left).direction(), 0.0);
    }

    #[test]
    fn test_paused_match_is_frozen() {
        let mut game = new_match();
        game.handle(Command::TogglePause);
        assert_eq!(game.state(), MatchState::Paused);

        let before = game.balls()[0].position();
        let mut input = InputState::new();
        input.key_down(Key::Up);
        game.update(0.1, &input);

        assert_eq!(game.balls()[0].position(), before);
        assert_eq!(game.paddle(Side::Right).position().y, 0.0);

        game.handle(Command::TogglePause);
        assert_eq!(game.state(), MatchState::Playing);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut game = new_match();
        game.paddle_mut(Side::Left).increase_score();
        let result = game.restart();
        assert!(!result.success);
        assert_eq!(game.paddle(Side::Left).score(), 1);
    }

    #[test]
    fn test_toggle_cpu_command() {
        let mut game = new_match();
        game.handle(Command::ToggleCpu(Side::Right));
        assert!(game.paddle(Side::Right).is_cpu());
        assert!(!game.paddle(Side::Left).is_cpu());
    }

    #[test]
    fn test_render_draws_paddles_and_enabled_balls() {
        let mut game = new_match();
        game.set_ball_count(2);
        let mut list = DrawList::new();

        game.render(&mut list);

        let textures = list.textures();
        assert_eq!(textures.len(), 4);
        assert_eq!(textures[0], TextureId::PaddleLeft);
        assert_eq!(textures[1], TextureId::PaddleRight);
        for (ball, texture) in game.balls().iter().zip(&textures[2..]) {
            assert_eq!(*texture, TextureId::ball(ball.owner()));
        }
    }

    #[test]
    fn test_render_shows_banner_when_won() {
        let mut game = new_match();
        for _ in 0..3 {
            game.paddle_mut(Side::Left).increase_score();
        }
        game.update(0.0, &InputState::new());
        assert_eq!(game.state(), MatchState::Won);

        let mut list = DrawList::new();
        game.render(&mut list);

        assert_eq!(list.textures().last(), Some(&TextureId::BannerLeftWins));
    }

    #[test]
    fn test_ball_scores_and_is_served_again() {
        let mut game = new_match();
        game.balls_mut()[0].set_position(Vec2::new(4.16, 1.5));
        game.balls_mut()[0].set_direction(Vec2::X);

        game.update(1.0 / 60.0, &InputState::new());

        assert_eq!(game.paddle(Side::Left).score(), 1);
        assert!(game.events().left_scored);
        assert_eq!(game.balls()[0].position(), Vec2::ZERO);
    }
}
