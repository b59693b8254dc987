//! Keyboard state and the commands derived from it.
//!
//! Held keys drive the paddles every tick. Just-pressed keys are turned into
//! discrete [`Command`]s once per frame and cleared by `end_frame()`.

use std::collections::HashSet;

use crate::components::Side;
use crate::fsm::MatchState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Space,
    Escape,
    Num1,
    Num2,
    Num3,
    C,
    V,
    F3,
}

/// Discrete actions requested by the players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    TogglePause,
    Restart,
    SetBallCount(usize),
    ToggleCpu(Side),
    DebugDump,
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    just_pressed: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Drop every held key, e.g. when the window loses focus and the
    /// matching key-up events will never arrive
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Vertical intent for a paddle: 1 = up, -1 = down, 0 = none or both
    pub fn paddle_axis(&self, side: Side) -> i8 {
        let (up, down) = match side {
            Side::Left => (Key::W, Key::S),
            Side::Right => (Key::Up, Key::Down),
        };
        match (self.is_held(up), self.is_held(down)) {
            (true, false) => 1,
            (false, true) => -1,
            _ => 0,
        }
    }
}

/// Turn this frame's key presses into commands. Space pauses or resumes a
/// running match and restarts a finished one.
pub fn commands(input: &InputState, state: MatchState) -> Vec<Command> {
    let mut out = Vec::new();

    if input.is_just_pressed(Key::Escape) {
        out.push(Command::Quit);
    }
    if input.is_just_pressed(Key::Space) {
        out.push(match state {
            MatchState::Won => Command::Restart,
            MatchState::Playing | MatchState::Paused => Command::TogglePause,
        });
    }

    let ball_keys = [(Key::Num1, 1), (Key::Num2, 2), (Key::Num3, 3)];
    for (key, count) in ball_keys {
        if input.is_just_pressed(key) {
            out.push(Command::SetBallCount(count));
        }
    }

    if input.is_just_pressed(Key::C) {
        out.push(Command::ToggleCpu(Side::Left));
    }
    if input.is_just_pressed(Key::V) {
        out.push(Command::ToggleCpu(Side::Right));
    }
    if input.is_just_pressed(Key::F3) {
        out.push(Command::DebugDump);
    }

    out
}
