use std::fmt;

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // player one
    Right, // player two
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "player one"),
            Side::Right => write!(f, "player two"),
        }
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    #[default]
    Player,
    Cpu,
}

impl ControlMode {
    pub fn toggled(self) -> Self {
        match self {
            ControlMode::Player => ControlMode::Cpu,
            ControlMode::Cpu => ControlMode::Player,
        }
    }
}
