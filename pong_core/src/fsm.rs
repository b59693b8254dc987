//! Match State Machine
//!
//! Tracks whether a match is running, paused, or finished.

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Playing,
    Paused,
    Won,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Pause,
    Resume,
    Win,
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchState::Playing,
        }
    }

    /// Get current state
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                log::debug!("Match state {:?} -> {:?} ({:?})", from_state, next_state, action);
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => {
                log::debug!("Ignored {:?} while {:?}", action, from_state);
                TransitionResult {
                    success: false,
                    from_state,
                    to_state: from_state,
                    action,
                }
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            (MatchState::Playing, MatchAction::Pause) => Some(MatchState::Paused),
            (MatchState::Playing, MatchAction::Win) => Some(MatchState::Won),

            (MatchState::Paused, MatchAction::Resume) => Some(MatchState::Playing),
            (MatchState::Paused, MatchAction::Win) => Some(MatchState::Won),

            (MatchState::Won, MatchAction::Restart) => Some(MatchState::Playing),

            // Invalid transition
            _ => None,
        }
    }

    /// Physics only runs while playing
    pub fn is_playing(&self) -> bool {
        self.state == MatchState::Playing
    }

    pub fn is_won(&self) -> bool {
        self.state == MatchState::Won
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
