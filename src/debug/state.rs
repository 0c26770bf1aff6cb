//! Debug domain: overlay state.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::movement::PlayerState;

/// How many recent state transitions the overlay lists
pub const TRANSITION_HISTORY: usize = 6;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the movement info overlay is shown
    pub show_info: bool,
    /// Most recent transitions, newest last
    pub recent_transitions: VecDeque<(PlayerState, PlayerState)>,
}

impl DebugState {
    pub fn record_transition(&mut self, from: PlayerState, to: PlayerState) {
        if self.recent_transitions.len() == TRANSITION_HISTORY {
            self.recent_transitions.pop_front();
        }
        self.recent_transitions.push_back((from, to));
    }
}
