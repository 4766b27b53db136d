//! Stateful add-button: the one piece of the feed with a timeout.
//!
//! Idle -> Added on press, then a fixed 2-second single-shot revert back to
//! Idle. A press while already Added is ignored outright; it neither
//! re-enters the transition nor resets the running delay.

use crate::constants::{ADD_POP_DAMPING_RATIO, ADD_POP_RESPONSE_SECS, ADD_REVERT_SECS};
use crate::spring::{SpringSpec, SpringValue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddState {
    Idle,
    Added,
}

pub struct AddButton {
    state: AddState,
    revert_in: f32,
    pop: SpringValue,
}

impl AddButton {
    pub fn new() -> Self {
        Self {
            state: AddState::Idle,
            revert_in: 0.0,
            pop: SpringValue::new(
                SpringSpec::new(ADD_POP_RESPONSE_SECS, ADD_POP_DAMPING_RATIO),
                1.0,
            ),
        }
    }

    /// Returns whether the press was taken. Guarded against re-entry while
    /// already in the Added state.
    pub fn press(&mut self) -> bool {
        if self.state == AddState::Added {
            return false;
        }
        self.state = AddState::Added;
        self.revert_in = ADD_REVERT_SECS;
        self.pop.snap(0.85);
        self.pop.retarget(1.0);
        true
    }

    pub fn advance(&mut self, dt_secs: f32) {
        self.pop.advance(dt_secs);
        if self.state == AddState::Added {
            self.revert_in -= dt_secs;
            if self.revert_in <= 0.0 {
                self.state = AddState::Idle;
                self.revert_in = 0.0;
            }
        }
    }

    #[inline]
    pub fn state(&self) -> AddState {
        self.state
    }

    #[inline]
    pub fn is_added(&self) -> bool {
        self.state == AddState::Added
    }

    /// Press-feedback scale for rendering.
    #[inline]
    pub fn pop_scale(&self) -> f32 {
        self.pop.value()
    }
}

impl Default for AddButton {
    fn default() -> Self {
        Self::new()
    }
}
