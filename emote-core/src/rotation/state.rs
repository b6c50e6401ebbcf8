//! Rotation state
//!
//! `Stopped --start--> Running --stop--> Stopped`, with `tick` looping on
//! `Running`. The running state carries the sequence, the current index
//! and the timer driving it; all three are discarded on stop.

use super::sequence::RotationSequence;
use crate::traits::TimerHandle;

/// Rotation phase, without the running details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationPhase {
    /// No timer; ticks have no effect
    Stopped,
    /// Timer active; ticks advance the index
    Running,
}

/// State of an active rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRotation<'a> {
    sequence: RotationSequence<'a>,
    index: usize,
    timer: TimerHandle,
}

impl<'a> ActiveRotation<'a> {
    /// Begin a rotation at index 0
    pub fn new(sequence: RotationSequence<'a>, timer: TimerHandle) -> Self {
        Self {
            sequence,
            index: 0,
            timer,
        }
    }

    /// Advance one step (modulo sequence length) and return the new name
    pub fn advance(&mut self) -> &'a str {
        self.index = (self.index + 1) % self.sequence.len();
        self.current()
    }

    /// Current name
    pub fn current(&self) -> &'a str {
        // index < len is kept by new() and advance()
        self.sequence.get(self.index).unwrap_or_default()
    }

    /// Current index into the sequence
    pub fn index(&self) -> usize {
        self.index
    }

    /// Sequence being rotated
    pub fn sequence(&self) -> RotationSequence<'a> {
        self.sequence
    }

    /// Timer driving this rotation
    pub fn timer(&self) -> TimerHandle {
        self.timer
    }
}

/// Rotation state owned by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationState<'a> {
    #[default]
    Stopped,
    Running(ActiveRotation<'a>),
}

impl<'a> RotationState<'a> {
    /// Phase of this state
    pub fn phase(&self) -> RotationPhase {
        match self {
            RotationState::Stopped => RotationPhase::Stopped,
            RotationState::Running(_) => RotationPhase::Running,
        }
    }

    /// Active rotation, if running
    pub fn active(&self) -> Option<&ActiveRotation<'a>> {
        match self {
            RotationState::Running(active) => Some(active),
            RotationState::Stopped => None,
        }
    }

    /// Check if a timer firing with `handle` belongs to this rotation
    pub fn owns_timer(&self, handle: TimerHandle) -> bool {
        matches!(self, RotationState::Running(active) if active.timer == handle)
    }
}
