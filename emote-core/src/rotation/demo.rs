//! Demo runs
//!
//! A demo walks a fixed list of names, showing each one and then waiting a
//! fixed delay. It is a plain step sequence: the host schedules each step
//! after the returned delay, so nothing ever blocks the event loop, and the
//! run can be cancelled between steps.

use crate::assets::AssetName;

use super::controller::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoState {
    Pending,
    Finished,
    Cancelled,
}

/// A cancellable walk over a demonstration list
#[derive(Debug, Clone)]
pub struct DemoRun<'d> {
    names: &'d [AssetName],
    step_ms: u32,
    position: usize,
    state: DemoState,
}

impl<'d> DemoRun<'d> {
    /// Create a run over `names` with `step_ms` between entries
    pub fn new(names: &'d [AssetName], step_ms: u32) -> Self {
        Self {
            names,
            step_ms,
            position: 0,
            state: DemoState::Pending,
        }
    }

    /// Take the next name to show, or `None` when the list is exhausted
    /// or the run was cancelled
    pub fn next_name(&mut self) -> Option<&'d str> {
        if self.state != DemoState::Pending {
            return None;
        }
        let name = self.names.get(self.position)?;
        self.position += 1;
        Some(name.as_str())
    }

    /// Mark the run finished
    ///
    /// Returns `true` the first time a pending run finishes.
    pub fn finish(&mut self) -> bool {
        if self.state == DemoState::Pending {
            self.state = DemoState::Finished;
            true
        } else {
            false
        }
    }

    /// Cancel the run
    ///
    /// Returns `true` if the run was still pending.
    pub fn cancel(&mut self) -> bool {
        if self.state == DemoState::Pending {
            self.state = DemoState::Cancelled;
            true
        } else {
            false
        }
    }

    /// Delay between entries in milliseconds
    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    /// Number of entries already shown
    pub fn shown(&self) -> usize {
        self.position
    }

    /// Entries in the demonstration list
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the demonstration list is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check if the run is still pending
    pub fn is_pending(&self) -> bool {
        self.state == DemoState::Pending
    }

    /// Check if the run was cancelled
    pub fn is_cancelled(&self) -> bool {
        self.state == DemoState::Cancelled
    }
}

/// Result of one demo step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DemoStep<H> {
    /// An entry was shown; schedule the next step after `delay_ms`
    Showing { outcome: Outcome<H>, delay_ms: u32 },
    /// Nothing left to show
    Finished,
}
