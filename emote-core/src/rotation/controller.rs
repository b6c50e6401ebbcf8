//! Rotation controller
//!
//! Owns the rotation state, the display sink, the timer host and the
//! diagnostics sink. Borrows the registry and the rotation sequence.
//!
//! Error policy: no operation returns a failure. Misses and missing
//! collaborators are reported through [`Diagnostics`] and the operation
//! degrades instead:
//!
//! - `tick` on an unknown name shows the fallback asset and keeps rotating
//! - `set_by_name` on an unknown name leaves the display unchanged
//! - any display operation before `attach_display` is a no-op
//!
//! All methods take `&mut self`. Hosts that can race a manual override
//! against a timer tick must funnel both through one owner (the firmware
//! uses a command channel for this).

use crate::assets::{AssetName, AssetRegistry};
use crate::traits::{Diagnostic, Diagnostics, DisplaySink, Operation, TimerHandle, TimerHost};

use super::demo::{DemoRun, DemoStep};
use super::sequence::{resolve, Resolution, RotationSequence};
use super::state::{ActiveRotation, RotationPhase, RotationState};

/// Recoverable rotation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationError {
    /// Name absent from the registry
    NotFound,
    /// Display not attached yet
    Uninitialized,
    /// Timer host refused to create a timer
    TimerUnavailable,
}

/// What a display operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome<H> {
    /// Requested asset shown
    Shown(H),
    /// Fallback asset shown in place of an unresolved name
    Fallback(H),
    /// Operation skipped; display unchanged
    Ignored(RotationError),
    /// Rotation not running; nothing to do
    Idle,
}

/// Timed rotation over a named-asset registry
pub struct RotationController<'a, H, D, T, L> {
    registry: AssetRegistry<'a, H>,
    fallback: H,
    display: Option<D>,
    displayed: Option<H>,
    state: RotationState<'a>,
    timer: T,
    diagnostics: L,
}

impl<'a, H, D, T, L> RotationController<'a, H, D, T, L>
where
    H: Copy,
    D: DisplaySink<H>,
    T: TimerHost,
    L: Diagnostics,
{
    /// Create a stopped controller with no display attached
    ///
    /// `fallback` is shown as the initial image and whenever timed rotation
    /// reaches a name missing from `registry`.
    pub fn new(registry: AssetRegistry<'a, H>, fallback: H, timer: T, diagnostics: L) -> Self {
        Self {
            registry,
            fallback,
            display: None,
            displayed: None,
            state: RotationState::Stopped,
            timer,
            diagnostics,
        }
    }

    /// Attach the display sink and show the fallback asset
    ///
    /// Replaces any previously attached sink.
    pub fn attach_display(&mut self, display: D) {
        self.display = Some(display);
        self.diagnostics.report(&Diagnostic::DisplayReady {
            version: self.registry.version(),
            count: self.registry.count(),
        });
        self.present(self.fallback);
    }

    /// Detach and return the display sink
    ///
    /// Display operations are no-ops until a sink is attached again.
    pub fn detach_display(&mut self) -> Option<D> {
        self.displayed = None;
        self.display.take()
    }

    /// Start timed rotation over `sequence`
    ///
    /// No-op if already running: exactly one timer exists per rotation.
    /// Returns `true` if rotation was started by this call.
    pub fn start(&mut self, sequence: RotationSequence<'a>, interval_ms: u32) -> bool {
        if self.is_running() {
            return false;
        }

        match self.timer.create(interval_ms) {
            Ok(timer) => {
                self.state = RotationState::Running(ActiveRotation::new(sequence, timer));
                self.diagnostics.report(&Diagnostic::RotationStarted {
                    interval_ms,
                    len: sequence.len(),
                });
                true
            }
            Err(e) => {
                self.diagnostics.report(&Diagnostic::TimerUnavailable(e));
                false
            }
        }
    }

    /// Stop timed rotation and delete its timer
    ///
    /// Idempotent. Returns `true` if rotation was running.
    pub fn stop(&mut self) -> bool {
        match core::mem::take(&mut self.state) {
            RotationState::Running(active) => {
                self.timer.delete(active.timer());
                self.diagnostics.report(&Diagnostic::RotationStopped);
                true
            }
            RotationState::Stopped => false,
        }
    }

    /// Timer callback entry point
    ///
    /// Ticks only if `handle` is the timer of the current rotation, so a
    /// callback from a cancelled timer changes nothing.
    pub fn on_timer(&mut self, handle: TimerHandle) -> Outcome<H> {
        if self.state.owns_timer(handle) {
            self.tick()
        } else {
            Outcome::Idle
        }
    }

    /// Advance the rotation one step and show the new current asset
    pub fn tick(&mut self) -> Outcome<H> {
        if !self.is_running() {
            return Outcome::Idle;
        }
        if self.display.is_none() {
            return self.uninitialized(Operation::Tick);
        }

        let RotationState::Running(active) = &mut self.state else {
            return Outcome::Idle;
        };
        let name = active.advance();

        match resolve(&self.registry, name, self.fallback) {
            Resolution::Resolved(handle) => {
                self.present(handle);
                self.diagnostics.report(&Diagnostic::Switched { name });
                Outcome::Shown(handle)
            }
            Resolution::Fallback(handle) => {
                self.present(handle);
                self.diagnostics.report(&Diagnostic::FallbackShown { name });
                Outcome::Fallback(handle)
            }
        }
    }

    /// Show the asset named `name` immediately
    ///
    /// Does not touch the rotation index. An unknown name is reported and
    /// leaves the display unchanged; unlike `tick`, no fallback is shown.
    pub fn set_by_name(&mut self, name: &str) -> Outcome<H> {
        if self.display.is_none() {
            return self.uninitialized(Operation::SetByName);
        }

        match self.registry.lookup(name) {
            Ok(handle) => {
                self.present(handle);
                self.diagnostics.report(&Diagnostic::ManualSet { name });
                Outcome::Shown(handle)
            }
            Err(_) => {
                self.diagnostics.report(&Diagnostic::NotFound { name });
                Outcome::Ignored(RotationError::NotFound)
            }
        }
    }

    /// Begin a demo run over `names`, `step_ms` apart
    ///
    /// Nothing is shown until the first [`demo_step`](Self::demo_step).
    /// Timed rotation, if running, keeps running.
    pub fn demo_all<'d>(&mut self, names: &'d [AssetName], step_ms: u32) -> DemoRun<'d> {
        self.diagnostics
            .report(&Diagnostic::DemoStarted { count: names.len() });
        DemoRun::new(names, step_ms)
    }

    /// Show the next demo entry
    ///
    /// The host waits `delay_ms` from the returned step before calling
    /// again. After the last entry and its delay this returns `Finished`.
    pub fn demo_step(&mut self, run: &mut DemoRun<'_>) -> DemoStep<H> {
        match run.next_name() {
            Some(name) => DemoStep::Showing {
                outcome: self.set_by_name(name),
                delay_ms: run.step_ms(),
            },
            None => {
                if run.finish() {
                    self.diagnostics.report(&Diagnostic::DemoFinished);
                }
                DemoStep::Finished
            }
        }
    }

    /// Cancel a demo run between steps
    pub fn cancel_demo(&mut self, run: &mut DemoRun<'_>) {
        if run.cancel() {
            self.diagnostics.report(&Diagnostic::DemoCancelled);
        }
    }

    /// Check if timed rotation is running
    pub fn is_running(&self) -> bool {
        self.phase() == RotationPhase::Running
    }

    /// Current rotation phase
    pub fn phase(&self) -> RotationPhase {
        self.state.phase()
    }

    /// Index into the rotation sequence, if running
    pub fn current_index(&self) -> Option<usize> {
        self.state.active().map(|active| active.index())
    }

    /// Current name in the rotation sequence, if running
    pub fn current_name(&self) -> Option<&'a str> {
        self.state.active().map(|active| active.current())
    }

    /// Last handle forwarded to the display
    pub fn displayed(&self) -> Option<H> {
        self.displayed
    }

    /// Fallback handle
    pub fn fallback(&self) -> H {
        self.fallback
    }

    /// Registry used for lookups
    pub fn registry(&self) -> &AssetRegistry<'a, H> {
        &self.registry
    }

    /// Attached display sink
    pub fn display(&self) -> Option<&D> {
        self.display.as_ref()
    }

    /// Attached display sink (mutable)
    pub fn display_mut(&mut self) -> Option<&mut D> {
        self.display.as_mut()
    }

    /// Timer host
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Timer host (mutable), for hosts that await timer expiry
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Diagnostics sink
    pub fn diagnostics(&self) -> &L {
        &self.diagnostics
    }

    /// Diagnostics sink (mutable), for reports from host-side helpers
    pub fn diagnostics_mut(&mut self) -> &mut L {
        &mut self.diagnostics
    }

    fn present(&mut self, handle: H) {
        if let Some(display) = self.display.as_mut() {
            display.show(handle);
            self.displayed = Some(handle);
        }
    }

    fn uninitialized(&mut self, operation: Operation) -> Outcome<H> {
        self.diagnostics
            .report(&Diagnostic::Uninitialized { operation });
        Outcome::Ignored(RotationError::Uninitialized)
    }
}
