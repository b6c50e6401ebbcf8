//! Commands for a task that owns a rotation controller
//!
//! Hosts that drive the controller from several places (button, timer,
//! remote requests) send these to the single owning task instead of
//! sharing the controller. [`RotationController::apply`] carries them out.

use crate::assets::{asset_name, AssetName};
use crate::config::EmoteConfig;
use crate::traits::{Diagnostic, Diagnostics, DisplaySink, TimerHost};

use super::controller::RotationController;
use super::demo::{DemoRun, DemoStep};
use super::sequence::RotationSequence;

/// Request to the task owning the rotation controller
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationCommand {
    /// Start timed rotation with the configured sequence
    Start,
    /// Stop timed rotation and cancel any demo run
    Stop,
    /// Start if stopped, otherwise the same as `Stop`
    Toggle,
    /// Show a named asset immediately
    Show(AssetName),
    /// Run the configured demo list, replacing a running demo
    DemoAll,
    /// Cancel the running demo
    CancelDemo,
}

impl RotationCommand {
    /// Build a [`RotationCommand::Show`] request
    ///
    /// Returns `None` if the name does not fit in an [`AssetName`].
    pub fn show(name: &str) -> Option<Self> {
        asset_name(name).map(RotationCommand::Show)
    }
}

/// Rotation and demo settings commands are carried out with
#[derive(Debug, Clone, Copy)]
pub struct CommandSettings<'a> {
    /// Sequence for `Start`; `None` if the configured one is unusable
    pub sequence: Option<RotationSequence<'a>>,
    pub interval_ms: u32,
    /// List walked by `DemoAll`
    pub demo: &'a [AssetName],
    pub demo_step_ms: u32,
}

impl<'a> CommandSettings<'a> {
    pub fn from_config(config: &'a EmoteConfig) -> Self {
        Self {
            sequence: config.rotation.rotation_sequence().ok(),
            interval_ms: config.rotation.interval_ms,
            demo: &config.demo.emotions,
            demo_step_ms: config.demo.step_ms,
        }
    }
}

impl<'a, H, D, T, L> RotationController<'a, H, D, T, L>
where
    H: Copy,
    D: DisplaySink<H>,
    T: TimerHost,
    L: Diagnostics,
{
    /// Carry out `command`
    ///
    /// `demo` holds the pending demo run, if any. Returns the first step
    /// when `DemoAll` starts a run; the host schedules the next
    /// [`advance_demo`](Self::advance_demo) after its delay.
    pub fn apply(
        &mut self,
        command: RotationCommand,
        settings: &CommandSettings<'a>,
        demo: &mut Option<DemoRun<'a>>,
    ) -> Option<DemoStep<H>> {
        match command {
            RotationCommand::Start => {
                self.start_configured(settings);
            }
            RotationCommand::Stop => self.halt(demo),
            RotationCommand::Toggle => {
                if self.is_running() {
                    self.halt(demo);
                } else {
                    self.start_configured(settings);
                }
            }
            RotationCommand::Show(name) => {
                self.set_by_name(&name);
            }
            RotationCommand::DemoAll => {
                self.end_demo(demo);
                let mut run = self.demo_all(settings.demo, settings.demo_step_ms);
                let step = self.demo_step(&mut run);
                if run.is_pending() {
                    *demo = Some(run);
                }
                return Some(step);
            }
            RotationCommand::CancelDemo => self.end_demo(demo),
        }
        None
    }

    /// Show the next entry of the pending demo run
    ///
    /// Clears `demo` once the run finishes. Returns `None` if no run is
    /// pending.
    pub fn advance_demo(&mut self, demo: &mut Option<DemoRun<'a>>) -> Option<DemoStep<H>> {
        let run = demo.as_mut()?;
        let step = self.demo_step(run);
        if matches!(step, DemoStep::Finished) {
            *demo = None;
        }
        Some(step)
    }

    fn start_configured(&mut self, settings: &CommandSettings<'a>) -> bool {
        match settings.sequence {
            Some(sequence) => self.start(sequence, settings.interval_ms),
            None => {
                self.diagnostics_mut().report(&Diagnostic::NoSequence);
                false
            }
        }
    }

    /// Stop rotation and cancel any demo run
    fn halt(&mut self, demo: &mut Option<DemoRun<'a>>) {
        self.stop();
        self.end_demo(demo);
    }

    fn end_demo(&mut self, demo: &mut Option<DemoRun<'a>>) {
        if let Some(mut run) = demo.take() {
            self.cancel_demo(&mut run);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetRegistry, NamedAsset};
    use crate::testing::{names, FakeTimer, RecordingDiagnostics, RecordingDisplay};
    use crate::rotation::Outcome;
    use crate::traits::Severity;

    static TABLE: [NamedAsset<u8>; 2] = [NamedAsset::new("a", 1), NamedAsset::new("b", 2)];

    type TestController<'a> =
        RotationController<'a, u8, RecordingDisplay<u8>, FakeTimer, RecordingDiagnostics>;

    fn controller<'a>() -> TestController<'a> {
        let registry = AssetRegistry::new(&TABLE, "1.0").unwrap();
        let mut controller =
            RotationController::new(registry, 0, FakeTimer::new(), RecordingDiagnostics::new());
        controller.attach_display(RecordingDisplay::new());
        controller
    }

    fn settings<'a>(sequence: &'a [AssetName], demo: &'a [AssetName]) -> CommandSettings<'a> {
        CommandSettings {
            sequence: RotationSequence::new(sequence).ok(),
            interval_ms: 3000,
            demo,
            demo_step_ms: 2000,
        }
    }

    fn count(c: &TestController<'_>, event: &str) -> usize {
        c.diagnostics()
            .entries
            .iter()
            .filter(|e| e.contains(event))
            .count()
    }

    #[test]
    fn test_show_command() {
        match RotationCommand::show("happy") {
            Some(RotationCommand::Show(name)) => assert_eq!(name.as_str(), "happy"),
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(RotationCommand::show("much-too-long-emotion-name").is_none());
    }

    #[test]
    fn test_toggle_starts_then_stops() {
        let list = names(&["a", "b"]);
        let settings = settings(&list, &[]);
        let mut c = controller();
        let mut demo = None;

        assert_eq!(c.apply(RotationCommand::Toggle, &settings, &mut demo), None);
        assert!(c.is_running());
        assert_eq!(c.timer().active.len(), 1);

        c.apply(RotationCommand::Toggle, &settings, &mut demo);
        assert!(!c.is_running());
        assert!(c.timer().active.is_empty());
    }

    #[test]
    fn test_toggle_off_cancels_demo_like_stop() {
        let list = names(&["a", "b"]);
        let settings = settings(&list, &list);

        for command in [RotationCommand::Toggle, RotationCommand::Stop] {
            let mut c = controller();
            let mut demo = None;
            c.apply(RotationCommand::Start, &settings, &mut demo);
            c.apply(RotationCommand::DemoAll, &settings, &mut demo);
            assert!(demo.is_some());

            c.apply(command, &settings, &mut demo);
            assert!(!c.is_running());
            assert!(demo.is_none());
            assert_eq!(count(&c, "DemoCancelled"), 1);
        }
    }

    #[test]
    fn test_demo_all_shows_first_and_advances() {
        let list = names(&["b", "a"]);
        let settings = settings(&list, &list);
        let mut c = controller();
        let mut demo = None;

        assert_eq!(
            c.apply(RotationCommand::DemoAll, &settings, &mut demo),
            Some(DemoStep::Showing {
                outcome: Outcome::Shown(2),
                delay_ms: 2000
            })
        );
        assert_eq!(
            c.advance_demo(&mut demo),
            Some(DemoStep::Showing {
                outcome: Outcome::Shown(1),
                delay_ms: 2000
            })
        );
        assert_eq!(c.advance_demo(&mut demo), Some(DemoStep::Finished));
        assert!(demo.is_none());
        assert_eq!(c.advance_demo(&mut demo), None);
        assert_eq!(c.display().unwrap().shown, [0, 2, 1]);
        assert_eq!(count(&c, "DemoFinished"), 1);
    }

    #[test]
    fn test_demo_all_replaces_running_demo() {
        let list = names(&["a", "b"]);
        let settings = settings(&list, &list);
        let mut c = controller();
        let mut demo = None;

        c.apply(RotationCommand::DemoAll, &settings, &mut demo);
        c.apply(RotationCommand::DemoAll, &settings, &mut demo);
        assert_eq!(count(&c, "DemoCancelled"), 1);
        assert_eq!(count(&c, "DemoStarted"), 2);
        assert_eq!(demo.as_ref().map(|run| run.shown()), Some(1));
    }

    #[test]
    fn test_empty_demo_finishes_immediately() {
        let list = names(&["a"]);
        let settings = settings(&list, &[]);
        let mut c = controller();
        let mut demo = None;

        assert_eq!(
            c.apply(RotationCommand::DemoAll, &settings, &mut demo),
            Some(DemoStep::Finished)
        );
        assert!(demo.is_none());
    }

    #[test]
    fn test_cancel_demo_keeps_rotation() {
        let list = names(&["a", "b"]);
        let settings = settings(&list, &list);
        let mut c = controller();
        let mut demo = None;

        c.apply(RotationCommand::Start, &settings, &mut demo);
        c.apply(RotationCommand::DemoAll, &settings, &mut demo);
        c.apply(RotationCommand::CancelDemo, &settings, &mut demo);
        assert!(demo.is_none());
        assert!(c.is_running());
    }

    #[test]
    fn test_show_command_sets_display() {
        let settings = settings(&[], &[]);
        let mut c = controller();
        let mut demo = None;

        let show = RotationCommand::show("b").unwrap();
        c.apply(show, &settings, &mut demo);
        assert_eq!(c.displayed(), Some(2));

        let missing = RotationCommand::show("zzz").unwrap();
        c.apply(missing, &settings, &mut demo);
        assert_eq!(c.displayed(), Some(2));
    }

    #[test]
    fn test_start_without_sequence_reports() {
        let settings = settings(&[], &[]);
        let mut c = controller();
        let mut demo = None;

        c.apply(RotationCommand::Start, &settings, &mut demo);
        assert!(!c.is_running());
        assert_eq!(c.timer().created, 0);
        assert_eq!(count(&c, "NoSequence"), 1);
        assert_eq!(c.diagnostics().count(Severity::Warn), 1);
    }

    #[test]
    fn test_settings_from_config() {
        let config = EmoteConfig::default();
        let settings = CommandSettings::from_config(&config);
        assert_eq!(settings.sequence.map(|s| s.len()), Some(6));
        assert_eq!(settings.interval_ms, 3000);
        assert_eq!(settings.demo.len(), 6);
        assert_eq!(settings.demo_step_ms, 2000);
    }
}
