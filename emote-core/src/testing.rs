//! Test doubles for the collaborator traits

use crate::assets::{asset_name, AssetName};
use crate::traits::{Diagnostic, Diagnostics, DisplaySink, Severity, TimerError, TimerHandle, TimerHost};

/// Build owned asset names for a sequence or demo list
pub fn names(list: &[&str]) -> Vec<AssetName> {
    list.iter()
        .map(|name| asset_name(name).expect("test name fits"))
        .collect()
}

/// Display sink recording every handle it is asked to show
#[derive(Debug, Default)]
pub struct RecordingDisplay<H> {
    pub shown: Vec<H>,
}

impl<H> RecordingDisplay<H> {
    pub fn new() -> Self {
        Self { shown: Vec::new() }
    }
}

impl<H> DisplaySink<H> for RecordingDisplay<H> {
    fn show(&mut self, handle: H) {
        self.shown.push(handle);
    }
}

/// Timer host tracking active timers as (handle, interval) pairs
#[derive(Debug, Default)]
pub struct FakeTimer {
    pub active: Vec<(TimerHandle, u32)>,
    pub created: usize,
    pub fail: bool,
    next_id: u32,
}

impl FakeTimer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimerHost for FakeTimer {
    fn create(&mut self, interval_ms: u32) -> Result<TimerHandle, TimerError> {
        if self.fail {
            return Err(TimerError::Exhausted);
        }
        if interval_ms == 0 {
            return Err(TimerError::InvalidInterval);
        }
        self.next_id += 1;
        self.created += 1;
        let handle = TimerHandle::new(self.next_id);
        self.active.push((handle, interval_ms));
        Ok(handle)
    }

    fn delete(&mut self, handle: TimerHandle) {
        self.active.retain(|(active, _)| *active != handle);
    }
}

/// Diagnostics sink keeping a formatted copy of each event
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    pub entries: Vec<String>,
    pub severities: Vec<Severity>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events reported at `severity`
    pub fn count(&self, severity: Severity) -> usize {
        self.severities.iter().filter(|s| **s == severity).count()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&mut self, diagnostic: &Diagnostic<'_>) {
        self.entries.push(format!("{:?}", diagnostic));
        self.severities.push(diagnostic.severity());
    }
}
