//! Shared test infrastructure for buoy-lights integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use buoy_lights::{
    LampView, LightColor, LightDefinition, LightId, LightPanel, OffsetSource, TimeDuration,
    TimeInstant, TimeSource, TraceEvent, TraceSink,
};
use embedded_hal::delay::DelayNs;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self::starting_at(TestInstant(0))
    }

    pub fn starting_at(time: TestInstant) -> Self {
        Self {
            current_time: core::cell::Cell::new(time),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }

    pub fn now_millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that advances the mock clock instead of sleeping
pub struct MockDelay<'a> {
    timer: &'a MockTimeSource,
    pub calls: usize,
}

impl<'a> MockDelay<'a> {
    pub fn new(timer: &'a MockTimeSource) -> Self {
        Self { timer, calls: 0 }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.timer.advance(TestDuration(u64::from(ns) / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.timer.advance(TestDuration(u64::from(ms)));
    }
}

// ============================================================================
// Recording Panel
// ============================================================================

/// Panel that records every change and every redraw
pub struct RecordingPanel {
    pub changes: Vec<(LightId, bool)>,
    pub frames: Vec<Vec<(LightColor, bool)>>,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
            frames: Vec::new(),
        }
    }

    pub fn last_frame(&self) -> &[(LightColor, bool)] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl LightPanel for RecordingPanel {
    fn light_changed(&mut self, light: LightId, lit: bool) {
        self.changes.push((light, lit));
    }

    fn refresh<'a, L>(&mut self, lamps: L)
    where
        L: Iterator<Item = LampView<'a>>,
    {
        self.frames.push(lamps.map(|lamp| (lamp.color, lamp.lit)).collect());
    }
}

// ============================================================================
// Recording Trace
// ============================================================================

/// Owned copy of a trace event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Traced {
    Scheduled(LightId, TestInstant),
    Seeded(TestInstant, Vec<(LightId, TestInstant)>),
    PhaseChanged(LightId, usize),
    LightChanged(LightId, bool),
}

/// Trace sink that keeps every event
pub struct RecordingTrace {
    pub events: Vec<Traced>,
}

impl RecordingTrace {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl TraceSink<TestInstant> for RecordingTrace {
    fn trace(&mut self, event: TraceEvent<'_, TestInstant>) {
        let traced = match event {
            TraceEvent::Scheduled { light, due } => Traced::Scheduled(light, due),
            TraceEvent::Seeded { now, pending } => {
                Traced::Seeded(now, pending.iter().map(|e| (e.light, e.due)).collect())
            }
            TraceEvent::PhaseChanged { light, phase } => Traced::PhaseChanged(light, phase),
            TraceEvent::LightChanged { light, lit } => Traced::LightChanged(light, lit),
        };
        self.events.push(traced);
    }
}

// ============================================================================
// Offsets
// ============================================================================

/// Offset source replaying a fixed list of fractions
pub struct ScriptedOffsets {
    fractions: Vec<f32>,
    next: usize,
}

impl ScriptedOffsets {
    pub fn new(fractions: &[f32]) -> Self {
        Self {
            fractions: fractions.to_vec(),
            next: 0,
        }
    }
}

impl OffsetSource for ScriptedOffsets {
    fn next_fraction(&mut self) -> f32 {
        let fraction = self.fractions[self.next % self.fractions.len()];
        self.next += 1;
        fraction
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn light(secs: &[f32]) -> LightDefinition<TestDuration, 16> {
    LightDefinition::from_secs("Test Light", LightColor::White, secs).unwrap()
}

pub fn colored_light(color: LightColor, secs: &[f32]) -> LightDefinition<TestDuration, 16> {
    LightDefinition::from_secs("Test Light", color, secs).unwrap()
}
