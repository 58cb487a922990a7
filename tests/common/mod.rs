//! Shared test infrastructure for rainbow-rig integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use palette::Srgb;
use rainbow_rig::{DelaySource, FixtureAddress, LightController, FIXTURE_COUNT};
use std::rc::Rc;

// ============================================================================
// Mock Light Controller
// ============================================================================

/// A single dispatch observed by the mock controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    SetRgb { index: u8, color: Srgb<u8> },
    Strobe,
}

/// Transport fault injected by the mock controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockFault;

/// Mock controller that records every dispatch for inspection.
pub struct MockController {
    events: heapless::Vec<ControllerEvent, 1024>,
    staged: [Srgb<u8>; FIXTURE_COUNT],
    fail_on_strobe: bool,
    // Shared flag because close(self) consumes the mock
    closed: Option<Rc<Cell<bool>>>,
}

impl MockController {
    pub fn new() -> Self {
        Self {
            events: heapless::Vec::new(),
            staged: [Srgb::new(0, 0, 0); FIXTURE_COUNT],
            fail_on_strobe: false,
            closed: None,
        }
    }

    /// A controller whose strobe commit always fails.
    pub fn with_failing_strobe() -> Self {
        let mut controller = Self::new();
        controller.fail_on_strobe = true;
        controller
    }

    /// A controller that raises the given flag when its session is closed.
    pub fn with_close_flag(flag: Rc<Cell<bool>>) -> Self {
        let mut controller = Self::new();
        controller.closed = Some(flag);
        controller
    }

    pub fn events(&self) -> &[ControllerEvent] {
        &self.events
    }

    pub fn staged_colors(&self) -> &[Srgb<u8>; FIXTURE_COUNT] {
        &self.staged
    }

    pub fn set_rgb_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ControllerEvent::SetRgb { .. }))
            .count()
    }

    pub fn strobe_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ControllerEvent::Strobe))
            .count()
    }
}

impl LightController for MockController {
    type Error = MockFault;

    fn set_rgb(&mut self, address: FixtureAddress, color: Srgb<u8>) -> Result<(), MockFault> {
        self.staged[usize::from(address)] = color;
        let _ = self.events.push(ControllerEvent::SetRgb {
            index: address.index(),
            color,
        });
        Ok(())
    }

    fn strobe(&mut self) -> Result<(), MockFault> {
        if self.fail_on_strobe {
            return Err(MockFault);
        }
        let _ = self.events.push(ControllerEvent::Strobe);
        Ok(())
    }

    fn close(self) -> Result<(), MockFault> {
        if let Some(flag) = &self.closed {
            flag.set(true);
        }
        Ok(())
    }
}

// ============================================================================
// Mock Delay Source
// ============================================================================

/// Mock delay source that counts calls instead of sleeping.
pub struct RecordingDelay {
    calls: Cell<u64>,
    total_millis: Cell<u64>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self {
            calls: Cell::new(0),
            total_millis: Cell::new(0),
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.get()
    }

    pub fn total_millis(&self) -> u64 {
        self.total_millis.get()
    }
}

impl DelaySource for RecordingDelay {
    fn delay_ms(&self, millis: u64) {
        self.calls.set(self.calls.get() + 1);
        self.total_millis.set(self.total_millis.get() + millis);
    }
}
