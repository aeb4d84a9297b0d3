//! Encoder step counter shared with the interrupt context
//!
//! The interrupt side records one step per decoded transition; the poll
//! loop drains the accumulated count once per cycle. Every access runs
//! inside a critical section, so the counter works on cores without
//! atomic read-modify-write instructions.

use core::cell::Cell;

use critical_section::Mutex;

use super::quadrature::Direction;

/// Signed step accumulator with drain-and-reset semantics
///
/// Intended to live in a `static` so both execution contexts can reach it.
pub struct StepCounter {
    steps: Mutex<Cell<i32>>,
}

impl StepCounter {
    /// Create an empty counter
    pub const fn new() -> Self {
        Self {
            steps: Mutex::new(Cell::new(0)),
        }
    }

    /// Record one decoded step
    ///
    /// Called from the interrupt handler; never blocks.
    pub fn record(&self, direction: Direction) {
        self.add(direction.delta());
    }

    /// Add a signed number of steps
    pub fn add(&self, delta: i32) {
        critical_section::with(|cs| {
            let steps = self.steps.borrow(cs);
            steps.set(steps.get().saturating_add(delta));
        });
    }

    /// Take the accumulated steps and reset the counter to zero
    pub fn drain(&self) -> i32 {
        critical_section::with(|cs| self.steps.borrow(cs).replace(0))
    }
}

impl Default for StepCounter {
    fn default() -> Self {
        Self::new()
    }
}
