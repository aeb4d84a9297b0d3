//! Countdown timer state machine
//!
//! Time is a wrapping millisecond counter supplied by the caller; every
//! query is a pure function of that instant and the timer state. Pausing
//! never keeps a separate elapsed counter: resuming shifts the recorded
//! start instant forward by the time spent paused.

use super::events::{TimerEvent, TimerEvents};
use crate::error::Error;

/// Timer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// No countdown configured
    Stopped,
    /// Counting down
    Running,
    /// Counting suspended, elapsed time frozen
    Paused,
    /// Elapsed reached the duration
    Completed,
}

/// Monotonic countdown timer
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    state: TimerState,
    /// Instant the countdown (effectively) started
    start_ms: u32,
    /// Instant the countdown was paused
    paused_at_ms: u32,
    /// Configured duration
    duration_ms: u32,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownTimer {
    /// Create a stopped timer
    pub const fn new() -> Self {
        Self {
            state: TimerState::Stopped,
            start_ms: 0,
            paused_at_ms: 0,
            duration_ms: 0,
        }
    }

    /// Start counting down `duration_ms` from `now_ms`
    ///
    /// Only a stopped timer can start. Fails with [`Error::InvalidDuration`]
    /// for a zero duration and with [`Error::TimerAlreadyRunning`] while
    /// running, paused or completed; the duration stays fixed until
    /// `stop`/`reset`. The state is unchanged on failure.
    pub fn start(&mut self, duration_ms: u32, now_ms: u32) -> Result<(), Error> {
        if duration_ms == 0 {
            return Err(Error::InvalidDuration);
        }
        if self.state != TimerState::Stopped {
            return Err(Error::TimerAlreadyRunning);
        }

        self.duration_ms = duration_ms;
        self.start_ms = now_ms;
        self.paused_at_ms = 0;
        self.state = TimerState::Running;
        info!("Timer started: {}ms", duration_ms);
        Ok(())
    }

    /// Stop the timer from any state
    pub fn stop(&mut self) -> Result<(), Error> {
        self.clear();
        info!("Timer stopped");
        Ok(())
    }

    /// Reset the timer from any state
    ///
    /// Same outcome as [`CountdownTimer::stop`].
    pub fn reset(&mut self) -> Result<(), Error> {
        self.clear();
        Ok(())
    }

    /// Suspend a running countdown
    pub fn pause(&mut self, now_ms: u32) -> Result<(), Error> {
        if self.state != TimerState::Running {
            return Err(Error::TimerNotRunning);
        }

        self.paused_at_ms = now_ms;
        self.state = TimerState::Paused;
        Ok(())
    }

    /// Continue a paused countdown
    ///
    /// The start instant moves forward by the paused span, so elapsed time
    /// reads exactly what it read when paused.
    pub fn resume(&mut self, now_ms: u32) -> Result<(), Error> {
        if self.state != TimerState::Paused {
            return Err(Error::TimerNotRunning);
        }

        let paused_for = now_ms.wrapping_sub(self.paused_at_ms);
        self.start_ms = self.start_ms.wrapping_add(paused_for);
        self.state = TimerState::Running;
        Ok(())
    }

    /// Advance the timer
    ///
    /// Call once per poll cycle. This is the only place a running timer
    /// completes. Returns a `Tick` for every update while running, plus
    /// `Completed` on the update that reaches the duration.
    pub fn update(&mut self, now_ms: u32) -> TimerEvents {
        let mut events = TimerEvents::new();
        if self.state != TimerState::Running {
            return events;
        }

        // Capacity is 2 and at most two events are pushed
        let _ = events.push(TimerEvent::Tick);

        if self.running_elapsed(now_ms) >= self.duration_ms {
            self.state = TimerState::Completed;
            info!("Timer completed");
            let _ = events.push(TimerEvent::Completed);
        }

        events
    }

    /// Get current state
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Check if counting down
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Check if paused
    pub fn is_paused(&self) -> bool {
        self.state == TimerState::Paused
    }

    /// Check if completed
    pub fn is_completed(&self) -> bool {
        self.state == TimerState::Completed
    }

    /// Configured duration (0 when stopped)
    pub fn duration(&self) -> u32 {
        self.duration_ms
    }

    /// Elapsed time at `now_ms`
    pub fn elapsed(&self, now_ms: u32) -> u32 {
        match self.state {
            TimerState::Stopped => 0,
            TimerState::Running => self.running_elapsed(now_ms),
            TimerState::Paused => self.paused_at_ms.wrapping_sub(self.start_ms),
            TimerState::Completed => self.duration_ms,
        }
    }

    /// Remaining time at `now_ms`, never negative
    pub fn remaining(&self, now_ms: u32) -> u32 {
        self.duration_ms.saturating_sub(self.elapsed(now_ms))
    }

    /// Remaining time as a fraction of the duration (0.0 to 1.0)
    pub fn fractional_remaining(&self, now_ms: u32) -> f32 {
        self.fraction_of_duration(self.remaining(now_ms))
    }

    /// Elapsed time as a fraction of the duration (0.0 to 1.0)
    pub fn fractional_elapsed(&self, now_ms: u32) -> f32 {
        self.fraction_of_duration(self.elapsed(now_ms))
    }

    fn running_elapsed(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.start_ms)
    }

    fn fraction_of_duration(&self, value_ms: u32) -> f32 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        (value_ms as f32 / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    fn clear(&mut self) {
        self.state = TimerState::Stopped;
        self.start_ms = 0;
        self.paused_at_ms = 0;
        self.duration_ms = 0;
    }
}
