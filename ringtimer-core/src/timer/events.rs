//! Notifications produced by the countdown timer

use heapless::Vec;

/// Events returned from [`CountdownTimer::update`](super::CountdownTimer::update)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerEvent {
    /// The timer advanced while running
    Tick,
    /// The countdown reached its duration
    Completed,
}

/// Events from one update; at most one of each kind
pub type TimerEvents = Vec<TimerEvent, 2>;

/// Check whether a batch of events contains a completion
pub fn has_completed(events: &TimerEvents) -> bool {
    events.contains(&TimerEvent::Completed)
}
