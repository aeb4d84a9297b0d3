//! State machine definition
//!
//! Animation selection and display views are a function of the current
//! state.

use super::events::AppEvent;
use crate::animation::Animation;

/// Application states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppState {
    /// Choosing a duration with the encoder
    #[default]
    TimeSelection,
    /// Timer counting down
    CountdownRunning,
    /// Countdown reached zero; completion flash
    TimerComplete,
    /// Countdown cancelled by long press; cancellation flash
    TimerCancelled,
}

impl AppState {
    /// Animation kind shown in this state
    pub fn animation(&self) -> Animation {
        match self {
            AppState::TimeSelection => Animation::TimeSelection,
            AppState::CountdownRunning => Animation::Countdown,
            AppState::TimerComplete => Animation::FlashComplete,
            AppState::TimerCancelled => Animation::FlashCancelled,
        }
    }

    /// Check if this state plays a flash that expires on its own
    pub fn is_flashing(&self) -> bool {
        matches!(self, AppState::TimerComplete | AppState::TimerCancelled)
    }

    /// Check if the countdown timer is live in this state
    pub fn timer_active(&self) -> bool {
        matches!(self, AppState::CountdownRunning)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: AppEvent) -> Self {
        use AppEvent::*;
        use AppState::*;

        match (self, event) {
            // Duration adjustments never leave selection
            (TimeSelection, Adjust(_)) => TimeSelection,
            (TimeSelection, Started) => CountdownRunning,

            (CountdownRunning, LongPress) => TimerCancelled,
            (CountdownRunning, TimerFinished) => TimerComplete,

            (TimerComplete, ShortPress | FlashExpired) => TimeSelection,
            (TimerCancelled, ShortPress | FlashExpired) => TimeSelection,

            // Default: stay in current state
            _ => self,
        }
    }
}
