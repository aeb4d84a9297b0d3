//! Display driver trait for the status screen
//!
//! The screen is a dumb view: the core hands it numbers and state, the
//! implementation owns fonts, layout and formatting.

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication timeout
    Timeout,
    /// Bus error while sending the frame
    BusError,
}

/// What the screen should currently show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// Duration being dialled in
    TimeSelection {
        /// Selected duration in whole seconds
        seconds: u32,
    },
    /// Countdown in progress
    Countdown {
        /// Remaining time in whole seconds (rounded up)
        remaining_s: u32,
        /// Total countdown duration in whole seconds
        total_s: u32,
    },
    /// Countdown ran to completion
    Complete,
    /// Countdown was cancelled with a long press
    Cancelled,
}

/// Trait for the status display
///
/// One call per view; each call redraws the whole screen.
pub trait DisplayDriver {
    /// Show the time selection screen
    fn show_time_selection(&mut self, seconds: u32) -> Result<(), DisplayError>;

    /// Show the countdown screen with its progress
    fn show_countdown(&mut self, remaining_s: u32, total_s: u32) -> Result<(), DisplayError>;

    /// Show the completion screen
    fn show_complete(&mut self) -> Result<(), DisplayError>;

    /// Show the cancellation screen
    fn show_cancelled(&mut self) -> Result<(), DisplayError>;
}

/// Helper trait for dispatching a [`View`] to the matching screen
pub trait DisplayExt: DisplayDriver {
    /// Draw `view` using the matching driver call
    fn show(&mut self, view: View) -> Result<(), DisplayError> {
        match view {
            View::TimeSelection { seconds } => self.show_time_selection(seconds),
            View::Countdown {
                remaining_s,
                total_s,
            } => self.show_countdown(remaining_s, total_s),
            View::Complete => self.show_complete(),
            View::Cancelled => self.show_cancelled(),
        }
    }
}

// Blanket implementation for all DisplayDriver types
impl<T: DisplayDriver> DisplayExt for T {}
