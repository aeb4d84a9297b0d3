//! Core error type
//!
//! Every failure in the core is local: the operation is rejected and the
//! caller stays in its previous state. Nothing here is fatal and nothing
//! is retried.

use ringtimer_hal::HalError;

use crate::traits::DisplayError;

/// Errors surfaced by the control core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A countdown was requested with a zero duration
    InvalidDuration,
    /// Pause/resume requested from a state that does not allow it
    TimerNotRunning,
    /// Start requested while the timer is not stopped
    TimerAlreadyRunning,
    /// A hardware collaborator (pixels, display) reported a failure
    HardwareError,
    /// A fixed-capacity buffer could not hold the requested size
    MemoryError,
}

impl From<HalError> for Error {
    fn from(_: HalError) -> Self {
        Error::HardwareError
    }
}

impl From<DisplayError> for Error {
    fn from(_: DisplayError) -> Self {
        Error::HardwareError
    }
}
