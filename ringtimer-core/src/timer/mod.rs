//! Countdown timer
//!
//! Monotonic countdown with pause/resume and explicit completion events.

pub mod countdown;
pub mod events;

pub use countdown::{CountdownTimer, TimerState};
pub use events::{has_completed, TimerEvent, TimerEvents};
