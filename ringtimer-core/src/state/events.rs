//! Events that trigger application state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppEvent {
    // User events
    /// Encoder turned; selected duration changed by this many steps
    Adjust(i32),
    /// Short button press
    ShortPress,
    /// Long button press
    LongPress,

    // Timer events
    /// Timer accepted the selected duration and is running
    Started,
    /// Timer reached its duration
    TimerFinished,

    // Presentation events
    /// Completion or cancellation flash ran all its cycles
    FlashExpired,
}
