//! Push-button classification
//!
//! Turns a sampled button line into short/long press events using
//! wall-clock timestamps rather than sample counting, so the result does
//! not depend on the poll rate.

use crate::config::Config;

/// Classified button event, emitted once per press/release cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEdge {
    /// Released after more than the debounce window but before the long-press threshold
    ShortPress,
    /// Released after at least the long-press threshold
    LongPress,
}

/// Press tracking state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressState {
    /// Button released
    Idle,
    /// Button held since the given instant (ms)
    Pressed { since_ms: u32 },
}

/// Debouncing short/long press classifier
#[derive(Debug, Clone)]
pub struct ButtonClassifier {
    debounce_ms: u32,
    long_press_ms: u32,
    active_low: bool,
    /// Last accepted level (true = pressed)
    stable_pressed: bool,
    /// Instant of the last accepted level change
    last_change_ms: Option<u32>,
    /// First instant a not-yet-accepted level change was seen
    pending_since_ms: Option<u32>,
    press: PressState,
}

impl ButtonClassifier {
    /// Create a classifier
    ///
    /// - `debounce_ms`: window after an accepted change in which further
    ///   changes are not accepted
    /// - `long_press_ms`: hold time at which a press is a long press
    /// - `active_low`: the line reads low while the button is held
    pub const fn new(debounce_ms: u32, long_press_ms: u32, active_low: bool) -> Self {
        Self {
            debounce_ms,
            long_press_ms,
            active_low,
            stable_pressed: false,
            last_change_ms: None,
            pending_since_ms: None,
            press: PressState::Idle,
        }
    }

    /// Create a classifier from the appliance configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.debounce_ms,
            config.long_press_ms,
            config.button_active_low,
        )
    }

    /// Sample the raw line level
    pub fn poll(&mut self, raw_level: bool, now_ms: u32) -> Option<ButtonEdge> {
        self.update(raw_level != self.active_low, now_ms)
    }

    /// Feed the logical pressed state
    ///
    /// A change seen inside the debounce window is held back; if the level
    /// is still changed once the window has passed, it is accepted with the
    /// instant it was first seen. A bounce back before then discards it.
    pub fn update(&mut self, pressed: bool, now_ms: u32) -> Option<ButtonEdge> {
        if pressed == self.stable_pressed {
            self.pending_since_ms = None;
            return None;
        }

        let observed_ms = *self.pending_since_ms.get_or_insert(now_ms);

        if let Some(last) = self.last_change_ms {
            if now_ms.wrapping_sub(last) < self.debounce_ms {
                return None;
            }
        }

        self.pending_since_ms = None;
        self.last_change_ms = Some(observed_ms);
        self.stable_pressed = pressed;

        if pressed {
            debug!("Button press started at {}ms", observed_ms);
            self.press = PressState::Pressed {
                since_ms: observed_ms,
            };
            return None;
        }

        match core::mem::replace(&mut self.press, PressState::Idle) {
            PressState::Pressed { since_ms } => self.classify(observed_ms.wrapping_sub(since_ms)),
            PressState::Idle => None,
        }
    }

    /// Whether the button is currently (debounced) held down
    pub fn is_pressed(&self) -> bool {
        self.stable_pressed
    }

    /// Classify a completed press by its hold time
    fn classify(&self, held_ms: u32) -> Option<ButtonEdge> {
        if held_ms >= self.long_press_ms {
            debug!("Button long press ({}ms)", held_ms);
            Some(ButtonEdge::LongPress)
        } else if held_ms > self.debounce_ms {
            debug!("Button short press ({}ms)", held_ms);
            Some(ButtonEdge::ShortPress)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ButtonClassifier {
        ButtonClassifier::new(50, 3000, false)
    }

    /// Press at `start`, release after `held` ms, then keep sampling released
    fn press_for(button: &mut ButtonClassifier, start: u32, held: u32) -> Option<ButtonEdge> {
        let mut edges = [
            button.update(true, start),
            button.update(false, start + held),
            button.update(false, start + held + 100),
            button.update(false, start + held + 5000),
        ]
        .into_iter()
        .flatten();
        let first = edges.next();
        assert_eq!(edges.next(), None, "more than one edge per cycle");
        first
    }

    #[test]
    fn test_short_hold_is_noise() {
        let mut button = classifier();
        assert_eq!(press_for(&mut button, 0, 40), None);
    }

    #[test]
    fn test_short_press() {
        let mut button = classifier();
        assert_eq!(press_for(&mut button, 0, 80), Some(ButtonEdge::ShortPress));
    }

    #[test]
    fn test_long_press() {
        let mut button = classifier();
        assert_eq!(press_for(&mut button, 0, 3200), Some(ButtonEdge::LongPress));
    }

    #[test]
    fn test_threshold_boundaries() {
        let mut button = classifier();
        // Exactly the debounce window is still noise
        assert_eq!(press_for(&mut button, 0, 50), None);
        // Exactly the long-press threshold is a long press
        assert_eq!(
            press_for(&mut button, 10_000, 3000),
            Some(ButtonEdge::LongPress)
        );
        assert_eq!(
            press_for(&mut button, 20_000, 2999),
            Some(ButtonEdge::ShortPress)
        );
    }

    #[test]
    fn test_bounce_inside_window_is_ignored() {
        let mut button = classifier();
        assert_eq!(button.update(true, 1000), None);
        // Contact bounce: released then pressed again within the window
        assert_eq!(button.update(false, 1010), None);
        assert_eq!(button.update(true, 1020), None);
        assert!(button.is_pressed());

        // Real release later
        assert_eq!(button.update(false, 1200), Some(ButtonEdge::ShortPress));
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_active_low_line() {
        let mut button = ButtonClassifier::new(50, 3000, true);
        // Idle line is high
        assert_eq!(button.poll(true, 0), None);
        assert_eq!(button.poll(false, 100), None);
        assert!(button.is_pressed());
        assert_eq!(button.poll(true, 300), Some(ButtonEdge::ShortPress));
    }

    #[test]
    fn test_from_config() {
        let config = Config::default();
        let mut button = ButtonClassifier::from_config(&config);
        // Default wiring is active-low
        assert_eq!(button.poll(false, 0), None);
        assert_eq!(button.poll(true, 4000), Some(ButtonEdge::LongPress));
    }

    #[test]
    fn test_timestamp_wraparound() {
        let mut button = classifier();
        let start = u32::MAX - 40;
        assert_eq!(button.update(true, start), None);
        assert_eq!(
            button.update(false, start.wrapping_add(100)),
            Some(ButtonEdge::ShortPress)
        );
    }
}
