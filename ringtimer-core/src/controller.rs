//! Application controller
//!
//! The controller is the central brain that:
//! - Turns encoder steps into a selected duration
//! - Starts and cancels the countdown timer on button edges
//! - Advances the state machine on timer completion and flash expiry
//! - Chooses the animation and display view for the current state

use rgb::RGB8;

use crate::animation::{Animation, AnimationParams};
use crate::config::Config;
use crate::error::Error;
use crate::input::ButtonEdge;
use crate::state::{AppEvent, AppState};
use crate::timer::{has_completed, CountdownTimer, TimerEvents};
use crate::traits::View;

/// Color of the selection fill
const SELECTION_COLOR: RGB8 = RGB8::new(255, 255, 255);

/// Whole seconds in `ms`, rounded up so "0" only shows at zero
fn ceil_seconds(ms: u32) -> u32 {
    ms.div_ceil(1000)
}

/// Controller state for coordinating the timer and presentation
pub struct Controller {
    /// Current application state
    state: AppState,
    /// Countdown timer
    timer: CountdownTimer,
    /// Duration dialled in with the encoder (ms)
    selected_ms: u32,
    /// Instant the current state was entered (ms)
    entered_at_ms: u32,
    /// Most recent rejected timer operation
    last_error: Option<Error>,
    /// Upper bound of the selected duration (ms)
    max_duration_ms: u32,
    /// Duration change per encoder step (ms)
    duration_step_ms: u32,
    /// Time spent flashing before returning to selection (ms)
    flash_duration_ms: u32,
    /// Master pixel brightness
    brightness: u8,
    /// Countdown fill color
    countdown_color: RGB8,
}

impl Controller {
    /// Create a controller in time selection with nothing selected
    pub fn new(config: &Config) -> Self {
        Self {
            state: AppState::TimeSelection,
            timer: CountdownTimer::new(),
            selected_ms: 0,
            entered_at_ms: 0,
            last_error: None,
            max_duration_ms: config.max_duration_ms,
            duration_step_ms: config.duration_step_ms,
            flash_duration_ms: config.flash_duration_ms(),
            brightness: config.brightness,
            countdown_color: config.countdown_color,
        }
    }

    /// Get current state
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Get the selected duration (ms)
    pub fn selected_ms(&self) -> u32 {
        self.selected_ms
    }

    /// Get the countdown timer
    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    /// Get the most recent rejected timer operation
    pub fn last_error(&self) -> Option<Error> {
        self.last_error
    }

    /// Apply net encoder steps from one poll
    pub fn handle_steps(&mut self, steps: i32) -> Option<AppEvent> {
        if steps == 0 || self.state != AppState::TimeSelection {
            return None;
        }

        let delta = steps as i64 * self.duration_step_ms as i64;
        let selected = (self.selected_ms as i64 + delta).clamp(0, self.max_duration_ms as i64);
        self.selected_ms = selected as u32;
        debug!("Selected: {}ms", self.selected_ms);

        let event = AppEvent::Adjust(steps);
        self.transition(event, self.entered_at_ms);
        Some(event)
    }

    /// Handle a classified button edge
    pub fn handle_button(&mut self, edge: ButtonEdge, now_ms: u32) -> Option<AppEvent> {
        match (self.state, edge) {
            (AppState::TimeSelection, ButtonEdge::ShortPress) => self.start_countdown(now_ms),
            (AppState::CountdownRunning, ButtonEdge::LongPress) => self.cancel_countdown(now_ms),
            (AppState::TimerComplete | AppState::TimerCancelled, ButtonEdge::ShortPress) => {
                self.return_to_selection(AppEvent::ShortPress, now_ms)
            }
            _ => None,
        }
    }

    /// Handle events from one timer update
    pub fn handle_timer(&mut self, events: &TimerEvents, now_ms: u32) -> Option<AppEvent> {
        if self.state.timer_active() && has_completed(events) {
            info!("Countdown complete");
            self.transition(AppEvent::TimerFinished, now_ms);
            return Some(AppEvent::TimerFinished);
        }
        None
    }

    /// Advance the timer and handle its events
    pub fn update_timer(&mut self, now_ms: u32) -> Option<AppEvent> {
        let events = self.timer.update(now_ms);
        self.handle_timer(&events, now_ms)
    }

    /// Expire completion and cancellation flashes
    pub fn tick(&mut self, now_ms: u32) -> Option<AppEvent> {
        if !self.state.is_flashing() {
            return None;
        }
        if now_ms.wrapping_sub(self.entered_at_ms) >= self.flash_duration_ms {
            return self.return_to_selection(AppEvent::FlashExpired, now_ms);
        }
        None
    }

    /// Animation kind and parameters for the current state
    pub fn animation(&self, now_ms: u32) -> (Animation, AnimationParams) {
        let params = AnimationParams::default().with_brightness(self.brightness);

        let params = match self.state {
            AppState::TimeSelection => {
                let progress = if self.max_duration_ms == 0 {
                    0.0
                } else {
                    self.selected_ms as f32 / self.max_duration_ms as f32
                };
                AnimationParams {
                    progress,
                    primary: SELECTION_COLOR,
                    ..params
                }
                .at(now_ms)
            }
            AppState::CountdownRunning => AnimationParams {
                progress: self.timer.fractional_remaining(now_ms),
                primary: self.countdown_color,
                ..params
            }
            .at(now_ms),
            // Flash time counts from state entry
            AppState::TimerComplete | AppState::TimerCancelled => {
                params.at(now_ms.wrapping_sub(self.entered_at_ms))
            }
        };

        (self.state.animation(), params)
    }

    /// Display view for the current state
    pub fn view(&self, now_ms: u32) -> View {
        match self.state {
            AppState::TimeSelection => View::TimeSelection {
                seconds: ceil_seconds(self.selected_ms),
            },
            AppState::CountdownRunning => View::Countdown {
                remaining_s: ceil_seconds(self.timer.remaining(now_ms)),
                total_s: ceil_seconds(self.timer.duration()),
            },
            AppState::TimerComplete => View::Complete,
            AppState::TimerCancelled => View::Cancelled,
        }
    }

    fn start_countdown(&mut self, now_ms: u32) -> Option<AppEvent> {
        if self.selected_ms == 0 {
            debug!("Start ignored: no duration selected");
            return None;
        }

        match self.timer.start(self.selected_ms, now_ms) {
            Ok(()) => {
                self.last_error = None;
                self.transition(AppEvent::Started, now_ms);
                Some(AppEvent::Started)
            }
            Err(e) => {
                warn!("Timer start rejected: {}", e);
                self.last_error = Some(e);
                None
            }
        }
    }

    fn cancel_countdown(&mut self, now_ms: u32) -> Option<AppEvent> {
        match self.timer.stop() {
            Ok(()) => {
                info!("Countdown cancelled");
                self.transition(AppEvent::LongPress, now_ms);
                Some(AppEvent::LongPress)
            }
            Err(e) => {
                warn!("Timer stop rejected: {}", e);
                self.last_error = Some(e);
                None
            }
        }
    }

    /// Leave a flash state, putting the timer back to `Stopped` first
    fn return_to_selection(&mut self, event: AppEvent, now_ms: u32) -> Option<AppEvent> {
        match self.timer.reset() {
            Ok(()) => {
                self.transition(event, now_ms);
                Some(event)
            }
            Err(e) => {
                warn!("Timer reset rejected: {}", e);
                self.last_error = Some(e);
                None
            }
        }
    }

    fn transition(&mut self, event: AppEvent, now_ms: u32) {
        let next = self.state.transition(event);
        if next != self.state {
            info!("State: {} -> {}", self.state, next);
            self.state = next;
            self.entered_at_ms = now_ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::color::RED;
    use crate::timer::{TimerEvent, TimerState};

    fn controller() -> Controller {
        Controller::new(&Config::default())
    }

    fn running(selected_steps: i32, now_ms: u32) -> Controller {
        let mut c = controller();
        c.handle_steps(selected_steps);
        assert_eq!(
            c.handle_button(ButtonEdge::ShortPress, now_ms),
            Some(AppEvent::Started)
        );
        c
    }

    #[test]
    fn test_steps_adjust_and_clamp() {
        let mut c = controller();
        assert_eq!(c.handle_steps(3), Some(AppEvent::Adjust(3)));
        assert_eq!(c.selected_ms(), 15_000);

        c.handle_steps(-10);
        assert_eq!(c.selected_ms(), 0);

        c.handle_steps(100);
        assert_eq!(c.selected_ms(), 60_000);

        assert_eq!(c.handle_steps(0), None);
        assert_eq!(c.state(), AppState::TimeSelection);
    }

    #[test]
    fn test_short_press_with_nothing_selected() {
        let mut c = controller();
        assert_eq!(c.handle_button(ButtonEdge::ShortPress, 100), None);
        assert_eq!(c.state(), AppState::TimeSelection);
        assert_eq!(c.timer().state(), TimerState::Stopped);
        assert_eq!(c.last_error(), None);
    }

    #[test]
    fn test_start_and_view() {
        let c = running(2, 1000);
        assert_eq!(c.state(), AppState::CountdownRunning);
        assert!(c.timer().is_running());

        assert_eq!(
            c.view(1000),
            View::Countdown {
                remaining_s: 10,
                total_s: 10
            }
        );
        assert_eq!(
            c.view(3001),
            View::Countdown {
                remaining_s: 8,
                total_s: 10
            }
        );
    }

    #[test]
    fn test_steps_ignored_while_running() {
        let mut c = running(2, 0);
        assert_eq!(c.handle_steps(5), None);
        assert_eq!(c.selected_ms(), 10_000);
    }

    #[test]
    fn test_countdown_animation_params() {
        let c = running(2, 1000);
        let (kind, params) = c.animation(6000);
        assert_eq!(kind, Animation::Countdown);
        assert!((params.progress - 0.5).abs() < 1e-6);
        assert_eq!(params.primary, RED);
        assert_eq!(params.brightness, 50);
        assert_eq!(params.timestamp_ms, 6000);
    }

    #[test]
    fn test_selection_animation_params() {
        let mut c = controller();
        c.handle_steps(6);
        let (kind, params) = c.animation(42);
        assert_eq!(kind, Animation::TimeSelection);
        assert!((params.progress - 0.5).abs() < 1e-6);
        assert_eq!(params.primary, SELECTION_COLOR);
        assert_eq!(c.view(42), View::TimeSelection { seconds: 30 });
    }

    #[test]
    fn test_completion_and_flash_expiry() {
        let mut c = running(2, 1000);

        assert_eq!(c.update_timer(10_999), None);
        assert_eq!(c.update_timer(11_000), Some(AppEvent::TimerFinished));
        assert_eq!(c.state(), AppState::TimerComplete);
        assert_eq!(c.view(11_000), View::Complete);

        let (kind, params) = c.animation(11_250);
        assert_eq!(kind, Animation::FlashComplete);
        assert_eq!(params.timestamp_ms, 250);
        assert!(c.timer().is_completed());

        // Three cycles of one second each
        assert_eq!(c.tick(13_999), None);
        assert_eq!(c.tick(14_000), Some(AppEvent::FlashExpired));
        assert_eq!(c.state(), AppState::TimeSelection);
        assert_eq!(c.timer().state(), TimerState::Stopped);
        // Selection survives the round trip
        assert_eq!(c.selected_ms(), 10_000);
    }

    #[test]
    fn test_handle_timer_ignores_ticks() {
        let mut c = running(1, 0);
        let mut events = TimerEvents::new();
        events.push(TimerEvent::Tick).unwrap();
        assert_eq!(c.handle_timer(&events, 10), None);

        events.push(TimerEvent::Completed).unwrap();
        assert_eq!(c.handle_timer(&events, 20), Some(AppEvent::TimerFinished));
    }

    #[test]
    fn test_long_press_cancels() {
        let mut c = running(2, 0);
        assert_eq!(
            c.handle_button(ButtonEdge::LongPress, 4000),
            Some(AppEvent::LongPress)
        );
        assert_eq!(c.state(), AppState::TimerCancelled);
        assert_eq!(c.timer().state(), TimerState::Stopped);
        assert_eq!(c.view(4000), View::Cancelled);
        assert_eq!(c.animation(4000).0, Animation::FlashCancelled);

        // Short press returns early, before the flash expires
        assert_eq!(
            c.handle_button(ButtonEdge::ShortPress, 4500),
            Some(AppEvent::ShortPress)
        );
        assert_eq!(c.state(), AppState::TimeSelection);
    }

    #[test]
    fn test_ignored_buttons() {
        let mut c = controller();
        assert_eq!(c.handle_button(ButtonEdge::LongPress, 0), None);

        let mut c = running(1, 0);
        assert_eq!(c.handle_button(ButtonEdge::ShortPress, 100), None);
        assert_eq!(c.state(), AppState::CountdownRunning);
    }

    #[test]
    fn test_restart_after_completion() {
        let mut c = running(1, 0);
        c.update_timer(5000);
        assert!(c.timer().is_completed());
        c.tick(8000);
        assert_eq!(c.state(), AppState::TimeSelection);
        assert_eq!(c.timer().state(), TimerState::Stopped);

        assert_eq!(
            c.handle_button(ButtonEdge::ShortPress, 9000),
            Some(AppEvent::Started)
        );
        assert_eq!(c.timer().remaining(9000), 5000);
    }

    #[test]
    fn test_early_return_after_completion_restarts() {
        let mut c = running(2, 0);
        c.update_timer(10_000);
        assert_eq!(c.state(), AppState::TimerComplete);

        assert_eq!(
            c.handle_button(ButtonEdge::ShortPress, 10_500),
            Some(AppEvent::ShortPress)
        );
        assert_eq!(c.timer().state(), TimerState::Stopped);

        c.handle_steps(-1);
        assert_eq!(
            c.handle_button(ButtonEdge::ShortPress, 11_000),
            Some(AppEvent::Started)
        );
        assert_eq!(c.timer().duration(), 5000);
        assert_eq!(c.last_error(), None);
    }

    #[test]
    fn test_rejected_start_keeps_state() {
        let mut c = controller();
        c.handle_steps(1);
        // A countdown left running behind the controller's back
        c.timer.start(1000, 0).unwrap();

        assert_eq!(c.handle_button(ButtonEdge::ShortPress, 10), None);
        assert_eq!(c.state(), AppState::TimeSelection);
        assert_eq!(c.last_error(), Some(Error::TimerAlreadyRunning));
    }

    #[test]
    fn test_tick_outside_flash() {
        let mut c = controller();
        assert_eq!(c.tick(1_000_000), None);
        assert_eq!(c.state(), AppState::TimeSelection);
    }
}
