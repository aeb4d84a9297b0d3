//! Animation parameter bundle

use rgb::RGB8;

use super::color::{BLACK, RED};

/// Inputs to a single render call
///
/// Pure input: the engine never mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    /// Fill or sweep progress (0.0 to 1.0)
    pub progress: f32,
    /// Main color
    pub primary: RGB8,
    /// Accent color (gauge sweep)
    pub secondary: RGB8,
    /// Master brightness applied to the whole frame (255 = unchanged)
    pub brightness: u8,
    /// Monotonic time driving timestamp-keyed animations (ms)
    pub timestamp_ms: u32,
    /// Pixels already lit solidly before a gauge sweep
    pub gauge_prefix: u8,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            progress: 0.0,
            primary: RED,
            secondary: BLACK,
            brightness: 255,
            timestamp_ms: 0,
            gauge_prefix: 0,
        }
    }
}

impl AnimationParams {
    /// Create parameters for a given progress, defaults elsewhere
    pub fn new(progress: f32) -> Self {
        Self {
            progress,
            ..Default::default()
        }
    }

    /// Set the primary color
    pub fn with_primary(mut self, color: RGB8) -> Self {
        self.primary = color;
        self
    }

    /// Set the secondary color
    pub fn with_secondary(mut self, color: RGB8) -> Self {
        self.secondary = color;
        self
    }

    /// Set the master brightness
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the animation timestamp
    pub fn at(mut self, timestamp_ms: u32) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    /// Set the gauge prefix length
    pub fn with_gauge_prefix(mut self, pixels: u8) -> Self {
        self.gauge_prefix = pixels;
        self
    }

    /// Progress clamped into `[0, 1]`; NaN reads as 0
    pub fn clamped_progress(&self) -> f32 {
        if self.progress.is_nan() {
            0.0
        } else {
            self.progress.clamp(0.0, 1.0)
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AnimationParams {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "AnimationParams {{ progress: {}, primary: ({}, {}, {}), brightness: {}, t: {}ms, prefix: {} }}",
            self.progress,
            self.primary.r,
            self.primary.g,
            self.primary.b,
            self.brightness,
            self.timestamp_ms,
            self.gauge_prefix
        )
    }
}
