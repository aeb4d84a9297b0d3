//! Configuration type definitions
//!
//! The configuration is loaded once at boot and stays fixed for the run.
//! With the `serde` feature it can be stored as postcard-serialized
//! binary data.

use rgb::RGB8;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::animation::MAX_PIXELS;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pixel count is zero or exceeds [`MAX_PIXELS`]
    InvalidPixelCount,
    /// Poll interval must be non-zero
    InvalidPollInterval,
    /// Long-press threshold must exceed the debounce window
    InvalidLongPress,
    /// Duration step is zero or larger than the maximum duration
    InvalidDurationStep,
    /// Stored configuration blob could not be decoded
    Decode,
}

/// Appliance configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Period of the main poll loop (ms)
    pub poll_interval_ms: u32,
    /// Minimum time between accepted button level changes (ms)
    pub debounce_ms: u32,
    /// Hold time at which a press becomes a long press (ms)
    pub long_press_ms: u32,
    /// Upper bound of the selectable duration (ms)
    pub max_duration_ms: u32,
    /// Duration change per encoder detent (ms)
    pub duration_step_ms: u32,
    /// Number of pixels in the ring
    pub num_pixels: u8,
    /// Flash cycles shown before returning to time selection
    pub flash_cycles: u8,
    /// Master pixel brightness (0-255)
    pub brightness: u8,
    /// Button line reads low while pressed (pull-up wiring)
    pub button_active_low: bool,
    /// Color of the draining countdown ring
    pub countdown_color: RGB8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_ms: 50,
            debounce_ms: 50,
            long_press_ms: 3000,
            max_duration_ms: 60_000,
            duration_step_ms: 5_000,
            num_pixels: 12,
            flash_cycles: 3,
            brightness: 50,
            button_active_low: true,
            countdown_color: RGB8::new(255, 0, 0),
        }
    }
}

impl Config {
    /// Check the configuration for values the core cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_pixels == 0 || self.num_pixels as usize > MAX_PIXELS {
            return Err(ConfigError::InvalidPixelCount);
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidPollInterval);
        }
        if self.long_press_ms <= self.debounce_ms {
            return Err(ConfigError::InvalidLongPress);
        }
        if self.duration_step_ms == 0 || self.duration_step_ms > self.max_duration_ms {
            return Err(ConfigError::InvalidDurationStep);
        }
        Ok(())
    }

    /// Decode and validate a postcard-encoded configuration
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Config = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }

    /// Total time spent flashing after completion or cancellation (ms)
    pub fn flash_duration_ms(&self) -> u32 {
        self.flash_cycles as u32 * crate::animation::FLASH_PERIOD_MS
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Config {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Config {{ poll: {}ms, debounce: {}ms, long: {}ms, max: {}ms, step: {}ms, pixels: {}, flashes: {}, brightness: {} }}",
            self.poll_interval_ms,
            self.debounce_ms,
            self.long_press_ms,
            self.max_duration_ms,
            self.duration_step_ms,
            self.num_pixels,
            self.flash_cycles,
            self.brightness
        )
    }
}
