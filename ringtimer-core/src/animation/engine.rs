//! Animation dispatch and per-kind state

use heapless::Vec;
use rgb::RGB8;

use super::color::{scale_video, BLACK, GREEN, RED};
use super::effects::{self, CometState, PulseBand};
use super::params::AnimationParams;
use super::{COMET_PERIOD_MS, FLASH_PERIOD_MS, MAX_PIXELS, PULSE_PERIOD_MS};
use crate::error::Error;

/// Frame storage sized once at startup
pub type PixelBuffer = Vec<RGB8, MAX_PIXELS>;

/// User-supplied renderer for [`Animation::Custom`]
pub type CustomRenderer = fn(&mut [RGB8], &AnimationParams);

/// Allocate a black frame of `len` pixels
pub fn pixel_buffer(len: usize) -> Result<PixelBuffer, Error> {
    let mut buffer = PixelBuffer::new();
    buffer.resize(len, BLACK).map_err(|_| Error::MemoryError)?;
    Ok(buffer)
}

/// Animation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Animation {
    /// All pixels dark
    Off,
    /// All pixels `primary`
    SolidColor,
    /// Selected-duration fill with a breathing cursor
    TimeSelection,
    /// Remaining-time fill
    Countdown,
    /// Rotating head with a fading tail
    Comet,
    /// Whole-ring breathing
    Pulse,
    /// Prefix plus eased sweep
    GaugeSweep,
    /// Green completion flash
    FlashComplete,
    /// Red cancellation flash
    FlashCancelled,
    /// Registered renderer
    Custom,
}

impl Animation {
    /// Period of timestamp-keyed kinds
    pub fn period_ms(&self) -> Option<u32> {
        match self {
            Animation::Comet => Some(COMET_PERIOD_MS),
            Animation::Pulse => Some(PULSE_PERIOD_MS),
            Animation::FlashComplete | Animation::FlashCancelled => Some(FLASH_PERIOD_MS),
            _ => None,
        }
    }

    /// Check if output depends on previous frames
    pub fn is_stateful(&self) -> bool {
        matches!(self, Animation::Comet)
    }
}

/// Renders animation frames into pixel slices
///
/// Owns the continuity state of stateful kinds. That state is reset every
/// time the engine switches into the kind, so two uses of the same
/// animation never share a trail.
pub struct AnimationEngine {
    comet: CometState,
    pulse_band: PulseBand,
    custom: Option<CustomRenderer>,
    active: Option<Animation>,
}

impl Default for AnimationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine {
    pub const fn new() -> Self {
        Self {
            comet: CometState::new(),
            pulse_band: PulseBand { min: 24, max: 255 },
            custom: None,
            active: None,
        }
    }

    /// Set the pulse brightness band
    pub fn set_pulse_band(&mut self, min: u8, max: u8) {
        self.pulse_band = PulseBand { min, max };
    }

    pub fn pulse_band(&self) -> PulseBand {
        self.pulse_band
    }

    /// Register the renderer used by [`Animation::Custom`]
    pub fn set_custom(&mut self, renderer: CustomRenderer) {
        self.custom = Some(renderer);
    }

    pub fn clear_custom(&mut self) {
        self.custom = None;
    }

    /// Kind rendered by the last call
    pub fn active(&self) -> Option<Animation> {
        self.active
    }

    /// Render one frame of `kind` into `buffer`
    ///
    /// Every pixel is overwritten, then scaled by `params.brightness`.
    pub fn render(&mut self, kind: Animation, params: &AnimationParams, buffer: &mut [RGB8]) {
        if self.active != Some(kind) {
            self.enter(kind);
        }

        match kind {
            Animation::Off => effects::off(buffer),
            Animation::SolidColor => effects::solid(buffer, params),
            Animation::TimeSelection => effects::time_selection(buffer, params),
            Animation::Countdown => effects::countdown(buffer, params),
            Animation::Comet => effects::comet(buffer, params, &mut self.comet),
            Animation::Pulse => effects::pulse(buffer, params, self.pulse_band),
            Animation::GaugeSweep => effects::gauge_sweep(buffer, params),
            Animation::FlashComplete => effects::flash(buffer, params, GREEN),
            Animation::FlashCancelled => effects::flash(buffer, params, RED),
            Animation::Custom => {
                buffer.fill(BLACK);
                if let Some(renderer) = self.custom {
                    renderer(buffer, params);
                }
            }
        }

        if params.brightness != u8::MAX {
            for pixel in buffer.iter_mut() {
                *pixel = scale_video(*pixel, params.brightness);
            }
        }
    }

    fn enter(&mut self, kind: Animation) {
        debug!("Animation: {}", kind);
        if kind == Animation::Comet {
            self.comet.reset();
        }
        self.active = Some(kind);
    }
}
