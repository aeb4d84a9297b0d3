//! Per-animation render functions
//!
//! Each function overwrites every pixel of the slice it is given. Master
//! brightness is applied afterwards by the engine.

use heapless::Vec;
use micromath::F32Ext;
use rgb::RGB8;

use super::color::{add_saturating, fade, gamma, scale_video, unit_to_u8, BLACK};
use super::easing::{ease_in_out_cubic, ease_out_quart, phase, ping_pong};
use super::params::AnimationParams;
use super::{BREATH_PERIOD_MS, COMET_PERIOD_MS, FLASH_PERIOD_MS, MAX_PIXELS, PULSE_PERIOD_MS};

/// Lowest relative brightness of the breathing selection cursor
const BREATH_FLOOR: f32 = 0.5;

/// Per-frame trail retention for the comet (out of 256)
const COMET_DECAY: u8 = 192;

/// Brightness band of the pulse animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseBand {
    pub min: u8,
    pub max: u8,
}

impl Default for PulseBand {
    fn default() -> Self {
        Self { min: 24, max: 255 }
    }
}

impl PulseBand {
    /// Map a 0-255 wave level into the band
    pub fn map(&self, level: u8) -> u8 {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        let span = (hi - lo) as u16;
        lo + (span * level as u16 / 255) as u8
    }
}

/// Decaying trail owned across comet frames
#[derive(Debug, Clone, Default)]
pub struct CometState {
    trail: Vec<RGB8, MAX_PIXELS>,
}

impl CometState {
    pub const fn new() -> Self {
        Self { trail: Vec::new() }
    }

    pub fn reset(&mut self) {
        self.trail.clear();
    }

    fn fit(&mut self, len: usize) {
        if self.trail.len() != len {
            self.trail.clear();
            // Callers never pass more than MAX_PIXELS
            let _ = self.trail.resize(len.min(MAX_PIXELS), BLACK);
        }
    }
}

/// Fill `segment` up to a fractional `level` measured in pixels
///
/// Pixels below the integer part get `color`, the pixel at the integer
/// part gets `color` scaled by `boundary(frac)`, the rest go dark.
fn fill_level(segment: &mut [RGB8], level: f32, color: RGB8, boundary: impl Fn(f32) -> u8) {
    let level = level.clamp(0.0, segment.len() as f32);
    let full = level as usize;
    let frac = level - full as f32;

    for (index, pixel) in segment.iter_mut().enumerate() {
        *pixel = if index < full {
            color
        } else if index == full && frac > 0.0 {
            scale_video(color, boundary(frac))
        } else {
            BLACK
        };
    }
}

/// Fill level for the progress fills: `progress * (N + 1)`, capped at N
///
/// Scaling by N would leave half a ring at exactly six full pixels on a
/// 12-pixel ring. Half a ring must light pixels 0..=5 and pixel 6 at half,
/// which needs the N + 1 scale.
fn fill_progress(len: usize, progress: f32) -> f32 {
    (progress * (len + 1) as f32).min(len as f32)
}

pub fn off(buffer: &mut [RGB8]) {
    buffer.fill(BLACK);
}

pub fn solid(buffer: &mut [RGB8], params: &AnimationParams) {
    buffer.fill(params.primary);
}

/// Selection fill with a breathing boundary pixel
pub fn time_selection(buffer: &mut [RGB8], params: &AnimationParams) {
    let level = fill_progress(buffer.len(), params.clamped_progress());
    let angle = phase(params.timestamp_ms, BREATH_PERIOD_MS) * core::f32::consts::TAU;
    let wave = F32Ext::sin(angle);
    let breath = BREATH_FLOOR + (1.0 - BREATH_FLOOR) * (wave + 1.0) / 2.0;

    fill_level(buffer, level, params.primary, |frac| {
        unit_to_u8(frac * breath)
    });
}

/// Remaining-time fill with a gamma-corrected boundary pixel
pub fn countdown(buffer: &mut [RGB8], params: &AnimationParams) {
    let level = fill_progress(buffer.len(), params.clamped_progress());
    fill_level(buffer, level, params.primary, |frac| gamma(unit_to_u8(frac)));
}

/// Rotating head with a decaying trail
///
/// The head is split across two neighbouring pixels by its sub-pixel
/// position, so it moves smoothly at any ring size.
pub fn comet(buffer: &mut [RGB8], params: &AnimationParams, state: &mut CometState) {
    let len = buffer.len().min(MAX_PIXELS);
    if len == 0 {
        return;
    }
    state.fit(len);

    for pixel in state.trail.iter_mut() {
        *pixel = fade(*pixel, COMET_DECAY);
    }

    let position = phase(params.timestamp_ms, COMET_PERIOD_MS) * len as f32;
    let head = (position as usize).min(len - 1);
    let lead = unit_to_u8(position - head as f32);
    let next = (head + 1) % len;

    state.trail[head] = add_saturating(state.trail[head], scale_video(params.primary, 255 - lead));
    state.trail[next] = add_saturating(state.trail[next], scale_video(params.primary, lead));

    buffer[..len].copy_from_slice(&state.trail);
    buffer[len..].fill(BLACK);
}

/// Whole-ring breathing between the band limits
pub fn pulse(buffer: &mut [RGB8], params: &AnimationParams, band: PulseBand) {
    let wave = ease_in_out_cubic(ping_pong(params.timestamp_ms, PULSE_PERIOD_MS));
    let level = band.map(gamma(unit_to_u8(wave)));
    buffer.fill(scale_video(params.primary, level));
}

/// Solid prefix in `primary`, eased sweep in `secondary` after it
pub fn gauge_sweep(buffer: &mut [RGB8], params: &AnimationParams) {
    let prefix = (params.gauge_prefix as usize).min(buffer.len());
    let (head, tail) = buffer.split_at_mut(prefix);
    head.fill(params.primary);

    let level = ease_out_quart(params.clamped_progress()) * tail.len() as f32;
    fill_level(tail, level, params.secondary, unit_to_u8);
}

/// Whole-ring flash in `color`, one cycle per [`FLASH_PERIOD_MS`]
pub fn flash(buffer: &mut [RGB8], params: &AnimationParams, color: RGB8) {
    let wave = ease_in_out_cubic(ping_pong(params.timestamp_ms, FLASH_PERIOD_MS));
    buffer.fill(scale_video(color, unit_to_u8(wave)));
}
