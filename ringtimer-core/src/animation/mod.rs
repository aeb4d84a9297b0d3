//! Pixel-ring animations
//!
//! Stateless renderers selected by [`Animation`] kind, plus the engine
//! that owns the continuity state of stateful kinds and applies master
//! brightness. All arithmetic is 8-bit color math over `f32` progress.

pub mod color;
pub mod easing;
pub mod effects;
pub mod engine;
pub mod params;

pub use color::{gamma, scale_video};
pub use easing::{ease_in_out_cubic, ease_out_bounce, ease_out_quart, ping_pong};
pub use effects::PulseBand;
pub use engine::{pixel_buffer, Animation, AnimationEngine, CustomRenderer, PixelBuffer};
pub use params::AnimationParams;

/// Largest supported ring
pub const MAX_PIXELS: usize = 64;

/// One completion/cancellation flash cycle
pub const FLASH_PERIOD_MS: u32 = 1000;

/// One full pulse (dim, bright, dim)
pub const PULSE_PERIOD_MS: u32 = 3000;

/// One comet revolution
pub const COMET_PERIOD_MS: u32 = 1200;

/// One breath of the selection cursor
pub const BREATH_PERIOD_MS: u32 = 2000;
