//! Ringtimer Hardware Abstraction Layer
//!
//! This crate defines the traits the control core uses to reach the
//! hardware it does not own: the encoder and button lines, and the
//! addressable pixel ring. Board crates implement them; the core only
//! ever sees these abstractions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  ringtimer-core (poll loop, animation)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ringtimer-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  GPIO lines   │       │  pixel driver │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input lines (encoder clock/data, button)
//! - [`pixel::PixelWriter`] - Per-pixel color writes plus frame flush

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pixel;

pub use gpio::InputPin;
pub use pixel::{HalError, PixelWriter};

/// 8-bit RGB color used for every pixel
pub use rgb::RGB8;
