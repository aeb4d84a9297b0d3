//! Board-agnostic control core for the ringtimer countdown appliance
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Quadrature decoding and button classification
//! - Countdown timer with pause/resume accounting
//! - Parametric pixel-ring animations
//! - Application state machine and the per-poll runtime step
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod runtime;
pub mod state;
pub mod timer;
pub mod traits;

pub use error::Error;
pub use ringtimer_hal::RGB8;
