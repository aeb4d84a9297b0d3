//! Presentation abstraction traits
//!
//! The pixel and line traits live in `ringtimer-hal`; the status screen
//! is specific to this application, so its trait lives here.

pub mod display;

pub use display::{DisplayDriver, DisplayError, DisplayExt, View};
