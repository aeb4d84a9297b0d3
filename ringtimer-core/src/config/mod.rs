//! Configuration types
//!
//! Board-agnostic configuration, fixed for the lifetime of a run.

pub mod types;

pub use types::*;
