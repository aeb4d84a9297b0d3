//! GPIO line abstractions
//!
//! The core treats every line as an instantaneously sampled digital level.

/// Digital input line
///
/// Implementations read the current electrical level of the pin. Any
/// pull-up/pull-down configuration and interrupt registration happen
/// outside the core.
pub trait InputPin {
    /// Check if the line reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the line reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}
