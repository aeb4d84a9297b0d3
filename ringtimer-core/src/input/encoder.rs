//! Rotary encoder front-end
//!
//! The encoder module has two halves with different owners. The rotation
//! lines belong to the pin-change interrupt ([`QuadratureInput`]), the push
//! switch belongs to the poll loop ([`ButtonInput`]). The only state they
//! share is the [`StepCounter`].

use ringtimer_hal::InputPin;

use super::button::{ButtonClassifier, ButtonEdge};
use super::counter::StepCounter;
use super::quadrature::{QuadratureDecoder, QuadratureSample};
use crate::config::Config;

/// Input gathered during one poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvents {
    /// Net encoder steps since the previous poll (positive = clockwise)
    pub steps: i32,
    /// Classified button event, if a press cycle finished
    pub button: Option<ButtonEdge>,
}

impl InputEvents {
    /// Check if nothing happened this cycle
    pub fn is_empty(&self) -> bool {
        self.steps == 0 && self.button.is_none()
    }
}

/// Rotation half, owned by the interrupt context
pub struct QuadratureInput<CLK, DT> {
    clock: CLK,
    data: DT,
    decoder: QuadratureDecoder,
}

impl<CLK: InputPin, DT: InputPin> QuadratureInput<CLK, DT> {
    /// Create the rotation handler
    ///
    /// The decoder is seeded with the lines' current levels so the first
    /// sample does not produce a spurious step.
    pub fn new(clock: CLK, data: DT) -> Self {
        let initial = QuadratureSample::new(clock.is_high(), data.is_high());

        Self {
            clock,
            data,
            decoder: QuadratureDecoder::with_initial(initial),
        }
    }

    /// Sample the rotation lines and record any step
    ///
    /// A table lookup plus one counter update; never blocks.
    pub fn sample(&mut self, counter: &StepCounter) {
        let sample = QuadratureSample::new(self.clock.is_high(), self.data.is_high());
        if let Some(direction) = self.decoder.decode(sample) {
            counter.record(direction);
        }
    }
}

/// Push-switch half, owned by the poll loop
pub struct ButtonInput<SW> {
    switch: SW,
    button: ButtonClassifier,
}

impl<SW: InputPin> ButtonInput<SW> {
    pub fn new(switch: SW, config: &Config) -> Self {
        Self {
            switch,
            button: ButtonClassifier::from_config(config),
        }
    }

    /// Collect this cycle's input
    ///
    /// Drains the step counter and samples the button line.
    pub fn poll(&mut self, counter: &StepCounter, now_ms: u32) -> InputEvents {
        InputEvents {
            steps: counter.drain(),
            button: self.button.poll(self.switch.is_high(), now_ms),
        }
    }
}
