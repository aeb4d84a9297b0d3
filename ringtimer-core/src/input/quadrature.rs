//! Quadrature decoding
//!
//! Pure state-table decoder for a two-line rotary encoder. It has no
//! notion of time, so it can run in the pin-change interrupt while the
//! rest of the core polls.

/// Rotation direction of one encoder step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// One step clockwise (+1)
    Clockwise,
    /// One step counter-clockwise (-1)
    CounterClockwise,
}

impl Direction {
    /// Signed delta of this step
    pub fn delta(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// Both encoder lines sampled at the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuadratureSample {
    /// Clock line (A) level
    pub clock: bool,
    /// Data line (B) level
    pub data: bool,
}

impl QuadratureSample {
    /// Create a sample from the two line levels
    pub const fn new(clock: bool, data: bool) -> Self {
        Self { clock, data }
    }

    /// 2-bit encoding: clock is the high bit, data the low bit
    pub const fn encoded(self) -> u8 {
        ((self.clock as u8) << 1) | self.data as u8
    }
}

/// Map a 4-bit transition code `(previous << 2) | current` to a step
///
/// A valid transition changes exactly one line. No-change codes and
/// codes where both lines flipped at once decode to `None`.
pub const fn step_for_code(code: u8) -> Option<Direction> {
    match code & 0b1111 {
        0b1101 | 0b0100 | 0b0010 | 0b1011 => Some(Direction::Clockwise),
        0b1110 | 0b0111 | 0b0001 | 0b1000 => Some(Direction::CounterClockwise),
        _ => None,
    }
}

/// Quadrature state-table decoder
#[derive(Debug, Clone, Default)]
pub struct QuadratureDecoder {
    /// Previous 2-bit line encoding
    last_encoded: u8,
}

impl QuadratureDecoder {
    /// Create a decoder assuming both lines start low
    pub const fn new() -> Self {
        Self { last_encoded: 0 }
    }

    /// Create a decoder seeded with the lines' current levels
    pub const fn with_initial(sample: QuadratureSample) -> Self {
        Self {
            last_encoded: sample.encoded(),
        }
    }

    /// Advance the table with a new sample
    ///
    /// Returns the step implied by the transition from the previous
    /// sample, if it was a valid single-line change.
    pub fn decode(&mut self, sample: QuadratureSample) -> Option<Direction> {
        let encoded = sample.encoded();
        let code = (self.last_encoded << 2) | encoded;
        self.last_encoded = encoded;
        step_for_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CLOCKWISE: [u8; 4] = [0b1101, 0b0100, 0b0010, 0b1011];
    const COUNTER_CLOCKWISE: [u8; 4] = [0b1110, 0b0111, 0b0001, 0b1000];

    fn sample(encoded: u8) -> QuadratureSample {
        QuadratureSample::new(encoded & 0b10 != 0, encoded & 0b01 != 0)
    }

    #[test]
    fn test_valid_codes() {
        for code in CLOCKWISE {
            assert_eq!(step_for_code(code), Some(Direction::Clockwise));
        }
        for code in COUNTER_CLOCKWISE {
            assert_eq!(step_for_code(code), Some(Direction::CounterClockwise));
        }
    }

    #[test]
    fn test_every_other_code_is_ignored() {
        let decoded = (0u8..16).filter(|code| step_for_code(*code).is_some()).count();
        assert_eq!(decoded, 8);

        // No change and double transitions
        for code in [0b0000, 0b0101, 0b1010, 0b1111, 0b0011, 0b0110, 0b1001, 0b1100] {
            assert_eq!(step_for_code(code), None);
        }
    }

    #[test]
    fn test_decoder_uses_previous_sample() {
        // 00 -> 01 is code 0b0001
        let mut decoder = QuadratureDecoder::new();
        assert_eq!(
            decoder.decode(sample(0b01)),
            Some(Direction::CounterClockwise)
        );

        // 01 -> 11 is code 0b0111
        assert_eq!(
            decoder.decode(sample(0b11)),
            Some(Direction::CounterClockwise)
        );

        // 11 -> 11: no change
        assert_eq!(decoder.decode(sample(0b11)), None);
    }

    #[test]
    fn test_full_clockwise_detent() {
        // 11 -> 01 -> 00 -> 10 -> 11
        let mut decoder = QuadratureDecoder::with_initial(sample(0b11));
        let total: i32 = [0b01, 0b00, 0b10, 0b11]
            .into_iter()
            .filter_map(|s| decoder.decode(sample(s)))
            .map(Direction::delta)
            .sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_full_counter_clockwise_detent() {
        // 11 -> 10 -> 00 -> 01 -> 11
        let mut decoder = QuadratureDecoder::with_initial(sample(0b11));
        let total: i32 = [0b10, 0b00, 0b01, 0b11]
            .into_iter()
            .filter_map(|s| decoder.decode(sample(s)))
            .map(Direction::delta)
            .sum();
        assert_eq!(total, -4);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Clockwise.delta(), 1);
        assert_eq!(Direction::CounterClockwise.delta(), -1);
    }

    proptest! {
        #[test]
        fn prop_decode_matches_table(previous in 0u8..4, current in 0u8..4) {
            let mut decoder = QuadratureDecoder::with_initial(sample(previous));
            let code = (previous << 2) | current;
            prop_assert_eq!(decoder.decode(sample(current)), step_for_code(code));
        }

        #[test]
        fn prop_reversing_a_path_cancels(path in proptest::collection::vec(0u8..4, 1..32)) {
            let mut decoder = QuadratureDecoder::with_initial(sample(0));
            let mut total = 0i32;
            for s in path.iter().copied() {
                total += decoder.decode(sample(s)).map(Direction::delta).unwrap_or(0);
            }
            for s in path.iter().rev().skip(1).copied().chain(core::iter::once(0)) {
                total += decoder.decode(sample(s)).map(Direction::delta).unwrap_or(0);
            }
            prop_assert_eq!(total, 0);
        }
    }
}
