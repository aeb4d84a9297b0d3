//! Addressable pixel output
//!
//! The pixel ring is written one color at a time and latched with a
//! single flush per frame. How the frame reaches the LEDs (RMT, PIO,
//! SPI bit-banging) is the implementation's business.

use rgb::RGB8;

/// Errors reported by a pixel driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalError {
    /// Pixel index is beyond the physical strip
    IndexOutOfRange,
    /// Transmission of the frame failed
    WriteFailed,
}

/// Trait for an addressable RGB pixel strip
///
/// # Implementations
/// - **Production:** a board-specific WS2812 driver
/// - **Testing:** an in-memory frame recorder
pub trait PixelWriter {
    /// Number of pixels the strip can hold
    fn len(&self) -> usize;

    /// Whether the strip has no pixels at all
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage a color for the pixel at `index`
    ///
    /// Nothing is visible until [`PixelWriter::flush`] is called.
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), HalError>;

    /// Latch the staged frame onto the strip
    fn flush(&mut self) -> Result<(), HalError>;

    /// Stage a whole frame, starting at pixel 0
    fn write_frame(&mut self, frame: &[RGB8]) -> Result<(), HalError> {
        for (index, color) in frame.iter().enumerate() {
            self.set_pixel(index, *color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Strip {
        staged: [RGB8; 4],
        flushes: u8,
    }

    impl PixelWriter for Strip {
        fn len(&self) -> usize {
            self.staged.len()
        }

        fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), HalError> {
            let slot = self
                .staged
                .get_mut(index)
                .ok_or(HalError::IndexOutOfRange)?;
            *slot = color;
            Ok(())
        }

        fn flush(&mut self) -> Result<(), HalError> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_write_frame_stages_every_pixel() {
        let mut strip = Strip {
            staged: [RGB8::default(); 4],
            flushes: 0,
        };
        let red = RGB8::new(255, 0, 0);

        strip.write_frame(&[red; 4]).unwrap();
        assert_eq!(strip.staged, [red; 4]);
        assert_eq!(strip.flushes, 0);
    }

    #[test]
    fn test_write_frame_rejects_oversized_frame() {
        let mut strip = Strip {
            staged: [RGB8::default(); 4],
            flushes: 0,
        };

        let result = strip.write_frame(&[RGB8::new(1, 2, 3); 5]);
        assert_eq!(result, Err(HalError::IndexOutOfRange));
    }
}
