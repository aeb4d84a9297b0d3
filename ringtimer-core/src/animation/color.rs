//! 8-bit color arithmetic
//!
//! Integer-only helpers in the style of the usual LED-strip libraries.

use rgb::RGB8;

pub const BLACK: RGB8 = RGB8::new(0, 0, 0);
pub const WHITE: RGB8 = RGB8::new(255, 255, 255);
pub const RED: RGB8 = RGB8::new(255, 0, 0);
pub const GREEN: RGB8 = RGB8::new(0, 255, 0);

/// Quadratic perceptual correction: `(b² + 255) >> 8`
///
/// Maps 0 to 0 and 255 to 255, and keeps small non-zero inputs from
/// collapsing to black.
pub const fn gamma(brightness: u8) -> u8 {
    let b = brightness as u32;
    ((b * b + 255) >> 8) as u8
}

/// Scale one channel by `scale / 256`; may reach zero
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) >> 8) as u8
}

/// Scale one channel, never turning a lit channel fully off
///
/// A non-zero value scaled by a non-zero factor stays at least 1, and a
/// scale of 255 leaves the value unchanged.
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = scale8(value, scale);
    if value != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Scale a color with [`scale8_video`] on each channel
pub const fn scale_video(color: RGB8, scale: u8) -> RGB8 {
    RGB8::new(
        scale8_video(color.r, scale),
        scale8_video(color.g, scale),
        scale8_video(color.b, scale),
    )
}

/// Scale a color with [`scale8`] on each channel (fades reach black)
pub const fn fade(color: RGB8, keep: u8) -> RGB8 {
    RGB8::new(
        scale8(color.r, keep),
        scale8(color.g, keep),
        scale8(color.b, keep),
    )
}

/// Channel-wise saturating sum
pub const fn add_saturating(a: RGB8, b: RGB8) -> RGB8 {
    RGB8::new(
        a.r.saturating_add(b.r),
        a.g.saturating_add(b.g),
        a.b.saturating_add(b.b),
    )
}

/// Convert a unit fraction to a 0-255 level, rounding to nearest
pub fn unit_to_u8(fraction: f32) -> u8 {
    (fraction.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
