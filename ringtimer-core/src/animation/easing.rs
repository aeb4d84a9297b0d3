//! Easing curves and periodic waves
//!
//! Pure numeric transforms on normalized time. Inputs outside `[0, 1]`
//! are clamped first.

/// Quartic ease-out: fast start, long soft landing
pub fn ease_out_quart(x: f32) -> f32 {
    let inv = 1.0 - x.clamp(0.0, 1.0);
    1.0 - inv * inv * inv * inv
}

/// Cubic ease-in-out: slow at both ends, symmetric around 0.5
pub fn ease_in_out_cubic(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        let t = -2.0 * x + 2.0;
        1.0 - t * t * t / 2.0
    }
}

/// Bounce ease-out: four parabolic arcs of decreasing height
pub fn ease_out_bounce(x: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    let x = x.clamp(0.0, 1.0);
    if x < 1.0 / D1 {
        N1 * x * x
    } else if x < 2.0 / D1 {
        let t = x - 1.5 / D1;
        N1 * t * t + 0.75
    } else if x < 2.5 / D1 {
        let t = x - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = x - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

/// Sawtooth phase of `timestamp_ms` within `period_ms` (0.0 to <1.0)
pub fn phase(timestamp_ms: u32, period_ms: u32) -> f32 {
    if period_ms == 0 {
        return 0.0;
    }
    (timestamp_ms % period_ms) as f32 / period_ms as f32
}

/// Triangle wave 0 -> 1 -> 0 over `period_ms`
pub fn ping_pong(timestamp_ms: u32, period_ms: u32) -> f32 {
    let p = phase(timestamp_ms, period_ms);
    if p < 0.5 {
        p * 2.0
    } else {
        2.0 - p * 2.0
    }
}
