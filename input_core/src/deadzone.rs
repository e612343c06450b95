//! Radial deadzone normalization.
//!
//! Pure fixed-point geometry: the stick magnitude goes through an
//! exact integer square root so every machine in a lockstep session
//! computes the same vector.

use crate::command::JOY_AXIS_RANGE;
use crate::fixed::{isqrt, Fixed, FRACUNIT};

/// Raw 2D analog state for one stick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoyVector {
    pub x: i32,
    pub y: i32,
}

/// Takes a combined axis magnitude and removes the deadzone from it,
/// rescaling the remainder back over `[0, JOY_AXIS_RANGE]`.
pub fn deadzone_adjusted_magnitude(magnitude: i32, dead_zone: Fixed) -> i32 {
    let jdeadzone = ((JOY_AXIS_RANGE as i64 * dead_zone as i64) / FRACUNIT as i64) as i32;

    let adjusted = magnitude.abs();

    // Deadzone and magnitude both at 100%: return full input directly
    // instead of dividing by zero below.
    if jdeadzone >= JOY_AXIS_RANGE && adjusted >= JOY_AXIS_RANGE {
        return JOY_AXIS_RANGE;
    }

    if adjusted <= jdeadzone {
        return 0;
    }

    let adjusted = adjusted.min(JOY_AXIS_RANGE) - jdeadzone;
    (adjusted * JOY_AXIS_RANGE) / (JOY_AXIS_RANGE - jdeadzone)
}

/// Radial deadzone pass over a stick vector.
///
/// Input just past the deadzone boundary maps near zero, full
/// deflection still maps to full range, and the vector's direction is
/// preserved. Each axis is clamped afterward to absorb rounding
/// overshoot.
pub fn normalize(vector: JoyVector, dead_zone: Fixed) -> JoyVector {
    let magnitude = isqrt(
        (i64::from(vector.x) * i64::from(vector.x) + i64::from(vector.y) * i64::from(vector.y))
            as u64,
    ) as i32;

    let normalized_x = (vector.x * magnitude) / JOY_AXIS_RANGE;
    let normalized_y = (vector.y * magnitude) / JOY_AXIS_RANGE;

    let normalized_magnitude = deadzone_adjusted_magnitude(magnitude, dead_zone);

    JoyVector {
        x: ((normalized_x * normalized_magnitude) / JOY_AXIS_RANGE)
            .clamp(-JOY_AXIS_RANGE, JOY_AXIS_RANGE),
        y: ((normalized_y * normalized_magnitude) / JOY_AXIS_RANGE)
            .clamp(-JOY_AXIS_RANGE, JOY_AXIS_RANGE),
    }
}
