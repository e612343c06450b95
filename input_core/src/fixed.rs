//! Fixed-point helpers.
//!
//! Command output feeds a lockstep network/replay model, so every
//! participating machine must compute it bit-for-bit identically.
//! This module therefore avoids floating point entirely: 16.16
//! fixed-point fractions, wrapping binary angles, and an exact
//! integer square root.

/// 16.16 fixed-point fraction.
pub type Fixed = i32;

/// One whole unit in [`Fixed`] format.
pub const FRACUNIT: Fixed = 1 << 16;

/// Binary angle. The full circle spans the whole `u32` range and all
/// arithmetic wraps.
pub type Angle = u32;

/// Integer square root, truncated toward zero.
///
/// Exact for every representable input, unlike a `f64` round-trip.
pub fn isqrt(n: u64) -> u32 {
    let mut remainder = n;
    let mut result = 0u64;
    let mut bit = 1u64 << 62;

    while bit > n {
        bit >>= 2;
    }

    while bit != 0 {
        if remainder >= result + bit {
            remainder -= result + bit;
            result = (result >> 1) + bit;
        } else {
            result >>= 1;
        }
        bit >>= 2;
    }

    result as u32
}
