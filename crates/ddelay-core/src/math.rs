//! Small math utilities shared by the processing path and its callers.

use libm::{log10f, powf};

/// Flush subnormal-range values to zero.
///
/// Feedback loops decay toward the subnormal float range, where many CPUs
/// fall off their fast path by orders of magnitude. Applied to the value
/// written back into the delay buffer each sample.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}

/// Convert a linear amplitude to decibels. Floors at -100 dB for silence.
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    if linear > 1e-5 {
        20.0 * log10f(linear)
    } else {
        -100.0
    }
}

/// Convert decibels to a linear amplitude.
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    powf(10.0, db / 20.0)
}
