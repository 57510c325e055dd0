//! Degree-based trigonometry with explicit singularities.
//!
//! Relay manuals state every angle in degrees, and several zone formulas divide
//! by a tangent. These helpers return `None` instead of a huge or infinite
//! value so that callers can report the offending setting.

/// Below this magnitude a sine or cosine is treated as zero.
const SINGULAR_THRESHOLD: f64 = 1e-9;

/// `tan(degrees)`, or `None` at odd multiples of 90°.
#[must_use]
pub fn tan_deg(degrees: f64) -> Option<f64> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (cos.abs() > SINGULAR_THRESHOLD).then(|| sin / cos)
}

/// `tan(degrees)` for use as a divisor: `None` at every multiple of 90°.
#[must_use]
pub fn tan_deg_nonzero(degrees: f64) -> Option<f64> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (cos.abs() > SINGULAR_THRESHOLD && sin.abs() > SINGULAR_THRESHOLD).then(|| sin / cos)
}

/// `cot(degrees) = 1 / tan(degrees)`, or `None` at multiples of 180°.
///
/// Exactly representable as zero at 90°, where `1 / tan` would not be.
#[must_use]
pub fn cot_deg(degrees: f64) -> Option<f64> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (sin.abs() > SINGULAR_THRESHOLD).then(|| cos / sin)
}
