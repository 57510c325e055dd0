pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod trig;

/// 2D point in the impedance plane: `x` is resistance R, `y` is reactance X (ohms).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector in the impedance plane.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons, in ohms.
pub const TOLERANCE: f64 = 1e-9;

/// Half-length, in ohms, of the finite segments that stand in for infinite
/// construction lines when slicing.
///
/// Must stay well above every coordinate a valid setting can produce: reaches
/// top out at 600 Ω, so polygon corners stay below ~1700 Ω. A segment that ends
/// inside the polygon does not cut it at all.
pub const FAR_DISTANCE: f64 = 9999.0;
