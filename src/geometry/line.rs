use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// An infinite construction line defined by an origin point and a unit direction.
///
/// The parametric form is: `P(t) = origin + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    origin: Point2,
    direction: Vector2,
}

impl Line {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length or not finite.
    pub fn new(origin: Point2, direction: Vector2) -> Result<Self> {
        let len = direction.norm();
        if !len.is_finite() || len < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "line direction ({}, {}) has no usable length",
                direction.x, direction.y
            ))
            .into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Creates the line `y = slope * x + intercept`.
    ///
    /// # Errors
    ///
    /// Returns an error if `slope` or `intercept` is not finite.
    pub fn from_slope_intercept(slope: f64, intercept: f64) -> Result<Self> {
        if !intercept.is_finite() {
            return Err(
                GeometryError::Degenerate(format!("line intercept {intercept} is not finite"))
                    .into(),
            );
        }
        Self::new(Point2::new(0.0, intercept), Vector2::new(1.0, slope))
    }

    /// Creates the line through `origin` at `degrees` from the positive R axis.
    ///
    /// Unlike the slope form this stays well-defined for vertical lines.
    #[must_use]
    pub fn at_angle(origin: Point2, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            origin,
            direction: Vector2::new(cos, sin),
        }
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector2 {
        &self.direction
    }

    /// Truncates the line to the segment `origin ± half_length * direction`.
    #[must_use]
    pub fn to_segment(&self, half_length: f64) -> Segment {
        Segment::new(
            self.origin - self.direction * half_length,
            self.origin + self.direction * half_length,
        )
    }
}

/// A finite straight segment, used as the cutting tool when slicing polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}
