use crate::error::{GeometryError, Result};
use crate::geometry::Polygon;
use crate::math::Point2;

/// Picks the one component of a split that contains a reference point.
///
/// After a binary split the reference point discriminates the surviving
/// branch, so no provenance has to be tracked through the split.
pub struct SelectContaining<'a> {
    components: &'a [Polygon],
    reference: Point2,
    step: &'static str,
}

impl<'a> SelectContaining<'a> {
    /// Creates a new `SelectContaining` query.
    ///
    /// * `step` - Name of the slicing step, reported in errors.
    #[must_use]
    pub fn new(components: &'a [Polygon], reference: Point2, step: &'static str) -> Self {
        Self {
            components,
            reference,
            step,
        }
    }

    /// Executes the selection.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NoContainingComponent` if no component contains
    /// the reference point and `GeometryError::AmbiguousComponent` if several do.
    pub fn execute(&self) -> Result<Polygon> {
        let mut hits = self
            .components
            .iter()
            .filter(|c| c.contains(&self.reference));
        match (hits.next(), hits.count()) {
            (Some(found), 0) => Ok(found.clone()),
            (None, _) => {
                Err(GeometryError::NoContainingComponent { step: self.step }.into())
            }
            (Some(_), rest) => Err(GeometryError::AmbiguousComponent {
                step: self.step,
                count: rest + 1,
            }
            .into()),
        }
    }
}
