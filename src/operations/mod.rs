mod select;
mod split;
mod transform;

pub use select::SelectContaining;
pub use split::SplitPolygon;
pub use transform::HalfTurn;
