pub mod line;
pub mod polygon;

pub use line::{Line, Segment};
pub use polygon::Polygon;
