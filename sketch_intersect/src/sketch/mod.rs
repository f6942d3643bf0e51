//! Sketch entities and the adapter that applies line splits to a sketch.
mod color;
mod intersect_lines;
mod store;

pub use color::Color;
pub use intersect_lines::{intersect_lines, IntersectLinesResult};
pub use store::{LineId, PointId, Sketch, SketchEdit, SketchLine, SketchPoint};
