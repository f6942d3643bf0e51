//! Sampled lines and the intersection engine working on them.
mod infinite_line;
mod intersects;
mod monotone;
mod sampled_line;
mod split;
mod sweep;

pub use infinite_line::*;
pub use intersects::*;
pub use monotone::*;
pub use sampled_line::*;
pub use split::*;
pub use sweep::*;
