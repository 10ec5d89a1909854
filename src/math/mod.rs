pub mod polar;

/// Horizontal cell units are half as long as vertical ones. Horizontal
/// displacements are scaled by this when measuring distances, and vertical
/// steps are scaled by it when moving.
pub const ASPECT: f64 = 0.5;

pub use polar::{direction, Polar};
