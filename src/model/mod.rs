mod body;
mod missile;
mod registry;

pub use body::{grid_cell, Body, BodyID, BodyKind, BodySize};
pub use missile::{Missile, MISSILE_MASS};
pub use registry::BodyRegistry;
