//! The gravity engine: forces from every stationary body, a semi-implicit
//! Euler step for the missile, and collision tests against body radii.
//!
//! All three use the same non-square cell geometry (see [crate::math::ASPECT]).
//! They never fail; degenerate inputs (coincident points, empty registries,
//! a missile with no horizontal speed) have defined results.

mod collision;
mod force;
mod integrator;

pub use collision::check_collision;
pub use force::evaluate_force;
pub use integrator::{integrate_position, integrate_velocity};
