use nalgebra::{Point2, Vector2};

use crate::math::{Polar, ASPECT};
use crate::model::Missile;

/// Applies one frame's worth of `force` to the missile's velocity
/// (`dv = F / m`, with a unit time step) and returns the new velocity.
///
/// If the horizontal component ends up exactly zero, the new heading is
/// straight up or down by the sign of the vertical component, or zero if the
/// missile has stopped.
pub fn integrate_velocity(missile: &mut Missile, force: &Vector2<f64>) -> Polar {
    let v = missile.velocity.to_cartesian() + force / missile.mass;
    missile.velocity = Polar::from_cartesian(&v);
    missile.velocity
}

/// Moves the missile one frame along its current velocity and returns the new
/// position. Lines are twice as tall as columns, so the vertical step is
/// halved.
pub fn integrate_position(missile: &mut Missile) -> Point2<f64> {
    let v = missile.velocity.to_cartesian();
    missile.position += Vector2::new(v.x, v.y * ASPECT);
    missile.position
}
