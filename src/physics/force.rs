use nalgebra::{Point2, Vector2};

use crate::math::{direction, ASPECT};
use crate::model::BodyRegistry;

/// Net gravitational force on a point of mass `target_mass` at `target`,
/// summed over every body in the registry.
///
/// Each body contributes `target_mass * body.mass / d^2`, pointed from the
/// target toward the body, where distances are aspect-corrected (horizontal
/// offsets count half). A body sitting exactly on the target contributes
/// nothing. An empty registry gives the zero vector.
pub fn evaluate_force(
    target: &Point2<f64>,
    target_mass: f64,
    registry: &BodyRegistry,
) -> Vector2<f64> {
    registry
        .bodies()
        .map(|body| pairwise_force(target, target_mass, &body.position, body.mass))
        .fold(Vector2::zeros(), |acc, f| acc + f)
}

#[allow(clippy::float_cmp)]
fn pairwise_force(
    target: &Point2<f64>,
    target_mass: f64,
    source: &Point2<f64>,
    source_mass: f64,
) -> Vector2<f64> {
    let dx = (source.x - target.x) * ASPECT;
    let dy = source.y - target.y;

    let distance_squared = dx * dx + dy * dy;
    if distance_squared == 0.0 {
        return Vector2::zeros();
    }

    let theta = direction(dx, dy);
    let magnitude = target_mass * source_mass / distance_squared;
    magnitude * Vector2::new(theta.cos(), theta.sin())
}
