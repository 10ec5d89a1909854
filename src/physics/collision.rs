use nalgebra::Point2;

use crate::math::ASPECT;
use crate::model::{BodyID, BodyRegistry};

/// Returns the first body (in registry order) whose radius strictly contains
/// `point`, or `None`.
///
/// Distances are aspect-corrected, and radii use integer division, so a
/// size-3 body only catches points less than 1 unit from its center.
pub fn check_collision(point: &Point2<f64>, registry: &BodyRegistry) -> Option<BodyID> {
    registry
        .iter()
        .find(|(_, body)| {
            let dx = (point.x - body.position.x).abs() * ASPECT;
            let dy = point.y - body.position.y;
            let dist = (dx * dx + dy * dy).sqrt();
            dist < f64::from(body.radius())
        })
        .map(|(id, _)| id)
}
