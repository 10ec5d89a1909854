use nalgebra::Point2;

use crate::math::Polar;

use super::body::{grid_cell, Body};

pub const MISSILE_MASS: f64 = 3.0;

/// The projectile. It is the only thing that moves, and it lives for exactly
/// one flight.
#[derive(Debug, Clone)]
pub struct Missile {
    pub position: Point2<f64>,
    pub velocity: Polar,
    pub mass: f64,
}

impl Missile {
    pub fn new(position: Point2<f64>, velocity: Polar) -> Self {
        Missile {
            position,
            velocity,
            mass: MISSILE_MASS,
        }
    }

    /// Spawns a missile on the rim of `origin`, heading out at `angle_degrees`
    /// (counterclockwise from +x) with the given speed.
    ///
    /// The spawn offset is rounded up to whole cells, and the vertical part is
    /// halved since lines are twice as tall as columns are wide.
    pub fn launch(origin: &Body, speed: f64, angle_degrees: f64, origin_radius: f64) -> Self {
        let phi = angle_degrees.to_radians();

        let dx = (origin_radius * phi.cos()).ceil();
        let dy = (origin_radius / 2.0 * phi.sin()).ceil();
        let position = Point2::new(origin.position.x + dx, origin.position.y + dy);

        Missile::new(position, Polar::new(speed, phi))
    }

    pub fn grid_cell(&self) -> (i64, i64) {
        grid_cell(&self.position)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use std::f64::consts::PI;

    use super::*;
    use crate::model::BodySize;

    #[test]
    fn test_launch_east() {
        let origin = Body::planet(10.0, 25.0, BodySize::Nine);
        let missile = Missile::launch(&origin, 5.0, 0.0, 9.0);

        assert_eq!(missile.position, Point2::new(19.0, 25.0));
        assert_eq!(missile.velocity, Polar::new(5.0, 0.0));
        assert_eq!(missile.mass, MISSILE_MASS);
    }

    #[test]
    fn test_launch_rounds_offsets_up() {
        let origin = Body::planet(40.0, 12.0, BodySize::Nine);

        // Straight up: cos(90) is a hair above zero, so the x offset rounds to 1
        let missile = Missile::launch(&origin, 3.0, 90.0, 9.0);
        assert_eq!(missile.position, Point2::new(41.0, 17.0));
        assert_relative_eq!(missile.velocity.angle, PI / 2.0);

        // Straight down: -4.5 rounds up to -4
        let missile = Missile::launch(&origin, 3.0, 270.0, 9.0);
        assert_eq!(missile.position, Point2::new(40.0, 8.0));

        // West: sin(180) is a hair above zero, so the y offset rounds to 1
        let missile = Missile::launch(&origin, 3.0, 180.0, 9.0);
        assert_eq!(missile.position, Point2::new(31.0, 13.0));
    }
}
