use nalgebra::Point2;

use std::fmt;

use crate::error::Error;
use crate::math::Polar;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

impl fmt::Display for BodyID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Diameter of a stationary body, in lines. Only a handful of sizes can be
/// drawn, so only those are representable.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum BodySize {
    Three,
    Four,
    Five,
    Six,
    Nine,
}

impl BodySize {
    pub const ALL: [BodySize; 5] = [
        BodySize::Three,
        BodySize::Four,
        BodySize::Five,
        BodySize::Six,
        BodySize::Nine,
    ];

    pub fn diameter(self) -> u8 {
        match self {
            BodySize::Three => 3,
            BodySize::Four => 4,
            BodySize::Five => 5,
            BodySize::Six => 6,
            BodySize::Nine => 9,
        }
    }

    /// Collision radius. Integer division: a size-3 body has radius 1.
    pub fn radius(self) -> u8 {
        self.diameter() / 2
    }
}

impl TryFrom<u8> for BodySize {
    type Error = Error;

    fn try_from(diameter: u8) -> Result<Self, Error> {
        BodySize::ALL
            .iter()
            .copied()
            .find(|s| s.diameter() == diameter)
            .ok_or(Error::InvalidSize(diameter))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Planet,
    Asteroid,
}

// Everything the physics needs to know about a stationary body
#[derive(Debug, Clone)]
pub struct Body {
    pub kind: BodyKind,
    pub position: Point2<f64>,
    pub size: BodySize,
    pub mass: f64,
    pub velocity: Polar,
}

impl Body {
    pub fn planet(x: f64, y: f64, size: BodySize) -> Self {
        Self::new(BodyKind::Planet, x, y, size)
    }

    pub fn asteroid(x: f64, y: f64, size: BodySize) -> Self {
        Self::new(BodyKind::Asteroid, x, y, size)
    }

    fn new(kind: BodyKind, x: f64, y: f64, size: BodySize) -> Self {
        Body {
            kind,
            position: Point2::new(x, y),
            size,
            // Mass is the diameter; bigger planets pull harder
            mass: f64::from(size.diameter()),
            velocity: Polar::default(),
        }
    }

    pub fn radius(&self) -> u8 {
        self.size.radius()
    }

    /// The terminal cell this body is drawn in.
    pub fn grid_cell(&self) -> (i64, i64) {
        grid_cell(&self.position)
    }
}

/// Truncates a position toward zero, the same way the display does.
pub fn grid_cell(position: &Point2<f64>) -> (i64, i64) {
    (position.x.trunc() as i64, position.y.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(BodySize::try_from(9).unwrap(), BodySize::Nine);
        assert_eq!(BodySize::try_from(3).unwrap().radius(), 1);
        assert_eq!(BodySize::Four.radius(), 2);
        assert_eq!(BodySize::Nine.radius(), 4);
        assert!(matches!(BodySize::try_from(7), Err(Error::InvalidSize(7))));
        assert!(matches!(BodySize::try_from(0), Err(Error::InvalidSize(0))));
    }

    #[test]
    fn test_mass_follows_size() {
        for size in BodySize::ALL.iter().copied() {
            let planet = Body::planet(10.0, 10.0, size);
            assert_eq!(planet.mass, f64::from(size.diameter()));
            assert!(planet.mass > 0.0);

            let asteroid = Body::asteroid(10.0, 10.0, size);
            assert_eq!(asteroid.mass, planet.mass);
        }
    }

    #[test]
    fn test_grid_cell_truncates() {
        let body = Body::planet(12.9, 7.2, BodySize::Five);
        assert_eq!(body.grid_cell(), (12, 7));
        assert_eq!(grid_cell(&Point2::new(-0.5, 3.99)), (0, 3));
    }
}
