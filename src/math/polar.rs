use nalgebra::Vector2;

use std::f64::consts::{FRAC_PI_2, PI};

/// Returns the angle of the vector (x, y), measured counterclockwise from +x.
///
/// This is a single-argument arctangent with a half-plane fix: when `x < 0`,
/// the result is rotated by pi. It matches `atan2` whenever `x >= 0` or
/// `y >= 0`, but for vectors in the third quadrant it lands in (pi, 3pi/2)
/// rather than (-pi, -pi/2). The two are the same direction, so cos and sin
/// agree.
///
/// Degenerate inputs:
/// - `x == 0, y == 0`: returns 0
/// - `x == 0, y != 0`: returns `signum(y) * pi/2`
#[allow(clippy::float_cmp)]
pub fn direction(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        // Don't divide by zero; a signed zero in x would flip the sign of the result
        return if y == 0.0 { 0.0 } else { y.signum() * FRAC_PI_2 };
    }

    let theta = (y / x).atan();
    if x < 0.0 {
        theta + PI
    } else {
        theta
    }
}

/// A 2D vector stored as a magnitude and a direction (in radians).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar {
    pub magnitude: f64,
    pub angle: f64,
}

impl Polar {
    pub fn new(magnitude: f64, angle: f64) -> Self {
        Polar { magnitude, angle }
    }

    pub fn from_cartesian(v: &Vector2<f64>) -> Self {
        Polar {
            magnitude: v.norm(),
            angle: direction(v.x, v.y),
        }
    }

    pub fn to_cartesian(&self) -> Vector2<f64> {
        self.magnitude * Vector2::new(self.angle.cos(), self.angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_direction_half_planes() {
        assert_relative_eq!(direction(1.0, 0.0), 0.0);
        assert_relative_eq!(direction(1.0, 1.0), PI / 4.0);
        assert_relative_eq!(direction(1.0, -1.0), -PI / 4.0);
        assert_relative_eq!(direction(-1.0, 1.0), 3.0 * PI / 4.0);
        assert_relative_eq!(direction(-1.0, 0.0), PI);

        // Third quadrant ends up past pi, instead of wrapping to negative
        assert_relative_eq!(direction(-1.0, -1.0), 5.0 * PI / 4.0);
    }

    #[test]
    fn test_direction_third_quadrant_is_same_direction_as_atan2() {
        let (x, y) = (-3.0, -4.0);
        let theta = direction(x, y);
        assert!(theta > PI);
        assert_relative_eq!(theta.cos(), y.atan2(x).cos(), epsilon = 1e-15);
        assert_relative_eq!(theta.sin(), y.atan2(x).sin(), epsilon = 1e-15);
    }

    #[test]
    fn test_direction_vertical() {
        assert_eq!(direction(0.0, 0.0), 0.0);
        assert_eq!(direction(0.0, 2.5), FRAC_PI_2);
        assert_eq!(direction(0.0, -2.5), -FRAC_PI_2);
        assert_eq!(direction(-0.0, 2.5), FRAC_PI_2);
        assert_eq!(direction(-0.0, -2.5), -FRAC_PI_2);
    }

    #[test]
    fn test_polar_conversions() {
        let p = Polar::from_cartesian(&Vector2::new(3.0, 4.0));
        assert_relative_eq!(p.magnitude, 5.0);
        assert_relative_eq!(p.angle, (4.0f64 / 3.0).atan());

        let v = Polar::new(2.0, PI).to_cartesian();
        assert_relative_eq!(v, Vector2::new(-2.0, 0.0), epsilon = 1e-15);

        let zero = Polar::from_cartesian(&Vector2::zeros());
        assert_eq!(zero, Polar::new(0.0, 0.0));
    }
}
