//! Flies a single missile through the field until it hits something or
//! leaves the screen.
//!
//! Every step runs, in order: force evaluation, velocity update, position
//! update, collision test (against the *new* position), and bounds test. A
//! collision takes priority over leaving the field on the same step.

use nalgebra::Point2;
use tracing::{debug, trace};

use std::thread;
use std::time::Duration;

use crate::model::{BodyID, BodyRegistry, Missile};
use crate::physics::{check_collision, evaluate_force, integrate_position, integrate_velocity};

/// The playable rectangle, in grid cells. All bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayArea {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl PlayArea {
    pub fn new(min_x: i64, max_x: i64, min_y: i64, max_y: i64) -> Self {
        PlayArea {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// The area left over on a terminal once the header (top three lines),
    /// the prompt block (bottom four lines) and a couple of edge columns are
    /// reserved.
    pub fn for_terminal(columns: u32, lines: u32) -> Self {
        PlayArea::new(1, i64::from(columns) - 2, 2, i64::from(lines) - 3)
    }

    pub fn contains(&self, (x, y): (i64, i64)) -> bool {
        self.min_x < x && x < self.max_x && self.min_y < y && y < self.max_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightState {
    Flying,
    Collided(BodyID),
    OutOfBounds,
    /// Still flying when the step limit ran out. Only reachable when a limit
    /// is set.
    Expired,
}

impl FlightState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FlightState::Flying)
    }

    pub fn collided_body(&self) -> Option<BodyID> {
        match self {
            FlightState::Collided(id) => Some(*id),
            _ => None,
        }
    }
}

/// Hook for whoever draws the missile. Called once after every step, with the
/// missile already moved.
pub trait FlightObserver {
    fn on_step(&mut self, step: usize, missile: &Missile, state: FlightState);
}

/// Ignores every step.
pub struct NoopObserver;

impl FlightObserver for NoopObserver {
    fn on_step(&mut self, _step: usize, _missile: &Missile, _state: FlightState) {}
}

/// Records the path of the missile.
impl FlightObserver for Vec<Point2<f64>> {
    fn on_step(&mut self, _step: usize, missile: &Missile, _state: FlightState) {
        self.push(missile.position);
    }
}

#[derive(Debug, Clone)]
pub struct FlightReport {
    pub state: FlightState,
    pub steps: usize,
    pub final_position: Point2<f64>,
}

pub struct Flight<'reg> {
    registry: &'reg BodyRegistry,
    missile: Missile,
    area: PlayArea,
    state: FlightState,
    steps: usize,
    max_steps: Option<usize>,
    frame_delay: Duration,
}

impl<'reg> Flight<'reg> {
    pub fn new(registry: &'reg BodyRegistry, missile: Missile, area: PlayArea) -> Self {
        Flight {
            registry,
            missile,
            area,
            state: FlightState::Flying,
            steps: 0,
            max_steps: None,
            frame_delay: Duration::ZERO,
        }
    }

    pub fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Pause between frames in [Flight::run]. Purely cosmetic.
    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    pub fn missile(&self) -> &Missile {
        &self.missile
    }

    pub fn state(&self) -> FlightState {
        self.state
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Advances the missile by one frame. Does nothing once the flight is over.
    pub fn step(&mut self) -> FlightState {
        if self.state.is_terminal() {
            return self.state;
        }

        let force = evaluate_force(&self.missile.position, self.missile.mass, self.registry);
        integrate_velocity(&mut self.missile, &force);
        integrate_position(&mut self.missile);
        self.steps += 1;

        trace!(
            step = self.steps,
            x = self.missile.position.x,
            y = self.missile.position.y,
            speed = self.missile.velocity.magnitude,
            heading = self.missile.velocity.angle,
            "missile moved"
        );

        self.state = if let Some(id) = check_collision(&self.missile.position, self.registry) {
            FlightState::Collided(id)
        } else if !self.area.contains(self.missile.grid_cell()) {
            FlightState::OutOfBounds
        } else if self.max_steps.map_or(false, |max| self.steps >= max) {
            FlightState::Expired
        } else {
            FlightState::Flying
        };

        if self.state.is_terminal() {
            debug!(
                steps = self.steps,
                x = self.missile.position.x,
                y = self.missile.position.y,
                "flight ended: {:?}",
                self.state
            );
        }
        self.state
    }

    /// Steps until the flight ends, reporting every frame to `observer`. The
    /// missile is dropped afterwards.
    pub fn run(mut self, observer: &mut impl FlightObserver) -> FlightReport {
        loop {
            let state = self.step();
            observer.on_step(self.steps, &self.missile, state);
            if state.is_terminal() {
                break;
            }
            if !self.frame_delay.is_zero() {
                thread::sleep(self.frame_delay);
            }
        }

        FlightReport {
            state: self.state,
            steps: self.steps,
            final_position: self.missile.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Polar;
    use crate::model::{Body, BodySize};

    #[test]
    fn test_play_area_margins() {
        let area = PlayArea::for_terminal(80, 24);
        assert_eq!(area, PlayArea::new(1, 78, 2, 21));

        assert!(area.contains((2, 3)));
        assert!(area.contains((77, 20)));
        assert!(!area.contains((1, 10)));
        assert!(!area.contains((78, 10)));
        assert!(!area.contains((40, 2)));
        assert!(!area.contains((40, 21)));
    }

    #[test]
    fn test_empty_field_flies_straight() {
        let registry = BodyRegistry::new();
        let missile = Missile::new(Point2::new(10.0, 10.0), Polar::new(2.0, 0.0));
        let mut flight = Flight::new(&registry, missile, PlayArea::for_terminal(80, 24));

        assert_eq!(flight.step(), FlightState::Flying);
        assert_relative_eq!(flight.missile().position, Point2::new(12.0, 10.0));
        assert_eq!(flight.steps(), 1);

        let mut path: Vec<Point2<f64>> = Vec::new();
        let report = flight.run(&mut path);
        assert_eq!(report.state, FlightState::OutOfBounds);
        // 14, 16, ..., 78
        assert_eq!(report.steps, 34);
        assert_eq!(path.len(), 33);
        assert_relative_eq!(report.final_position, Point2::new(78.0, 10.0));
    }

    #[test]
    fn test_collision_checked_after_moving() {
        let mut registry = BodyRegistry::new();
        let target = registry.append(Body::planet(30.0, 10.0, BodySize::Nine));

        // Starts outside the planet and flies into it
        let missile = Missile::new(Point2::new(18.0, 10.0), Polar::new(6.0, 0.0));
        let mut flight = Flight::new(&registry, missile, PlayArea::for_terminal(80, 24));
        assert_eq!(flight.step(), FlightState::Collided(target));
        assert_eq!(flight.state().collided_body(), Some(target));

        // Terminal states stick
        let position = flight.missile().position;
        assert_eq!(flight.step(), FlightState::Collided(target));
        assert_eq!(flight.missile().position, position);
        assert_eq!(flight.steps(), 1);
    }

    #[test]
    fn test_collision_beats_bounds() {
        let mut registry = BodyRegistry::new();
        let edge = registry.append(Body::planet(2.0, 10.0, BodySize::Nine));

        let missile = Missile::new(Point2::new(5.0, 10.0), Polar::new(4.0, std::f64::consts::PI));
        let report = Flight::new(&registry, missile, PlayArea::for_terminal(80, 24))
            .run(&mut NoopObserver);
        assert_eq!(report.state, FlightState::Collided(edge));
    }

    #[test]
    fn test_step_limit() {
        let registry = BodyRegistry::new();
        let missile = Missile::new(Point2::new(10.0, 10.0), Polar::new(0.0, 0.0));
        let report = Flight::new(&registry, missile, PlayArea::for_terminal(80, 24))
            .with_max_steps(Some(25))
            .run(&mut NoopObserver);

        assert_eq!(report.state, FlightState::Expired);
        assert_eq!(report.steps, 25);
    }
}
