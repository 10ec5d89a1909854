use rand::Rng;
use tracing::info;

use crate::arrangement::{arrange_planets, planet_count};
use crate::config::GameConfig;
use crate::error::Error;
use crate::flight::{Flight, FlightObserver, FlightReport};
use crate::model::{BodyID, BodyRegistry, Missile};

pub const MAX_SPEED: f64 = 10.0;
pub const MAX_ANGLE: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The planet this player fires from. The arrangement always puts the
    /// two home planets first.
    pub fn home(self) -> BodyID {
        match self {
            Player::One => BodyID(0),
            Player::Two => BodyID(1),
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShotReport {
    pub shooter: Player,
    pub flight: FlightReport,
    pub scored: bool,
}

/// A two-player match: players take turns firing at each other's home
/// planet, scoring a point for every direct hit.
pub struct Match {
    config: GameConfig,
    registry: BodyRegistry,
    scores: [u32; 2],
    current: Player,
}

impl Match {
    pub fn new(config: GameConfig, rng: &mut impl Rng) -> Result<Self, Error> {
        let registry = arrange(&config, rng)?;
        Ok(Self::with_registry(config, registry))
    }

    /// Starts a match on a hand-built field. Bodies 0 and 1 are the home
    /// planets of players one and two.
    pub fn with_registry(config: GameConfig, registry: BodyRegistry) -> Self {
        Match {
            config,
            registry,
            scores: [0, 0],
            current: Player::One,
        }
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    /// Throws away the current field and lays out a new one. Scores and turn
    /// order carry over.
    pub fn rearrange(&mut self, rng: &mut impl Rng) -> Result<(), Error> {
        self.registry = arrange(&self.config, rng)?;
        Ok(())
    }

    /// Hands the turn to the other player without firing.
    pub fn pass(&mut self) {
        self.current = self.current.opponent();
    }

    /// Fires a missile for the current player and flies it to the end. The
    /// turn passes to the other player no matter where the missile lands.
    pub fn fire(
        &mut self,
        speed: f64,
        angle_degrees: f64,
        observer: &mut impl FlightObserver,
    ) -> Result<ShotReport, Error> {
        if !(0.0..=MAX_SPEED).contains(&speed) {
            return Err(Error::InvalidSpeed(speed));
        }
        if !(0.0..=MAX_ANGLE).contains(&angle_degrees) {
            return Err(Error::InvalidAngle(angle_degrees));
        }

        let shooter = self.current;
        let origin = self
            .registry
            .get(shooter.home())
            .ok_or(Error::UnknownBody(shooter.home()))?;
        let target = shooter.opponent().home();

        let missile = Missile::launch(origin, speed, angle_degrees, self.config.origin_radius);
        let flight = Flight::new(&self.registry, missile, self.config.play_area())
            .with_max_steps(self.config.max_steps)
            .with_frame_delay(self.config.frame_delay())
            .run(observer);

        let scored = flight.state.collided_body() == Some(target);
        if scored {
            self.scores[shooter.index()] += 1;
        }
        info!(
            ?shooter,
            speed,
            angle_degrees,
            scored,
            "shot landed: {:?} after {} steps",
            flight.state,
            flight.steps
        );

        self.current = shooter.opponent();
        Ok(ShotReport {
            shooter,
            flight,
            scored,
        })
    }
}

fn arrange(config: &GameConfig, rng: &mut impl Rng) -> Result<BodyRegistry, Error> {
    let count = planet_count(config.columns, config.lines, config.cells_per_planet);
    arrange_planets(
        rng,
        config.columns,
        config.lines,
        count,
        config.max_placement_attempts,
    )
}
