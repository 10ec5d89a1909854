use anyhow::{bail, Result};
use clap::Parser;
use nalgebra::Point2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use std::path::PathBuf;

use battle_planets::config::GameConfig;
use battle_planets::flight::FlightState;
use battle_planets::game::{Match, Player};
use battle_planets::model::{grid_cell, BodyKind};

/// Fires one missile across a random planet field and prints where it went.
#[derive(Debug, Parser)]
struct Args {
    /// Launch speed, 0-10
    speed: f64,
    /// Launch angle in degrees, counterclockwise from east
    angle: f64,

    /// YAML file with game settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    columns: Option<u32>,
    #[arg(long)]
    lines: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    /// Which player fires, 1 or 2
    #[arg(long, default_value_t = 1)]
    player: u8,
    /// Log every flight at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let directive = if args.verbose {
        "battle_planets=debug"
    } else {
        "battle_planets=info"
    };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    let mut config = match &args.config {
        Some(path) => GameConfig::from_yaml_file(path)?,
        None => GameConfig::default(),
    };
    config.columns = args.columns.unwrap_or(config.columns);
    config.lines = args.lines.unwrap_or(config.lines);
    config.seed = args.seed.or(config.seed);
    // Nothing is animated here
    config.frame_delay_ms = 0;

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut game = Match::new(config, &mut rng)?;
    let player = match args.player {
        1 => Player::One,
        2 => Player::Two,
        other => bail!("there is no player {}", other),
    };
    if player != game.current_player() {
        game.pass();
    }

    for (id, body) in game.registry().iter() {
        let kind = match body.kind {
            BodyKind::Planet => "planet",
            BodyKind::Asteroid => "asteroid",
        };
        let (x, y) = body.grid_cell();
        println!("{} {} at ({}, {}), size {}", kind, id, x, y, body.size.diameter());
    }

    let mut path: Vec<Point2<f64>> = Vec::new();
    let shot = game.fire(args.speed, args.angle, &mut path)?;

    for (step, position) in path.iter().enumerate() {
        let (x, y) = grid_cell(position);
        println!("{:4}: ({}, {})", step + 1, x, y);
    }

    match shot.flight.state {
        FlightState::Collided(id) if shot.scored => println!("Direct hit on {}!", id),
        FlightState::Collided(id) => println!("Crashed into {}", id),
        FlightState::OutOfBounds => println!("Lost in space"),
        FlightState::Expired => println!("Still flying after {} steps", shot.flight.steps),
        FlightState::Flying => unreachable!("flights always end"),
    }
    println!(
        "Player 1: {}    Player 2: {}",
        game.score(Player::One),
        game.score(Player::Two)
    );

    Ok(())
}
