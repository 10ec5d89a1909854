pub mod arrangement;
pub mod config;
pub mod error;
pub mod flight;
pub mod game;
pub mod math;
pub mod model;
pub mod physics;

pub use error::Error;
