//! Game settings, loadable from YAML.
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to change:
//!
//! ```yaml
//! columns: 120
//! lines: 40
//! seed: 7
//! frame_delay_ms: 50
//! max_steps: 2000
//! ```

use serde::Deserialize;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::error::Error;
use crate::flight::PlayArea;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub columns: u32,              // terminal width, in cells
    pub lines: u32,                // terminal height, in cells
    pub seed: Option<u64>,         // arrangement seed; random if missing
    pub frame_delay_ms: u64,       // pause between animation frames
    pub origin_radius: f64,        // missile spawn distance from the firing planet's center
    pub cells_per_planet: u32,     // terminal area per planet
    pub max_steps: Option<usize>,  // give up on a flight after this many frames
    pub max_placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            columns: 80,
            lines: 24,
            seed: None,
            frame_delay_ms: 100,
            origin_radius: 9.0,
            cells_per_planet: 700,
            max_steps: None,
            max_placement_attempts: 10_000,
        }
    }
}

impl GameConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn play_area(&self) -> PlayArea {
        PlayArea::for_terminal(self.columns, self.lines)
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}
