use rand::Rng;
use tracing::debug;

use crate::error::Error;
use crate::math::ASPECT;
use crate::model::{Body, BodyRegistry, BodySize};

// Lines reserved for the header and the prompt block
const TOP_LINES: u32 = 3;
const BOTTOM_LINES: u32 = 4;

/// How many planets fit on a terminal: one per `cells_per_planet`, but never
/// fewer than the two home planets.
pub fn planet_count(columns: u32, lines: u32, cells_per_planet: u32) -> usize {
    let area = u64::from(columns) * u64::from(lines);
    let count = area / u64::from(cells_per_planet.max(1));
    (count as usize).max(2)
}

/// Scatters `count` planets over the terminal so that no two overlap.
///
/// The first two planets are the players' home planets and are always size
/// 9; the rest get a random size. Planets are placed one at a time, and a
/// candidate spot is redrawn until it clears every planet placed before it.
pub fn arrange_planets(
    rng: &mut impl Rng,
    columns: u32,
    lines: u32,
    count: usize,
    max_attempts: usize,
) -> Result<BodyRegistry, Error> {
    let cols_range = i64::from(columns);
    let lines_range = i64::from(lines) - i64::from(TOP_LINES + BOTTOM_LINES);

    let largest = i64::from(BodySize::Nine.diameter());
    if cols_range - 2 * largest <= 0 || lines_range - largest <= 0 {
        return Err(Error::FieldTooSmall { columns, lines });
    }

    let sizes: Vec<BodySize> = (0..count)
        .map(|i| {
            if i < 2 {
                BodySize::Nine
            } else {
                BodySize::ALL[rng.gen_range(0..BodySize::ALL.len())]
            }
        })
        .collect();

    let mut placed: Vec<Body> = Vec::with_capacity(count);
    let mut attempts = 0;
    for size in sizes {
        let s = i64::from(size.diameter());
        loop {
            if attempts >= max_attempts {
                return Err(Error::ArrangementFailed { attempts });
            }
            attempts += 1;

            // Columns are half as wide as lines are tall, hence the 2s margin
            let x = rng.gen_range(0..cols_range - 2 * s) + s;
            let y = rng.gen_range(0..lines_range - s) + i64::from(TOP_LINES) + s / 2;
            let candidate = Body::planet(x as f64, y as f64, size);

            if placed.iter().all(|other| !overlaps(&candidate, other)) {
                placed.push(candidate);
                break;
            }
        }
    }

    debug!(count, attempts, "arranged planets");
    Ok(placed.into_iter().collect())
}

fn overlaps(a: &Body, b: &Body) -> bool {
    let dx = (a.position.x - b.position.x) * ASPECT;
    let dy = a.position.y - b.position.y;
    let min_dist = f64::from(a.size.diameter()) / 2.0 + f64::from(b.size.diameter()) / 2.0;
    (dx * dx + dy * dy).sqrt() < min_dist
}
