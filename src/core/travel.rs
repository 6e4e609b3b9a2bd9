use serde::{Deserialize, Serialize};

use crate::config::constants::{
    ENERGY_PER_MIN, KNOWN_WORLD_MAX, KNOWN_WORLD_MIN, MAP_SIZE, TRAVEL_SPEED,
};
use crate::models::coordinate::Coordinate;

/// A point in normalized map space, both axes in 0-100 percent of `MAP_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPercent {
    pub x: f64,
    pub y: f64,
}

pub fn distance(from: &Coordinate, to: &Coordinate) -> f64 {
    from.distance_to(to)
}

/// Minutes of travel between two points at the global travel speed, scaled by
/// the terrain multiplier of the route (1.0 for open terrain).
pub fn travel_time(from: &Coordinate, to: &Coordinate, terrain_multiplier: f64) -> f64 {
    distance(from, to) / TRAVEL_SPEED * terrain_multiplier
}

/// Energy charged for a trip. Always rounds up, so partial-minute travel is
/// never undercharged.
pub fn energy_cost(from: &Coordinate, to: &Coordinate, terrain_multiplier: f64) -> u32 {
    (travel_time(from, to, terrain_multiplier) * ENERGY_PER_MIN).ceil() as u32
}

/// Whether a point lies inside the playable sub-region. Both bounds are
/// inclusive.
pub fn is_in_known_world(x: f64, y: f64) -> bool {
    x >= KNOWN_WORLD_MIN && x <= KNOWN_WORLD_MAX && y >= KNOWN_WORLD_MIN && y <= KNOWN_WORLD_MAX
}

pub fn world_to_map_percent(x: f64, y: f64) -> MapPercent {
    MapPercent {
        x: x / MAP_SIZE * 100.0,
        y: y / MAP_SIZE * 100.0,
    }
}

pub fn map_percent_to_world(percent_x: f64, percent_y: f64) -> Coordinate {
    Coordinate::new(percent_x / 100.0 * MAP_SIZE, percent_y / 100.0 * MAP_SIZE)
}

/// Renders a duration in minutes as "2h 21min" for route listings.
pub fn format_travel_time(minutes: f64) -> String {
    let total = minutes.round() as u64;
    format!("{}h {}min", total / 60, total % 60)
}
