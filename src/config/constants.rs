// World Scale Constants
pub const MAP_SIZE: f64 = 20_000.0;              // Full map extent on both axes
pub const KNOWN_WORLD_MIN: f64 = 5_000.0;        // Playable area bounds
pub const KNOWN_WORLD_MAX: f64 = 15_000.0;

// Travel Constants
pub const TRAVEL_SPEED: f64 = 20.0;              // units per minute
pub const ENERGY_PER_MIN: f64 = 0.6;             // energy cost per minute of travel
pub const DEFAULT_TERRAIN_MULTIPLIER: f64 = 1.0; // open terrain, no travel penalty

// Nearest-Location Classification
// Settlements match inside their own influence radius; wilderness sites all
// share this fixed one. Rest stops never take part in the search.
pub const WILDERNESS_MATCH_RADIUS: f64 = 500.0;
