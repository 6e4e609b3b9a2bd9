// Module declarations for the Shellforge Realms world core

// Configuration
pub mod config {
    pub mod constants;
}

// Model definitions
pub mod models {
    pub mod coordinate;
    pub mod rest_stop;
    pub mod settlement;
    pub mod wilderness;
}

// Registry and geometry
pub mod core {
    pub mod atlas;
    pub mod travel;
}

// Authored world data
pub mod data {
    pub mod locations;
}

// Utility functions
pub mod utils {
    pub mod csv_export;
    pub mod logging;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::core::atlas::{AtlasError, NearestLocation, Route, WorldAtlas};
pub use crate::core::travel::{
    distance, energy_cost, is_in_known_world, map_percent_to_world, travel_time,
    world_to_map_percent,
};
pub use crate::data::locations::world_atlas;
pub use crate::models::coordinate::Coordinate;
