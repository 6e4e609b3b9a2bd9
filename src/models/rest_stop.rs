use serde::{Deserialize, Serialize};

use crate::models::coordinate::{Coordinate, PointOfInterest};

/// A safe waypoint between the major locations. Resting here restores energy
/// but rest stops never count towards nearest-location classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestStop {
    pub key: String,
    pub position: Coordinate,
    pub name: String,
    pub description: String,
    pub energy_change: i32,
    pub action_minutes: u32,
}

impl PointOfInterest for RestStop {
    fn get_coordinate(&self) -> &Coordinate {
        &self.position
    }

    fn get_id(&self) -> &str {
        &self.key
    }
}
