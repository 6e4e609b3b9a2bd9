use serde::{Deserialize, Serialize};

use crate::models::coordinate::{Coordinate, PointOfInterest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementKind {
    City,
    Town,
}

impl SettlementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettlementKind::City => "city",
            SettlementKind::Town => "town",
        }
    }
}

/// Entry coordinates on the settlement's influence circle, one per cardinal
/// direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gates {
    pub north: Coordinate,
    pub east: Coordinate,
    pub south: Coordinate,
    pub west: Coordinate,
}

/// A named building inside a settlement. Visiting one applies the energy
/// delta (and health delta where present) and takes `action_minutes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub key: String,
    pub position: Coordinate,
    pub name: String,
    pub description: String,
    pub energy_change: i32,
    pub action_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub health_change: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settlement {
    pub key: String,
    pub center: Coordinate,
    pub radius: f64,
    pub kind: SettlementKind,
    pub name: String,
    pub description: String,
    pub gates: Gates,
    pub buildings: Vec<Building>,
}

impl Settlement {
    pub fn building(&self, key: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.key == key)
    }
}

impl PointOfInterest for Settlement {
    fn get_coordinate(&self) -> &Coordinate {
        &self.center
    }

    fn get_id(&self) -> &str {
        &self.key
    }
}
