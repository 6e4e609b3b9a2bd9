use serde::{Deserialize, Serialize};

use crate::config::constants::DEFAULT_TERRAIN_MULTIPLIER;
use crate::models::coordinate::{Coordinate, PointOfInterest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteKind {
    Dungeon,
    Memorial,
    Mystery,
    Anomaly,
    Landmark,
}

impl SiteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteKind::Dungeon => "dungeon",
            SiteKind::Memorial => "memorial",
            SiteKind::Mystery => "mystery",
            SiteKind::Anomaly => "anomaly",
            SiteKind::Landmark => "landmark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DangerLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl DangerLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DangerLevel::Low => "low",
            DangerLevel::Medium => "medium",
            DangerLevel::High => "high",
            DangerLevel::Extreme => "extreme",
        }
    }
}

/// A standalone point of interest outside any settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WildernessSite {
    pub key: String,
    pub position: Coordinate,
    pub name: String,
    pub description: String,
    pub kind: SiteKind,
    pub danger: DangerLevel,
    /// Scales travel cost for trips ending here. 1.0 for open terrain,
    /// above 1.0 for difficult ground such as mountains.
    #[serde(default = "default_terrain_multiplier")]
    pub terrain_multiplier: f64,
}

fn default_terrain_multiplier() -> f64 {
    DEFAULT_TERRAIN_MULTIPLIER
}

impl PointOfInterest for WildernessSite {
    fn get_coordinate(&self) -> &Coordinate {
        &self.position
    }

    fn get_id(&self) -> &str {
        &self.key
    }
}
