use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::constants::{DEFAULT_TERRAIN_MULTIPLIER, WILDERNESS_MATCH_RADIUS};
use crate::core::travel;
use crate::models::coordinate::Coordinate;
use crate::models::rest_stop::RestStop;
use crate::models::settlement::Settlement;
use crate::models::wilderness::WildernessSite;

#[derive(Debug)]
pub enum AtlasError {
    LocationNotFound(String),
}

impl std::fmt::Display for AtlasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtlasError::LocationNotFound(key) => write!(f, "location not found: {}", key),
        }
    }
}

impl std::error::Error for AtlasError {}

/// Result of classifying a world coordinate against the registry. The
/// `Unknown` variant is the documented fallback when no settlement or
/// wilderness radius covers the point; it is not an error.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "registry", rename_all = "lowercase")]
pub enum NearestLocation<'a> {
    City {
        key: &'a str,
        settlement: &'a Settlement,
        distance: f64,
    },
    Wilderness {
        key: &'a str,
        site: &'a WildernessSite,
        distance: f64,
    },
    Unknown,
}

impl NearestLocation<'_> {
    pub fn name(&self) -> &str {
        match self {
            NearestLocation::City { settlement, .. } => &settlement.name,
            NearestLocation::Wilderness { site, .. } => &site.name,
            NearestLocation::Unknown => "Unknown Location",
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            NearestLocation::City { key, .. } => Some(key),
            NearestLocation::Wilderness { key, .. } => Some(key),
            NearestLocation::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, NearestLocation::Unknown)
    }
}

/// Travel arithmetic between two named locations. The terrain multiplier of
/// the destination applies to the whole trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub minutes: f64,
    pub energy: u32,
}

/// The canonical, immutable set of world locations. Built once at startup
/// from the authored data in `data::locations` and only read afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldAtlas {
    settlements: Vec<Settlement>,
    wilderness: Vec<WildernessSite>,
    rest_stops: Vec<RestStop>,
}

impl WorldAtlas {
    pub fn new(
        settlements: Vec<Settlement>,
        wilderness: Vec<WildernessSite>,
        rest_stops: Vec<RestStop>,
    ) -> Self {
        Self {
            settlements,
            wilderness,
            rest_stops,
        }
    }

    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }

    pub fn wilderness_sites(&self) -> &[WildernessSite] {
        &self.wilderness
    }

    pub fn rest_stops(&self) -> &[RestStop] {
        &self.rest_stops
    }

    pub fn settlement(&self, key: &str) -> Result<&Settlement, AtlasError> {
        self.settlements
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| AtlasError::LocationNotFound(key.to_string()))
    }

    pub fn wilderness_site(&self, key: &str) -> Result<&WildernessSite, AtlasError> {
        self.wilderness
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| AtlasError::LocationNotFound(key.to_string()))
    }

    pub fn rest_stop(&self, key: &str) -> Result<&RestStop, AtlasError> {
        self.rest_stops
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| AtlasError::LocationNotFound(key.to_string()))
    }

    /// Resolves any location key to its anchor coordinate and the terrain
    /// multiplier charged for travel ending there. Settlements anchor at
    /// their center; wilderness sites and rest stops at their position.
    pub fn anchor(&self, key: &str) -> Result<(&Coordinate, f64), AtlasError> {
        if let Some(settlement) = self.settlements.iter().find(|s| s.key == key) {
            return Ok((&settlement.center, DEFAULT_TERRAIN_MULTIPLIER));
        }
        if let Some(site) = self.wilderness.iter().find(|s| s.key == key) {
            return Ok((&site.position, site.terrain_multiplier));
        }
        if let Some(stop) = self.rest_stops.iter().find(|s| s.key == key) {
            return Ok((&stop.position, DEFAULT_TERRAIN_MULTIPLIER));
        }
        Err(AtlasError::LocationNotFound(key.to_string()))
    }

    /// Computes distance, travel time, and energy between two named
    /// locations, applying the destination's terrain multiplier.
    pub fn route(&self, from_key: &str, to_key: &str) -> Result<Route, AtlasError> {
        let (from, _) = self.anchor(from_key)?;
        let (to, terrain_multiplier) = self.anchor(to_key)?;

        let distance = travel::distance(from, to);
        let minutes = travel::travel_time(from, to, terrain_multiplier);
        let energy = travel::energy_cost(from, to, terrain_multiplier);

        debug!(from_key, to_key, distance, minutes, energy, "computed route");

        Ok(Route {
            from: from_key.to_string(),
            to: to_key.to_string(),
            distance,
            minutes,
            energy,
        })
    }

    /// Finds the location whose classification radius covers the query point,
    /// preferring the closest when several do. Settlements match strictly
    /// inside their own radius, wilderness sites strictly inside the fixed
    /// `WILDERNESS_MATCH_RADIUS`; rest stops are excluded. Falls back to
    /// `NearestLocation::Unknown` when nothing qualifies.
    pub fn nearest_location(&self, x: f64, y: f64) -> NearestLocation<'_> {
        let probe = Coordinate::new(x, y);
        let mut nearest = NearestLocation::Unknown;
        let mut min_distance = f64::INFINITY;

        for settlement in &self.settlements {
            let dist = probe.distance_to(&settlement.center);
            if dist < settlement.radius && dist < min_distance {
                min_distance = dist;
                nearest = NearestLocation::City {
                    key: &settlement.key,
                    settlement,
                    distance: dist,
                };
            }
        }

        for site in &self.wilderness {
            let dist = probe.distance_to(&site.position);
            if dist < WILDERNESS_MATCH_RADIUS && dist < min_distance {
                min_distance = dist;
                nearest = NearestLocation::Wilderness {
                    key: &site.key,
                    site,
                    distance: dist,
                };
            }
        }

        debug!(x, y, result = nearest.name(), "nearest location lookup");
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::locations::world_atlas;
    use crate::models::settlement::{Gates, SettlementKind};
    use crate::models::wilderness::{DangerLevel, SiteKind};

    fn test_settlement(key: &str, x: f64, y: f64, radius: f64) -> Settlement {
        let center = Coordinate::new(x, y);
        Settlement {
            key: key.to_string(),
            center,
            radius,
            kind: SettlementKind::Town,
            name: key.to_string(),
            description: String::new(),
            gates: Gates {
                north: center,
                east: center,
                south: center,
                west: center,
            },
            buildings: Vec::new(),
        }
    }

    fn test_site(key: &str, x: f64, y: f64) -> WildernessSite {
        WildernessSite {
            key: key.to_string(),
            position: Coordinate::new(x, y),
            name: key.to_string(),
            description: String::new(),
            kind: SiteKind::Mystery,
            danger: DangerLevel::Low,
            terrain_multiplier: 1.0,
        }
    }

    #[test]
    fn settlement_center_classifies_as_that_settlement() {
        let atlas = world_atlas();
        let nearest = atlas.nearest_location(10_500.0, 9_000.0);
        match nearest {
            NearestLocation::City { key, distance, .. } => {
                assert_eq!(key, "nexarch");
                assert_eq!(distance, 0.0);
            }
            other => panic!("expected nexarch, got {:?}", other),
        }
    }

    #[test]
    fn open_terrain_falls_back_to_unknown_location() {
        let atlas = world_atlas();
        let nearest = atlas.nearest_location(14_000.0, 14_000.0);
        assert!(!nearest.is_known());
        assert_eq!(nearest.name(), "Unknown Location");
        assert_eq!(nearest.key(), None);
    }

    #[test]
    fn settlement_radius_is_strictly_exclusive() {
        let atlas = world_atlas();
        // Exactly 300 units east of the Nexarch center, on the radius itself.
        let nearest = atlas.nearest_location(10_800.0, 9_000.0);
        assert!(!nearest.is_known());
    }

    #[test]
    fn wilderness_match_radius_is_strictly_exclusive() {
        let atlas = world_atlas();
        // Exactly 500 units east of the Deserted Data Centre, on the fixed
        // wilderness radius itself.
        let nearest = atlas.nearest_location(8_900.0, 11_100.0);
        assert!(!nearest.is_known());
    }

    #[test]
    fn closer_of_two_overlapping_sites_wins() {
        let atlas = WorldAtlas::new(
            Vec::new(),
            vec![
                test_site("far_site", 1_000.0, 1_000.0),
                test_site("near_site", 1_600.0, 1_000.0),
            ],
            Vec::new(),
        );
        // Both radii cover the probe: 400 units to far_site, 200 to near_site.
        let nearest = atlas.nearest_location(1_400.0, 1_000.0);
        assert_eq!(nearest.key(), Some("near_site"));
    }

    #[test]
    fn first_listed_site_wins_on_exact_distance_tie() {
        let atlas = WorldAtlas::new(
            Vec::new(),
            vec![
                test_site("west_site", 1_000.0, 1_000.0),
                test_site("east_site", 1_800.0, 1_000.0),
            ],
            Vec::new(),
        );
        // 400 units to either site; the strict less-than comparison keeps
        // the match encountered first.
        let nearest = atlas.nearest_location(1_400.0, 1_000.0);
        assert_eq!(nearest.key(), Some("west_site"));
    }

    #[test]
    fn closest_covering_location_wins_across_registries() {
        let atlas = WorldAtlas::new(
            vec![test_settlement("old_hold", 1_000.0, 1_000.0, 800.0)],
            vec![test_site("near_ruin", 1_500.0, 1_000.0)],
            Vec::new(),
        );
        // The settlement circle covers the probe at 600 units, but the ruin
        // is only 100 away.
        let nearest = atlas.nearest_location(1_600.0, 1_000.0);
        assert_eq!(nearest.key(), Some("near_ruin"));
    }

    #[test]
    fn point_near_wilderness_site_matches_it() {
        let atlas = world_atlas();
        let nearest = atlas.nearest_location(8_450.0, 11_150.0);
        match nearest {
            NearestLocation::Wilderness { key, .. } => {
                assert_eq!(key, "deserted_data_centre");
            }
            other => panic!("expected deserted_data_centre, got {:?}", other),
        }
    }

    #[test]
    fn route_between_settlement_and_rest_stop() {
        let atlas = world_atlas();
        // Nexarch (10500, 9000) to Mountain Base Camp (10500, 7200):
        // 1800 units = 90 minutes = ceil(54.0) = 54 energy.
        let route = atlas.route("nexarch", "mountain_base_camp").unwrap();
        assert!((route.distance - 1_800.0).abs() < 1e-9);
        assert!((route.minutes - 90.0).abs() < 1e-9);
        assert_eq!(route.energy, 54);
    }

    #[test]
    fn route_applies_destination_terrain_multiplier() {
        let atlas = world_atlas();
        let route = atlas.route("nexarch", "epoch_spike").unwrap();
        let spike = atlas.wilderness_site("epoch_spike").unwrap();
        assert_eq!(spike.terrain_multiplier, 1.7);

        let expected_minutes = route.distance / 20.0 * 1.7;
        assert!((route.minutes - expected_minutes).abs() < 1e-9);
        assert_eq!(route.energy, (route.minutes * 0.6).ceil() as u32);
    }

    #[test]
    fn route_to_unknown_key_is_an_error() {
        let atlas = world_atlas();
        let err = atlas.route("nexarch", "atlantis").unwrap_err();
        assert_eq!(err.to_string(), "location not found: atlantis");
    }

    #[test]
    fn lookups_resolve_known_keys() {
        let atlas = world_atlas();
        assert_eq!(atlas.settlement("hashmere").unwrap().name, "Hashmere");
        assert_eq!(
            atlas.rest_stop("wayside_inn").unwrap().name,
            "Wayside Inn"
        );
        assert!(atlas.settlement("nowhere").is_err());
    }
}
