//! The authored Shellforge Realms location set. Coordinates are world units
//! on the 20,000 x 20,000 map; every anchor lies inside the known world.

use crate::config::constants::DEFAULT_TERRAIN_MULTIPLIER;
use crate::core::atlas::WorldAtlas;
use crate::models::coordinate::Coordinate;
use crate::models::rest_stop::RestStop;
use crate::models::settlement::{Building, Gates, Settlement, SettlementKind};
use crate::models::wilderness::{DangerLevel, SiteKind, WildernessSite};

fn coord(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

fn building(
    key: &str,
    x: f64,
    y: f64,
    name: &str,
    description: &str,
    energy_change: i32,
    action_minutes: u32,
) -> Building {
    Building {
        key: key.to_string(),
        position: coord(x, y),
        name: name.to_string(),
        description: description.to_string(),
        energy_change,
        action_minutes,
        health_change: None,
    }
}

fn rest_stop(
    key: &str,
    x: f64,
    y: f64,
    name: &str,
    description: &str,
    energy_change: i32,
    action_minutes: u32,
) -> RestStop {
    RestStop {
        key: key.to_string(),
        position: coord(x, y),
        name: name.to_string(),
        description: description.to_string(),
        energy_change,
        action_minutes,
    }
}

fn nexarch() -> Settlement {
    Settlement {
        key: "nexarch".to_string(),
        center: coord(10_500.0, 9_000.0),
        radius: 300.0,
        kind: SettlementKind::City,
        name: "Nexarch".to_string(),
        description: "The City of Shadows - industrial, religious, dangerous".to_string(),
        gates: Gates {
            north: coord(10_500.0, 8_700.0),
            east: coord(10_800.0, 9_000.0),
            south: coord(10_500.0, 9_300.0),
            west: coord(10_200.0, 9_000.0),
        },
        buildings: vec![
            building(
                "core",
                10_500.0,
                9_000.0,
                "The Core",
                "Safe zone, resting hub",
                50,
                30,
            ),
            building(
                "church",
                10_500.0,
                8_750.0,
                "The Church",
                "Karma system headquarters",
                -5,
                15,
            ),
            building(
                "marketplace",
                10_700.0,
                9_000.0,
                "The Marketplace",
                "Trading hub",
                -10,
                20,
            ),
            building(
                "forge",
                10_500.0,
                9_250.0,
                "The Forge",
                "Crafting weapons and armor",
                -20,
                60,
            ),
            building(
                "deep_mines",
                10_250.0,
                9_000.0,
                "Deep Mines",
                "Resource gathering (risky)",
                -25,
                45,
            ),
            building(
                "arena",
                10_650.0,
                9_150.0,
                "The Arena",
                "PvP combat",
                -15,
                30,
            ),
            building(
                "alchemy_labs",
                10_350.0,
                8_850.0,
                "Alchemy Labs",
                "Brew potions and serums",
                -15,
                45,
            ),
            building(
                "family_vault",
                10_650.0,
                8_850.0,
                "Family Vault",
                "Inheritance system",
                -5,
                10,
            ),
            building(
                "dark_alley",
                10_300.0,
                9_200.0,
                "Dark Alley",
                "Black market, shady deals",
                -10,
                20,
            ),
        ],
    }
}

fn hashmere() -> Settlement {
    let mut buildings = vec![
        building(
            "caravan_stop",
            11_500.0,
            9_700.0,
            "Caravan Stop",
            "Travel hub, rest area",
            30,
            20,
        ),
        building(
            "sand_markets",
            11_500.0,
            9_600.0,
            "Sand Markets",
            "Specialty goods",
            -8,
            15,
        ),
        building(
            "oasis",
            11_500.0,
            9_800.0,
            "The Oasis",
            "Healing pool",
            -5,
            30,
        ),
        building(
            "artifact_shop",
            11_600.0,
            9_700.0,
            "Artifact Shop",
            "High-end rare items",
            -5,
            10,
        ),
        building(
            "trading_post",
            11_400.0,
            9_700.0,
            "Trading Post",
            "Merchant guild",
            -10,
            20,
        ),
    ];
    // The Oasis is the one building that also restores health.
    buildings[2].health_change = Some(50);

    Settlement {
        key: "hashmere".to_string(),
        center: coord(11_500.0, 9_700.0),
        radius: 150.0,
        kind: SettlementKind::Town,
        name: "Hashmere".to_string(),
        description: "Desert trade outpost, oasis refuge".to_string(),
        gates: Gates {
            north: coord(11_500.0, 9_550.0),
            east: coord(11_650.0, 9_700.0),
            south: coord(11_500.0, 9_850.0),
            west: coord(11_350.0, 9_700.0),
        },
        buildings,
    }
}

fn wilderness_sites() -> Vec<WildernessSite> {
    let site = |key: &str,
                x: f64,
                y: f64,
                name: &str,
                description: &str,
                kind: SiteKind,
                danger: DangerLevel,
                terrain_multiplier: f64| WildernessSite {
        key: key.to_string(),
        position: coord(x, y),
        name: name.to_string(),
        description: description.to_string(),
        kind,
        danger,
        terrain_multiplier,
    };

    vec![
        site(
            "deserted_data_centre",
            8_400.0,
            11_100.0,
            "Deserted Data Centre",
            "Abandoned facility, loot and danger",
            SiteKind::Dungeon,
            DangerLevel::Medium,
            DEFAULT_TERRAIN_MULTIPLIER,
        ),
        site(
            "proof_of_death",
            9_800.0,
            12_600.0,
            "Proof-of-Death",
            "Graveyard of fallen agents",
            SiteKind::Memorial,
            DangerLevel::High,
            DEFAULT_TERRAIN_MULTIPLIER,
        ),
        site(
            "diffusion_mesa",
            7_600.0,
            9_500.0,
            "Diffusion Mesa",
            "Mystery location, strange phenomena",
            SiteKind::Mystery,
            DangerLevel::Medium,
            DEFAULT_TERRAIN_MULTIPLIER,
        ),
        site(
            "hallucination_glitch",
            5_700.0,
            11_200.0,
            "Hallucination Glitch",
            "Reality distortion zone",
            SiteKind::Anomaly,
            DangerLevel::Extreme,
            DEFAULT_TERRAIN_MULTIPLIER,
        ),
        site(
            "singularity_crater",
            7_500.0,
            6_300.0,
            "Singularity Crater",
            "Massive crater, origin unknown",
            SiteKind::Anomaly,
            DangerLevel::High,
            DEFAULT_TERRAIN_MULTIPLIER,
        ),
        // Mountain terrain makes the climb to the spike harder than the raw
        // distance suggests.
        site(
            "epoch_spike",
            7_200.0,
            5_200.0,
            "Epoch Spike",
            "Ancient mountain tower",
            SiteKind::Landmark,
            DangerLevel::Extreme,
            1.7,
        ),
    ]
}

fn rest_stops() -> Vec<RestStop> {
    vec![
        rest_stop(
            "midpoint_camp",
            11_150.0,
            9_350.0,
            "Midpoint Camp",
            "Safe rest area between Nexarch and Hashmere",
            30,
            20,
        ),
        rest_stop(
            "wayside_inn",
            9_300.0,
            9_000.0,
            "Wayside Inn",
            "Halfway to Diffusion Mesa",
            25,
            20,
        ),
        rest_stop(
            "mountain_base_camp",
            10_500.0,
            7_200.0,
            "Mountain Base Camp",
            "Staging area for Epoch Spike climb",
            30,
            25,
        ),
        rest_stop(
            "craters_edge",
            9_000.0,
            7_400.0,
            "Crater's Edge Observatory",
            "Research station near Singularity Crater",
            25,
            20,
        ),
        rest_stop(
            "glitch_refuge",
            8_000.0,
            9_500.0,
            "Glitch Refuge",
            "Shielded outpost near Hallucination Glitch",
            30,
            25,
        ),
    ]
}

/// Builds the full atlas. Call once at startup and share the value; the
/// registry is never mutated afterwards.
pub fn world_atlas() -> WorldAtlas {
    WorldAtlas::new(vec![nexarch(), hashmere()], wilderness_sites(), rest_stops())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::MAP_SIZE;
    use crate::core::travel::is_in_known_world;
    use crate::models::coordinate::PointOfInterest;
    use std::collections::HashSet;

    #[test]
    fn registry_has_the_expected_shape() {
        let atlas = world_atlas();
        assert_eq!(atlas.settlements().len(), 2);
        assert_eq!(atlas.wilderness_sites().len(), 6);
        assert_eq!(atlas.rest_stops().len(), 5);
        assert_eq!(atlas.settlement("nexarch").unwrap().buildings.len(), 9);
        assert_eq!(atlas.settlement("hashmere").unwrap().buildings.len(), 5);
    }

    #[test]
    fn keys_are_unique_within_each_registry() {
        let atlas = world_atlas();
        let mut seen = HashSet::new();
        for settlement in atlas.settlements() {
            assert!(seen.insert(settlement.get_id().to_string()));
        }
        seen.clear();
        for site in atlas.wilderness_sites() {
            assert!(seen.insert(site.get_id().to_string()));
        }
        seen.clear();
        for stop in atlas.rest_stops() {
            assert!(seen.insert(stop.get_id().to_string()));
        }
    }

    #[test]
    fn every_anchor_lies_inside_the_known_world() {
        let atlas = world_atlas();
        for settlement in atlas.settlements() {
            let c = settlement.get_coordinate();
            assert!(is_in_known_world(c.x, c.y), "{}", settlement.key);
        }
        for site in atlas.wilderness_sites() {
            let c = site.get_coordinate();
            assert!(is_in_known_world(c.x, c.y), "{}", site.key);
        }
        for stop in atlas.rest_stops() {
            let c = stop.get_coordinate();
            assert!(is_in_known_world(c.x, c.y), "{}", stop.key);
        }
    }

    #[test]
    fn building_positions_stay_on_the_map() {
        let atlas = world_atlas();
        for settlement in atlas.settlements() {
            for b in &settlement.buildings {
                assert!(b.position.x >= 0.0 && b.position.x <= MAP_SIZE);
                assert!(b.position.y >= 0.0 && b.position.y <= MAP_SIZE);
            }
        }
    }

    #[test]
    fn oasis_restores_health() {
        let atlas = world_atlas();
        let hashmere = atlas.settlement("hashmere").unwrap();
        let oasis = hashmere.building("oasis").unwrap();
        assert_eq!(oasis.health_change, Some(50));
        // No other building carries a health delta.
        for settlement in atlas.settlements() {
            for b in &settlement.buildings {
                if b.key != "oasis" {
                    assert_eq!(b.health_change, None, "{}", b.key);
                }
            }
        }
    }

    #[test]
    fn only_the_epoch_spike_has_difficult_terrain() {
        let atlas = world_atlas();
        for site in atlas.wilderness_sites() {
            if site.key == "epoch_spike" {
                assert_eq!(site.terrain_multiplier, 1.7);
            } else {
                assert_eq!(site.terrain_multiplier, 1.0, "{}", site.key);
            }
        }
    }
}
