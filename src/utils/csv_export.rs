use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;

use crate::core::atlas::WorldAtlas;

/// Writes every location in the atlas to a timestamped CSV file under `dir`
/// and returns the path. One row per settlement, wilderness site, and rest
/// stop; columns that do not apply to a registry are left empty.
pub fn export_locations_csv(atlas: &WorldAtlas, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("locations_{}.csv", timestamp));

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record([
        "registry",
        "key",
        "name",
        "type",
        "x",
        "y",
        "radius",
        "danger",
        "terrain_multiplier",
    ])?;

    for settlement in atlas.settlements() {
        let x = settlement.center.x.to_string();
        let y = settlement.center.y.to_string();
        let radius = settlement.radius.to_string();
        writer.write_record([
            "settlement",
            settlement.key.as_str(),
            settlement.name.as_str(),
            settlement.kind.as_str(),
            x.as_str(),
            y.as_str(),
            radius.as_str(),
            "",
            "",
        ])?;
    }

    for site in atlas.wilderness_sites() {
        let x = site.position.x.to_string();
        let y = site.position.y.to_string();
        let multiplier = site.terrain_multiplier.to_string();
        writer.write_record([
            "wilderness",
            site.key.as_str(),
            site.name.as_str(),
            site.kind.as_str(),
            x.as_str(),
            y.as_str(),
            "",
            site.danger.as_str(),
            multiplier.as_str(),
        ])?;
    }

    for stop in atlas.rest_stops() {
        let x = stop.position.x.to_string();
        let y = stop.position.y.to_string();
        writer.write_record([
            "rest_stop",
            stop.key.as_str(),
            stop.name.as_str(),
            "rest_stop",
            x.as_str(),
            y.as_str(),
            "",
            "",
            "",
        ])?;
    }

    writer.flush()?;
    Ok(path)
}
