use std::error::Error;
use std::path::Path;

use clap::Parser;

use shellforge_world::cli::cli::Args;
use shellforge_world::core::atlas::WorldAtlas;
use shellforge_world::core::travel::{format_travel_time, is_in_known_world};
use shellforge_world::data::locations;
use shellforge_world::utils::{csv_export, logging};

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args = Args::parse();

    logging::init_logging(args.debug_logging());

    let atlas = locations::world_atlas();
    let mut handled = false;

    if args.json() {
        println!("{}", serde_json::to_string_pretty(&atlas)?);
        handled = true;
    }

    if let Some(dir) = args.export_dir() {
        let path = csv_export::export_locations_csv(&atlas, Path::new(dir))?;
        println!("Exported location tables to {}", path.display());
        handled = true;
    }

    if let (Some(from), Some(to)) = (args.from_key(), args.to_key()) {
        let route = atlas.route(from, to)?;
        println!(
            "{} -> {}: {:.0} units, {} ({:.1} min), {} energy",
            route.from,
            route.to,
            route.distance,
            format_travel_time(route.minutes),
            route.minutes,
            route.energy
        );
        handled = true;
    }

    if let Some((x, y)) = args.nearest() {
        let nearest = atlas.nearest_location(x, y);
        let region = if is_in_known_world(x, y) {
            "known world"
        } else {
            "beyond the known world"
        };
        match nearest.key() {
            Some(key) => println!("({x}, {y}) [{region}]: {} ({key})", nearest.name()),
            None => println!("({x}, {y}) [{region}]: {}", nearest.name()),
        }
        handled = true;
    }

    if !handled {
        print_summary(&atlas);
    }

    Ok(())
}

fn print_summary(atlas: &WorldAtlas) {
    println!("Shellforge Realms world atlas");
    println!(
        "{} settlements, {} wilderness sites, {} rest stops",
        atlas.settlements().len(),
        atlas.wilderness_sites().len(),
        atlas.rest_stops().len()
    );
    for settlement in atlas.settlements() {
        println!(
            "  {:12} {:5} at ({:.0}, {:.0}), {} buildings",
            settlement.key,
            settlement.kind.as_str(),
            settlement.center.x,
            settlement.center.y,
            settlement.buildings.len()
        );
    }
    for site in atlas.wilderness_sites() {
        println!(
            "  {:22} {:8} at ({:.0}, {:.0}), danger {}",
            site.key,
            site.kind.as_str(),
            site.position.x,
            site.position.y,
            site.danger.as_str()
        );
    }
    for stop in atlas.rest_stops() {
        println!(
            "  {:20} rest stop at ({:.0}, {:.0}), +{} energy",
            stop.key, stop.position.x, stop.position.y, stop.energy_change
        );
    }
}
