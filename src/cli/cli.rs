use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Shellforge Realms world atlas inspector", long_about = None)]
pub struct Args {
    #[arg(long, help = "Starting location key for a route query")]
    from: Option<String>,

    #[arg(long, help = "Destination location key for a route query")]
    to: Option<String>,

    #[arg(
        long,
        num_args = 2,
        value_names = ["X", "Y"],
        help = "Classify the nearest location to a world coordinate"
    )]
    nearest: Option<Vec<f64>>,

    #[arg(long, default_value_t = false, help = "Dump the full atlas as JSON")]
    json: bool,

    #[arg(long, help = "Export the location tables as CSV into this directory")]
    export_dir: Option<String>,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

impl Args {
    pub fn from_key(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn to_key(&self) -> Option<&str> {
        self.to.as_deref()
    }

    pub fn nearest(&self) -> Option<(f64, f64)> {
        self.nearest.as_ref().map(|coords| (coords[0], coords[1]))
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn export_dir(&self) -> Option<&str> {
        self.export_dir.as_deref()
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}
