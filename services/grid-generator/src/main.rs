//! Weather grid generator.
//!
//! Creates the pipeline directory layout and builds the forecast grid:
//! GeoJSON cell geometries, a CSV of cell centroids and an HTML map.

mod config;
mod generate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use config::{GeneratorConfig, Overrides};
use project_layout::ProjectLayout;

#[derive(Parser, Debug)]
#[command(name = "grid-generator")]
#[command(about = "Builds the forecast grid and the pipeline folder layout")]
struct Args {
    /// Configuration file path (YAML)
    #[arg(short, long, env = "GRID_CONFIG")]
    config: Option<PathBuf>,

    /// Project root that relative output paths resolve against
    #[arg(long, default_value = ".", env = "GRID_PROJECT_ROOT")]
    root: PathBuf,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the bronze/silver/gold directory tree
    Layout,

    /// Build the grid and write its artifacts (default)
    Generate(GenerateArgs),
}

#[derive(clap::Args, Debug, Default)]
struct GenerateArgs {
    /// Bounding box override: "min_lon,min_lat,max_lon,max_lat"
    #[arg(long)]
    bbox: Option<String>,

    /// Number of rows (latitude bands)
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns (longitude bands)
    #[arg(long)]
    cols: Option<usize>,

    /// Directory for grid_cells.geojson and grid_coordinates.csv
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Output path of the HTML map
    #[arg(long)]
    map_path: Option<PathBuf>,

    /// Skip rendering the HTML map
    #[arg(long)]
    no_map: bool,
}

impl GenerateArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            bbox: self.bbox.clone(),
            rows: self.rows,
            cols: self.cols,
            metadata_dir: self.output_dir.clone(),
            map_path: self.map_path.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.json_logs)?;

    match &args.command {
        Some(Command::Layout) => run_layout(&args.root),
        Some(Command::Generate(opts)) => run_generate(&args, opts),
        None => run_generate(&args, &GenerateArgs::default()),
    }
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}

fn run_layout(root: &Path) -> Result<()> {
    info!(root = %root.display(), "Creating project folder structure");

    let layout = ProjectLayout::new(root);
    let created = layout
        .ensure()
        .with_context(|| format!("Failed to create layout under {:?}", root))?;

    info!(created = created.len(), "All folders created successfully");
    Ok(())
}

fn run_generate(args: &Args, opts: &GenerateArgs) -> Result<()> {
    let config = GeneratorConfig::load(args.config.as_deref())?;
    let config = config.apply(&opts.overrides())?;
    let generated = generate::generate(&config, &args.root, !opts.no_map)?;

    let map = generated.map_path.as_deref().unwrap_or(Path::new("-"));
    info!(
        cells = generated.cells,
        metadata_dir = %generated.metadata_dir.display(),
        map = %map.display(),
        "Artifacts written"
    );
    Ok(())
}
