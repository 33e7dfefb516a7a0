//! The `generate` pipeline: build the grid, export it, then draw the map.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use crate::config::GeneratorConfig;

/// What a generate run wrote.
#[derive(Debug, Clone)]
pub struct Generated {
    pub cells: usize,
    pub metadata_dir: PathBuf,
    /// `None` when map rendering was skipped.
    pub map_path: Option<PathBuf>,
}

/// Validate `config`, build its grid and write the artifacts under `root`.
///
/// Export runs before the map. If the map cannot be written the exported
/// files are kept and the error is returned.
pub fn generate(config: &GeneratorConfig, root: &Path, render_map: bool) -> Result<Generated> {
    config.validate()?;

    let spec = config.grid_spec();
    info!(
        region = %config.region.name,
        rows = spec.rows,
        cols = spec.cols,
        "Creating grid"
    );

    let builder = config.builder();
    let grid = builder.build().context("Failed to build grid")?;
    info!(cells = grid.len(), "Created grid cells");

    for cell in grid.iter().take(5) {
        debug!(
            grid_id = %cell.id,
            row = cell.row,
            col = cell.col,
            centroid_lat = cell.centroid_lat,
            centroid_lon = cell.centroid_lon,
            "Grid cell sample"
        );
    }

    let metadata_dir = config.metadata_dir(root);
    let table = builder
        .export(&grid, &metadata_dir)
        .context("Failed to save grid")?;

    let map_path = if render_map {
        let map_path = config.map_path(root);
        if let Err(e) = builder.visualize(&grid, &map_path) {
            error!(path = %map_path.display(), error = %e, "Failed to render grid map");
            return Err(e).context("Failed to render grid map");
        }
        Some(map_path)
    } else {
        info!("Skipping map rendering");
        None
    };

    info!(total = table.len(), "Grid creation complete");
    Ok(Generated {
        cells: table.len(),
        metadata_dir,
        map_path,
    })
}
