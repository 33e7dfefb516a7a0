//! Grid construction and artifact export.

use std::fs;
use std::path::Path;

use grid_common::{BoundingBox, Grid, GridCell, GridError, GridResult, GridSpec};
use tracing::{debug, info};

use crate::coordinates::CoordinateTable;
use crate::geojson::GridFeatureCollection;
use crate::map::{self, MapOptions, RenderedMap};
use crate::{CSV_FILE_NAME, GEOJSON_FILE_NAME};

/// Builds a [`Grid`] over a bounding box and writes its artifacts.
///
/// The builder holds only immutable configuration; every operation is a
/// pure computation or a single write per artifact.
#[derive(Debug, Clone, Default)]
pub struct GridBuilder {
    bbox: BoundingBox,
    spec: GridSpec,
    map_options: MapOptions,
}

impl GridBuilder {
    pub fn new(bbox: BoundingBox, spec: GridSpec) -> Self {
        Self {
            bbox,
            spec,
            map_options: MapOptions::default(),
        }
    }

    /// Override the map rendering options used by [`GridBuilder::visualize`].
    pub fn with_map_options(mut self, map_options: MapOptions) -> Self {
        self.map_options = map_options;
        self
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn map_options(&self) -> &MapOptions {
        &self.map_options
    }

    /// Tile the bounding box into `rows * cols` cells in row-major order.
    ///
    /// Fails with [`GridError::InvalidSpec`] before computing anything if the
    /// grid spec or bounding box is invalid.
    pub fn build(&self) -> GridResult<Grid> {
        self.bbox.validate()?;
        self.spec.validate()?;

        let bbox = &self.bbox;
        let GridSpec { rows, cols } = self.spec;
        let lat_step = self.spec.lat_step(bbox);
        let lon_step = self.spec.lon_step(bbox);

        let mut cells = Vec::with_capacity(self.spec.len());
        for row in 0..rows {
            let min_lat = edge(bbox.min_lat, bbox.max_lat, lat_step, row, rows);
            let max_lat = edge(bbox.min_lat, bbox.max_lat, lat_step, row + 1, rows);
            for col in 0..cols {
                let min_lon = edge(bbox.min_lon, bbox.max_lon, lon_step, col, cols);
                let max_lon = edge(bbox.min_lon, bbox.max_lon, lon_step, col + 1, cols);
                cells.push(GridCell::new(
                    row,
                    col,
                    BoundingBox::new(min_lat, max_lat, min_lon, max_lon),
                ));
            }
        }

        debug!(rows, cols, lat_step, lon_step, "Built grid");
        Ok(Grid::new(self.bbox, self.spec, cells))
    }

    /// Write `grid_cells.geojson` and `grid_coordinates.csv` into `output_dir`.
    ///
    /// Missing parent directories are created. Existing artifacts are
    /// overwritten. Returns the coordinate table that was written.
    pub fn export(&self, grid: &Grid, output_dir: impl AsRef<Path>) -> GridResult<CoordinateTable> {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir).map_err(|e| GridError::write(output_dir, e))?;

        let geojson_path = output_dir.join(GEOJSON_FILE_NAME);
        GridFeatureCollection::from_grid(grid).write(&geojson_path)?;

        let csv_path = output_dir.join(CSV_FILE_NAME);
        let table = CoordinateTable::from_grid(grid);
        table.write_csv(&csv_path)?;

        info!(
            dir = %output_dir.display(),
            cells = grid.len(),
            "Grid saved"
        );
        Ok(table)
    }

    /// Render the grid as an interactive HTML map at `output_path`.
    ///
    /// Independent of [`GridBuilder::export`]: a failure here leaves exported
    /// artifacts untouched.
    pub fn visualize(&self, grid: &Grid, output_path: impl AsRef<Path>) -> GridResult<RenderedMap> {
        let rendered = map::write_map(grid, &self.map_options, output_path.as_ref())?;
        info!(path = %rendered.path.display(), "Map saved");
        Ok(rendered)
    }
}

/// Coordinate of edge `i` out of `n` cells; the outer edges are the box limits.
fn edge(min: f64, max: f64, step: f64, i: usize, n: usize) -> f64 {
    if i == n {
        max
    } else {
        min + i as f64 * step
    }
}
