//! Regular lat/lon grid generation for the weather pipeline.
//!
//! [`GridBuilder`] tiles a bounding box into `rows * cols` cells and writes
//! two interchangeable artifacts:
//! - `grid_cells.geojson`: one Polygon feature per cell
//! - `grid_coordinates.csv`: cell ids and centroids, no geometry
//!
//! plus an optional self-contained HTML map for inspection.

pub mod builder;
pub mod coordinates;
pub mod geojson;
pub mod map;

pub use builder::GridBuilder;
pub use coordinates::{CoordinateRow, CoordinateTable};
pub use geojson::{GridFeature, GridFeatureCollection, GridProperties};
pub use map::{CellStyle, MapOptions, MarkerStyle, RenderedMap};

pub use grid_common::{BoundingBox, Grid, GridCell, GridError, GridResult, GridSpec};

/// File name of the exported cell geometries.
pub const GEOJSON_FILE_NAME: &str = "grid_cells.geojson";

/// File name of the exported centroid table.
pub const CSV_FILE_NAME: &str = "grid_coordinates.csv";

/// Default file name of the rendered map.
pub const MAP_FILE_NAME: &str = "sri_lanka_grid.html";
