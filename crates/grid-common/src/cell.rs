//! Grid cells and the ordered grid they form.

use crate::{BoundingBox, GridSpec};

/// One rectangular partition of the grid's bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    /// Stable identifier, `grid_{row}_{col}`.
    pub id: String,
    pub row: usize,
    pub col: usize,
    /// Extent of this cell.
    pub bounds: BoundingBox,
    pub centroid_lat: f64,
    pub centroid_lon: f64,
}

impl GridCell {
    /// Create the cell at `(row, col)` covering `bounds`.
    ///
    /// The centroid is the mean of the rectangle's corners.
    pub fn new(row: usize, col: usize, bounds: BoundingBox) -> Self {
        let (centroid_lat, centroid_lon) = bounds.center();
        Self {
            id: Self::id_for(row, col),
            row,
            col,
            bounds,
            centroid_lat,
            centroid_lon,
        }
    }

    pub fn id_for(row: usize, col: usize) -> String {
        format!("grid_{}_{}", row, col)
    }

    /// Closed exterior ring in `[lon, lat]` order, counter-clockwise,
    /// starting at the south-east corner.
    pub fn exterior_ring(&self) -> Vec<[f64; 2]> {
        let b = &self.bounds;
        vec![
            [b.max_lon, b.min_lat],
            [b.max_lon, b.max_lat],
            [b.min_lon, b.max_lat],
            [b.min_lon, b.min_lat],
            [b.max_lon, b.min_lat],
        ]
    }
}

/// Row-major collection of `rows * cols` cells tiling a bounding box.
///
/// Built once and never mutated; only read accessors are exposed.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    bbox: BoundingBox,
    spec: GridSpec,
    cells: Vec<GridCell>,
}

impl Grid {
    /// Assemble a grid from cells already in row-major order.
    pub fn new(bbox: BoundingBox, spec: GridSpec, cells: Vec<GridCell>) -> Self {
        debug_assert_eq!(cells.len(), spec.len());
        Self { bbox, spec, cells }
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridCell> {
        self.cells.iter()
    }

    /// Look up a cell by position.
    pub fn get(&self, row: usize, col: usize) -> Option<&GridCell> {
        if row >= self.spec.rows || col >= self.spec.cols {
            return None;
        }
        self.cells.get(row * self.spec.cols + col)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a GridCell;
    type IntoIter = std::slice::Iter<'a, GridCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
