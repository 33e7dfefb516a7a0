//! Grid specifications.

use serde::{Deserialize, Serialize};

use crate::{BoundingBox, GridError};

/// Row and column counts of a regular lat/lon grid.
///
/// Together with a [`BoundingBox`] this fully determines the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of cells in the latitude direction
    pub rows: usize,
    /// Number of cells in the longitude direction
    pub cols: usize,
}

impl GridSpec {
    /// The 5x5 grid used for the Sri Lanka forecast region.
    pub const SRI_LANKA: GridSpec = GridSpec { rows: 5, cols: 5 };

    /// Largest cell count `validate` accepts.
    pub const MAX_CELLS: usize = 1 << 24;

    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Reject empty grids and cell counts that cannot be represented.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.rows == 0 {
            return Err(GridError::InvalidSpec("rows must be at least 1".into()));
        }
        if self.cols == 0 {
            return Err(GridError::InvalidSpec("cols must be at least 1".into()));
        }
        match self.rows.checked_mul(self.cols) {
            Some(cells) if cells <= Self::MAX_CELLS => Ok(()),
            _ => Err(GridError::InvalidSpec(format!(
                "{}x{} grid exceeds the limit of {} cells",
                self.rows,
                self.cols,
                Self::MAX_CELLS
            ))),
        }
    }

    /// Cell height in degrees of latitude.
    pub fn lat_step(&self, bbox: &BoundingBox) -> f64 {
        bbox.height() / self.rows as f64
    }

    /// Cell width in degrees of longitude.
    pub fn lon_step(&self, bbox: &BoundingBox) -> f64 {
        bbox.width() / self.cols as f64
    }

    /// Total number of cells, saturating for specs that fail `validate`.
    pub fn len(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::SRI_LANKA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_for_sri_lanka() {
        let spec = GridSpec::SRI_LANKA;
        let bbox = BoundingBox::SRI_LANKA;
        assert!((spec.lat_step(&bbox) - 0.8).abs() < 1e-12);
        assert!((spec.lon_step(&bbox) - 0.48).abs() < 1e-12);
        assert_eq!(spec.len(), 25);
    }

    #[test]
    fn test_zero_rows_rejected() {
        let spec = GridSpec::new(0, 5);
        assert!(spec.is_empty());
        assert!(matches!(spec.validate(), Err(GridError::InvalidSpec(_))));
    }

    #[test]
    fn test_zero_cols_rejected() {
        assert!(GridSpec::new(3, 0).validate().is_err());
    }

    #[test]
    fn test_overflowing_cell_count_rejected() {
        let spec = GridSpec::new(usize::MAX, 2);
        assert_eq!(spec.len(), usize::MAX);
        assert!(matches!(spec.validate(), Err(GridError::InvalidSpec(_))));
    }

    #[test]
    fn test_cell_limit_is_inclusive() {
        let max = GridSpec::MAX_CELLS;
        assert!(GridSpec::new(max, 1).validate().is_ok());
        assert!(GridSpec::new(max + 1, 1).validate().is_err());
        assert!(GridSpec::new(1 << 12, 1 << 13).validate().is_err());
    }
}
