//! Common fixtures for grid tests.

use std::path::PathBuf;

use grid_common::{BoundingBox, GridSpec};
use tempfile::TempDir;

/// Bounding boxes exercised across the test suite.
pub mod bbox {
    use grid_common::BoundingBox;

    /// The production forecast region.
    pub const SRI_LANKA: BoundingBox = BoundingBox::SRI_LANKA;

    /// Unit square at the origin; steps are exact in binary.
    pub const UNIT: BoundingBox = BoundingBox::new(0.0, 1.0, 0.0, 1.0);

    /// Spans the equator and prime meridian.
    pub const ORIGIN_CROSSING: BoundingBox = BoundingBox::new(-3.0, 3.0, -4.5, 4.5);

    /// Southern/western hemisphere box.
    pub const PATAGONIA: BoundingBox = BoundingBox::new(-55.0, -38.0, -75.0, -62.0);

    /// Inverted latitudes.
    pub const INVERTED: BoundingBox = BoundingBox::new(9.9, 5.9, 79.5, 81.9);
}

/// Grid shapes worth covering: square, single cell, single row/column, odd primes.
pub fn grid_shapes() -> Vec<GridSpec> {
    vec![
        GridSpec::SRI_LANKA,
        GridSpec::new(1, 1),
        GridSpec::new(1, 7),
        GridSpec::new(7, 1),
        GridSpec::new(3, 11),
        GridSpec::new(13, 17),
    ]
}

/// Valid boxes paired with every shape from [`grid_shapes`].
pub fn valid_cases() -> Vec<(BoundingBox, GridSpec)> {
    let boxes = [
        bbox::SRI_LANKA,
        bbox::UNIT,
        bbox::ORIGIN_CROSSING,
        bbox::PATAGONIA,
    ];
    boxes
        .iter()
        .flat_map(|b| grid_shapes().into_iter().map(move |s| (*b, s)))
        .collect()
}

/// A scratch directory that is removed when dropped.
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap_or_else(|e| panic!("failed to create temp dir: {e}")),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// A path below the scratch root that does not exist yet.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

impl Default for ScratchDir {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cases_are_valid() {
        for (b, s) in valid_cases() {
            assert!(b.validate().is_ok());
            assert!(s.validate().is_ok());
        }
    }

    #[test]
    fn test_inverted_fixture_is_invalid() {
        assert!(bbox::INVERTED.validate().is_err());
    }

    #[test]
    fn test_scratch_dir_join_is_missing() {
        let scratch = ScratchDir::new();
        assert!(scratch.path().exists());
        assert!(!scratch.join("data/bronze/metadata").exists());
    }
}
