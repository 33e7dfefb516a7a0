//! Directory layout of the weather pipeline.
//!
//! Every stage reads and writes below a project root organised in
//! bronze (raw), silver (cleaned and featurised) and gold (analysis-ready)
//! data layers, plus code, output and documentation folders. Other stages
//! assume these directories exist; [`ProjectLayout::ensure`] creates them.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Relative directory where grid metadata (GeoJSON, CSV) is written.
pub const METADATA_DIR: &str = "data/bronze/metadata";

/// Relative directory where grid maps are written.
pub const GRID_FIGURES_DIR: &str = "outputs/figures/grids";

/// Every directory the pipeline expects, relative to the project root.
pub const PIPELINE_DIRECTORIES: &[&str] = &[
    // Bronze layer
    "data/bronze/era5_raw",
    "data/bronze/openmeteo_forecast",
    METADATA_DIR,
    // Silver layer
    "data/silver/weather_cleaned/continuous_variables",
    "data/silver/weather_cleaned/rainfall",
    "data/silver/weather_features/temporal_features",
    "data/silver/weather_features/lag_features",
    "data/silver/weather_features/spatial_features",
    "data/silver/train_test_split/train",
    "data/silver/train_test_split/validation",
    "data/silver/train_test_split/test",
    // Gold layer
    "data/gold/training_datasets",
    "data/gold/weather_forecasts/continuous_predictions",
    "data/gold/weather_forecasts/rainfall_predictions",
    "data/gold/validation_results/continuous_metrics",
    "data/gold/validation_results/rainfall_metrics",
    // Code
    "notebooks",
    "src/config",
    "src/data",
    "src/features",
    "src/models",
    "src/training",
    "src/prediction",
    "src/utils",
    "tests",
    // Outputs
    GRID_FIGURES_DIR,
    "outputs/figures/predictions",
    "outputs/figures/performance",
    "outputs/models/checkpoints",
    "outputs/models/best_models",
    "outputs/reports/training_logs",
    "outputs/reports/evaluation_reports",
    // Scripts and docs
    "scripts",
    "docs",
];

/// Errors that can occur while creating the layout.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid layout entry '{0}': must be a relative path")]
    NotRelative(String),
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// A set of directories below a project root.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    directories: Vec<PathBuf>,
}

impl ProjectLayout {
    /// The full pipeline layout below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            directories: PIPELINE_DIRECTORIES.iter().map(PathBuf::from).collect(),
        }
    }

    /// A custom layout. Entries must be relative paths.
    pub fn with_directories<I, S>(root: impl Into<PathBuf>, directories: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let directories = directories
            .into_iter()
            .map(|d| {
                let d = d.as_ref();
                let path = PathBuf::from(d);
                if d.is_empty() || path.is_absolute() {
                    Err(LayoutError::NotRelative(d.to_string()))
                } else {
                    Ok(path)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root: root.into(),
            directories,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute (root-joined) paths of every directory, in declaration order.
    pub fn directories(&self) -> Vec<PathBuf> {
        self.directories.iter().map(|d| self.root.join(d)).collect()
    }

    pub fn metadata_dir(&self) -> PathBuf {
        self.root.join(METADATA_DIR)
    }

    pub fn grid_figures_dir(&self) -> PathBuf {
        self.root.join(GRID_FIGURES_DIR)
    }

    /// Directories that do not exist yet.
    pub fn missing(&self) -> Vec<PathBuf> {
        self.directories()
            .into_iter()
            .filter(|p| !p.is_dir())
            .collect()
    }

    /// Create every directory, including parents. Existing ones are left alone.
    ///
    /// Returns the directories that were newly created.
    pub fn ensure(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();

        for path in self.directories() {
            if path.is_dir() {
                debug!(path = %path.display(), "Directory exists");
                continue;
            }
            fs::create_dir_all(&path).map_err(|source| LayoutError::CreateDir {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "Created directory");
            created.push(path);
        }

        info!(
            root = %self.root.display(),
            created = created.len(),
            total = self.directories.len(),
            "Project layout ready"
        );
        Ok(created)
    }
}
