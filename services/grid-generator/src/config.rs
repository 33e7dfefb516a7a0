//! Generator configuration.
//!
//! Loaded from an optional YAML file. Every field has a default matching
//! the Sri Lanka 5x5 forecast grid, so an empty or absent file is valid.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use grid_builder::{BoundingBox, GridBuilder, GridSpec, MapOptions, MAP_FILE_NAME};
use project_layout::{GRID_FIGURES_DIR, METADATA_DIR};
use serde::{Deserialize, Serialize};

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub region: RegionConfig,
    pub output: OutputConfig,
    pub map: MapOptions,
}

/// The area to tile and its resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    pub name: String,
    pub bbox: BoundingBox,
    pub rows: usize,
    pub cols: usize,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            name: "sri_lanka".to_string(),
            bbox: BoundingBox::SRI_LANKA,
            rows: GridSpec::SRI_LANKA.rows,
            cols: GridSpec::SRI_LANKA.cols,
        }
    }
}

/// Artifact locations; relative paths resolve against the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub metadata_dir: PathBuf,
    pub map_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            metadata_dir: PathBuf::from(METADATA_DIR),
            map_path: Path::new(GRID_FIGURES_DIR).join(MAP_FILE_NAME),
        }
    }
}

/// Command-line overrides applied on top of the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bbox: Option<String>,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub metadata_dir: Option<PathBuf>,
    pub map_path: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config: {:?}", path))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load from `path` if given, otherwise use the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading configuration");
                Self::from_yaml(path)
            }
            None => {
                tracing::info!("No config file given, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn apply(mut self, overrides: &Overrides) -> Result<Self> {
        if let Some(bbox) = &overrides.bbox {
            self.region.bbox = BoundingBox::from_bbox_string(bbox)
                .with_context(|| format!("Invalid --bbox value: {}", bbox))?;
        }
        if let Some(rows) = overrides.rows {
            self.region.rows = rows;
        }
        if let Some(cols) = overrides.cols {
            self.region.cols = cols;
        }
        if let Some(dir) = &overrides.metadata_dir {
            self.output.metadata_dir = dir.clone();
        }
        if let Some(path) = &overrides.map_path {
            self.output.map_path = path.clone();
        }
        Ok(self)
    }

    /// Reject values the grid builder cannot use before any work starts.
    pub fn validate(&self) -> Result<()> {
        if self.region.name.trim().is_empty() {
            bail!("region.name must not be empty");
        }
        self.region.bbox.validate()?;
        self.grid_spec().validate()?;
        Ok(())
    }

    pub fn grid_spec(&self) -> GridSpec {
        GridSpec::new(self.region.rows, self.region.cols)
    }

    pub fn builder(&self) -> GridBuilder {
        GridBuilder::new(self.region.bbox, self.grid_spec())
            .with_map_options(self.map.clone())
    }

    pub fn metadata_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output.metadata_dir)
    }

    pub fn map_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output.map_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_sri_lanka() {
        let config = GeneratorConfig::default();
        assert_eq!(config.region.bbox, BoundingBox::SRI_LANKA);
        assert_eq!(config.grid_spec(), GridSpec::SRI_LANKA);
        assert_eq!(
            config.output.metadata_dir,
            PathBuf::from("data/bronze/metadata")
        );
        assert_eq!(
            config.output.map_path,
            PathBuf::from("outputs/figures/grids/sri_lanka_grid.html")
        );
        assert_eq!(config.map.zoom_start, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = GeneratorConfig::from_yaml_str("").unwrap();
        assert_eq!(config.grid_spec(), GridSpec::SRI_LANKA);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
region:
  name: kerala
  bbox:
    min_lat: 8.2
    max_lat: 12.8
    min_lon: 74.8
    max_lon: 77.4
  rows: 4
map:
  zoom_start: 7
  cell_style:
    color: green
"#;
        let config = GeneratorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.region.name, "kerala");
        assert_eq!(config.region.bbox.max_lon, 77.4);
        assert_eq!(config.grid_spec(), GridSpec::new(4, 5));
        assert_eq!(config.map.zoom_start, 7);
        assert_eq!(config.map.cell_style.color, "green");
        assert_eq!(config.map.cell_style.fill_color, "lightblue");
        assert_eq!(config.output.metadata_dir, PathBuf::from(METADATA_DIR));
    }

    #[test]
    fn test_unreadable_file_is_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = GeneratorConfig::from_yaml(&tmp.path().join("missing.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("grid.yaml");
        std::fs::write(&path, "region:\n  cols: 3\n").unwrap();

        let config = GeneratorConfig::load(Some(&path)).unwrap();
        assert_eq!(config.grid_spec(), GridSpec::new(5, 3));
    }

    #[test]
    fn test_overrides() {
        let overrides = Overrides {
            bbox: Some("0,0,10,20".to_string()),
            rows: Some(2),
            cols: Some(3),
            metadata_dir: Some(PathBuf::from("/tmp/meta")),
            map_path: None,
        };
        let config = GeneratorConfig::default().apply(&overrides).unwrap();
        assert_eq!(config.region.bbox, BoundingBox::new(0.0, 20.0, 0.0, 10.0));
        assert_eq!(config.grid_spec(), GridSpec::new(2, 3));
        assert_eq!(
            config.metadata_dir(Path::new("/project")),
            PathBuf::from("/tmp/meta")
        );
        assert_eq!(
            config.map_path(Path::new("/project")),
            PathBuf::from("/project/outputs/figures/grids/sri_lanka_grid.html")
        );
    }

    #[test]
    fn test_bad_bbox_override() {
        let overrides = Overrides {
            bbox: Some("1,2,3".to_string()),
            ..Overrides::default()
        };
        assert!(GeneratorConfig::default().apply(&overrides).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_rows() {
        let overrides = Overrides {
            rows: Some(0),
            ..Overrides::default()
        };
        let config = GeneratorConfig::default().apply(&overrides).unwrap();
        assert!(config.validate().is_err());
    }
}
