//! GeoJSON representation of a grid.
//!
//! One Feature per cell with a Polygon geometry in WGS84 `[lon, lat]`
//! order. The collection carries the legacy named `crs` member
//! (`urn:ogc:def:crs:OGC:1.3:CRS84`) so GIS tools that predate RFC 7946
//! pick the right axis order.

use std::fs;
use std::path::Path;

use grid_common::{Grid, GridCell, GridError, GridResult};
use serde::{Deserialize, Serialize};

/// CRS84 is EPSG:4326 with longitude first.
pub const CRS84: &str = "urn:ogc:def:crs:OGC:1.3:CRS84";

/// A GeoJSON FeatureCollection of grid cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridFeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// Layer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<NamedCrs>,

    pub features: Vec<GridFeature>,
}

impl GridFeatureCollection {
    /// Build the collection for every cell of `grid`, in row-major order.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            name: Some("grid_cells".to_string()),
            crs: Some(NamedCrs::crs84()),
            features: grid.iter().map(GridFeature::from_cell).collect(),
        }
    }

    /// Serialize and write to `path` in one write.
    pub fn write(&self, path: &Path) -> GridResult<()> {
        let mut bytes = serde_json::to_vec_pretty(self).map_err(|e| GridError::write(path, e))?;
        bytes.push(b'\n');
        fs::write(path, bytes).map_err(|e| GridError::write(path, e))
    }

    /// Load a previously exported collection.
    pub fn read(path: &Path) -> GridResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| GridError::read(path, e))?;
        serde_json::from_str(&content).map_err(|e| GridError::read(path, e))
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Legacy GeoJSON 2008 named CRS object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedCrs {
    #[serde(rename = "type")]
    pub type_: String,
    pub properties: NamedCrsProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedCrsProperties {
    pub name: String,
}

impl NamedCrs {
    pub fn crs84() -> Self {
        Self {
            type_: "name".to_string(),
            properties: NamedCrsProperties {
                name: CRS84.to_string(),
            },
        }
    }
}

/// A single grid cell as a GeoJSON Feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridFeature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    pub properties: GridProperties,

    pub geometry: PolygonGeometry,
}

impl GridFeature {
    pub fn from_cell(cell: &GridCell) -> Self {
        Self {
            type_: "Feature".to_string(),
            properties: GridProperties {
                grid_id: cell.id.clone(),
                row: cell.row,
                col: cell.col,
                centroid_lat: cell.centroid_lat,
                centroid_lon: cell.centroid_lon,
            },
            geometry: PolygonGeometry::new(vec![cell.exterior_ring()]),
        }
    }

    /// Centroid `(lat, lon)` re-derived from the exterior ring's extent.
    ///
    /// Grid cells are axis-aligned rectangles, so the center of the ring's
    /// extent is the area centroid. Returns `None` for an empty ring.
    pub fn polygon_centroid(&self) -> Option<(f64, f64)> {
        let ring = self.geometry.coordinates.first()?;
        let (first, rest) = ring.split_first()?;
        let (mut min_lon, mut min_lat) = (first[0], first[1]);
        let (mut max_lon, mut max_lat) = (first[0], first[1]);
        for [lon, lat] in rest {
            min_lon = min_lon.min(*lon);
            max_lon = max_lon.max(*lon);
            min_lat = min_lat.min(*lat);
            max_lat = max_lat.max(*lat);
        }
        Some(((min_lat + max_lat) / 2.0, (min_lon + max_lon) / 2.0))
    }
}

/// Attributes stored with each cell feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridProperties {
    pub grid_id: String,
    pub row: usize,
    pub col: usize,
    pub centroid_lat: f64,
    pub centroid_lon: f64,
}

/// GeoJSON Polygon geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolygonGeometry {
    /// Type identifier (always "Polygon").
    #[serde(rename = "type")]
    pub type_: String,

    /// Linear rings of `[lon, lat]` positions; the first is the exterior.
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl PolygonGeometry {
    pub fn new(coordinates: Vec<Vec<[f64; 2]>>) -> Self {
        Self {
            type_: "Polygon".to_string(),
            coordinates,
        }
    }
}
