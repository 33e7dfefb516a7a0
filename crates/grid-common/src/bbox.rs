//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// A geographic bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Sri Lanka, the region the weather pipeline forecasts for.
    pub const SRI_LANKA: BoundingBox = BoundingBox {
        min_lat: 5.9,
        max_lat: 9.9,
        min_lon: 79.5,
        max_lon: 81.9,
    };

    /// Create a new bounding box from its latitude and longitude extents.
    pub const fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Parse a "min_lon,min_lat,max_lon,max_lat" string (x/y order, as in a WMS BBOX).
    pub fn from_bbox_string(s: &str) -> Result<Self, BboxParseError> {
        let parts: Vec<&str> = s.split(',').collect();
        let [min_lon, min_lat, max_lon, max_lat] = parts.as_slice() else {
            return Err(BboxParseError::InvalidFormat(s.to_string()));
        };

        let parse = |part: &str| -> Result<f64, BboxParseError> {
            part.parse()
                .map_err(|_| BboxParseError::InvalidNumber(part.to_string()))
        };

        Ok(Self {
            min_lat: parse(*min_lat)?,
            max_lat: parse(*max_lat)?,
            min_lon: parse(*min_lon)?,
            max_lon: parse(*max_lon)?,
        })
    }

    /// Check the box invariant: finite coordinates, `min < max` on both axes.
    pub fn validate(&self) -> Result<(), GridError> {
        let coords = [self.min_lat, self.max_lat, self.min_lon, self.max_lon];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(GridError::InvalidSpec(format!(
                "bounding box coordinates must be finite: {:?}",
                self
            )));
        }
        if self.min_lat >= self.max_lat {
            return Err(GridError::InvalidSpec(format!(
                "min_lat ({}) must be less than max_lat ({})",
                self.min_lat, self.max_lat
            )));
        }
        if self.min_lon >= self.max_lon {
            return Err(GridError::InvalidSpec(format!(
                "min_lon ({}) must be less than max_lon ({})",
                self.min_lon, self.max_lon
            )));
        }
        Ok(())
    }

    /// Longitude extent in degrees.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Latitude extent in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Midpoint as `(lat, lon)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Check if a point is contained within this bbox (edges inclusive).
    pub fn contains_point(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::SRI_LANKA
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BboxParseError {
    #[error("Invalid bbox format: {0}. Expected 'min_lon,min_lat,max_lon,max_lat'")]
    InvalidFormat(String),

    #[error("Invalid number in bbox: {0}")]
    InvalidNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bbox_string() {
        let bbox = BoundingBox::from_bbox_string("79.5,5.9,81.9,9.9").unwrap();
        assert_eq!(bbox, BoundingBox::SRI_LANKA);
    }

    #[test]
    fn test_validate_rejects_inverted_latitudes() {
        let bbox = BoundingBox::new(9.9, 5.9, 79.5, 81.9);
        assert!(matches!(bbox.validate(), Err(GridError::InvalidSpec(_))));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let bbox = BoundingBox::new(f64::NAN, 9.9, 79.5, 81.9);
        assert!(bbox.validate().is_err());
    }
}
