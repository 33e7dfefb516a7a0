//! Tabular centroid coordinates (`grid_coordinates.csv`).

use std::fs;
use std::path::Path;

use grid_common::{Grid, GridCell, GridError, GridResult};
use serde::{Deserialize, Serialize, Serializer};

/// One CSV row: a cell's identity and centroid, without geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRow {
    pub grid_id: String,
    pub row: usize,
    pub col: usize,
    #[serde(serialize_with = "plain_decimal")]
    pub centroid_lat: f64,
    #[serde(serialize_with = "plain_decimal")]
    pub centroid_lon: f64,
}

impl From<&GridCell> for CoordinateRow {
    fn from(cell: &GridCell) -> Self {
        Self {
            grid_id: cell.id.clone(),
            row: cell.row,
            col: cell.col,
            centroid_lat: cell.centroid_lat,
            centroid_lon: cell.centroid_lon,
        }
    }
}

/// Centroid table in the grid's row-major order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateTable {
    rows: Vec<CoordinateRow>,
}

impl CoordinateTable {
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            rows: grid.iter().map(CoordinateRow::from).collect(),
        }
    }

    pub fn rows(&self) -> &[CoordinateRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CoordinateRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find a row by its `grid_id`.
    pub fn get(&self, grid_id: &str) -> Option<&CoordinateRow> {
        self.rows.iter().find(|r| r.grid_id == grid_id)
    }

    /// Render the table as CSV with a header row and `\n` line endings.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>, std::io::Error> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.into_inner().map_err(|e| e.into_error())
    }

    /// Write the table to `path` in one write.
    pub fn write_csv(&self, path: &Path) -> GridResult<()> {
        let bytes = self.to_csv_bytes().map_err(|e| GridError::write(path, e))?;
        fs::write(path, bytes).map_err(|e| GridError::write(path, e))
    }

    /// Load a table written by [`CoordinateTable::write_csv`].
    pub fn read_csv(path: &Path) -> GridResult<Self> {
        let content = fs::read(path).map_err(|e| GridError::read(path, e))?;
        let mut reader = csv::Reader::from_reader(content.as_slice());
        let rows = reader
            .deserialize()
            .collect::<Result<Vec<CoordinateRow>, csv::Error>>()
            .map_err(|e| GridError::read(path, e))?;
        Ok(Self { rows })
    }
}

impl<'a> IntoIterator for &'a CoordinateTable {
    type Item = &'a CoordinateRow;
    type IntoIter = std::slice::Iter<'a, CoordinateRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Format a float without exponent notation, keeping a fractional part.
pub fn format_decimal(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        format!("{}.0", s)
    } else {
        s
    }
}

fn plain_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_decimal(*value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_common::BoundingBox;

    #[test]
    fn test_format_decimal_never_uses_exponent() {
        assert_eq!(format_decimal(1e-7), "0.0000001");
        assert_eq!(format_decimal(1e21), "1000000000000000000000.0");
        assert_eq!(format_decimal(80.0), "80.0");
        assert_eq!(format_decimal(79.74), "79.74");
        assert_eq!(format_decimal(-0.5), "-0.5");
    }

    #[test]
    fn test_csv_header_and_row() {
        let cell = GridCell::new(0, 1, BoundingBox::new(0.0, 1.0, 1.0, 2.0));
        let table = CoordinateTable {
            rows: vec![CoordinateRow::from(&cell)],
        };
        let csv = String::from_utf8(table.to_csv_bytes().unwrap()).unwrap();
        assert_eq!(
            csv,
            "grid_id,row,col,centroid_lat,centroid_lon\ngrid_0_1,0,1,0.5,1.5\n"
        );
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let table = CoordinateTable::default();
        assert!(table.to_csv_bytes().unwrap().is_empty());
    }
}
