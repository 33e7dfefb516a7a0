//! Interactive HTML map of a grid.
//!
//! The page is a single file that loads Leaflet from a CDN and embeds the
//! cells as JSON. Every cell carries its own style object, resolved when the
//! page is generated, so the browser never evaluates a shared style callback.

use std::fs;
use std::path::{Path, PathBuf};

use grid_common::{Grid, GridCell, GridError, GridResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Outline and fill style of a cell rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellStyle {
    pub color: String,
    pub weight: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            color: "blue".to_string(),
            weight: 2.0,
            fill_color: "lightblue".to_string(),
            fill_opacity: 0.3,
        }
    }
}

impl CellStyle {
    /// Leaflet path options for this style.
    pub fn to_leaflet(&self) -> Value {
        json!({
            "color": self.color,
            "weight": self.weight,
            "fillColor": self.fill_color,
            "fillOpacity": self.fill_opacity,
        })
    }
}

/// Style of the centroid markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub radius: f64,
    pub color: String,
    pub fill: bool,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 3.0,
            color: "red".to_string(),
            fill: true,
        }
    }
}

impl MarkerStyle {
    pub fn to_leaflet(&self) -> Value {
        json!({
            "radius": self.radius,
            "color": self.color,
            "fill": self.fill,
        })
    }
}

/// Map rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// Page title.
    pub title: String,
    pub zoom_start: u8,
    pub tile_url: String,
    pub tile_attribution: String,
    pub cell_style: CellStyle,
    pub marker_style: MarkerStyle,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            title: "Weather grid".to_string(),
            zoom_start: 8,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            tile_attribution: "&copy; OpenStreetMap contributors".to_string(),
            cell_style: CellStyle::default(),
            marker_style: MarkerStyle::default(),
        }
    }
}

/// A map page written to disk.
#[derive(Debug, Clone)]
pub struct RenderedMap {
    pub path: PathBuf,
    pub html: String,
}

impl RenderedMap {
    pub fn size_bytes(&self) -> usize {
        self.html.len()
    }
}

const MAP_HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{TITLE}}</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <style>
        html, body { margin: 0; height: 100%; }
        #map { position: absolute; top: 0; bottom: 0; left: 0; right: 0; }
    </style>
</head>
<body>
    <div id="map"></div>
    <script>
        var map = L.map('map').setView({{CENTER}}, {{ZOOM}});
        L.tileLayer({{TILE_URL}}, { attribution: {{TILE_ATTRIBUTION}}, maxZoom: 18 }).addTo(map);

        var cells = {{CELLS}};
        cells.forEach(function (cell) {
            L.geoJSON(cell.geometry, { style: cell.style })
                .bindTooltip(cell.id)
                .addTo(map);
            L.circleMarker(cell.centroid, cell.marker)
                .bindPopup(cell.popup)
                .addTo(map);
        });
    </script>
</body>
</html>
"#;

/// Popup text for a cell's centroid marker; coordinates rounded for display.
pub fn popup_text(cell: &GridCell) -> String {
    format!(
        "{}<br>Lat: {:.2}<br>Lon: {:.2}",
        cell.id, cell.centroid_lat, cell.centroid_lon
    )
}

/// Render the map page using the configured cell style for every cell.
pub fn render_html(grid: &Grid, options: &MapOptions) -> String {
    render_html_with(grid, options, |_| options.cell_style.clone())
}

/// Render the map page, resolving each cell's style with `style_for`.
pub fn render_html_with<F>(grid: &Grid, options: &MapOptions, style_for: F) -> String
where
    F: Fn(&GridCell) -> CellStyle,
{
    let marker = options.marker_style.to_leaflet();
    let cells: Vec<Value> = grid
        .iter()
        .map(|cell| {
            json!({
                "id": cell.id,
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [cell.exterior_ring()],
                },
                "style": style_for(cell).to_leaflet(),
                "centroid": [cell.centroid_lat, cell.centroid_lon],
                "marker": marker,
                "popup": popup_text(cell),
            })
        })
        .collect();

    let (center_lat, center_lon) = grid.bbox().center();
    let title = escape_html(&options.title);
    let center = script_json(&json!([center_lat, center_lon]));
    let zoom = options.zoom_start.to_string();
    let tile_url = script_json(&json!(options.tile_url));
    let tile_attribution = script_json(&json!(options.tile_attribution));
    let cells = script_json(&Value::Array(cells));

    fill_template(MAP_HTML_TEMPLATE, |key| match key {
        "TITLE" => Some(title.as_str()),
        "CENTER" => Some(center.as_str()),
        "ZOOM" => Some(zoom.as_str()),
        "TILE_URL" => Some(tile_url.as_str()),
        "TILE_ATTRIBUTION" => Some(tile_attribution.as_str()),
        "CELLS" => Some(cells.as_str()),
        _ => None,
    })
}

/// Substitute `{{KEY}}` placeholders in a single pass over `template`.
///
/// Inserted values are never rescanned, so a value may itself contain
/// placeholder text. Unknown keys are kept verbatim.
fn fill_template<'a, F>(template: &str, value_for: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match value_for(key) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Render and write the map page, creating the parent directory if needed.
pub fn write_map(grid: &Grid, options: &MapOptions, path: &Path) -> GridResult<RenderedMap> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GridError::write(parent, e))?;
    }

    let html = render_html(grid, options);
    fs::write(path, &html).map_err(|e| GridError::write(path, e))?;

    Ok(RenderedMap {
        path: path.to_path_buf(),
        html,
    })
}

/// JSON safe to inline in a `<script>` element.
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
