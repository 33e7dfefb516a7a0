//! Tests for BoundingBox parsing, validation and geometry helpers.

use grid_common::bbox::{BboxParseError, BoundingBox};
use grid_common::GridError;

// ============================================================================
// Constructor tests
// ============================================================================

#[test]
fn test_bbox_new() {
    let bbox = BoundingBox::new(5.9, 9.9, 79.5, 81.9);
    assert_eq!(bbox.min_lat, 5.9);
    assert_eq!(bbox.max_lat, 9.9);
    assert_eq!(bbox.min_lon, 79.5);
    assert_eq!(bbox.max_lon, 81.9);
}

#[test]
fn test_bbox_default_is_sri_lanka() {
    assert_eq!(BoundingBox::default(), BoundingBox::SRI_LANKA);
}

// ============================================================================
// from_bbox_string tests
// ============================================================================

#[test]
fn test_parse_bbox_negative() {
    let bbox = BoundingBox::from_bbox_string("-180,-90,180,90").unwrap();
    assert_eq!(bbox.min_lon, -180.0);
    assert_eq!(bbox.min_lat, -90.0);
    assert_eq!(bbox.max_lon, 180.0);
    assert_eq!(bbox.max_lat, 90.0);
}

#[test]
fn test_parse_bbox_too_few_parts() {
    let result = BoundingBox::from_bbox_string("79.5,5.9,81.9");
    assert!(matches!(result, Err(BboxParseError::InvalidFormat(_))));
}

#[test]
fn test_parse_bbox_too_many_parts() {
    let result = BoundingBox::from_bbox_string("79.5,5.9,81.9,9.9,1");
    assert!(matches!(result, Err(BboxParseError::InvalidFormat(_))));
}

#[test]
fn test_parse_bbox_invalid_number() {
    let result = BoundingBox::from_bbox_string("abc,5.9,81.9,9.9");
    assert!(matches!(result, Err(BboxParseError::InvalidNumber(_))));
}

#[test]
fn test_parse_bbox_empty_string() {
    let result = BoundingBox::from_bbox_string("");
    assert!(matches!(result, Err(BboxParseError::InvalidFormat(_))));
}

// ============================================================================
// Validation tests
// ============================================================================

#[test]
fn test_validate_sri_lanka() {
    assert!(BoundingBox::SRI_LANKA.validate().is_ok());
}

#[test]
fn test_validate_equal_latitudes() {
    let bbox = BoundingBox::new(5.9, 5.9, 79.5, 81.9);
    assert!(matches!(bbox.validate(), Err(GridError::InvalidSpec(_))));
}

#[test]
fn test_validate_inverted_longitudes() {
    let bbox = BoundingBox::new(5.9, 9.9, 81.9, 79.5);
    assert!(matches!(bbox.validate(), Err(GridError::InvalidSpec(_))));
}

#[test]
fn test_validate_infinite() {
    let bbox = BoundingBox::new(5.9, f64::INFINITY, 79.5, 81.9);
    assert!(bbox.validate().is_err());
}

// ============================================================================
// Dimension tests
// ============================================================================

#[test]
fn test_width_and_height() {
    let bbox = BoundingBox::SRI_LANKA;
    assert!((bbox.width() - 2.4).abs() < 1e-12);
    assert!((bbox.height() - 4.0).abs() < 1e-12);
}

#[test]
fn test_center() {
    let (lat, lon) = BoundingBox::SRI_LANKA.center();
    assert!((lat - 7.9).abs() < 1e-12);
    assert!((lon - 80.7).abs() < 1e-12);
}

#[test]
fn test_contains_point_edges_inclusive() {
    let bbox = BoundingBox::new(0.0, 10.0, 0.0, 10.0);
    assert!(bbox.contains_point(0.0, 0.0));
    assert!(bbox.contains_point(10.0, 10.0));
    assert!(bbox.contains_point(5.0, 5.0));
    assert!(!bbox.contains_point(-0.1, 5.0));
    assert!(!bbox.contains_point(5.0, 10.1));
}

// ============================================================================
// Serde tests
// ============================================================================

#[test]
fn test_bbox_deserializes_from_named_fields() {
    let json = r#"{"min_lat": 5.9, "max_lat": 9.9, "min_lon": 79.5, "max_lon": 81.9}"#;
    let bbox: BoundingBox = serde_json::from_str(json).unwrap();
    assert_eq!(bbox, BoundingBox::SRI_LANKA);
}
