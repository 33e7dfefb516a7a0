//! Common types shared across the weather-grid workspace.
//!
//! A [`Grid`] is a row-major tiling of a [`BoundingBox`] into
//! `rows * cols` rectangular [`GridCell`]s, as described by a [`GridSpec`].

pub mod bbox;
pub mod cell;
pub mod error;
pub mod grid;

pub use bbox::{BboxParseError, BoundingBox};
pub use cell::{Grid, GridCell};
pub use error::{GridError, GridResult};
pub use grid::GridSpec;
