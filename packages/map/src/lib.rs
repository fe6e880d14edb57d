#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map-side collaborators of the district view.
//!
//! Holds the district boundary polygons (a `GeoJSON` file embedded at
//! compile time), resolves pointer positions to district ids through an
//! R-tree, turns the [`Highlight`] command into per-region styles, and
//! computes where the camera should fly when the selection changes.
//!
//! Tile rendering itself is left to the front end's map library.

pub mod boundaries;
pub mod camera;
pub mod style;

pub use boundaries::{DistrictBoundaries, boundaries};
pub use camera::{CameraTarget, camera_target};
pub use oslo_market_selection::Highlight;
pub use style::{RegionPaint, RegionStyle, region_style};

use thiserror::Error;

/// Errors raised while loading boundary data.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// The `GeoJSON` text or one of its geometries is invalid.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// The document is not a `FeatureCollection`.
    #[error("Boundary data must be a GeoJSON FeatureCollection")]
    NotFeatureCollection,

    /// A feature has no string `id` property.
    #[error("Boundary feature #{index} has no string 'id' property")]
    MissingId {
        /// Position of the feature in the collection.
        index: usize,
    },

    /// A feature's geometry is missing or not a (multi)polygon.
    #[error("Boundary '{id}' must have Polygon or MultiPolygon geometry")]
    UnsupportedGeometry {
        /// Id of the offending feature.
        id: String,
    },

    /// Two features share an id.
    #[error("Duplicate boundary id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },
}
