//! District boundary polygons and point-in-polygon lookup.
//!
//! The embedded `data/districts.geojson` holds simplified, axis-aligned
//! rectangles laid out in the districts' relative positions. They are
//! placeholders for the official bydel outlines, so [`DistrictBoundaries::district_at`]
//! on the embedded data is only approximate geography. Load real outlines
//! with [`DistrictBoundaries::from_geojson_str`].

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::OnceLock;

use geo::{BoundingRect, Intersects, MultiPolygon};
use geojson::{FeatureCollection, GeoJson};
use oslo_market_district::Catalog;
use rstar::{AABB, RTree, RTreeObject};

use crate::BoundaryError;

/// Embedded district boundaries, one feature per district keyed by the
/// `id` property.
const DISTRICTS_GEOJSON: &str = include_str!("../data/districts.geojson");

/// A district polygon stored in the R-tree.
struct BoundaryEntry {
    /// Position in the source file, used to break ties on shared edges.
    index: usize,
    id: String,
    envelope: AABB<[f64; 2]>,
    polygon: MultiPolygon<f64>,
}

impl RTreeObject for BoundaryEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Parsed district boundaries with a spatial index for hit testing.
pub struct DistrictBoundaries {
    tree: RTree<BoundaryEntry>,
    /// `(id, polygon)` in file order, used for camera targets.
    regions: Vec<(String, MultiPolygon<f64>)>,
    collection: FeatureCollection,
}

impl DistrictBoundaries {
    /// Parses a `GeoJSON` `FeatureCollection` of district polygons.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundaryError`] if the text is not valid `GeoJSON`, is
    /// not a `FeatureCollection`, or any feature lacks a string `id`,
    /// reuses an id, or has a non-polygon geometry.
    pub fn from_geojson_str(geojson_str: &str) -> Result<Self, BoundaryError> {
        let GeoJson::FeatureCollection(collection) = GeoJson::from_str(geojson_str)? else {
            return Err(BoundaryError::NotFeatureCollection);
        };

        let mut seen = BTreeSet::new();
        let mut entries = Vec::with_capacity(collection.features.len());
        let mut regions = Vec::with_capacity(collection.features.len());

        for (index, feature) in collection.features.iter().enumerate() {
            let id = feature
                .property("id")
                .and_then(serde_json::Value::as_str)
                .ok_or(BoundaryError::MissingId { index })?
                .to_string();

            if !seen.insert(id.clone()) {
                return Err(BoundaryError::DuplicateId { id });
            }

            let Some(geometry) = &feature.geometry else {
                return Err(BoundaryError::UnsupportedGeometry { id });
            };
            let polygon = match geo::Geometry::<f64>::try_from(geometry.clone())? {
                geo::Geometry::MultiPolygon(mp) => mp,
                geo::Geometry::Polygon(p) => MultiPolygon(vec![p]),
                _ => return Err(BoundaryError::UnsupportedGeometry { id }),
            };

            entries.push(BoundaryEntry {
                index,
                id: id.clone(),
                envelope: compute_envelope(&polygon),
                polygon: polygon.clone(),
            });
            regions.push((id, polygon));
        }

        log::debug!("Loaded {} district boundaries", regions.len());

        Ok(Self {
            tree: RTree::bulk_load(entries),
            regions,
            collection,
        })
    }

    /// Loads the embedded district boundaries.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundaryError`] if the embedded file is malformed.
    pub fn load() -> Result<Self, BoundaryError> {
        Self::from_geojson_str(DISTRICTS_GEOJSON)
    }

    /// Returns the id of the district containing the point, or `None` when
    /// the point is outside every district (water, neighbouring
    /// municipalities).
    ///
    /// Points on a boundary count as inside. A point on an edge shared by
    /// several districts resolves to the one listed first in the file.
    #[must_use]
    pub fn district_at(&self, lng: f64, lat: f64) -> Option<&str> {
        let point = geo::Point::new(lng, lat);
        let query_env = AABB::from_point([lng, lat]);

        self.tree
            .locate_in_envelope_intersecting(&query_env)
            .filter(|entry| entry.polygon.intersects(&point))
            .min_by_key(|entry| entry.index)
            .map(|entry| entry.id.as_str())
    }

    /// Returns the polygon for a district id.
    #[must_use]
    pub fn polygon(&self, id: &str) -> Option<&MultiPolygon<f64>> {
        self.regions
            .iter()
            .find(|(region_id, _)| region_id == id)
            .map(|(_, polygon)| polygon)
    }

    /// Returns the boundary ids in file order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|(id, _)| id.as_str())
    }

    /// Returns boundary ids that have no record in `catalog`.
    #[must_use]
    pub fn unknown_ids<'a>(&'a self, catalog: &Catalog) -> Vec<&'a str> {
        self.ids()
            .filter(|id| catalog.find_by_id(id).is_none())
            .collect()
    }

    /// The boundaries as served to the front end.
    #[must_use]
    pub const fn feature_collection(&self) -> &FeatureCollection {
        &self.collection
    }
}

/// Compute the bounding box envelope for a [`MultiPolygon`].
fn compute_envelope(mp: &MultiPolygon<f64>) -> AABB<[f64; 2]> {
    mp.bounding_rect().map_or_else(
        || AABB::from_point([0.0, 0.0]),
        |rect| AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]),
    )
}

/// Returns the process-wide boundaries built from the embedded file.
///
/// # Panics
///
/// Panics if the embedded file fails to load. Since it is a compile-time
/// constant, a failure indicates a development error and is caught by the
/// tests in this module.
pub fn boundaries() -> &'static DistrictBoundaries {
    static BOUNDARIES: OnceLock<DistrictBoundaries> = OnceLock::new();
    BOUNDARIES.get_or_init(|| {
        DistrictBoundaries::load()
            .unwrap_or_else(|e| panic!("Failed to load embedded district boundaries: {e}"))
    })
}
