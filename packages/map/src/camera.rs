//! Where the map camera flies when the selection changes.

use geo::BoundingRect;
use serde::Serialize;

use crate::boundaries::DistrictBoundaries;

/// City centre as `[lng, lat]`.
pub const CITY_CENTER: [f64; 2] = [10.77, 59.92];
/// Zoom level showing the whole city.
pub const CITY_ZOOM: f64 = 11.0;
/// Zoom level for a selected district.
pub const DISTRICT_ZOOM: f64 = 12.5;
/// Duration of the fly-to animation.
pub const FLY_DURATION_MS: u32 = 800;

/// A fly-to command for the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraTarget {
    /// Centre as `[lng, lat]`.
    pub center: [f64; 2],
    /// Zoom level.
    pub zoom: f64,
    /// Animation duration in milliseconds.
    pub duration_ms: u32,
}

impl CameraTarget {
    /// The whole-city view.
    #[must_use]
    pub const fn city() -> Self {
        Self {
            center: CITY_CENTER,
            zoom: CITY_ZOOM,
            duration_ms: FLY_DURATION_MS,
        }
    }
}

/// Camera target for the current selection.
///
/// A selected district is framed at the centre of its outer ring's
/// bounding box. No selection, or a district without a boundary, returns
/// the whole-city view.
#[must_use]
pub fn camera_target(boundaries: &DistrictBoundaries, selected: Option<&str>) -> CameraTarget {
    let center = selected
        .and_then(|id| boundaries.polygon(id))
        .and_then(|mp| mp.0.first())
        .and_then(|polygon| polygon.exterior().bounding_rect())
        .map(|rect| {
            [
                f64::midpoint(rect.min().x, rect.max().x),
                f64::midpoint(rect.min().y, rect.max().y),
            ]
        });

    center.map_or_else(CameraTarget::city, |center| CameraTarget {
        center,
        zoom: DISTRICT_ZOOM,
        duration_ms: FLY_DURATION_MS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundaries::boundaries;

    fn assert_close(actual: [f64; 2], expected: [f64; 2]) {
        assert!(
            (actual[0] - expected[0]).abs() < 1e-9 && (actual[1] - expected[1]).abs() < 1e-9,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn no_selection_shows_city() {
        assert_eq!(camera_target(boundaries(), None), CameraTarget::city());
    }

    #[test]
    fn unknown_selection_shows_city() {
        assert_eq!(
            camera_target(boundaries(), Some("atlantis")),
            CameraTarget::city()
        );
    }

    #[test]
    fn selected_district_is_centred() {
        let target = camera_target(boundaries(), Some("sentrum"));
        assert_close(target.center, [10.7425, 59.905]);
        assert!((target.zoom - DISTRICT_ZOOM).abs() < f64::EPSILON);
        assert_eq!(target.duration_ms, FLY_DURATION_MS);
    }
}
