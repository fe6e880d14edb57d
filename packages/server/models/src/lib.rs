#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the Oslo housing-market map server.
//!
//! These types are serialized to JSON for the REST API. The server keeps
//! no session state: the front end owns its [`ViewState`] and posts it
//! together with each pointer event.

use oslo_market_display::{DistrictListEntry, FormattedValuation, StatsPanel};
use oslo_market_map::{CameraTarget, Highlight, RegionPaint, RegionStyle};
use oslo_market_selection::{ViewEvent, ViewState};
use oslo_market_valuation_models::{ConditionStandard, DwellingType};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Error body for non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Human-readable message.
    pub error: String,
}

/// Query parameters for the district list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictListParams {
    /// Id of the displayed district, marked active in the list.
    pub active: Option<String>,
}

/// Body of `POST /api/view`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRequest {
    /// State currently held by the front end.
    #[serde(default)]
    pub state: ViewState,
    /// Pointer event to apply.
    pub event: ViewEvent,
}

/// Style of one map region after an event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRegion {
    /// District id.
    pub id: String,
    /// Region style.
    pub style: RegionStyle,
    /// Paint properties for the style.
    pub paint: RegionPaint,
}

/// Response of `POST /api/view`: the new state and everything derived
/// from it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    /// State after the event.
    pub state: ViewState,
    /// Stats panel for the displayed district.
    pub panel: StatsPanel,
    /// District list with the displayed district marked.
    pub districts: Vec<DistrictListEntry>,
    /// Highlight command for the map.
    pub highlight: Highlight,
    /// Per-region styles, in boundary order.
    pub regions: Vec<ApiRegion>,
    /// Where the map camera should be.
    pub camera: CameraTarget,
}

/// Query parameters for the boundary lookup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupParams {
    /// Longitude.
    pub lng: f64,
    /// Latitude.
    pub lat: f64,
}

/// Response of the boundary lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    /// District under the point, `null` for empty space.
    pub district_id: Option<String>,
}

/// Body of `POST /api/valuation`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRequest {
    /// Chosen district id. Unknown ids use the whole-city figures.
    pub district_id: String,
    /// Floor area exactly as entered in the form.
    pub area: String,
    /// Dwelling type code.
    #[serde(default)]
    pub dwelling_type: DwellingType,
    /// Condition standard code.
    #[serde(default)]
    pub standard: ConditionStandard,
}

/// Response of `POST /api/valuation`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResponse {
    /// Id of the district the figures came from.
    pub district_id: String,
    /// Display name of that district.
    pub district_name: String,
    /// Area used, in square meters.
    pub area: f64,
    /// Dwelling type used.
    pub dwelling_type: DwellingType,
    /// Condition standard used.
    pub standard: ConditionStandard,
    /// Formatted result.
    pub result: FormattedValuation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_request_defaults_missing_state() {
        let req: ViewRequest =
            serde_json::from_str(r#"{"event": {"type": "hover", "id": "alna"}}"#).unwrap();
        assert_eq!(req.state, ViewState::new());
        assert_eq!(
            req.event,
            ViewEvent::Hover {
                id: "alna".to_string()
            }
        );
    }

    #[test]
    fn valuation_request_defaults_form_choices() {
        let req: ValuationRequest =
            serde_json::from_str(r#"{"districtId": "alna", "area": "60"}"#).unwrap();
        assert_eq!(req.dwelling_type, DwellingType::DetachedPlot);
        assert_eq!(req.standard, ConditionStandard::Standard);
    }

    #[test]
    fn valuation_request_accepts_codes() {
        let req: ValuationRequest = serde_json::from_str(
            r#"{"districtId": "alna", "area": "60", "dwellingType": "lei", "standard": "behov"}"#,
        )
        .unwrap();
        assert_eq!(req.dwelling_type, DwellingType::Apartment);
        assert_eq!(req.standard, ConditionStandard::NeedsWork);
    }
}
