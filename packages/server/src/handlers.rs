//! HTTP handler functions for the Oslo housing-market map API.

use actix_web::{HttpResponse, web};
use oslo_market_display::{DistrictListEntry, FormattedValuation, StatsPanel};
use oslo_market_map::{camera_target, region_style};
use oslo_market_server_models::{
    ApiError, ApiHealth, ApiRegion, DistrictListParams, LookupParams, LookupResponse,
    ValuationRequest, ValuationResponse, ViewRequest, ViewResponse,
};
use oslo_market_valuation::{ValuationError, ValuationForm};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/districts`
///
/// Lists every district in canonical order, with price-change trend.
pub async fn districts(
    state: web::Data<AppState>,
    params: web::Query<DistrictListParams>,
) -> HttpResponse {
    let active = params.active.as_deref().unwrap_or_default();
    HttpResponse::Ok().json(DistrictListEntry::list(&state.catalog, active))
}

/// `GET /api/districts/{id}`
///
/// Returns the stats panel for a district as if it were selected. Unknown
/// ids get the whole-city panel.
pub async fn district(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let record = state.catalog.find_or_aggregate(&path);
    HttpResponse::Ok().json(StatsPanel::new(record, true))
}

/// `GET /api/boundaries`
///
/// Returns the district polygons as a `GeoJSON` `FeatureCollection`.
pub async fn boundaries(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.boundaries.feature_collection())
}

/// `GET /api/boundaries/lookup?lng=..&lat=..`
///
/// Resolves a pointer position to the district under it.
pub async fn lookup(state: web::Data<AppState>, params: web::Query<LookupParams>) -> HttpResponse {
    let district_id = state
        .boundaries
        .district_at(params.lng, params.lat)
        .map(str::to_string);
    HttpResponse::Ok().json(LookupResponse { district_id })
}

/// `POST /api/view`
///
/// Applies one pointer event to the posted view state and returns the new
/// state with everything derived from it.
pub async fn view(state: web::Data<AppState>, body: web::Json<ViewRequest>) -> HttpResponse {
    let ViewRequest {
        state: mut view_state,
        event,
    } = body.into_inner();

    view_state.apply(&event);

    let displayed = view_state.displayed(&state.catalog);
    let highlight = view_state.highlight();
    let regions = state
        .boundaries
        .ids()
        .map(|id| {
            let style = region_style(id, &highlight);
            ApiRegion {
                id: id.to_string(),
                style,
                paint: style.paint(),
            }
        })
        .collect();

    HttpResponse::Ok().json(ViewResponse {
        panel: StatsPanel::new(displayed, view_state.is_selected()),
        districts: DistrictListEntry::list(&state.catalog, &displayed.id),
        camera: camera_target(&state.boundaries, view_state.selected_id.as_deref()),
        highlight,
        regions,
        state: view_state,
    })
}

/// `POST /api/valuation`
///
/// Runs the estimator. Rejected areas answer `422`; malformed district data
/// or an amount too large to represent answers `500`.
pub async fn valuation(
    state: web::Data<AppState>,
    body: web::Json<ValuationRequest>,
) -> HttpResponse {
    let req = body.into_inner();

    let mut form = ValuationForm::open(state.catalog.find_or_aggregate(&req.district_id));
    form.set_area(&req.area);
    form.set_dwelling_type(req.dwelling_type);
    form.set_standard(req.standard);

    let area = match form.input() {
        Ok(input) => input.area,
        Err(e) => return error_response(&e),
    };

    match form.calculate(&state.catalog) {
        Ok(result) => {
            let district = form.current_district(&state.catalog);
            HttpResponse::Ok().json(ValuationResponse {
                district_id: district.id.clone(),
                district_name: district.name.clone(),
                area,
                dwelling_type: form.dwelling_type(),
                standard: form.standard(),
                result: FormattedValuation::new(district, &result),
            })
        }
        Err(e) => error_response(&e),
    }
}

fn error_response(e: &ValuationError) -> HttpResponse {
    match e {
        ValuationError::InvalidArea { .. } => {
            log::debug!("Rejected valuation input: {e}");
            HttpResponse::UnprocessableEntity().json(ApiError {
                error: e.to_string(),
            })
        }
        ValuationError::InvalidDistrictData(_) => {
            log::error!("Failed to calculate valuation: {e}");
            HttpResponse::InternalServerError().json(ApiError {
                error: "Invalid district data".to_string(),
            })
        }
        ValuationError::OutOfRange { .. } => {
            log::error!("Failed to calculate valuation: {e}");
            HttpResponse::InternalServerError().json(ApiError {
                error: "Estimate out of range".to_string(),
            })
        }
    }
}
