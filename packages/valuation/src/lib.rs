#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Valuation estimate for a hypothetical dwelling in an Oslo district.
//!
//! [`calculate_estimate`] is a pure function of a district record, a floor
//! area, a dwelling type and a condition standard. [`ValuationForm`] holds
//! the estimator modal's inputs and last result, and only runs the
//! calculator once the entered area is a positive number.

pub mod estimate;
pub mod form;

pub use estimate::{MAX_AREA, calculate_estimate, parse_area};
pub use form::ValuationForm;
pub use oslo_market_valuation_models::{
    ConditionStandard, DwellingType, ValuationInput, ValuationResult,
};

use oslo_market_district::CatalogError;
use thiserror::Error;

/// Errors from the valuation estimator.
#[derive(Debug, Error)]
pub enum ValuationError {
    /// The floor area is missing, not a number, or not positive. The
    /// calculation does not run.
    #[error("Invalid floor area: {input:?}")]
    InvalidArea {
        /// The rejected input, as entered.
        input: String,
    },

    /// The district's stored price per area is malformed. This is a data
    /// defect, not a user error.
    #[error("Invalid district data: {0}")]
    InvalidDistrictData(#[from] CatalogError),

    /// A computed amount does not fit in whole kroner.
    #[error("Estimate out of range for district '{district_id}': {value}")]
    OutOfRange {
        /// District the estimate was computed for.
        district_id: String,
        /// The rounded amount that overflowed.
        value: f64,
    },
}
