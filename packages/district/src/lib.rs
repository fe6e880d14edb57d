#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District catalog for the Oslo housing-market map.
//!
//! The catalog is an immutable list of [`DistrictRecord`]s plus one
//! whole-city aggregate record. It is authored as a TOML table embedded at
//! compile time, validated once when loaded, and never mutated afterwards.
//!
//! Lookups never fail loudly: callers that miss fall back to the aggregate
//! record via [`Catalog::find_or_aggregate`].

pub mod catalog;
pub mod price;

pub use catalog::{Catalog, catalog};
pub use oslo_market_district_models::{AGGREGATE_ID, DistrictRecord, MetricKind};

use thiserror::Error;

/// Errors raised while loading or reading catalog data.
///
/// All variants indicate a data-authoring defect, never a user-input or
/// navigation condition.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The TOML table could not be parsed into the record schema.
    #[error("Failed to parse district table: {0}")]
    Parse(#[from] toml::de::Error),

    /// A record's stored price per area is not a grouped integer.
    #[error("District '{id}' has invalid price per area: {value:?}")]
    InvalidPricePerArea {
        /// Id of the offending record.
        id: String,
        /// The stored display string.
        value: String,
    },

    /// Two records share an id.
    #[error("Duplicate district id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// A record is missing a required field value.
    #[error("District '{id}' has an empty {field}")]
    EmptyField {
        /// Id of the offending record (may itself be empty).
        id: String,
        /// Name of the empty field.
        field: &'static str,
    },

    /// The aggregate record does not carry the reserved id.
    #[error("Aggregate record must use id '{expected}', found '{found}'")]
    AggregateId {
        /// The reserved id.
        expected: &'static str,
        /// The id that was found.
        found: String,
    },
}
