//! The embedded district catalog.
//!
//! The table lives in `data/districts.toml` and is embedded via
//! `include_str!`. Adding a district means adding a `[[districts]]` entry
//! there (and its boundary polygon in the map package).

use std::collections::BTreeSet;
use std::sync::OnceLock;

use oslo_market_district_models::{AGGREGATE_ID, DistrictRecord};
use serde::Deserialize;

use crate::CatalogError;
use crate::price::base_price_per_area;

/// Number of districts in the embedded table, aggregate excluded. Enforced
/// by a test.
#[cfg(test)]
const EXPECTED_DISTRICT_COUNT: usize = 16;

/// Embedded district table.
const DISTRICTS_TOML: &str = include_str!("../data/districts.toml");

/// On-disk shape of the district table.
#[derive(Debug, Deserialize)]
struct CatalogTable {
    aggregate: DistrictRecord,
    districts: Vec<DistrictRecord>,
}

/// Immutable, validated set of district records.
#[derive(Debug, Clone)]
pub struct Catalog {
    districts: Vec<DistrictRecord>,
    aggregate: DistrictRecord,
}

impl Catalog {
    /// Builds a catalog from an aggregate record and the districts in
    /// canonical order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if any record has an empty id or name,
    /// ids are not unique, the aggregate does not use [`AGGREGATE_ID`], or
    /// any stored price per area does not parse.
    pub fn new(
        aggregate: DistrictRecord,
        districts: Vec<DistrictRecord>,
    ) -> Result<Self, CatalogError> {
        if aggregate.id != AGGREGATE_ID {
            return Err(CatalogError::AggregateId {
                expected: AGGREGATE_ID,
                found: aggregate.id,
            });
        }

        let mut seen = BTreeSet::new();
        for record in std::iter::once(&aggregate).chain(&districts) {
            validate_record(record)?;
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }

        Ok(Self {
            districts,
            aggregate,
        })
    }

    /// Parses and validates a catalog from a TOML table with one
    /// `[aggregate]` entry and any number of `[[districts]]` entries.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the TOML does not match the schema or
    /// fails validation (see [`Catalog::new`]).
    pub fn from_toml_str(toml_str: &str) -> Result<Self, CatalogError> {
        let table: CatalogTable = toml::de::from_str(toml_str)?;
        Self::new(table.aggregate, table.districts)
    }

    /// Loads the embedded district table.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the embedded table is malformed.
    pub fn load() -> Result<Self, CatalogError> {
        let catalog = Self::from_toml_str(DISTRICTS_TOML)?;
        log::debug!(
            "Loaded district catalog with {} districts",
            catalog.districts.len()
        );
        Ok(catalog)
    }

    /// Returns the districts in canonical order. The aggregate record is
    /// not part of this list.
    #[must_use]
    pub fn list_districts(&self) -> &[DistrictRecord] {
        &self.districts
    }

    /// Returns the whole-city aggregate record.
    #[must_use]
    pub const fn aggregate(&self) -> &DistrictRecord {
        &self.aggregate
    }

    /// Looks up a record by id. The aggregate record is found by its
    /// reserved id as well.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&DistrictRecord> {
        if id == self.aggregate.id {
            return Some(&self.aggregate);
        }
        self.districts.iter().find(|d| d.id == id)
    }

    /// Looks up a record by id, substituting the aggregate record when the
    /// id is unknown.
    #[must_use]
    pub fn find_or_aggregate(&self, id: &str) -> &DistrictRecord {
        self.find_by_id(id).unwrap_or_else(|| {
            log::debug!("Unknown district id '{id}', falling back to aggregate");
            &self.aggregate
        })
    }

    /// Resolves an optional id, with `None` and unknown ids both yielding
    /// the aggregate record.
    #[must_use]
    pub fn resolve(&self, id: Option<&str>) -> &DistrictRecord {
        id.map_or(&self.aggregate, |id| self.find_or_aggregate(id))
    }
}

fn validate_record(record: &DistrictRecord) -> Result<(), CatalogError> {
    if record.id.trim().is_empty() {
        return Err(CatalogError::EmptyField {
            id: record.id.clone(),
            field: "id",
        });
    }
    if record.name.trim().is_empty() {
        return Err(CatalogError::EmptyField {
            id: record.id.clone(),
            field: "name",
        });
    }
    base_price_per_area(record)?;
    Ok(())
}

/// Returns the process-wide catalog built from the embedded table.
///
/// # Panics
///
/// Panics if the embedded table fails to load. Since it is a compile-time
/// constant, a failure indicates a development error and is caught by the
/// tests in this module.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        Catalog::load().unwrap_or_else(|e| panic!("Failed to load embedded district table: {e}"))
    })
}
