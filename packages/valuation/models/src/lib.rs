#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Valuation input and result types.
//!
//! Dwelling types and condition standards are fixed enumerations, each
//! carrying the multiplier applied to a district's price per square meter.
//! Their wire codes are the short Norwegian codes used by the form
//! (`lei`, `rek`, `tom`, `ene`; `behov`, `standard`, `oppgradert`).

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Kind of dwelling being valued.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum DwellingType {
    /// Apartment (leilighet).
    #[serde(rename = "lei", alias = "apartment")]
    #[strum(to_string = "lei", serialize = "apartment")]
    Apartment,
    /// Terraced or row house (rekkehus).
    #[serde(rename = "rek", alias = "terraced")]
    #[strum(to_string = "rek", serialize = "terraced")]
    Terraced,
    /// Detached house on its own plot (tomannsbolig).
    #[default]
    #[serde(rename = "tom", alias = "detached-plot")]
    #[strum(to_string = "tom", serialize = "detached-plot")]
    DetachedPlot,
    /// Single-family house (enebolig).
    #[serde(rename = "ene", alias = "single-family")]
    #[strum(to_string = "ene", serialize = "single-family")]
    SingleFamily,
}

impl DwellingType {
    /// Price multiplier relative to the district's price per area.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Apartment => 0.92,
            Self::Terraced => 1.0,
            Self::DetachedPlot => 1.08,
            Self::SingleFamily => 1.15,
        }
    }

    /// Short label shown on the form buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "LEI",
            Self::Terraced => "REK",
            Self::DetachedPlot => "TOM",
            Self::SingleFamily => "ENE",
        }
    }

    /// Returns all variants in form order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Apartment,
            Self::Terraced,
            Self::DetachedPlot,
            Self::SingleFamily,
        ]
    }
}

/// Condition of the dwelling.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum ConditionStandard {
    /// Needs renovation (behov for oppussing).
    #[serde(rename = "behov", alias = "needs-work")]
    #[strum(to_string = "behov", serialize = "needs-work")]
    NeedsWork,
    /// Ordinary condition.
    #[default]
    #[serde(rename = "standard")]
    #[strum(to_string = "standard")]
    Standard,
    /// Recently upgraded.
    #[serde(rename = "oppgradert", alias = "upgraded")]
    #[strum(to_string = "oppgradert", serialize = "upgraded")]
    Upgraded,
}

impl ConditionStandard {
    /// Price multiplier relative to the district's price per area.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::NeedsWork => 0.85,
            Self::Standard => 1.0,
            Self::Upgraded => 1.2,
        }
    }

    /// Short label shown on the form buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NeedsWork => "BEHOV",
            Self::Standard => "STANDARD",
            Self::Upgraded => "OPPGRADERT",
        }
    }

    /// Returns all variants in form order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::NeedsWork, Self::Standard, Self::Upgraded]
    }
}

/// Everything the calculator needs, with the area already validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationInput {
    /// Chosen district id.
    pub district_id: String,
    /// Floor area in square meters.
    pub area: f64,
    /// Dwelling type.
    pub dwelling_type: DwellingType,
    /// Condition standard.
    pub standard: ConditionStandard,
}

/// Calculator output, in whole kroner.
///
/// Both fields are rounded independently from the unrounded product, so
/// `estimate` may differ from `adjusted_price_per_area * area`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    /// Estimated value of the dwelling.
    pub estimate: u64,
    /// Price per square meter after multipliers.
    pub adjusted_price_per_area: u64,
}
