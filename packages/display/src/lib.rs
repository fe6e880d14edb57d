#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Display formatting and view models for the stats panel.
//!
//! Everything here is a pure transform from catalog records (and valuation
//! results) to the strings and flags the front end renders.

pub mod format;
pub mod panel;

pub use format::{format_number, headline, preposition, valuation_cta};
pub use panel::{
    DistrictListEntry, FormattedValuation, StatCard, StatsPanel, Trend, stat_accent, stat_label,
};
