#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District record schema for the Oslo housing-market map.
//!
//! A [`DistrictRecord`] describes one administrative district (bydel) and
//! its housing-market figures. The same schema is used for the synthetic
//! whole-city record identified by [`AGGREGATE_ID`].

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Reserved id of the whole-city aggregate record.
pub const AGGREGATE_ID: &str = "oslo";

/// One district's housing-market figures, as authored in the catalog table.
///
/// Every metric is a pre-formatted display string paired with a longer
/// detail sentence. Numbers are formatted the Norwegian way (space as
/// thousands separator, comma as decimal mark).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictRecord {
    /// Unique district key (e.g. `"grunerlokka"`).
    pub id: String,
    /// Display name (e.g. "Grünerløkka").
    pub name: String,
    /// Free-text description shown under the headline.
    pub description: String,
    /// Year-over-year price change (e.g. "+4,2 %").
    pub price_change: String,
    /// Detail sentence for the price change.
    pub price_change_detail: String,
    /// Typical time on market (e.g. "19 dager").
    pub time_on_market: String,
    /// Detail sentence for the time on market.
    pub time_on_market_detail: String,
    /// Median sale price (e.g. "5,4 mill").
    pub median_price: String,
    /// Detail sentence for the median price.
    pub median_price_detail: String,
    /// Price per square meter (e.g. "104 300").
    pub price_per_area: String,
    /// Detail sentence for the price per square meter.
    pub price_per_area_detail: String,
}

impl DistrictRecord {
    /// Returns the district id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this is the whole-city aggregate record.
    #[must_use]
    pub fn is_aggregate(&self) -> bool {
        self.id == AGGREGATE_ID
    }

    /// Returns the display value for a metric.
    #[must_use]
    pub fn metric(&self, kind: MetricKind) -> &str {
        match kind {
            MetricKind::PriceChange => &self.price_change,
            MetricKind::TimeOnMarket => &self.time_on_market,
            MetricKind::MedianPrice => &self.median_price,
            MetricKind::PricePerArea => &self.price_per_area,
        }
    }

    /// Returns the detail sentence for a metric.
    #[must_use]
    pub fn metric_detail(&self, kind: MetricKind) -> &str {
        match kind {
            MetricKind::PriceChange => &self.price_change_detail,
            MetricKind::TimeOnMarket => &self.time_on_market_detail,
            MetricKind::MedianPrice => &self.median_price_detail,
            MetricKind::PricePerArea => &self.price_per_area_detail,
        }
    }
}

/// The four market metrics every record carries.
#[derive(
    Debug,
    Clone,
    Copy,
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
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MetricKind {
    /// Year-over-year price change.
    PriceChange,
    /// Typical days on market.
    TimeOnMarket,
    /// Median sale price.
    MedianPrice,
    /// Price per square meter.
    PricePerArea,
}

impl MetricKind {
    /// Returns all variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::PriceChange,
            Self::TimeOnMarket,
            Self::MedianPrice,
            Self::PricePerArea,
        ]
    }
}
