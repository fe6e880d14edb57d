//! Stats panel, district list and valuation result view models.

use oslo_market_district::{Catalog, DistrictRecord, MetricKind};
use oslo_market_valuation_models::ValuationResult;
use serde::Serialize;

use crate::format::{format_number, headline, valuation_cta};

/// Card label for a metric.
#[must_use]
pub const fn stat_label(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::PriceChange => "Prisendring",
        MetricKind::TimeOnMarket => "Salgstid",
        MetricKind::MedianPrice => "Medianpris",
        MetricKind::PricePerArea => "Per M2",
    }
}

/// Accent colour of a metric's value when its card is highlighted.
#[must_use]
pub const fn stat_accent(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::PriceChange => "emerald",
        MetricKind::TimeOnMarket | MetricKind::PricePerArea => "white",
        MetricKind::MedianPrice => "yellow",
    }
}

/// One stat card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    /// Which metric this card shows.
    pub kind: MetricKind,
    /// Card label.
    pub label: &'static str,
    /// Display value.
    pub value: String,
    /// Detail sentence.
    pub detail: String,
    /// Highlighted cards use the accent colour. The aggregate record is
    /// never highlighted.
    pub highlighted: bool,
    /// Value colour to use.
    pub color: &'static str,
}

impl StatCard {
    fn new(record: &DistrictRecord, kind: MetricKind, highlighted: bool) -> Self {
        Self {
            kind,
            label: stat_label(kind),
            value: record.metric(kind).to_string(),
            detail: record.metric_detail(kind).to_string(),
            highlighted,
            color: if highlighted { stat_accent(kind) } else { "white" },
        }
    }
}

/// Direction of a district's price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    /// Price change starts with `+`.
    Rising,
    /// Anything else.
    Falling,
}

impl Trend {
    /// Classifies a price-change display string.
    #[must_use]
    pub fn of(price_change: &str) -> Self {
        if price_change.starts_with('+') {
            Self::Rising
        } else {
            Self::Falling
        }
    }
}

/// Everything the stats panel renders for the displayed district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPanel {
    /// Id of the displayed record.
    pub district_id: String,
    /// Display name.
    pub name: String,
    /// Description text.
    pub description: String,
    /// "Hele Oslo" for the aggregate, "Bydel" otherwise.
    pub scope_label: &'static str,
    /// Title question.
    pub headline: String,
    /// The four stat cards.
    pub cards: Vec<StatCard>,
    /// Label of the valuation button, present only when a real district is
    /// selected.
    pub valuation_cta: Option<String>,
}

impl StatsPanel {
    /// Builds the panel for `record`.
    ///
    /// `is_selected` is whether the user has a sticky selection (as opposed
    /// to merely hovering).
    #[must_use]
    pub fn new(record: &DistrictRecord, is_selected: bool) -> Self {
        let is_aggregate = record.is_aggregate();
        Self {
            district_id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            scope_label: if is_aggregate { "Hele Oslo" } else { "Bydel" },
            headline: headline(record),
            cards: MetricKind::all()
                .iter()
                .map(|kind| StatCard::new(record, *kind, !is_aggregate))
                .collect(),
            valuation_cta: (is_selected && !is_aggregate).then(|| valuation_cta(record)),
        }
    }
}

/// One row in the "Alle bydeler" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictListEntry {
    /// District id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price change display string.
    pub price_change: String,
    /// Direction of the price change.
    pub trend: Trend,
    /// Whether this row is the displayed district.
    pub active: bool,
}

impl DistrictListEntry {
    /// Builds the list for every district in canonical order, marking the
    /// row whose id equals `displayed_id`.
    #[must_use]
    pub fn list(catalog: &Catalog, displayed_id: &str) -> Vec<Self> {
        catalog
            .list_districts()
            .iter()
            .map(|d| Self {
                id: d.id.clone(),
                name: d.name.clone(),
                price_change: d.price_change.clone(),
                trend: Trend::of(&d.price_change),
                active: d.id == displayed_id,
            })
            .collect()
    }
}

/// A valuation result ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedValuation {
    /// Estimate in kroner.
    pub estimate: u64,
    /// Adjusted price per square meter in kroner.
    pub adjusted_price_per_area: u64,
    /// Estimate with thousands grouping.
    pub estimate_text: String,
    /// Adjusted price per square meter with thousands grouping.
    pub adjusted_price_per_area_text: String,
    /// The district's price change, shown as the trend.
    pub price_change: String,
    /// Direction of the price change.
    pub trend: Trend,
}

impl FormattedValuation {
    /// Formats `result` for `district`.
    #[must_use]
    pub fn new(district: &DistrictRecord, result: &ValuationResult) -> Self {
        Self {
            estimate: result.estimate,
            adjusted_price_per_area: result.adjusted_price_per_area,
            estimate_text: format!("{} kr", format_number(result.estimate)),
            adjusted_price_per_area_text: format_number(result.adjusted_price_per_area),
            price_change: district.price_change.clone(),
            trend: Trend::of(&district.price_change),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oslo_market_district::catalog;

    #[test]
    fn aggregate_panel_is_never_highlighted() {
        let panel = StatsPanel::new(catalog().aggregate(), false);
        assert_eq!(panel.scope_label, "Hele Oslo");
        assert!(panel.cards.iter().all(|c| !c.highlighted && c.color == "white"));
        assert!(panel.valuation_cta.is_none());

        let panel = StatsPanel::new(catalog().aggregate(), true);
        assert!(panel.valuation_cta.is_none());
    }

    #[test]
    fn district_panel_highlights_cards() {
        let record = catalog().find_or_aggregate("grunerlokka");
        let panel = StatsPanel::new(record, false);
        assert_eq!(panel.scope_label, "Bydel");
        assert!(panel.cards.iter().all(|c| c.highlighted));
        assert_eq!(panel.cards[0].color, "emerald");
        assert_eq!(panel.cards[2].color, "yellow");
        assert_eq!(panel.cards[3].value, record.price_per_area);
        assert_eq!(panel.cards[3].label, "Per M2");
    }

    #[test]
    fn cta_only_for_selected_district() {
        let record = catalog().find_or_aggregate("frogner");
        assert!(StatsPanel::new(record, false).valuation_cta.is_none());
        assert_eq!(
            StatsPanel::new(record, true).valuation_cta.as_deref(),
            Some("Hva er boligen din på Frogner verdt?")
        );
    }

    #[test]
    fn list_marks_active_row_and_trend() {
        let entries = DistrictListEntry::list(catalog(), "sagene");
        assert_eq!(entries.len(), catalog().list_districts().len());
        assert_eq!(entries.iter().filter(|e| e.active).count(), 1);
        assert!(entries.iter().any(|e| e.id == "sagene" && e.active));

        let vestre = entries.iter().find(|e| e.id == "vestre-aker").unwrap();
        assert_eq!(vestre.trend, Trend::Falling);
        let grunerlokka = entries.iter().find(|e| e.id == "grunerlokka").unwrap();
        assert_eq!(grunerlokka.trend, Trend::Rising);

        let none_active = DistrictListEntry::list(catalog(), "oslo");
        assert!(none_active.iter().all(|e| !e.active));
    }

    #[test]
    fn formats_valuation_amounts() {
        let record = catalog().find_or_aggregate("alna");
        let formatted = FormattedValuation::new(
            record,
            &ValuationResult {
                estimate: 3_128_000,
                adjusted_price_per_area: 78_200,
            },
        );
        assert_eq!(formatted.estimate_text, "3 128 000 kr");
        assert_eq!(formatted.adjusted_price_per_area_text, "78 200");
        assert_eq!(formatted.price_change, record.price_change);
    }

    #[test]
    fn panel_serializes_camel_case() {
        let json = serde_json::to_value(StatsPanel::new(catalog().aggregate(), false)).unwrap();
        assert_eq!(json["scopeLabel"], "Hele Oslo");
        assert_eq!(json["cards"][0]["kind"], "priceChange");
        assert!(json["valuationCta"].is_null());
    }
}
