//! Plain-text rendering of the display view models.

use std::fmt::Write as _;

use oslo_market_display::{DistrictListEntry, FormattedValuation, StatsPanel, Trend};
use oslo_market_valuation::{ConditionStandard, DwellingType};

const fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Rising => "↑",
        Trend::Falling => "↓",
    }
}

/// Renders the "Alle bydeler" list, marking the active row.
pub fn district_list(entries: &[DistrictListEntry]) -> String {
    let width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);

    let mut out = String::from("Alle bydeler\n");
    for entry in entries {
        let marker = if entry.active { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:<width$}  {} {}",
            entry.name,
            trend_arrow(entry.trend),
            entry.price_change,
        );
    }
    out
}

/// Renders a stats panel with its four cards.
pub fn stats_panel(panel: &StatsPanel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} / {}", panel.scope_label, panel.name);
    let _ = writeln!(out, "{}", panel.headline);
    let _ = writeln!(out, "{}", panel.description);
    out.push('\n');

    for card in &panel.cards {
        let _ = writeln!(out, "  {:<12} {}", card.label, card.value);
        let _ = writeln!(out, "  {:<12} {}", "", card.detail);
    }

    if let Some(cta) = &panel.valuation_cta {
        out.push('\n');
        let _ = writeln!(out, "{cta}");
    }
    out
}

/// Renders a valuation result.
pub fn valuation(
    district_name: &str,
    area: f64,
    dwelling_type: DwellingType,
    standard: ConditionStandard,
    result: &FormattedValuation,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{district_name}, {area} m2, {} / {}",
        dwelling_type.label(),
        standard.label()
    );
    let _ = writeln!(out, "  Estimert verdi   {}", result.estimate_text);
    let _ = writeln!(
        out,
        "  Pris per m2      {}",
        result.adjusted_price_per_area_text
    );
    let _ = writeln!(
        out,
        "  Prisendring      {} {}",
        trend_arrow(result.trend),
        result.price_change
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use oslo_market_district::catalog;
    use oslo_market_valuation::ValuationResult;

    #[test]
    fn list_marks_active_row() {
        let rendered = district_list(&DistrictListEntry::list(catalog(), "frogner"));
        let frogner = rendered.lines().find(|l| l.contains("Frogner")).unwrap();
        assert!(frogner.starts_with('*'));
        assert_eq!(rendered.lines().filter(|l| l.starts_with('*')).count(), 1);
        assert_eq!(rendered.lines().count(), catalog().list_districts().len() + 1);
    }

    #[test]
    fn panel_shows_cta_only_when_present() {
        let record = catalog().find_or_aggregate("sagene");
        let selected = stats_panel(&StatsPanel::new(record, true));
        assert!(selected.contains("Hva er boligen din i Sagene verdt?"));
        assert!(selected.starts_with("Bydel / Sagene"));

        let hovered = stats_panel(&StatsPanel::new(record, false));
        assert!(!hovered.contains("verdt?"));
    }

    #[test]
    fn valuation_uses_grouped_amounts() {
        let record = catalog().find_or_aggregate("alna");
        let formatted = FormattedValuation::new(
            record,
            &ValuationResult {
                estimate: 3_128_000,
                adjusted_price_per_area: 78_200,
            },
        );
        let rendered = valuation(
            &record.name,
            40.0,
            DwellingType::Apartment,
            ConditionStandard::NeedsWork,
            &formatted,
        );
        assert!(rendered.contains("3 128 000 kr"));
        assert!(rendered.contains("78 200"));
        assert!(rendered.contains("LEI / BEHOV"));
    }
}
