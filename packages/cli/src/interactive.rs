//! Dialoguer-driven browse and estimate flows.

use dialoguer::{Confirm, Input, Select};
use oslo_market_display::{FormattedValuation, StatsPanel};
use oslo_market_district::{Catalog, DistrictRecord};
use oslo_market_valuation::{ConditionStandard, DwellingType, MAX_AREA, ValuationForm};

use crate::render;

/// Lets the user pick a record, the aggregate listed first.
fn pick_district<'a>(
    catalog: &'a Catalog,
    prompt: &str,
    default_id: &str,
) -> dialoguer::Result<&'a DistrictRecord> {
    let records: Vec<&DistrictRecord> = std::iter::once(catalog.aggregate())
        .chain(catalog.list_districts())
        .collect();
    let labels: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    let default = records
        .iter()
        .position(|r| r.id == default_id)
        .unwrap_or(0);

    let idx = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(records[idx])
}

/// Browses district panels until the user quits, offering the estimator
/// for a chosen district.
///
/// # Errors
///
/// Returns an error if a prompt fails or the estimator fails.
pub fn browse(catalog: &Catalog) -> Result<(), Box<dyn std::error::Error>> {
    let mut current = catalog.aggregate().id.clone();

    loop {
        let record = pick_district(catalog, "Velg bydel", &current)?;
        current.clone_from(&record.id);

        let panel = StatsPanel::new(record, true);
        println!();
        print!("{}", render::stats_panel(&panel));
        println!();

        if let Some(cta) = &panel.valuation_cta
            && Confirm::new().with_prompt(cta).default(false).interact()?
        {
            estimate(catalog, record)?;
        }

        if !Confirm::new()
            .with_prompt("Se en annen bydel?")
            .default(true)
            .interact()?
        {
            return Ok(());
        }
    }
}

/// Runs the valuation form for `district`, letting the user change every
/// input, and prints the estimate.
///
/// # Errors
///
/// Returns an error if a prompt fails or the district's stored price per
/// area is malformed.
pub fn estimate(
    catalog: &Catalog,
    district: &DistrictRecord,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = ValuationForm::open(district);

    let chosen = pick_district(catalog, "Bydel", form.district_id())?;
    form.choose_district(&chosen.id);

    loop {
        let area: String = Input::new()
            .with_prompt("Areal (m2)")
            .with_initial_text(form.area_input())
            .interact_text()?;
        form.set_area(&area);
        if form.can_calculate() {
            break;
        }
        println!("Oppgi et areal over 0 og opptil {MAX_AREA} m2.");
    }

    let types = DwellingType::all();
    let type_labels: Vec<&str> = types.iter().map(|t| t.label()).collect();
    let type_default = types
        .iter()
        .position(|t| *t == form.dwelling_type())
        .unwrap_or(0);
    let idx = Select::new()
        .with_prompt("Boligtype")
        .items(&type_labels)
        .default(type_default)
        .interact()?;
    form.set_dwelling_type(types[idx]);

    let standards = ConditionStandard::all();
    let standard_labels: Vec<&str> = standards.iter().map(|s| s.label()).collect();
    let standard_default = standards
        .iter()
        .position(|s| *s == form.standard())
        .unwrap_or(0);
    let idx = Select::new()
        .with_prompt("Standard")
        .items(&standard_labels)
        .default(standard_default)
        .interact()?;
    form.set_standard(standards[idx]);

    let input = form.input()?;
    let result = form.calculate(catalog)?;
    let district = form.current_district(catalog);

    println!();
    print!(
        "{}",
        render::valuation(
            &district.name,
            input.area,
            input.dwelling_type,
            input.standard,
            &FormattedValuation::new(district, &result),
        )
    );
    println!();

    Ok(())
}
