//! State of the valuation modal.
//!
//! Any edit to the inputs hides a previously shown result; a result is only
//! produced by an explicit [`ValuationForm::calculate`].

use oslo_market_district::{Catalog, DistrictRecord};
use oslo_market_valuation_models::{
    ConditionStandard, DwellingType, ValuationInput, ValuationResult,
};

use crate::ValuationError;
use crate::estimate::{calculate_estimate, parse_area};

/// Inputs and last result of the estimator modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationForm {
    district_id: String,
    area_input: String,
    dwelling_type: DwellingType,
    standard: ConditionStandard,
    result: Option<ValuationResult>,
}

impl ValuationForm {
    /// Opens the form for `district` with every other input reset.
    #[must_use]
    pub fn open(district: &DistrictRecord) -> Self {
        Self {
            district_id: district.id.clone(),
            area_input: String::new(),
            dwelling_type: DwellingType::default(),
            standard: ConditionStandard::default(),
            result: None,
        }
    }

    /// Chosen district id.
    #[must_use]
    pub fn district_id(&self) -> &str {
        &self.district_id
    }

    /// Area exactly as entered.
    #[must_use]
    pub fn area_input(&self) -> &str {
        &self.area_input
    }

    /// Chosen dwelling type.
    #[must_use]
    pub const fn dwelling_type(&self) -> DwellingType {
        self.dwelling_type
    }

    /// Chosen condition standard.
    #[must_use]
    pub const fn standard(&self) -> ConditionStandard {
        self.standard
    }

    /// Last calculated result, if it is still current.
    #[must_use]
    pub const fn result(&self) -> Option<&ValuationResult> {
        self.result.as_ref()
    }

    /// Resolves the chosen district, falling back to the aggregate record.
    #[must_use]
    pub fn current_district<'a>(&self, catalog: &'a Catalog) -> &'a DistrictRecord {
        catalog.find_or_aggregate(&self.district_id)
    }

    /// Picks another district.
    pub fn choose_district(&mut self, id: &str) {
        self.district_id = id.to_string();
        self.result = None;
    }

    /// Replaces the entered area text.
    pub fn set_area(&mut self, input: &str) {
        self.area_input = input.to_string();
        self.result = None;
    }

    /// Picks a dwelling type.
    pub fn set_dwelling_type(&mut self, dwelling_type: DwellingType) {
        self.dwelling_type = dwelling_type;
        self.result = None;
    }

    /// Picks a condition standard.
    pub fn set_standard(&mut self, standard: ConditionStandard) {
        self.standard = standard;
        self.result = None;
    }

    /// Whether the entered area would be accepted.
    #[must_use]
    pub fn can_calculate(&self) -> bool {
        parse_area(&self.area_input).is_ok()
    }

    /// Validated calculator input for the current form values.
    ///
    /// # Errors
    ///
    /// Returns [`ValuationError::InvalidArea`] if the entered area is not a
    /// positive number.
    pub fn input(&self) -> Result<ValuationInput, ValuationError> {
        Ok(ValuationInput {
            district_id: self.district_id.clone(),
            area: parse_area(&self.area_input)?,
            dwelling_type: self.dwelling_type,
            standard: self.standard,
        })
    }

    /// Runs the calculator and stores its result.
    ///
    /// On error the form is left exactly as it was.
    ///
    /// # Errors
    ///
    /// * [`ValuationError::InvalidArea`] if the entered area is rejected.
    /// * [`ValuationError::InvalidDistrictData`] if the district's stored
    ///   price per area is malformed.
    pub fn calculate(&mut self, catalog: &Catalog) -> Result<ValuationResult, ValuationError> {
        let input = self.input()?;
        let district = self.current_district(catalog);
        let result = calculate_estimate(district, input.area, input.dwelling_type, input.standard)?;
        self.result = Some(result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oslo_market_district::catalog;

    #[test]
    fn opens_with_defaults() {
        let catalog = catalog();
        let form = ValuationForm::open(catalog.find_or_aggregate("sagene"));
        assert_eq!(form.district_id(), "sagene");
        assert_eq!(form.area_input(), "");
        assert_eq!(form.dwelling_type(), DwellingType::DetachedPlot);
        assert_eq!(form.standard(), ConditionStandard::Standard);
        assert!(form.result().is_none());
        assert!(!form.can_calculate());
    }

    #[test]
    fn calculates_for_chosen_district() {
        let catalog = catalog();
        let mut form = ValuationForm::open(catalog.aggregate());
        form.choose_district("grunerlokka");
        form.set_area("60");
        form.set_dwelling_type(DwellingType::Terraced);
        let result = form.calculate(catalog).unwrap();
        // Grünerløkka: 112 300 per m2.
        assert_eq!(result.adjusted_price_per_area, 112_300);
        assert_eq!(result.estimate, 6_738_000);
        assert_eq!(form.result(), Some(&result));
    }

    #[test]
    fn rejected_area_keeps_prior_state() {
        let catalog = catalog();
        for input in ["0", "-5", "femti", ""] {
            let mut form = ValuationForm::open(catalog.find_or_aggregate("alna"));
            form.set_area(input);
            let before = form.clone();
            assert!(matches!(
                form.calculate(catalog),
                Err(ValuationError::InvalidArea { .. })
            ));
            assert_eq!(form, before);
            assert!(form.result().is_none());
        }
    }

    #[test]
    fn can_calculate_tracks_area_input() {
        let mut form = ValuationForm::open(catalog().find_or_aggregate("bjerke"));
        for (input, expected) in [("", false), ("1e300", false), ("0", false), ("64,5", true)] {
            form.set_area(input);
            assert_eq!(form.can_calculate(), expected, "{input:?}");
        }
    }

    #[test]
    fn edits_clear_shown_result() {
        let catalog = catalog();
        let mut form = ValuationForm::open(catalog.find_or_aggregate("frogner"));
        form.set_area("80");

        form.calculate(catalog).unwrap();
        form.set_area("81");
        assert!(form.result().is_none());

        form.calculate(catalog).unwrap();
        form.set_dwelling_type(DwellingType::Apartment);
        assert!(form.result().is_none());

        form.calculate(catalog).unwrap();
        form.set_standard(ConditionStandard::Upgraded);
        assert!(form.result().is_none());

        form.calculate(catalog).unwrap();
        form.choose_district("ullern");
        assert!(form.result().is_none());
    }

    #[test]
    fn unknown_district_uses_aggregate_figures() {
        let catalog = catalog();
        let mut form = ValuationForm::open(catalog.aggregate());
        form.choose_district("atlantis");
        form.set_area("100");
        form.set_dwelling_type(DwellingType::Terraced);
        assert!(form.current_district(catalog).is_aggregate());
        // Oslo: 97 400 per m2.
        assert_eq!(form.calculate(catalog).unwrap().estimate, 9_740_000);
    }
}
