//! The estimate formula.

use oslo_market_district::DistrictRecord;
use oslo_market_district::price::base_price_per_area;
use oslo_market_valuation_models::{ConditionStandard, DwellingType, ValuationResult};

use crate::ValuationError;

/// Largest accepted floor area in square meters.
pub const MAX_AREA: f64 = 100_000.0;

fn is_valid_area(area: f64) -> bool {
    area.is_finite() && area > 0.0 && area <= MAX_AREA
}

/// Parses a user-entered floor area.
///
/// Surrounding whitespace is ignored and a decimal comma is accepted.
///
/// # Errors
///
/// Returns [`ValuationError::InvalidArea`] if the text is empty, not a
/// finite number, not greater than zero, or larger than [`MAX_AREA`].
pub fn parse_area(input: &str) -> Result<f64, ValuationError> {
    let trimmed = input.trim();
    let area = trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|a| is_valid_area(*a));

    area.ok_or_else(|| ValuationError::InvalidArea {
        input: input.to_string(),
    })
}

/// Computes the estimate and adjusted price per area for a dwelling.
///
/// Both outputs are rounded to whole kroner from their own unrounded
/// products: `base * area * type * standard` and `base * type * standard`.
///
/// # Errors
///
/// * [`ValuationError::InvalidArea`] if `area` is not a positive finite
///   number no larger than [`MAX_AREA`].
/// * [`ValuationError::InvalidDistrictData`] if the district's stored price
///   per area does not parse.
/// * [`ValuationError::OutOfRange`] if either amount does not fit in a
///   `u64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn calculate_estimate(
    district: &DistrictRecord,
    area: f64,
    dwelling_type: DwellingType,
    standard: ConditionStandard,
) -> Result<ValuationResult, ValuationError> {
    if !is_valid_area(area) {
        return Err(ValuationError::InvalidArea {
            input: area.to_string(),
        });
    }

    let base = base_price_per_area(district)? as f64;
    let type_multiplier = dwelling_type.multiplier();
    let standard_multiplier = standard.multiplier();

    let estimate = (base * area * type_multiplier * standard_multiplier).round();
    let adjusted = (base * type_multiplier * standard_multiplier).round();

    log::debug!(
        "Estimate for {} ({area} m2, {dwelling_type}, {standard}): {estimate} ({adjusted}/m2)",
        district.id
    );

    let to_kroner = |value: f64| {
        // `u64::MAX as f64` rounds up to 2^64, which itself does not fit.
        if value.is_finite() && value >= 0.0 && value < u64::MAX as f64 {
            Ok(value as u64)
        } else {
            Err(ValuationError::OutOfRange {
                district_id: district.id.clone(),
                value,
            })
        }
    };

    Ok(ValuationResult {
        estimate: to_kroner(estimate)?,
        adjusted_price_per_area: to_kroner(adjusted)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn district(per_area: &str) -> DistrictRecord {
        DistrictRecord {
            id: "test".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            price_change: "+2,0 %".to_string(),
            price_change_detail: String::new(),
            time_on_market: String::new(),
            time_on_market_detail: String::new(),
            median_price: String::new(),
            median_price_detail: String::new(),
            price_per_area: per_area.to_string(),
            price_per_area_detail: String::new(),
        }
    }

    #[test]
    fn neutral_multipliers_scale_by_area() {
        let result = calculate_estimate(
            &district("100 000"),
            50.0,
            DwellingType::Terraced,
            ConditionStandard::Standard,
        )
        .unwrap();
        assert_eq!(result.adjusted_price_per_area, 100_000);
        assert_eq!(result.estimate, 5_000_000);
    }

    #[test]
    fn apartment_needing_work() {
        let result = calculate_estimate(
            &district("100 000"),
            40.0,
            DwellingType::Apartment,
            ConditionStandard::NeedsWork,
        )
        .unwrap();
        assert_eq!(result.adjusted_price_per_area, 78_200);
        assert_eq!(result.estimate, 3_128_000);
    }

    #[test]
    fn outputs_are_rounded_independently() {
        // 97 400 * 1.08 * 1.2 = 126 230.4 -> 126 230 per m2, but
        // 97 400 * 55.5 * 1.08 * 1.2 = 7 005 787.2 -> 7 005 787, while
        // 126 230 * 55.5 = 7 005 765.
        let result = calculate_estimate(
            &district("97 400"),
            55.5,
            DwellingType::DetachedPlot,
            ConditionStandard::Upgraded,
        )
        .unwrap();
        assert_eq!(result.adjusted_price_per_area, 126_230);
        assert_eq!(result.estimate, 7_005_787);
        let naive = (126_230.0_f64 * 55.5).round() as u64;
        assert_eq!(naive, 7_005_765);
        assert_ne!(result.estimate, naive);
    }

    #[test]
    fn single_family_upgraded_is_highest() {
        let base = district("80 000");
        let mut estimates = Vec::new();
        for t in DwellingType::all() {
            for s in ConditionStandard::all() {
                estimates.push(calculate_estimate(&base, 70.0, *t, *s).unwrap().estimate);
            }
        }
        let top = calculate_estimate(
            &base,
            70.0,
            DwellingType::SingleFamily,
            ConditionStandard::Upgraded,
        )
        .unwrap()
        .estimate;
        assert_eq!(estimates.iter().max(), Some(&top));
    }

    #[test]
    fn rejects_non_positive_area() {
        let d = district("100 000");
        for area in [0.0, -5.0, f64::NAN, f64::INFINITY, 1e300, MAX_AREA + 1.0] {
            assert!(matches!(
                calculate_estimate(&d, area, DwellingType::Terraced, ConditionStandard::Standard),
                Err(ValuationError::InvalidArea { .. })
            ));
        }
    }

    #[test]
    fn malformed_price_is_invalid_district_data() {
        let result = calculate_estimate(
            &district("ukjent"),
            50.0,
            DwellingType::Terraced,
            ConditionStandard::Standard,
        );
        assert!(matches!(result, Err(ValuationError::InvalidDistrictData(_))));
    }

    #[test]
    fn parse_area_accepts_numbers() {
        assert!((parse_area("50").unwrap() - 50.0).abs() < f64::EPSILON);
        assert!((parse_area(" 72.5 ").unwrap() - 72.5).abs() < f64::EPSILON);
        assert!((parse_area("72,5").unwrap() - 72.5).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_area_rejects_invalid_input() {
        for input in ["", "   ", "0", "-5", "abc", "50m2", "NaN", "inf", "1e300", "100001"] {
            assert!(
                matches!(parse_area(input), Err(ValuationError::InvalidArea { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn largest_area_is_accepted() {
        assert!((parse_area("100000").unwrap() - MAX_AREA).abs() < f64::EPSILON);
        let result = calculate_estimate(
            &district("100 000"),
            MAX_AREA,
            DwellingType::Terraced,
            ConditionStandard::Standard,
        )
        .unwrap();
        assert_eq!(result.estimate, 10_000_000_000);
    }

    #[test]
    fn overflowing_amount_is_out_of_range() {
        let result = calculate_estimate(
            &district("18 000 000 000 000 000 000"),
            50.0,
            DwellingType::SingleFamily,
            ConditionStandard::Upgraded,
        );
        assert!(matches!(
            result,
            Err(ValuationError::OutOfRange { district_id, .. }) if district_id == "test"
        ));
    }
}
