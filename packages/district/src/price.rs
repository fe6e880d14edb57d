//! Parsing of stored price figures.

use oslo_market_district_models::DistrictRecord;

use crate::CatalogError;

/// Parses a grouped integer such as `"104 600"` by dropping every
/// whitespace character (including non-breaking spaces).
///
/// Returns `None` when anything other than ASCII digits remains, when no
/// digits remain, or when the value overflows.
#[must_use]
pub fn parse_grouped_integer(value: &str) -> Option<u64> {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Returns the record's price per square meter as an integer.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidPricePerArea`] if the stored display
/// string is not a positive grouped integer.
pub fn base_price_per_area(record: &DistrictRecord) -> Result<u64, CatalogError> {
    parse_grouped_integer(&record.price_per_area)
        .filter(|v| *v > 0)
        .ok_or_else(|| CatalogError::InvalidPricePerArea {
            id: record.id.clone(),
            value: record.price_per_area.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_group_separators() {
        assert_eq!(parse_grouped_integer("100 000"), Some(100_000));
        assert_eq!(parse_grouped_integer("97 400"), Some(97_400));
        assert_eq!(parse_grouped_integer("999"), Some(999));
    }

    #[test]
    fn strips_non_breaking_spaces() {
        assert_eq!(parse_grouped_integer("131\u{a0}200"), Some(131_200));
        assert_eq!(parse_grouped_integer("1\u{202f}234\u{202f}567"), Some(1_234_567));
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(parse_grouped_integer(""), None);
        assert_eq!(parse_grouped_integer("   "), None);
        assert_eq!(parse_grouped_integer("ca. 90 000"), None);
        assert_eq!(parse_grouped_integer("90,5"), None);
        assert_eq!(parse_grouped_integer("-90 000"), None);
    }

    #[test]
    fn zero_price_is_invalid_district_data() {
        let record = DistrictRecord {
            id: "x".to_string(),
            name: "X".to_string(),
            description: String::new(),
            price_change: String::new(),
            price_change_detail: String::new(),
            time_on_market: String::new(),
            time_on_market_detail: String::new(),
            median_price: String::new(),
            median_price_detail: String::new(),
            price_per_area: "0".to_string(),
            price_per_area_detail: String::new(),
        };
        assert!(matches!(
            base_price_per_area(&record),
            Err(CatalogError::InvalidPricePerArea { .. })
        ));
    }
}
