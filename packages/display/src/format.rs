//! Text formatting shared by every view.

use oslo_market_district::DistrictRecord;

/// Districts whose name takes "på" rather than "i".
const PAA_DISTRICTS: &[&str] = &[
    "St. Hanshaugen",
    "Frogner",
    "Ullern",
    "Stovner",
    "Nordstrand",
    "Sentrum",
];

/// Formats an integer with a space between groups of three digits,
/// counted from the right.
///
/// `1234567` becomes `"1 234 567"`; negative values keep the sign in front.
#[must_use]
pub fn format_number(value: impl Into<i128>) -> String {
    let value: i128 = value.into();
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Returns the Norwegian preposition used before a district name.
#[must_use]
pub fn preposition(name: &str) -> &'static str {
    if PAA_DISTRICTS.contains(&name) {
        "på"
    } else {
        "i"
    }
}

/// Title question for the displayed record.
#[must_use]
pub fn headline(record: &DistrictRecord) -> String {
    format!(
        "Hvordan er boligmarkedet {} {}?",
        preposition(&record.name),
        record.name
    )
}

/// Label of the button that opens the valuation form.
#[must_use]
pub fn valuation_cta(record: &DistrictRecord) -> String {
    format!(
        "Hva er boligen din {} {} verdt?",
        preposition(&record.name),
        record.name
    )
}
