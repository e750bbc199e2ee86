use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

// "<day><ordinal suffix> <month name> <year>", anywhere in the text
static VISIT_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)(?:st|nd|rd|th)\s+(\w+)\s+(\d{4})").unwrap()
});

static MONTHS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("january", "01"),
        ("february", "02"),
        ("march", "03"),
        ("april", "04"),
        ("may", "05"),
        ("june", "06"),
        ("july", "07"),
        ("august", "08"),
        ("september", "09"),
        ("october", "10"),
        ("november", "11"),
        ("december", "12"),
    ])
});

/// Parse a visit date such as `Sunday 30th November 2025` into `2025-11-30`.
///
/// The day is not checked against the month, so `31st February 2025`
/// becomes `2025-02-31`.
pub fn parse_visit_date(raw: &str) -> Option<String> {
    let caps = VISIT_DATE_REGEX.captures(raw)?;
    let day = &caps[1];
    let month = MONTHS.get(caps[2].to_lowercase().as_str())?;
    let year = &caps[3];

    Some(format!("{}-{}-{:0>2}", year, month, day))
}
