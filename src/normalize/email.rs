use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Trim and lowercase an address, keeping it only if it looks like an email.
///
/// Syntax check only, no DNS or MX lookup.
pub fn validate_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_lowercase();
    if EMAIL_REGEX.is_match(&email) {
        Some(email)
    } else {
        None
    }
}
