use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Whole-cell answers meaning "coming alone"
static NOBODY_PHRASES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from(["no one", "none", "0", "alone", "-", "."])
});

/// Bare relationship labels. A segment made of only one of these is a label
/// for someone already listed, not an extra person.
static ROLE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "father",
        "mother",
        "sister",
        "brother",
        "friend",
        "cousin",
        "elder sister",
        "dad",
        "mom",
        "husband",
        "wife",
        "classmate",
        "grandfather",
        "grandmother",
    ])
});

static PARENTHETICAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\([^)]*\)").unwrap()
});

const SEGMENT_BREAK: &str = "|";

// Applied in order: punctuation first, so a newline already turned into a
// break can no longer serve as the whitespace before "and" or "-".
static PUNCTUATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[,;&\n]+").unwrap()
});

static AND_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+and\s+").unwrap()
});

static SPACED_HYPHEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+-\s+").unwrap()
});

/// Count the people described in the free-text companions cell.
///
/// The text is split on commas, semicolons, ampersands, newlines, the word
/// "and" and spaced hyphens after parenthesized asides are removed. Each
/// remaining segment is one person unless it is exactly a role word.
pub fn parse_accompanying_count(raw: &str) -> u32 {
    let text = raw.trim().to_lowercase();
    if text.is_empty() || NOBODY_PHRASES.contains(text.as_str()) {
        return 0;
    }

    let text = PARENTHETICAL_REGEX.replace_all(&text, "");
    let text = PUNCTUATION_REGEX.replace_all(&text, SEGMENT_BREAK);
    let text = AND_REGEX.replace_all(&text, SEGMENT_BREAK);
    let text = SPACED_HYPHEN_REGEX.replace_all(&text, SEGMENT_BREAK);

    text.split(SEGMENT_BREAK)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter(|segment| !ROLE_WORDS.contains(*segment))
        .count() as u32
}
