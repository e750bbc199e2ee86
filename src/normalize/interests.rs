/// Encode a comma-separated interest list as JSON-array text.
///
/// Entries are trimmed and empty ones dropped. Only embedded double quotes
/// are backslash-escaped; the result is SQL-escaped later by the renderer.
pub fn parse_area_of_interest(raw: &str) -> String {
    let entries: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| format!("\"{}\"", entry.replace('"', "\\\"")))
        .collect();

    format!("[{}]", entries.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_empty_input_is_empty_array() {
        assert_eq!(parse_area_of_interest(""), "[]");
        assert_eq!(parse_area_of_interest("  "), "[]");
        assert_eq!(parse_area_of_interest(" , ,"), "[]");
    }

    #[test]
    fn test_entries_trimmed_and_quoted() {
        assert_eq!(parse_area_of_interest("Tech, Art"), r#"["Tech","Art"]"#);
        assert_eq!(
            parse_area_of_interest("Computer Science,,  Commerce ,"),
            r#"["Computer Science","Commerce"]"#
        );
    }

    #[test]
    fn test_double_quotes_escaped() {
        let encoded = parse_area_of_interest(r#"He said "hi""#);
        assert_eq!(encoded, r#"["He said \"hi\""]"#);

        let parsed: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(parsed[0].as_str(), Some(r#"He said "hi""#));
    }

    #[test]
    fn test_output_is_json_array() {
        let encoded = parse_area_of_interest("Law, Psychology, Data Science");
        let parsed: Value = serde_json::from_str(&encoded).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].as_str(), Some("Data Science"));
    }

    #[test]
    fn test_single_quotes_left_for_sql_escaping() {
        assert_eq!(parse_area_of_interest("Children's Lit"), r#"["Children's Lit"]"#);
    }
}
