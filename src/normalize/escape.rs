/// Double every single quote so the text can sit inside a SQL string literal.
///
/// The caller adds the surrounding quotes.
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_quotes_doubled() {
        assert_eq!(escape_sql_string("O'Brien"), "O''Brien");
        assert_eq!(escape_sql_string("'quoted'"), "''quoted''");
    }

    #[test]
    fn test_other_text_untouched() {
        assert_eq!(escape_sql_string(""), "");
        assert_eq!(escape_sql_string(r#"say "hi" \ ok"#), r#"say "hi" \ ok"#);
    }
}
