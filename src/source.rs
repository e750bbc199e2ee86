use crate::error::{ImportError, Result};
use crate::types::{VisitorRow, REQUIRED_COLUMNS};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

const UTF8_BOM: char = '\u{feff}';

/// Read up to `limit` visitor rows from a CSV export, in file order.
///
/// The header row must name every column in [`REQUIRED_COLUMNS`]; a missing
/// column aborts the run. Rows may be shorter than the header. When a header
/// name repeats, the last column with that name is the one read.
pub fn read_rows<R: Read>(mut reader: R, limit: usize) -> Result<Vec<VisitorRow>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(&content);

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ImportError::MissingColumn(column.to_string()));
        }
    }
    csv_reader.set_headers(last_occurrence_headers(&headers));

    let mut rows = Vec::new();
    for (idx, result) in csv_reader.deserialize::<VisitorRow>().enumerate() {
        if idx == limit {
            tracing::warn!(
                limit,
                "input has more rows than the limit; the rest are skipped"
            );
            break;
        }
        rows.push(result?);
    }

    Ok(rows)
}

/// Blank out every header that appears again further right
fn last_occurrence_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            if headers.iter().skip(idx + 1).any(|later| later == name) {
                ""
            } else {
                name
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Timestamp,Name,EmailID,Mobile,Column E,Visit Date,Interest\n";

    #[test]
    fn test_reads_rows_by_header_name() {
        let input = format!(
            "{}{}",
            HEADER,
            "2025-11-20,Asha Rao,asha@example.com,9876543210,\"Father, Mother\",Sunday 30th November 2025,\"Tech, Art\"\n"
        );
        let rows = read_rows(input.as_bytes(), 100).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name.as_deref(), Some("Asha Rao"));
        assert_eq!(rows[0].companions.as_deref(), Some("Father, Mother"));
        assert_eq!(rows[0].interest.as_deref(), Some("Tech, Art"));
    }

    #[test]
    fn test_empty_and_short_rows_are_absent() {
        let input = format!("{}{}", HEADER, ",Ben,,,,\n,Cara\n");
        let rows = read_rows(input.as_bytes(), 100).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].email, None);
        assert_eq!(rows[0].interest, None);
        assert_eq!(rows[1].name.as_deref(), Some("Cara"));
        assert_eq!(rows[1].mobile, None);
        assert_eq!(rows[1].visit_date, None);
    }

    #[test]
    fn test_limit_keeps_leading_rows() {
        let mut input = HEADER.to_string();
        for i in 0..5 {
            input.push_str(&format!(",Visitor {},,,,,\n", i));
        }

        let rows = read_rows(input.as_bytes(), 3).unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.clone().unwrap()).collect();
        assert_eq!(names, vec!["Visitor 0", "Visitor 1", "Visitor 2"]);

        assert!(read_rows(input.as_bytes(), 0).unwrap().is_empty());
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let input = "Name,EmailID,Mobile,Visit Date,Interest\nAsha,,,,\n";
        let err = read_rows(input.as_bytes(), 100).unwrap_err();

        match err {
            ImportError::MissingColumn(column) => assert_eq!(column, "Column E"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_repeated_header_reads_last_column() {
        let input = "Name,EmailID,Mobile,Column E,Visit Date,Interest,Name,,\n\
                     Old Name,a@example.com,,,,,New Name,x,y\n";
        let rows = read_rows(input.as_bytes(), 100).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name.as_deref(), Some("New Name"));
        assert_eq!(rows[0].email.as_deref(), Some("a@example.com"));
    }

    #[test]
    fn test_last_occurrence_headers() {
        let headers = StringRecord::from(vec!["Name", "Mobile", "Name", "", ""]);
        let deduped = last_occurrence_headers(&headers);
        assert_eq!(deduped.iter().collect::<Vec<_>>(), vec!["", "Mobile", "Name", "", ""]);
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let input = format!("\u{feff}{},Dev,,,,,\n", HEADER);
        let rows = read_rows(input.as_bytes(), 100).unwrap();
        assert_eq!(rows[0].name.as_deref(), Some("Dev"));
    }
}
