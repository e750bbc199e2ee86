//! Rendering normalized visitors as SQL `INSERT` statements
//!
//! The column list is fixed. Columns that do not come from the export
//! (category, QR colour, status, arrival tracking) always receive the same
//! literals; event and timestamp literals come from [`ImportConfig`].

use crate::normalize::escape_sql_string;
use crate::types::{ImportConfig, VisitorRecord};
use std::fmt;

/// Column order of every generated statement
pub const VISITOR_COLUMNS: [&str; 22] = [
    "id",
    "name",
    "email",
    "phone",
    "register_number",
    "event_id",
    "event_name",
    "visitor_category",
    "qr_color",
    "qr_code",
    "purpose",
    "area_of_interest",
    "photo_url",
    "accompanying_count",
    "date_of_visit_from",
    "date_of_visit_to",
    "status",
    "has_arrived",
    "arrived_at",
    "checked_in_by",
    "created_at",
    "updated_at",
];

pub const VISITOR_CATEGORY: &str = "student";
pub const QR_COLOR: &str = "blue";
pub const STATUS: &str = "approved";

/// A single value in the `VALUES (...)` list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    /// Unquoted `null`
    Null,
    /// Single-quoted string literal, escaped on output
    Text(String),
}

impl SqlValue {
    pub fn text(value: impl Into<String>) -> Self {
        SqlValue::Text(value.into())
    }

    /// `Null` for `None`, otherwise a text literal
    pub fn optional(value: Option<&str>) -> Self {
        match value {
            Some(v) => SqlValue::text(v),
            None => SqlValue::Null,
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("null"),
            SqlValue::Text(s) => write!(f, "'{}'", escape_sql_string(s)),
        }
    }
}

/// Double-quote a SQL identifier, doubling any embedded `"`
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Values for one record, in [`VISITOR_COLUMNS`] order
pub fn visitor_values(record: &VisitorRecord, config: &ImportConfig) -> Vec<SqlValue> {
    let date = SqlValue::optional(record.date_of_visit.as_deref());

    vec![
        SqlValue::text(record.id.to_string()),
        SqlValue::text(record.name.as_str()),
        SqlValue::optional(record.email.as_deref()),
        SqlValue::optional(record.phone.as_deref()),
        SqlValue::Null,
        SqlValue::text(config.event_id.as_str()),
        SqlValue::text(config.event_name.as_str()),
        SqlValue::text(VISITOR_CATEGORY),
        SqlValue::text(QR_COLOR),
        SqlValue::Null,
        SqlValue::text(""),
        SqlValue::text(record.area_of_interest.as_str()),
        SqlValue::Null,
        SqlValue::text(record.accompanying_count.to_string()),
        date.clone(),
        date,
        SqlValue::text(STATUS),
        SqlValue::text("false"),
        SqlValue::Null,
        SqlValue::Null,
        SqlValue::text(config.created_at.as_str()),
        SqlValue::text(config.created_at.as_str()),
    ]
}

/// Render one record as a single-line `INSERT` statement ending in `;`
pub fn render_insert(record: &VisitorRecord, config: &ImportConfig) -> String {
    let columns = VISITOR_COLUMNS
        .iter()
        .map(|c| quote_identifier(c))
        .collect::<Vec<_>>()
        .join(",");

    let values = visitor_values(record, config)
        .iter()
        .map(SqlValue::to_string)
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "INSERT INTO {}.{} ({}) VALUES ({});",
        quote_identifier(&config.schema),
        quote_identifier(&config.table),
        columns,
        values
    )
}
