use crate::error::{ImportError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Header names the converter reads from the registration export
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Name",
    "EmailID",
    "Mobile",
    "Column E",
    "Visit Date",
    "Interest",
];

/// One raw row of the registration export, keyed by header name.
///
/// Every field is optional at the cell level: empty cells and short rows
/// deserialize to `None`. Column presence is checked separately by the source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisitorRow {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    #[serde(rename = "EmailID", default)]
    pub email: Option<String>,

    #[serde(rename = "Mobile", default)]
    pub mobile: Option<String>,

    /// Free-text description of who is coming along
    #[serde(rename = "Column E", default)]
    pub companions: Option<String>,

    #[serde(rename = "Visit Date", default)]
    pub visit_date: Option<String>,

    #[serde(rename = "Interest", default)]
    pub interest: Option<String>,
}

/// A visitor after field normalization - one row of the `visitors` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorRecord {
    pub id: Uuid,

    /// Trimmed name, not yet SQL-escaped
    pub name: String,

    /// Lowercased, pattern-checked address
    pub email: Option<String>,

    /// Exactly ten digits
    pub phone: Option<String>,

    pub accompanying_count: u32,

    /// `YYYY-MM-DD`, used for both the "from" and "to" columns
    pub date_of_visit: Option<String>,

    /// JSON-array text, e.g. `["Tech","Art"]`
    pub area_of_interest: String,
}

/// Constants embedded in every generated statement, plus the row limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Database schema of the target table
    pub schema: String,

    /// Target table name
    pub table: String,

    pub event_id: String,

    pub event_name: String,

    /// Timestamp literal written to both `created_at` and `updated_at`
    pub created_at: String,

    /// Maximum number of input rows to convert
    pub limit: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        ImportConfig {
            schema: String::from("public"),
            table: String::from("visitors"),
            event_id: String::from("65fe748f-4b3b-4eab-8b3f-b8215b2a6b5c"),
            event_name: String::from("OPEN DAY 1"),
            created_at: String::from("2025-11-26 00:00:00+00"),
            limit: 100,
        }
    }
}

impl ImportConfig {
    /// Load a config from a JSON file. Keys left out keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ImportError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
            .map_err(|e| ImportError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json_str(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
