//! # Visitor Import - registration export to SQL
//!
//! Converts a CSV export of visitor registrations into `INSERT` statements
//! for the `visitors` table. The statements are text only; nothing here
//! connects to a database.
//!
//! ## Modules
//!
//! - **source**: read and header-check the CSV export
//! - **normalize**: per-field cleaning (phone, email, dates, companions, interests)
//! - **render**: one `INSERT` per normalized visitor
//! - **writer**: newline-joined output file
//!
//! ## Quick Start
//!
//! ```rust
//! use visitor_import::{generate_statements, ImportConfig};
//!
//! # fn main() -> visitor_import::Result<()> {
//! let csv = "Name,EmailID,Mobile,Column E,Visit Date,Interest\n\
//!            Asha Rao,Asha@Example.com,+91 98765 43210,Father and Ravi,Sunday 30th November 2025,\"Tech, Art\"\n";
//!
//! let statements = generate_statements(csv.as_bytes(), &ImportConfig::default())?;
//! assert_eq!(statements.len(), 1);
//! assert!(statements[0].contains("'asha@example.com','9876543210'"));
//! # Ok(())
//! # }
//! ```

use std::io::Read;
use std::path::Path;
use uuid::Uuid;

pub mod error;
pub mod normalize;
pub mod render;
pub mod source;
pub mod types;
pub mod writer;

// Re-export commonly used types for convenience
pub use error::{ImportError, Result};
pub use render::{render_insert, SqlValue};
pub use source::read_rows;
pub use types::{ImportConfig, VisitorRecord, VisitorRow, REQUIRED_COLUMNS};
pub use writer::StatementWriter;

/// Normalize one raw row into a visitor record with the given identifier.
///
/// Never fails: unusable cells become `None` or the field's neutral value.
pub fn normalize_row(row: &VisitorRow, id: Uuid) -> VisitorRecord {
    let cell = |value: &Option<String>| value.as_deref().unwrap_or("").to_string();

    let email_raw = cell(&row.email);
    let email = normalize::validate_email(&email_raw);
    if email.is_none() && !email_raw.trim().is_empty() {
        tracing::debug!(field = "EmailID", "invalid email, writing null");
    }

    let mobile_raw = cell(&row.mobile);
    let phone = normalize::clean_phone(&mobile_raw);
    if phone.is_none() && !mobile_raw.trim().is_empty() {
        tracing::debug!(field = "Mobile", "fewer than 10 digits, writing null");
    }

    let date_raw = cell(&row.visit_date);
    let date_of_visit = normalize::parse_visit_date(&date_raw);
    if date_of_visit.is_none() && !date_raw.trim().is_empty() {
        tracing::debug!(
            field = "Visit Date",
            value = %date_raw,
            "unrecognized visit date, writing null"
        );
    }

    VisitorRecord {
        id,
        name: cell(&row.name).trim().to_string(),
        email,
        phone,
        accompanying_count: normalize::parse_accompanying_count(&cell(&row.companions)),
        date_of_visit,
        area_of_interest: normalize::parse_area_of_interest(&cell(&row.interest)),
    }
}

/// Main entry point: read a CSV export and render one statement per row,
/// in input order, for at most `config.limit` rows.
pub fn generate_statements<R: Read>(reader: R, config: &ImportConfig) -> Result<Vec<String>> {
    let rows = read_rows(reader, config.limit)?;

    let statements: Vec<String> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let _span = tracing::debug_span!("row", number = idx + 1).entered();
            let record = normalize_row(row, normalize::generate_id());
            render_insert(&record, config)
        })
        .collect();

    tracing::info!(count = statements.len(), "generated insert statements");
    Ok(statements)
}

/// Convert `input` to `output` in one pass. Returns the number of statements
/// written. The output file is only created once the whole input converted.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &ImportConfig,
) -> Result<usize> {
    let file = std::fs::File::open(input)?;
    let statements = generate_statements(file, config)?;

    StatementWriter::create(output)?.write_all(&statements)?;
    Ok(statements.len())
}
