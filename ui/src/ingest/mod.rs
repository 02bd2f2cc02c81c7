//! Per-source record ingestion from the published spreadsheet.
//!
//! Each configured sheet is read independently with a single request; there
//! are no retries. A failed or empty source is simply excluded from the
//! dashboard, so errors here stay local to the source that raised them.

pub mod gviz;

use thiserror::Error;

use crate::core::config;
use gviz::QueryResponse;

/// Placeholder used when a row carries no link cell.
pub const LINK_PLACEHOLDER: &str = "#";

/// One accepted spreadsheet row: an opaque preformatted date, a likes count,
/// and a post link.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub date: String,
    pub count: f64,
    pub link: String,
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("query service error: {0}")]
    Service(String),
    #[error("unexpected payload: {0}")]
    Payload(#[from] gviz::ParseError),
}

/// Read one source sheet and return its accepted rows, in sheet order.
pub async fn ingest(source_name: &str) -> Result<Vec<RawRecord>, IngestError> {
    let response = reqwest::Client::new()
        .get(config::query_url())
        .query(&[
            ("sheet", source_name),
            ("headers", "1"),
            ("tq", config::COLUMN_QUERY),
        ])
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| IngestError::Request(err.to_string()))?;

    let body = response
        .text()
        .await
        .map_err(|err| IngestError::Request(err.to_string()))?;

    let parsed = gviz::parse(&body)?;
    if parsed.is_error() {
        return Err(IngestError::Service(parsed.error_message()));
    }

    Ok(collect_records(&parsed))
}

/// Apply the row acceptance predicate: a row survives only with a non-empty
/// formatted date and a non-null count. A missing or empty link falls back
/// to [`LINK_PLACEHOLDER`]. Rejected rows are skipped silently.
pub fn collect_records(response: &QueryResponse) -> Vec<RawRecord> {
    let Some(table) = response.table.as_ref() else {
        return Vec::new();
    };
    table.rows.iter().filter_map(row_to_record).collect()
}

fn row_to_record(row: &gviz::Row) -> Option<RawRecord> {
    let date = row.cell(0).and_then(gviz::Cell::formatted).unwrap_or_default();
    let count = row.cell(1).and_then(gviz::Cell::number)?;
    if date.is_empty() {
        return None;
    }

    let link = row
        .cell(2)
        .and_then(gviz::Cell::text)
        .filter(|link| !link.is_empty())
        .unwrap_or_else(|| LINK_PLACEHOLDER.to_string());

    Some(RawRecord { date, count, link })
}
