//! Wire envelope of the spreadsheet visualization-query service.
//!
//! Responses arrive as JSONP, e.g.
//! `/*O_o*/\ngoogle.visualization.Query.setResponse({...});`, wrapping a
//! row-oriented table whose cells expose a raw value (`v`) and an optional
//! formatted value (`f`). Only the shapes the dashboard reads are modelled.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("response is not a JSONP callback payload")]
    Envelope,
    #[error("response JSON did not match the expected table shape: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub status: String,
    #[serde(default)]
    pub errors: Vec<QueryError>,
    #[serde(default)]
    pub table: Option<Table>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryError {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detailed_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub c: Vec<Option<Cell>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub v: Option<Value>,
    #[serde(default)]
    pub f: Option<String>,
}

/// Unwrap the JSONP envelope and deserialize the response object.
pub fn parse(body: &str) -> Result<QueryResponse, ParseError> {
    let start = body.find('(').ok_or(ParseError::Envelope)?;
    let end = body.rfind(')').filter(|end| *end > start).ok_or(ParseError::Envelope)?;
    Ok(serde_json::from_str(&body[start + 1..end])?)
}

impl QueryResponse {
    pub fn is_error(&self) -> bool {
        self.status == "error"
    }

    /// Best available service-side failure description.
    pub fn error_message(&self) -> String {
        self.errors
            .iter()
            .find_map(|err| err.detailed_message.clone().or_else(|| err.message.clone()))
            .unwrap_or_else(|| "query service reported an error".to_string())
    }
}

impl Row {
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.c.get(index).and_then(|cell| cell.as_ref())
    }
}

impl Cell {
    /// Formatted accessor: the service's `f` string, falling back to a raw
    /// string value. Mirrors `getFormattedValue` for date cells.
    pub fn formatted(&self) -> Option<String> {
        if let Some(formatted) = &self.f {
            return Some(formatted.clone());
        }
        match &self.v {
            Some(Value::String(raw)) => Some(raw.clone()),
            _ => None,
        }
    }

    /// Raw numeric accessor. Numeric strings are tolerated since published
    /// sheets occasionally type-juggle a column.
    pub fn number(&self) -> Option<f64> {
        match &self.v {
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(raw)) => raw.trim().parse().ok(),
            _ => None,
        }
    }

    /// Raw string accessor, used for link cells.
    pub fn text(&self) -> Option<String> {
        match &self.v {
            Some(Value::String(raw)) => Some(raw.clone()),
            _ => None,
        }
    }
}
