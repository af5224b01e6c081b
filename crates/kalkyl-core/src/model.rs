use serde::{Deserialize, Serialize};
use std::fmt;

/// A single table cell as produced by the detection pass.
///
/// Detection yields strings; fields that parse as a number become
/// `Number` so the spreadsheet writer can emit real numeric cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// Parse a raw field into a typed cell.
    pub fn from_field(field: &str) -> Cell {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        // "NaN"/"inf" parse as f64 but are text as cell content.
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return Cell::Number(n);
            }
        }
        Cell::Text(trimmed.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Text rendering used for header promotion and previews.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Empty => Ok(()),
        }
    }
}

/// A cleaned, rectangular table: header row promoted, empty rows and
/// columns pruned, whitespace collapsed in text cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Page the table was detected on (1-based).
    pub page_number: usize,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Everything extracted from one uploaded document: the text pass and
/// the table pass, in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub text: String,
    pub tables: Vec<Table>,
}
