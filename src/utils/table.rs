//! Table rendering utilities for CLI outputs.

use super::formatting::{pad_right, truncate};
use serde_json::Value;

pub struct Column {
    pub header: String,
    /// JSON field read from each row.
    pub field: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, field: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            field: field.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// One row per JSON object, picking each column's field.
    pub fn add_json_rows(&mut self, items: &[Value]) {
        for item in items {
            let row = self
                .columns
                .iter()
                .map(|c| super::formatting::cell(item.get(&c.field)))
                .collect();
            self.rows.push(row);
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_right(&truncate(value, col.width), col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
