use crate::services::rows;
use crate::ui::messages::{header, info};
use crate::utils::formatting::pretty_json;
use crate::utils::table::{Column, Table};
use serde_json::Value;

pub struct ListingLogic;

impl ListingLogic {
    /// Print a list response as a table; non-list bodies are dumped as JSON.
    pub fn print_rows(title: &str, body: &Value, columns: Vec<Column>) {
        header(title);

        let items = rows(body);
        if items.is_empty() {
            if body.is_array() || body.get("data").is_some() {
                info("No records found.");
            } else {
                println!("{}", pretty_json(body));
            }
            return;
        }

        let mut table = Table::new(columns);
        table.add_json_rows(&items);
        print!("{}", table.render());
    }

    pub fn print_record(title: &str, body: &Value) {
        header(title);
        let record = body.get("data").unwrap_or(body);
        println!("{}", pretty_json(record));
    }
}
