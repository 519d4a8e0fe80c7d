use crate::api::FormPart;
use chrono::NaiveDate;

/// Expense claim, sent as multipart so a receipt can ride along.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: Option<String>,
    pub description: Option<String>,
    pub receipt: Option<Receipt>,
}

#[derive(Debug, Clone)]
pub struct Receipt {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl NewExpense {
    pub fn into_parts(self) -> Vec<FormPart> {
        let mut parts = vec![
            FormPart::text("title", self.title),
            FormPart::text("amount", format!("{:.2}", self.amount)),
            FormPart::text("date", self.date.format("%Y-%m-%d").to_string()),
        ];
        if let Some(c) = self.category {
            parts.push(FormPart::text("category", c));
        }
        if let Some(d) = self.description {
            parts.push(FormPart::text("description", d));
        }
        if let Some(r) = self.receipt {
            parts.push(FormPart::file("receipt", r.file_name, r.bytes));
        }
        parts
    }
}
