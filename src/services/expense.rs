use super::json_body;
use crate::api::{ApiError, RequestDescriptor, RequestPipeline};
use crate::models::expense::NewExpense;
use serde_json::Value;

pub struct ExpenseService<'a> {
    pipeline: &'a RequestPipeline,
}

impl<'a> ExpenseService<'a> {
    pub fn new(pipeline: &'a RequestPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn list(&self) -> Result<Value, ApiError> {
        let response = self
            .pipeline
            .send(RequestDescriptor::get("expense").secure())
            .await?;
        json_body(response)
    }

    pub async fn submit(&self, expense: NewExpense) -> Result<Value, ApiError> {
        let response = self
            .pipeline
            .send(RequestDescriptor::post("expense").secure().multipart(expense.into_parts()))
            .await?;
        json_body(response)
    }
}
