use super::json_body;
use crate::api::{ApiError, RequestDescriptor, RequestPipeline};
use serde_json::Value;

pub struct ProfileService<'a> {
    pipeline: &'a RequestPipeline,
}

impl<'a> ProfileService<'a> {
    pub fn new(pipeline: &'a RequestPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn me(&self) -> Result<Value, ApiError> {
        let response = self
            .pipeline
            .send(RequestDescriptor::get("profile").secure())
            .await?;
        json_body(response)
    }

    pub async fn salary_slips(&self) -> Result<Value, ApiError> {
        let response = self
            .pipeline
            .send(RequestDescriptor::get("salary-slip").secure())
            .await?;
        json_body(response)
    }
}
