use super::json_body;
use crate::api::{ApiError, RequestDescriptor, RequestPipeline};
use serde_json::Value;

pub struct ProjectService<'a> {
    pipeline: &'a RequestPipeline,
}

impl<'a> ProjectService<'a> {
    pub fn new(pipeline: &'a RequestPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn list(&self) -> Result<Value, ApiError> {
        let response = self
            .pipeline
            .send(RequestDescriptor::get("project").secure())
            .await?;
        json_body(response)
    }

    pub async fn get(&self, id: u64) -> Result<Value, ApiError> {
        let response = self
            .pipeline
            .send(RequestDescriptor::get(format!("project/{}", id)).secure())
            .await?;
        json_body(response)
    }
}
