use super::json_body;
use crate::api::{ApiError, RequestDescriptor, RequestPipeline};
use serde_json::Value;

/// Students and tutoring sessions (tutoring business line).
pub struct StudentService<'a> {
    pipeline: &'a RequestPipeline,
}

impl<'a> StudentService<'a> {
    pub fn new(pipeline: &'a RequestPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn list(&self) -> Result<Value, ApiError> {
        let response = self
            .pipeline
            .send(RequestDescriptor::get("student").secure())
            .await?;
        json_body(response)
    }

    pub async fn sessions(&self, student_id: u64) -> Result<Value, ApiError> {
        let response = self
            .pipeline
            .send(RequestDescriptor::get(format!("student/{}/session", student_id)).secure())
            .await?;
        json_body(response)
    }
}
