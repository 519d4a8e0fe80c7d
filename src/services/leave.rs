use super::json_body;
use crate::api::{ApiError, RequestDescriptor, RequestPipeline};
use crate::models::leave::LeaveApplication;
use serde_json::Value;

pub struct LeaveService<'a> {
    pipeline: &'a RequestPipeline,
}

impl<'a> LeaveService<'a> {
    pub fn new(pipeline: &'a RequestPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn list(&self) -> Result<Value, ApiError> {
        let response = self
            .pipeline
            .send(RequestDescriptor::get("leave").secure())
            .await?;
        json_body(response)
    }

    pub async fn apply(&self, application: &LeaveApplication) -> Result<Value, ApiError> {
        let body = serde_json::to_value(application)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        let response = self
            .pipeline
            .send(RequestDescriptor::post("leave").secure().json(body))
            .await?;
        json_body(response)
    }
}
