use super::json_body;
use crate::api::{ApiError, RequestDescriptor, RequestPipeline};
use serde_json::Value;

pub struct OrganizationService<'a> {
    pipeline: &'a RequestPipeline,
}

impl<'a> OrganizationService<'a> {
    pub fn new(pipeline: &'a RequestPipeline) -> Self {
        Self { pipeline }
    }

    /// Public metadata of the currently selected organization.
    pub async fn company_info(&self) -> Result<Value, ApiError> {
        let response = self
            .pipeline
            .send(RequestDescriptor::get("company-info"))
            .await?;
        json_body(response)
    }
}
