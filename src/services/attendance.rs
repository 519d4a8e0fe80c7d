use super::json_body;
use crate::api::{ApiError, RequestDescriptor, RequestPipeline};
use crate::models::attendance::{PunchKind, PunchRequest};
use crate::utils::date::to_api_date;
use chrono::NaiveDate;
use serde_json::Value;

pub struct AttendanceService<'a> {
    pipeline: &'a RequestPipeline,
}

impl<'a> AttendanceService<'a> {
    pub fn new(pipeline: &'a RequestPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn punch(&self, kind: PunchKind, request: &PunchRequest) -> Result<Value, ApiError> {
        let body = serde_json::to_value(request)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        let response = self
            .pipeline
            .send(RequestDescriptor::post(kind.endpoint()).secure().json(body))
            .await?;
        json_body(response)
    }

    pub async fn history(&self, from: NaiveDate, to: NaiveDate) -> Result<Value, ApiError> {
        let path = format!(
            "attendance?from={}&to={}",
            to_api_date(&from),
            to_api_date(&to)
        );
        let response = self
            .pipeline
            .send(RequestDescriptor::get(path).secure())
            .await?;
        json_body(response)
    }
}
