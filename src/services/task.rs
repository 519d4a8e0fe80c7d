use super::json_body;
use crate::api::{ApiError, RequestDescriptor, RequestPipeline};
use crate::models::task::TaskStatus;
use serde_json::{Value, json};

pub struct TaskService<'a> {
    pipeline: &'a RequestPipeline,
}

impl<'a> TaskService<'a> {
    pub fn new(pipeline: &'a RequestPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn list(&self, project_id: Option<u64>) -> Result<Value, ApiError> {
        let path = match project_id {
            Some(id) => format!("task?project_id={}", id),
            None => "task".to_string(),
        };
        let response = self
            .pipeline
            .send(RequestDescriptor::get(path).secure())
            .await?;
        json_body(response)
    }

    pub async fn set_status(&self, id: u64, status: TaskStatus) -> Result<Value, ApiError> {
        let response = self
            .pipeline
            .send(
                RequestDescriptor::put(format!("task/{}/status", id))
                    .secure()
                    .json(json!({ "status": status.as_str() })),
            )
            .await?;
        json_body(response)
    }
}
