use super::json_body;
use crate::api::{ApiError, RequestDescriptor, RequestPipeline};
use serde_json::{Value, json};

pub struct SessionService<'a> {
    pipeline: &'a RequestPipeline,
}

impl<'a> SessionService<'a> {
    pub fn new(pipeline: &'a RequestPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        let response = self
            .pipeline
            .send(RequestDescriptor::post("login").json(json!({
                "email": email,
                "password": password,
            })))
            .await?;
        json_body(response)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.pipeline
            .send(RequestDescriptor::post("logout").secure())
            .await?;
        Ok(())
    }
}

/// Pull the bearer token out of a login response
/// (`access_token`, `token`, or either nested under `data`).
pub fn extract_token(body: &Value) -> Option<String> {
    let find = |v: &Value| {
        ["access_token", "token"]
            .iter()
            .find_map(|k| v.get(*k).and_then(Value::as_str))
            .map(str::to_string)
    };
    find(body).or_else(|| body.get("data").and_then(find))
}
