use super::error::ApiError;
use super::request::{FormPart, RequestBody};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A fully resolved request, ready to hit the wire.
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
}

/// Response handed back to callers unmodified.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Body as JSON when it parses, as a JSON string otherwise, `None` when empty.
    pub fn payload(&self) -> Option<Value> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        Some(
            serde_json::from_slice(&self.body)
                .unwrap_or_else(|_| Value::String(self.text())),
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("{0}")]
    Network(String),
    #[error("cannot build request: {0}")]
    Build(String),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout => ApiError::Timeout,
            TransportError::Network(msg) => ApiError::Transport(msg),
            TransportError::Build(msg) => ApiError::InvalidRequest(msg),
        }
    }
}

/// Executes one HTTP exchange. Non-2xx statuses are responses, not errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: OutgoingRequest) -> Result<ApiResponse, TransportError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: OutgoingRequest) -> Result<ApiResponse, TransportError> {
        let OutgoingRequest {
            method,
            url,
            mut headers,
            body,
        } = request;

        let mut builder = self.client.request(method, &url);

        match body {
            Some(RequestBody::Json(value)) => {
                let bytes =
                    serde_json::to_vec(&value).map_err(|e| TransportError::Build(e.to_string()))?;
                builder = builder.body(bytes);
            }
            Some(RequestBody::Multipart(parts)) => {
                // reqwest writes the content type itself, boundary included.
                let is_bare_multipart = headers
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|v| v.starts_with("multipart/form-data"));
                if is_bare_multipart {
                    headers.remove(CONTENT_TYPE);
                }
                builder = builder.multipart(build_form(parts)?);
            }
            None => {}
        }

        let response = builder
            .headers(headers)
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_transport)?.to_vec();

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

fn build_form(parts: Vec<FormPart>) -> Result<reqwest::multipart::Form, TransportError> {
    let mut form = reqwest::multipart::Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                bytes,
                mime,
            } => {
                let mut p = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
                if let Some(m) = mime {
                    p = p
                        .mime_str(&m)
                        .map_err(|e| TransportError::Build(e.to_string()))?;
                }
                form.part(name, p)
            }
        };
    }
    Ok(form)
}

fn map_transport(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_builder() {
        TransportError::Build(err.to_string())
    } else {
        TransportError::Network(err.to_string())
    }
}
