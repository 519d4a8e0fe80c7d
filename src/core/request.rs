use crate::api::{ApiResponse, FormPart, RequestDescriptor, RequestPipeline};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::path::read_attachment;
use reqwest::Method;
use reqwest::header::{HeaderName, HeaderValue};
use std::time::Duration;

/// Raw inputs of the `request` command, before validation.
#[derive(Debug, Default, Clone)]
pub struct RawRequest {
    pub path: String,
    pub method: String,
    pub secure: bool,
    pub data: Option<String>,
    pub files: Vec<String>,
    pub headers: Vec<String>,
    pub exact: bool,
    pub timeout: Option<u64>,
}

pub struct RequestLogic;

impl RequestLogic {
    /// Validate the raw inputs into a descriptor. Attachments are read here.
    pub fn build(raw: &RawRequest) -> AppResult<RequestDescriptor> {
        let method = Method::from_bytes(raw.method.to_uppercase().as_bytes())
            .map_err(|_| AppError::InvalidMethod(raw.method.clone()))?;

        let mut desc = RequestDescriptor::new(method, raw.path.clone());
        desc.secure = raw.secure;
        desc.exact = raw.exact;
        desc.timeout = raw.timeout.map(Duration::from_secs);

        for h in &raw.headers {
            let (name, value) = parse_header(h)?;
            desc = desc.header(name, value);
        }

        if raw.files.is_empty() {
            if let Some(data) = &raw.data {
                desc = desc.json(serde_json::from_str(data)?);
            }
        } else {
            let mut parts = Vec::new();

            // JSON object fields ride along as text parts.
            if let Some(data) = &raw.data {
                let value: serde_json::Value = serde_json::from_str(data)?;
                let map = value
                    .as_object()
                    .ok_or_else(|| AppError::InvalidMultipartData(data.clone()))?;
                for (k, v) in map {
                    let text = v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string());
                    parts.push(FormPart::text(k.clone(), text));
                }
            }

            for attachment in &raw.files {
                let (field, path) = attachment.split_once('=').unwrap_or(("file", attachment.as_str()));
                let (file_name, bytes) = read_attachment(path)?;
                parts.push(FormPart::file(field, file_name, bytes));
            }
            desc = desc.multipart(parts);
        }

        Ok(desc)
    }

    pub async fn execute(pipeline: &RequestPipeline, desc: RequestDescriptor) -> AppResult<ApiResponse> {
        let response = pipeline.send(desc).await?;
        Ok(response)
    }

    pub fn print(response: &ApiResponse) {
        let status = response.status.as_u16();
        println!(
            "{}{} {}{}",
            color_for_status(status),
            status,
            response.status.canonical_reason().unwrap_or(""),
            RESET
        );
        match response.payload() {
            Some(body) => println!("{}", crate::utils::formatting::pretty_json(&body)),
            None => println!("(empty body)"),
        }
    }
}

/// `Name: value` → typed header pair.
pub fn parse_header(raw: &str) -> AppResult<(HeaderName, HeaderValue)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| AppError::InvalidHeader(raw.to_string()))?;
    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .map_err(|_| AppError::InvalidHeader(raw.to_string()))?;
    let value = HeaderValue::from_str(value.trim())
        .map_err(|_| AppError::InvalidHeader(raw.to_string()))?;
    Ok((name, value))
}
