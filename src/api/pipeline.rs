//! The single entry/exit point for backend calls.
//!
//! Every call resolves the tenant base URL at call time, so a change of
//! organization is picked up by the very next request.

use super::alerts::Alerts;
use super::error::{
    ApiError, PAYLOAD_TOO_LARGE_MESSAGE, PAYLOAD_TOO_LARGE_TITLE, is_invalid_token_payload,
};
use super::request::RequestDescriptor;
use super::transport::{ApiResponse, OutgoingRequest, Transport};
use crate::auth::AuthState;
use crate::db::{DeviceStorage, keys};
use crate::store::ConfigStore;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::sync::Arc;
use std::time::Duration;

const JSON: &str = "application/json";
const MULTIPART: &str = "multipart/form-data";

pub struct RequestPipeline {
    transport: Arc<dyn Transport>,
    storage: Arc<dyn DeviceStorage>,
    store: Arc<ConfigStore>,
    auth: Arc<AuthState>,
    alerts: Arc<dyn Alerts>,
    default_base_url: Option<String>,
    default_timeout: Option<Duration>,
}

impl RequestPipeline {
    pub fn new(
        transport: Arc<dyn Transport>,
        storage: Arc<dyn DeviceStorage>,
        store: Arc<ConfigStore>,
        auth: Arc<AuthState>,
        alerts: Arc<dyn Alerts>,
    ) -> Self {
        Self {
            transport,
            storage,
            store,
            auth,
            alerts,
            default_base_url: None,
            default_timeout: None,
        }
    }

    /// Base URL used while no organization has been selected.
    pub fn with_default_base_url(mut self, url: Option<String>) -> Self {
        self.default_base_url = url;
        self
    }

    /// Deadline applied to calls whose descriptor sets none.
    pub fn with_default_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn storage(&self) -> &Arc<dyn DeviceStorage> {
        &self.storage
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    pub fn auth(&self) -> &Arc<AuthState> {
        &self.auth
    }

    /// Resolve a descriptor against the live configuration and stored token.
    pub fn prepare(&self, desc: &RequestDescriptor) -> Result<OutgoingRequest, ApiError> {
        // 1. Token comes from durable storage, never from the config cache.
        let token = self
            .storage
            .get_item(keys::ACCESS_TOKEN)
            .map_err(|e| ApiError::InvalidRequest(format!("cannot read access token: {}", e)))?;

        // 2. Base URL read now, not when the descriptor was built.
        let url = if desc.exact {
            desc.url.clone()
        } else {
            let base = self
                .store
                .base_url()
                .or_else(|| self.default_base_url.clone())
                .ok_or(ApiError::NoBaseUrl)?;
            format!("{}/{}", base, desc.url)
        };

        // 3. Defaults first, caller headers override them.
        let mut headers = HeaderMap::new();
        let content_type = if desc.files { MULTIPART } else { JSON };
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        for name in desc.headers.keys() {
            headers.remove(name);
        }
        for (name, value) in desc.headers.iter() {
            headers.append(name.clone(), value.clone());
        }

        // 4. Bearer token only on secure calls.
        if desc.secure
            && let Some(token) = token.filter(|t| !t.is_empty())
        {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::InvalidRequest(format!("invalid token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(OutgoingRequest {
            method: desc.method.clone(),
            url,
            headers,
            body: desc.data.clone(),
        })
    }

    /// Execute one call. Success returns the response untouched; failures are
    /// handled centrally (401 invalid token, 413) and then returned.
    pub async fn send(&self, desc: RequestDescriptor) -> Result<ApiResponse, ApiError> {
        let request = self.prepare(&desc)?;
        let target = format!("{} {}", request.method, request.url);

        let exchange = self.transport.execute(request);
        let outcome = match desc.timeout.or(self.default_timeout) {
            Some(deadline) => match tokio::time::timeout(deadline, exchange).await {
                Ok(result) => result,
                Err(_) => {
                    self.storage
                        .log_event("api_error", &target, "deadline exceeded");
                    return Err(ApiError::Timeout);
                }
            },
            None => exchange.await,
        };

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                self.storage
                    .log_event("api_error", &target, &format!("transport: {}", err));
                return Err(err.into());
            }
        };

        if response.is_success() {
            return Ok(response);
        }

        Err(self.handle_failure(&target, response))
    }

    fn handle_failure(&self, target: &str, response: ApiResponse) -> ApiError {
        let payload = response.payload();

        match response.status {
            StatusCode::UNAUTHORIZED if is_invalid_token_payload(payload.as_ref()) => {
                self.force_logout(target);
                ApiError::SessionExpired(payload)
            }
            StatusCode::PAYLOAD_TOO_LARGE => {
                self.alerts
                    .alert(PAYLOAD_TOO_LARGE_TITLE, PAYLOAD_TOO_LARGE_MESSAGE);
                self.storage
                    .log_event("api_error", target, "status=413 payload too large");
                ApiError::PayloadTooLarge(payload)
            }
            status => {
                self.storage.log_event(
                    "api_error",
                    target,
                    &format!("status={} body={}", status.as_u16(), response.text()),
                );
                ApiError::Status {
                    status: status.as_u16(),
                    payload,
                }
            }
        }
    }

    /// Global sign-out. Safe to run from several failing calls at once:
    /// every step is idempotent and storage errors are only logged.
    fn force_logout(&self, target: &str) {
        let transitioned = self.auth.logout();
        if let Err(e) = self.storage.clear() {
            eprintln!("⚠️ Failed to clear device storage: {}", e);
        }
        self.store.clear();
        if transitioned {
            self.storage.log_event(
                "logout",
                target,
                "Token rejected by backend; device storage cleared",
            );
        }
    }
}
