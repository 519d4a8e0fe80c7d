#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::StatusCode;
use rhrms::api::{
    Alerts, ApiResponse, OutgoingRequest, RequestPipeline, Transport, TransportError,
};
use rhrms::auth::{AuthState, AuthStatus};
use rhrms::db::MemoryStorage;
use rhrms::store::ConfigStore;
use serde_json::Value;
use std::collections::VecDeque;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// CLI under test, pointed at an unreachable backend so nothing leaves the machine.
pub fn rhrms() -> Command {
    let mut cmd = cargo_bin_cmd!("rhrms");
    cmd.env("RHRMS_API_BASE_URL", "http://127.0.0.1:9")
        .env("RHRMS_GEOCODING_URL", "http://127.0.0.1:9/geocode")
        .env_remove("RHRMS_PASSWORD");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhrms.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Transport that records every request and answers from a script.
/// With an empty script it answers `200 {}`.
#[derive(Default)]
pub struct ScriptedTransport {
    requests: Mutex<Vec<OutgoingRequest>>,
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    delay: Mutex<Option<Duration>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).expect("valid status");
        self.responses
            .lock()
            .push_back(Ok(ApiResponse::new(status, body.to_string())));
    }

    pub fn push_raw(&self, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).expect("valid status");
        self.responses
            .lock()
            .push_back(Ok(ApiResponse::new(status, body.to_string())));
    }

    pub fn push_error(&self, err: TransportError) {
        self.responses.lock().push_back(Err(err));
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = Some(delay);
    }

    pub fn requests(&self) -> Vec<OutgoingRequest> {
        self.requests.lock().clone()
    }

    pub fn last(&self) -> OutgoingRequest {
        self.requests().pop().expect("at least one request")
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: OutgoingRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().push(request);
        let delay = *self.delay.lock();
        if let Some(d) = delay {
            tokio::time::sleep(d).await;
        }
        let next = self.responses.lock().pop_front();
        next.unwrap_or_else(|| Ok(ApiResponse::new(StatusCode::OK, "{}")))
    }
}

#[derive(Default)]
pub struct RecordingAlerts {
    shown: Mutex<Vec<(String, String)>>,
}

impl RecordingAlerts {
    pub fn shown(&self) -> Vec<(String, String)> {
        self.shown.lock().clone()
    }
}

impl Alerts for RecordingAlerts {
    fn alert(&self, title: &str, message: &str) {
        self.shown.lock().push((title.to_string(), message.to_string()));
    }
}

pub struct Harness {
    pub transport: Arc<ScriptedTransport>,
    pub storage: Arc<MemoryStorage>,
    pub store: Arc<ConfigStore>,
    pub auth: Arc<AuthState>,
    pub alerts: Arc<RecordingAlerts>,
    pub pipeline: RequestPipeline,
}

/// Pipeline over in-memory storage, logged in, with no default base URL.
pub fn harness() -> Harness {
    let transport = ScriptedTransport::new();
    let storage = Arc::new(MemoryStorage::new());
    let store = Arc::new(ConfigStore::new());
    let auth = Arc::new(AuthState::new(AuthStatus::LoggedIn));
    let alerts = Arc::new(RecordingAlerts::default());

    let pipeline = RequestPipeline::new(
        transport.clone(),
        storage.clone(),
        store.clone(),
        auth.clone(),
        alerts.clone(),
    );

    Harness {
        transport,
        storage,
        store,
        auth,
        alerts,
        pipeline,
    }
}

pub fn header<'a>(req: &'a OutgoingRequest, name: &str) -> Option<&'a str> {
    req.headers.get(name).and_then(|v| v.to_str().ok())
}
