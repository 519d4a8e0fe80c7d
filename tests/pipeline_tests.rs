use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use rhrms::api::{ApiError, FormPart, RequestDescriptor, TransportError};
use rhrms::auth::AuthStatus;
use rhrms::db::{DeviceStorage, keys};
use serde_json::json;
use std::time::Duration;

mod common;
use common::{harness, header};

#[tokio::test]
async fn test_base_url_is_read_at_call_time() {
    let h = harness();
    h.storage.set_item(keys::ACCESS_TOKEN, "T1").unwrap();

    let first = RequestDescriptor::get("student").secure();
    let second = RequestDescriptor::get("student").secure();

    h.store.set_base_url("https://org-a.example.com");
    h.pipeline.send(first).await.unwrap();

    // changed after `second` was built, before it is sent
    h.store.set_base_url("https://org-b.example.com");
    h.pipeline.send(second).await.unwrap();

    let reqs = h.transport.requests();
    assert_eq!(reqs.len(), 2);
    assert_eq!(reqs[0].method, Method::GET);
    assert_eq!(reqs[0].url, "https://org-a.example.com/student");
    assert_eq!(header(&reqs[0], "authorization"), Some("Bearer T1"));
    assert_eq!(reqs[1].url, "https://org-b.example.com/student");
    assert_eq!(header(&reqs[1], "authorization"), Some("Bearer T1"));
}

#[tokio::test]
async fn test_base_url_is_not_normalized() {
    let h = harness();
    h.store.set_base_url("https://org-a.example.com/api/");
    h.pipeline
        .send(RequestDescriptor::get("leave"))
        .await
        .unwrap();
    assert_eq!(h.transport.last().url, "https://org-a.example.com/api//leave");
}

#[tokio::test]
async fn test_exact_url_bypasses_base_url() {
    let h = harness();
    h.store.set_base_url("https://org-a.example.com");
    h.pipeline
        .send(RequestDescriptor::get("https://other.example.com/ping").exact())
        .await
        .unwrap();
    assert_eq!(h.transport.last().url, "https://other.example.com/ping");
}

#[tokio::test]
async fn test_missing_base_url_uses_default_or_fails() {
    let h = harness();
    let err = h
        .pipeline
        .send(RequestDescriptor::get("profile"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NoBaseUrl));
    assert!(h.transport.requests().is_empty());

    let h = harness();
    let pipeline = h
        .pipeline
        .with_default_base_url(Some("https://default.example.com".into()));
    pipeline
        .send(RequestDescriptor::get("profile"))
        .await
        .unwrap();
    assert_eq!(h.transport.last().url, "https://default.example.com/profile");
}

#[tokio::test]
async fn test_default_headers() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");

    h.pipeline
        .send(RequestDescriptor::post("leave").json(json!({"reason": "x"})))
        .await
        .unwrap();
    let req = h.transport.last();
    assert_eq!(header(&req, "content-type"), Some("application/json"));
    assert_eq!(header(&req, "accept"), Some("application/json"));

    h.pipeline
        .send(RequestDescriptor::post("expense").multipart(vec![FormPart::text("title", "Taxi")]))
        .await
        .unwrap();
    let req = h.transport.last();
    assert_eq!(header(&req, "content-type"), Some("multipart/form-data"));
    assert_eq!(header(&req, "accept"), Some("application/json"));
}

#[tokio::test]
async fn test_caller_headers_override_defaults() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");

    // files flag wins over JSON, caller Accept wins over the default
    let mut desc = RequestDescriptor::post("expense")
        .header(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("text/plain"),
        );
    desc.files = true;
    h.pipeline.send(desc).await.unwrap();
    let req = h.transport.last();
    assert_eq!(header(&req, "content-type"), Some("multipart/form-data"));
    assert_eq!(header(&req, "accept"), Some("text/plain"));

    // explicit Content-Type beats the files flag
    let desc = RequestDescriptor::post("expense")
        .multipart(vec![])
        .header(CONTENT_TYPE, HeaderValue::from_static("application/octet-stream"));
    h.pipeline.send(desc).await.unwrap();
    let req = h.transport.last();
    assert_eq!(header(&req, "content-type"), Some("application/octet-stream"));
    assert_eq!(req.headers.get_all(CONTENT_TYPE).iter().count(), 1);
}

#[tokio::test]
async fn test_insecure_call_never_sends_token() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");
    h.storage.set_item(keys::ACCESS_TOKEN, "SECRET").unwrap();

    h.pipeline
        .send(RequestDescriptor::get("company-info"))
        .await
        .unwrap();
    assert_eq!(header(&h.transport.last(), "authorization"), None);
}

#[tokio::test]
async fn test_secure_call_without_token_sends_no_header() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");

    h.pipeline
        .send(RequestDescriptor::get("profile").secure())
        .await
        .unwrap();
    assert_eq!(header(&h.transport.last(), "authorization"), None);
}

#[tokio::test]
async fn test_success_response_is_returned_unmodified() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");
    h.transport.push_json(201, json!({"id": 7, "status": "pending"}));

    let response = h
        .pipeline
        .send(RequestDescriptor::post("leave").secure())
        .await
        .unwrap();
    assert_eq!(response.status.as_u16(), 201);
    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["id"], 7);
    assert_eq!(body["status"], "pending");
}

#[tokio::test]
async fn test_invalid_token_logs_out_and_clears_storage() {
    let h = harness();
    h.store.select_organization(h.storage.as_ref(), "https://org.example.com").unwrap();
    h.storage.set_item(keys::ACCESS_TOKEN, "T1").unwrap();
    h.transport
        .push_json(401, json!({"message": "Token is invalid or expired"}));

    let err = h
        .pipeline
        .send(RequestDescriptor::get("profile").secure())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::SessionExpired(Some(_))));
    assert_eq!(err.status(), Some(401));
    assert_eq!(h.auth.status(), AuthStatus::LoggedOut);
    assert!(h.storage.is_empty());
    assert_eq!(h.store.base_url(), None);
    assert!(
        h.storage
            .journal()
            .iter()
            .any(|(op, _, _)| op == "logout")
    );
}

#[tokio::test]
async fn test_plain_401_is_not_a_logout() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");
    h.storage.set_item(keys::ACCESS_TOKEN, "T1").unwrap();
    h.transport
        .push_json(401, json!({"message": "Wrong email or password"}));

    let err = h
        .pipeline
        .send(RequestDescriptor::post("login"))
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, payload } => {
            assert_eq!(status, 401);
            assert_eq!(payload.unwrap()["message"], "Wrong email or password");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(h.auth.status(), AuthStatus::LoggedIn);
    assert_eq!(h.storage.get_item(keys::ACCESS_TOKEN).unwrap().as_deref(), Some("T1"));
}

#[tokio::test]
async fn test_concurrent_invalid_token_responses_settle_logged_out() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");
    h.storage.set_item(keys::ACCESS_TOKEN, "T1").unwrap();
    h.transport.set_delay(Duration::from_millis(20));
    h.transport.push_json(401, json!({"message": "Invalid token"}));
    h.transport.push_json(401, json!({"message": "Invalid token"}));

    let (a, b) = tokio::join!(
        h.pipeline.send(RequestDescriptor::get("task").secure()),
        h.pipeline.send(RequestDescriptor::get("project").secure()),
    );

    assert!(matches!(a, Err(ApiError::SessionExpired(_))));
    assert!(matches!(b, Err(ApiError::SessionExpired(_))));
    assert_eq!(h.auth.status(), AuthStatus::LoggedOut);
    assert!(h.storage.is_empty());

    // only the first transition is journaled
    let logouts = h
        .storage
        .journal()
        .iter()
        .filter(|(op, _, _)| op == "logout")
        .count();
    assert_eq!(logouts, 1);
}

#[tokio::test]
async fn test_payload_too_large_raises_alert() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");
    h.transport.push_raw(413, "<html>Request Entity Too Large</html>");

    let err = h
        .pipeline
        .send(RequestDescriptor::post("expense").multipart(vec![FormPart::file(
            "receipt",
            "scan.pdf",
            vec![0u8; 16],
        )]))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::PayloadTooLarge(_)));
    let shown = h.alerts.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(
        shown[0].1,
        "File size is too large. Please upload a smaller file."
    );
    assert_eq!(h.auth.status(), AuthStatus::LoggedIn);
}

#[tokio::test]
async fn test_other_status_returns_payload_and_logs() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");
    h.transport
        .push_json(422, json!({"message": "from_date is required"}));

    let err = h
        .pipeline
        .send(RequestDescriptor::post("leave").secure())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(err.user_message(), "from_date is required");
    assert!(h.alerts.shown().is_empty());
    let journal = h.storage.journal();
    assert_eq!(journal.len(), 1);
    assert_eq!(journal[0].0, "api_error");
    assert_eq!(journal[0].1, "POST https://org.example.com/leave");
}

#[tokio::test]
async fn test_network_failure_has_no_payload() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");
    h.transport
        .push_error(TransportError::Network("connection refused".into()));

    let err = h
        .pipeline
        .send(RequestDescriptor::get("profile").secure())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert!(err.payload().is_none());
    assert_eq!(h.storage.journal().len(), 1);
}

#[tokio::test]
async fn test_deadline_is_enforced() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");
    h.transport.set_delay(Duration::from_millis(200));

    let err = h
        .pipeline
        .send(RequestDescriptor::get("profile").timeout(Duration::from_millis(20)))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Timeout));

    // no deadline: the slow call completes
    let ok = h.pipeline.send(RequestDescriptor::get("profile")).await;
    assert!(ok.is_ok());
}

#[tokio::test]
async fn test_default_deadline_applies_when_descriptor_sets_none() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");
    h.transport.set_delay(Duration::from_millis(200));
    let pipeline = h
        .pipeline
        .with_default_timeout(Some(Duration::from_millis(20)));

    let err = pipeline
        .send(RequestDescriptor::get("profile"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Timeout));
    assert_eq!(h.storage.journal()[0].2, "deadline exceeded");

    // a per-call deadline wins over the default
    let ok = pipeline
        .send(RequestDescriptor::get("profile").timeout(Duration::from_secs(5)))
        .await;
    assert!(ok.is_ok());
}
