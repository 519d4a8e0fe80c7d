use chrono::{Local, NaiveDate, TimeZone};
use rhrms::api::{FormPart, RequestBody};
use rhrms::core::request::{RawRequest, RequestLogic, parse_header};
use rhrms::errors::AppError;
use rhrms::location::LocationResult;
use rhrms::models::attendance::{PunchKind, PunchRequest};
use rhrms::models::expense::{NewExpense, Receipt};
use rhrms::models::leave::LeaveApplication;
use rhrms::models::task::TaskStatus;
use rhrms::services::session::extract_token;
use rhrms::services::{
    AttendanceService, ExpenseService, LeaveService, OrganizationService, TaskService, rows,
};
use rhrms::utils::date::month_bounds;
use serde_json::json;

mod common;
use common::{harness, header};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_extract_token_shapes() {
    assert_eq!(
        extract_token(&json!({"access_token": "A"})).as_deref(),
        Some("A")
    );
    assert_eq!(extract_token(&json!({"token": "B"})).as_deref(), Some("B"));
    assert_eq!(
        extract_token(&json!({"data": {"access_token": "C"}})).as_deref(),
        Some("C")
    );
    assert_eq!(extract_token(&json!({"message": "ok"})), None);
}

#[test]
fn test_rows_accepts_array_or_data_wrapper() {
    assert_eq!(rows(&json!([{"id": 1}, {"id": 2}])).len(), 2);
    assert_eq!(rows(&json!({"data": [{"id": 1}]})).len(), 1);
    assert!(rows(&json!({"data": {"id": 1}})).is_empty());
    assert!(rows(&json!(null)).is_empty());
}

#[test]
fn test_task_status_codes() {
    assert_eq!(TaskStatus::from_code("todo"), Some(TaskStatus::Todo));
    assert_eq!(
        TaskStatus::from_code("In-Progress"),
        Some(TaskStatus::InProgress)
    );
    assert_eq!(TaskStatus::from_code("D"), Some(TaskStatus::Done));
    assert_eq!(TaskStatus::from_code("blocked"), None);
    assert_eq!(TaskStatus::InProgress.as_str(), "in_progress");
}

#[test]
fn test_leave_days_and_month_bounds() {
    let leave = LeaveApplication {
        leave_type: "casual".into(),
        from_date: date(2025, 3, 10),
        to_date: date(2025, 3, 12),
        reason: "family".into(),
        half_day: false,
    };
    assert_eq!(leave.days(), 3);

    assert_eq!(
        month_bounds(&date(2024, 2, 14)),
        (date(2024, 2, 1), date(2024, 2, 29))
    );
    assert_eq!(
        month_bounds(&date(2025, 12, 5)),
        (date(2025, 12, 1), date(2025, 12, 31))
    );
}

#[test]
fn test_parse_header() {
    let (name, value) = parse_header("X-Tenant:  acme ").unwrap();
    assert_eq!(name.as_str(), "x-tenant");
    assert_eq!(value.to_str().unwrap(), "acme");

    assert!(matches!(
        parse_header("no-colon"),
        Err(AppError::InvalidHeader(_))
    ));
}

#[test]
fn test_raw_request_validation() {
    let raw = RawRequest {
        path: "leave".into(),
        method: "post".into(),
        secure: true,
        data: Some(r#"{"reason":"x"}"#.into()),
        headers: vec!["Accept: text/plain".into()],
        timeout: Some(5),
        ..RawRequest::default()
    };
    let desc = RequestLogic::build(&raw).unwrap();
    assert_eq!(desc.method, reqwest::Method::POST);
    assert!(desc.secure);
    assert!(!desc.files);
    assert_eq!(desc.timeout, Some(std::time::Duration::from_secs(5)));
    assert_eq!(desc.data, Some(RequestBody::Json(json!({"reason": "x"}))));
    assert_eq!(desc.headers.get("accept").unwrap(), "text/plain");

    let bad_method = RawRequest {
        path: "leave".into(),
        method: "GE T".into(),
        ..RawRequest::default()
    };
    assert!(matches!(
        RequestLogic::build(&bad_method),
        Err(AppError::InvalidMethod(_))
    ));

    let bad_json = RawRequest {
        path: "leave".into(),
        method: "POST".into(),
        data: Some("{oops".into()),
        ..RawRequest::default()
    };
    assert!(matches!(
        RequestLogic::build(&bad_json),
        Err(AppError::InvalidJson(_))
    ));
}

#[test]
fn test_multipart_data_must_be_an_object() {
    let mut path = std::env::temp_dir();
    path.push("rhrms_multipart_receipt.txt");
    std::fs::write(&path, b"receipt").unwrap();
    let attachment = format!("receipt={}", path.to_string_lossy());

    let rejected = RawRequest {
        path: "expense".into(),
        method: "POST".into(),
        data: Some("[1,2,3]".into()),
        files: vec![attachment],
        ..RawRequest::default()
    };
    assert!(matches!(
        RequestLogic::build(&rejected),
        Err(AppError::InvalidMultipartData(_))
    ));

    let accepted = RawRequest {
        data: Some(r#"{"title":"Taxi","amount":12.5}"#.into()),
        ..rejected
    };
    let desc = RequestLogic::build(&accepted).unwrap();
    assert!(desc.files);
    let Some(RequestBody::Multipart(parts)) = desc.data else {
        panic!("expected multipart body");
    };
    assert_eq!(parts.len(), 3);
    assert!(parts.contains(&FormPart::text("amount", "12.5")));
    assert!(parts.contains(&FormPart::file(
        "receipt",
        "rhrms_multipart_receipt.txt",
        b"receipt".to_vec()
    )));
}

#[tokio::test]
async fn test_expense_submit_is_multipart() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");
    h.transport.push_json(201, json!({"id": 11}));

    let expense = NewExpense {
        title: "Taxi".into(),
        amount: 12.5,
        date: date(2025, 1, 31),
        category: Some("travel".into()),
        description: None,
        receipt: Some(Receipt {
            file_name: "taxi.pdf".into(),
            bytes: b"%PDF".to_vec(),
        }),
    };

    let created = ExpenseService::new(&h.pipeline)
        .submit(expense)
        .await
        .unwrap();
    assert_eq!(created["id"], 11);

    let req = h.transport.last();
    assert_eq!(req.url, "https://org.example.com/expense");
    assert_eq!(header(&req, "content-type"), Some("multipart/form-data"));
    let Some(RequestBody::Multipart(parts)) = req.body else {
        panic!("expected multipart body");
    };
    let names: Vec<&str> = parts.iter().map(FormPart::name).collect();
    assert_eq!(names, vec!["title", "amount", "date", "category", "receipt"]);
    assert_eq!(parts[1], FormPart::text("amount", "12.50"));
    assert_eq!(parts[2], FormPart::text("date", "2025-01-31"));
}

#[tokio::test]
async fn test_leave_apply_sends_api_dates() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");

    let leave = LeaveApplication {
        leave_type: "sick".into(),
        from_date: date(2025, 4, 1),
        to_date: date(2025, 4, 1),
        reason: "flu".into(),
        half_day: true,
    };
    LeaveService::new(&h.pipeline).apply(&leave).await.unwrap();

    let req = h.transport.last();
    let Some(RequestBody::Json(body)) = req.body else {
        panic!("expected JSON body");
    };
    assert_eq!(body["from_date"], "2025-04-01");
    assert_eq!(body["to_date"], "2025-04-01");
    assert_eq!(body["half_day"], true);
}

#[tokio::test]
async fn test_punch_carries_location() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");

    let location = LocationResult {
        latitude: 10.0,
        longitude: 20.0,
        address: Some("1 Main St".into()),
    };
    let at = Local.with_ymd_and_hms(2025, 5, 2, 9, 0, 0).unwrap();
    let request = PunchRequest::new(location, None, at);

    let service = AttendanceService::new(&h.pipeline);
    service.punch(PunchKind::CheckIn, &request).await.unwrap();

    let req = h.transport.last();
    assert_eq!(req.url, "https://org.example.com/attendance/check-in");
    let Some(RequestBody::Json(body)) = req.body else {
        panic!("expected JSON body");
    };
    assert_eq!(body["latitude"], 10.0);
    assert_eq!(body["address"], "1 Main St");
    assert!(body.get("note").is_none());

    service
        .history(date(2025, 5, 1), date(2025, 5, 31))
        .await
        .unwrap();
    assert_eq!(
        h.transport.last().url,
        "https://org.example.com/attendance?from=2025-05-01&to=2025-05-31"
    );
}

#[tokio::test]
async fn test_task_and_company_endpoints() {
    let h = harness();
    h.store.set_base_url("https://org.example.com");
    rhrms::db::DeviceStorage::set_item(h.storage.as_ref(), rhrms::db::keys::ACCESS_TOKEN, "T")
        .unwrap();

    TaskService::new(&h.pipeline)
        .set_status(42, TaskStatus::Done)
        .await
        .unwrap();
    let req = h.transport.last();
    assert_eq!(req.method, reqwest::Method::PUT);
    assert_eq!(req.url, "https://org.example.com/task/42/status");
    assert_eq!(header(&req, "authorization"), Some("Bearer T"));

    h.transport
        .push_json(200, json!({"name": "Acme", "timezone": "UTC"}));
    let info = OrganizationService::new(&h.pipeline)
        .company_info()
        .await
        .unwrap();
    assert_eq!(info["name"], "Acme");
    let req = h.transport.last();
    assert_eq!(req.url, "https://org.example.com/company-info");
    assert_eq!(header(&req, "authorization"), None);
}
