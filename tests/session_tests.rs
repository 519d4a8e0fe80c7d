use rhrms::config::Config;
use rhrms::context::AppContext;
use rhrms::core::session::SessionLogic;
use rhrms::db::{DeviceStorage, keys};
use serde_json::json;

mod common;
use common::{ScriptedTransport, setup_test_db};

fn context(name: &str, transport: &std::sync::Arc<ScriptedTransport>) -> AppContext {
    let config = Config {
        database: setup_test_db(name),
        api_base_url: "https://org.example.com".into(),
        ..Config::default()
    };
    AppContext::with_transport(config, transport.clone()).unwrap()
}

#[tokio::test]
async fn test_logout_reports_session_ended_by_rejected_token() {
    let transport = ScriptedTransport::new();
    let ctx = context("session_rejected_logout", &transport);
    SessionLogic::store_token(&ctx, "T1").unwrap();

    // the backend rejects the token on the logout call itself
    transport.push_json(401, json!({"message": "Token expired"}));

    let was_logged_in = SessionLogic::logout(&ctx).await.unwrap();
    assert!(was_logged_in);
    assert!(!ctx.auth.is_logged_in());
    assert_eq!(ctx.storage.get_item(keys::ACCESS_TOKEN).unwrap(), None);

    let req = transport.last();
    assert_eq!(req.url, "https://org.example.com/logout");
}

#[tokio::test]
async fn test_logout_without_session_skips_backend() {
    let transport = ScriptedTransport::new();
    let ctx = context("session_no_logout", &transport);

    let was_logged_in = SessionLogic::logout(&ctx).await.unwrap();
    assert!(!was_logged_in);
    assert!(transport.requests().is_empty());
}
