use super::*;

#[tokio::test]
async fn healthz_reports_ok_and_version() {
    let Json(body) = healthz().await;
    assert_eq!(body, Health { status: "ok", version: env!("CARGO_PKG_VERSION") });
}

#[test]
fn health_serializes_as_flat_json() {
    let body = Health { status: "ok", version: "1.2.3" };
    let json = serde_json::to_value(&body).expect("serialize");
    assert_eq!(json, serde_json::json!({ "status": "ok", "version": "1.2.3" }));
}

#[test]
fn router_error_names_the_failing_layer() {
    let err = RouterError::LeptosConfig("missing [package.metadata.leptos]".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: missing [package.metadata.leptos]");
}
