use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use amped_server::config::ServerConfig;
use amped_server::state::{AppState, FixedClock};

fn app() -> Router {
    app_with(ServerConfig::default())
}

fn app_with(config: ServerConfig) -> Router {
    let now = jiff::civil::date(2026, 10, 19)
        .at(14, 3, 22, 0)
        .to_zoned(jiff::tz::TimeZone::UTC)
        .unwrap();
    amped_server::app(AppState::new(config).with_clock(FixedClock(now)))
}

fn form_post(body: String) -> Request<Body> {
    Request::post("/generate-pdf")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn encode(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Text drawn on every page, in drawing order.
fn pdf_strings(bytes: &[u8]) -> Vec<String> {
    let doc = lopdf::Document::load_mem(bytes).unwrap();
    let mut strings = Vec::new();
    for page_id in doc.get_pages().values() {
        let data = doc.get_page_content(*page_id).unwrap();
        for op in lopdf::content::Content::decode(&data).unwrap().operations {
            if op.operator == "Tj"
                && let Some(lopdf::Object::String(text, _)) = op.operands.first()
            {
                strings.push(String::from_utf8_lossy(text).into_owned());
            }
        }
    }
    strings
}

fn count_after(strings: &[String], label: &str) -> String {
    let at = strings.iter().position(|s| s == label).unwrap();
    strings[at + 1].clone()
}

#[tokio::test]
async fn health_reports_healthy() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "AMPED PDF Generator");
    assert_eq!(body["timestamp"], "2026-10-19T14:03:22Z");
}

#[tokio::test]
async fn info_describes_fields_and_endpoints() {
    let response = app()
        .oneshot(Request::get("/api/pdf-info").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["endpoints"]["generate_pdf"], "/generate-pdf");
    assert_eq!(body["content_type"], "application/x-www-form-urlencoded");

    let names: Vec<_> = body["expected_fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap().to_string())
        .collect();
    for name in ["routes", "devices", "conduit"] {
        assert!(names.contains(&name.to_string()), "{name}");
    }
}

#[tokio::test]
async fn generate_returns_pdf_attachment() {
    let body = encode(&[
        ("routes", r#"[{"type":"EMT","length":"100","conduit":"3/4"}]"#),
        ("devices", r#"[{"type":"Breaker","quantity":"1","voltage":"120"}]"#),
        ("conduit", r#"[{"size":"3/4","type":"EMT","length":"100"}]"#),
    ]);
    let response = app().oneshot(form_post(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"estimate_20261019_140322.pdf\""
    );

    let bytes = body_bytes(response).await;
    assert!(bytes.starts_with(b"%PDF-"));
    let strings = pdf_strings(&bytes);
    assert_eq!(count_after(&strings, "Routes:"), "1");
    assert_eq!(count_after(&strings, "Devices:"), "1");
    assert_eq!(count_after(&strings, "Conduit entries:"), "1");
}

#[tokio::test]
async fn empty_submission_renders_header_and_summary_only() {
    let response = app().oneshot(form_post(String::new())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let strings = pdf_strings(&body_bytes(response).await);
    for heading in ["Routes", "Devices", "Conduit Specifications"] {
        assert!(!strings.contains(&heading.to_string()), "{heading}");
    }
    assert!(strings.contains(&"Electrical Estimate Report".to_string()));
    assert_eq!(count_after(&strings, "Total records:"), "0");
}

#[tokio::test]
async fn missing_content_type_is_read_as_form() {
    let request = Request::post("/generate-pdf").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_field_is_a_bad_request() {
    let response = app()
        .oneshot(form_post(encode(&[("routes", "not json")])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = body_json(response).await;
    assert_eq!(body["field"], "routes");
    assert!(body["error"].as_str().unwrap().contains("routes"));
}

#[tokio::test]
async fn non_array_field_is_a_bad_request() {
    let response = app()
        .oneshot(form_post(encode(&[("devices", r#"{"type":"Breaker"}"#)])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "devices");
}

#[tokio::test]
async fn json_body_with_structured_arrays_matches_form() {
    let routes = json!([{"type": "EMT", "length": "100", "conduit": "3/4"}]);

    let form = app()
        .oneshot(form_post(encode(&[("routes", &routes.to_string())])))
        .await
        .unwrap();
    let json_request = Request::post("/generate-pdf")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "routes": routes }).to_string()))
        .unwrap();
    let structured = app().oneshot(json_request).await.unwrap();

    assert_eq!(form.status(), StatusCode::OK);
    assert_eq!(structured.status(), StatusCode::OK);
    assert_eq!(body_bytes(form).await, body_bytes(structured).await);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let config = ServerConfig {
        max_body_bytes: 64,
        ..ServerConfig::default()
    };
    let body = encode(&[("routes", &format!("[{}]", "{}, ".repeat(40) + "{}"))]);
    let response = app_with(config).oneshot(form_post(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn unknown_path_lists_endpoints() {
    let response = app()
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Endpoint not found");
    assert_eq!(body["available_endpoints"].as_array().unwrap().len(), 3);
}
