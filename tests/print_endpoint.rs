//! End-to-end tests for the HTTP surface, driven through the full router
//! (middleware, CORS and cache layers included) with `tower::ServiceExt`.
//!
//! Run with: cargo test --test print_endpoint

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use shiplabel::config::AppConfig;
use shiplabel::label::LabelVariant;
use shiplabel::routes::create_router;
use shiplabel::state::AppState;
use shiplabel::templates::init_templates;

const LABEL_MARKER: &str = r#"class="label""#;
const PAGE_BREAK: &str = r#"<div class="page-break"></div>"#;

fn app_with(config: AppConfig) -> Router {
    let tera = init_templates().expect("templates compile");
    create_router(AppState::new(config, tera))
}

fn generic_app() -> Router {
    app_with(AppConfig::default())
}

fn branded_app() -> Router {
    let mut config = AppConfig::default();
    config.label.variant = LabelVariant::Branded;
    config.branded.date = Some("Dec 25, 2025".to_string());
    app_with(config)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .uri(uri)
        .header(header::ORIGIN, "https://admin.example")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

fn encode(value: &serde_json::Value) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}

#[tokio::test]
async fn root_returns_liveness_string() {
    let (status, _, body) = get(generic_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Shipping label service is running");
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, _, body) = get(generic_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn print_two_copies_end_to_end() {
    let uri = "/print?orderName=%231001&labelCount=2&shippingAddress=%7B%22name%22%3A%22Jane%20Doe%22%2C%22city%22%3A%22Ottawa%22%7D";
    let (status, headers, body) = get(generic_app(), uri).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::CACHE_CONTROL], "no-store");
    assert!(headers.contains_key(shiplabel::middleware::REQUEST_ID_HEADER));

    assert_eq!(body.matches(LABEL_MARKER).count(), 2);
    let first = body.find(LABEL_MARKER).unwrap();
    let last = body.rfind(LABEL_MARKER).unwrap();
    let page_break = body.find(PAGE_BREAK).unwrap();
    assert!(first < page_break && page_break < last);

    assert!(body.contains("JANE DOE"));
    assert!(body.contains("Ottawa"));
    assert!(body.contains("#1001"));
}

#[tokio::test]
async fn unusable_label_counts_print_one_label() {
    for count in ["0", "-2", "abc", ""] {
        let uri = format!("/print?orderName=A1&labelCount={}", count);
        let (status, _, body) = get(generic_app(), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches(LABEL_MARKER).count(), 1, "labelCount={:?}", count);
    }
}

#[tokio::test]
async fn label_count_is_capped() {
    let mut config = AppConfig::default();
    config.label.max_copies = 3;
    let (_, _, body) = get(app_with(config), "/print?labelCount=10").await;
    assert_eq!(body.matches(LABEL_MARKER).count(), 3);
}

#[tokio::test]
async fn seven_items_show_five_rows_and_a_note() {
    let items: Vec<serde_json::Value> = (1..=7)
        .map(|i| serde_json::json!({ "title": format!("Widget {}", i), "quantity": i }))
        .collect();
    let uri = format!("/print?lineItems={}", encode(&serde_json::json!(items)));
    let (status, _, body) = get(generic_app(), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches(r#"class="item-row""#).count(), 5);
    assert!(body.contains("1x Widget 1"));
    assert!(body.contains("5x Widget 5"));
    assert!(!body.contains("Widget 6"));
    assert!(body.contains("+ 2 more items"));
}

#[tokio::test]
async fn few_items_have_no_note() {
    let items = serde_json::json!([{ "name": "Poster" }, { "title": "Mug", "quantity": 2 }]);
    let uri = format!("/print?lineItems={}", encode(&items));
    let (_, _, body) = get(generic_app(), &uri).await;

    assert!(body.contains("1x Poster"));
    assert!(body.contains("2x Mug"));
    assert!(!body.contains("more items"));
}

#[tokio::test]
async fn malformed_json_still_prints() {
    let uri = "/print?orderName=%231002&shippingAddress=%7Bnot-json&lineItems=oops";
    let (status, _, body) = get(generic_app(), uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches(LABEL_MARKER).count(), 1);
    assert!(body.contains(r#"<div class="recipient">N/A</div>"#));
    assert!(body.contains(r#"<div class="item-row">N/A</div>"#));
}

#[tokio::test]
async fn unusable_line_item_keeps_the_rest() {
    let items = serde_json::json!([1, { "title": "Mug" }]);
    let uri = format!("/print?lineItems={}", encode(&items));
    let (status, _, body) = get(generic_app(), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches(r#"class="item-row""#).count(), 2);
    assert!(body.contains("1x Item"));
    assert!(body.contains("1x Mug"));
}

#[tokio::test]
async fn oversized_label_count_is_capped() {
    let mut config = AppConfig::default();
    config.label.max_copies = 3;
    let (_, _, body) = get(app_with(config), "/print?labelCount=99999999999").await;
    assert_eq!(body.matches(LABEL_MARKER).count(), 3);
}

#[tokio::test]
async fn undecodable_query_falls_back_to_defaults() {
    // Duplicate keys are rejected by the query extractor
    let (status, _, body) = get(generic_app(), "/print?orderName=a&orderName=b").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<div class="order-number">Order</div>"#));
}

#[tokio::test]
async fn missing_order_name_defaults_to_order() {
    let (status, _, body) = get(generic_app(), "/print").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<div class="order-number">Order</div>"#));
}

#[tokio::test]
async fn barcode_bars_follow_order_name() {
    let (_, _, body) = get(generic_app(), "/print?orderName=AB1").await;
    assert_eq!(body.matches("<rect ").count(), 3);

    let (_, _, body) = get(generic_app(), "/print?orderName=A-B").await;
    assert_eq!(body.matches("<rect ").count(), 2);
}

#[tokio::test]
async fn every_field_is_escaped() {
    let payload = r#"<script>alert("x" & 'y')</script>"#;
    let address = serde_json::json!({
        "name": payload,
        "company": payload,
        "address1": payload,
        "address2": payload,
        "city": payload,
        "provinceCode": payload,
        "zip": payload,
        "country": payload,
        "phone": payload,
    });
    let items = serde_json::json!([{ "title": payload, "quantity": 1 }]);
    let raw = urlencoding::encode(payload).into_owned();
    let uri = format!(
        "/print?orderId={raw}&orderName={raw}&shippingAddress={}&lineItems={}",
        encode(&address),
        encode(&items)
    );
    let (status, _, body) = get(generic_app(), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.to_lowercase().contains("<script>"));
    assert!(!body.contains(r#""x""#));
    assert!(!body.contains("'y'"));
    assert!(body.contains("&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;/script&gt;"));
}

#[tokio::test]
async fn branded_label_ignores_label_count() {
    let address = serde_json::json!({ "name": "Jane Doe", "city": "Ottawa" });
    let uri = format!(
        "/print?orderName=%231001&labelCount=3&shippingAddress={}",
        encode(&address)
    );
    let (status, headers, body) = get(branded_app(), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(body.matches(LABEL_MARKER).count(), 1);
    assert!(!body.contains("page-break"));
    assert!(!body.contains(r#"class="barcode""#));
    assert!(body.contains("JANE!"));
    assert!(body.contains("Dec 25, 2025"));
    assert!(body.contains("Order #1001"));
    assert!(body.contains(r#"src="data:image/png;base64,"#));
}

#[tokio::test]
async fn branded_label_without_logo_still_prints() {
    let mut config = AppConfig::default();
    config.label.variant = LabelVariant::Branded;
    config.branded.logo_path = "/nonexistent/logo.png".to_string();
    let (status, _, body) = get(app_with(config), "/print").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<img class="logo" src="""#));
    assert!(body.contains("CUSTOMER!"));
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/print")
        .header(header::ORIGIN, "https://admin.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(generic_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("GET"));
    assert!(methods.contains("POST"));
}
