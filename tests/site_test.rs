//! Router tests: page rendering, form flow and the JSON API

use axum::{
    body::{to_bytes, Body},
    extract::ConnectInfo,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use portfolio_site::api::{create_router, AppState};
use portfolio_site::{SiteConfig, TelemetryCollector};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn app_with(config: SiteConfig) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(config, Arc::new(TelemetryCollector::new())));
    (create_router(state.clone()), state)
}

fn app() -> Router {
    app_with(SiteConfig {
        submit_delay: Duration::from_millis(5),
        ..Default::default()
    })
    .0
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn form_request(body: &str) -> Request<Body> {
    Request::post("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Form post as it arrives from a directly connected visitor
fn form_request_from(peer: &str, body: &str) -> Request<Body> {
    let addr: SocketAddr = peer.parse().unwrap();
    Request::post("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .extension(ConnectInfo(addr))
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

const FILLED_FORM: &str = "name=Jane&email=jane%40example.com&message=Hi";

// ============================================
// Page
// ============================================

#[tokio::test]
async fn test_index_renders_all_sections() {
    let app = app();
    let (status, html) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Praveen M Sadalgi - Full Stack Developer Portfolio</title>"));
    for anchor in ["home", "about", "achievements", "projects", "gallery", "services", "contact"] {
        assert!(html.contains(&format!("id=\"{}\"", anchor)), "missing #{}", anchor);
    }
    assert_eq!(html.matches("class=\"gallery-item").count(), 6);
    assert!(!html.contains("role=\"dialog\""));
}

#[tokio::test]
async fn test_gallery_category_from_query() {
    let app = app();

    let (_, html) = get(&app, "/?category=projects").await;
    assert_eq!(html.matches("class=\"gallery-item").count(), 1);
    assert!(html.contains("Project Showcase"));

    // unknown category falls back to everything
    let (status, html) = get(&app, "/?category=sports").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("class=\"gallery-item").count(), 6);
}

#[tokio::test]
async fn test_gallery_modal_from_query() {
    let app = app();

    let (_, html) = get(&app, "/?image=3").await;
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("aria-label=\"Team Celebration\""));

    let (status, html) = get(&app, "/?image=99").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("role=\"dialog\""));

    let (status, _) = get(&app, "/?image=abc").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_gallery_modal_ignores_filtered_out_image() {
    let app = app();

    // image 1 is an award, hidden by the projects filter
    let (status, html) = get(&app, "/?category=projects&image=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("role=\"dialog\""));
    assert_eq!(html.matches("class=\"gallery-item").count(), 1);

    let (_, html) = get(&app, "/?category=projects&image=5").await;
    assert!(html.contains("role=\"dialog\""));
}

#[tokio::test]
async fn test_toast_after_send() {
    let app = app();
    let (_, html) = get(&app, "/").await;
    assert!(!html.contains("Message Sent!"));

    let (_, html) = get(&app, "/?sent=1").await;
    assert!(html.contains("Message Sent!"));
    assert!(html.contains("Thanks for reaching out."));
}

// ============================================
// Contact form
// ============================================

#[tokio::test]
async fn test_form_with_missing_field_rerenders() {
    let (app, state) = app_with(SiteConfig::default());

    let response = app
        .oneshot(form_request("name=Jane&email=&message=Hello"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("value=\"Jane\""));
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("email"));
    assert!(state.inbox.is_empty());
    assert_eq!(state.telemetry.get_stats().submissions_rejected, 1);
}

#[tokio::test(start_paused = true)]
async fn test_form_submit_waits_then_redirects() {
    let (app, state) = app_with(SiteConfig::default());
    let started = tokio::time::Instant::now();

    let response = app
        .oneshot(form_request(
            "name=Jane&email=jane%40example.com&message=Let%27s+build+something",
        ))
        .await
        .unwrap();

    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/?sent=1#contact"
    );

    let delivered = state.inbox.recent();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].email, "jane@example.com");
    assert_eq!(delivered[0].message, "Let's build something");
    assert_eq!(state.telemetry.get_stats().messages_delivered, 1);
}

#[tokio::test]
async fn test_form_rate_limit_is_per_peer() {
    let (app, _) = app_with(SiteConfig {
        submit_delay: Duration::from_millis(1),
        contact_rate_limit: 2,
        ..Default::default()
    });

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(form_request_from("203.0.113.10:40000", FILLED_FORM))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    // a second visitor without proxy headers has its own window
    let response = app
        .clone()
        .oneshot(form_request_from("198.51.100.20:40000", FILLED_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app
        .oneshot(form_request_from("203.0.113.10:40001", FILLED_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_form_rate_limited_rerenders_page() {
    let (app, state) = app_with(SiteConfig {
        submit_delay: Duration::from_millis(1),
        contact_rate_limit: 1,
        ..Default::default()
    });

    let response = app
        .clone()
        .oneshot(form_request_from("203.0.113.10:40000", FILLED_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["x-ratelimit-remaining"], "0");

    let response = app
        .oneshot(form_request_from("203.0.113.10:40000", FILLED_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key(header::RETRY_AFTER));
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"), "{}", content_type);

    let html = body_text(response).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Rate limit exceeded"));
    assert!(html.contains("value=\"Jane\""));
    assert!(!html.contains("API_RATE_LIMITED"));

    assert_eq!(state.inbox.len(), 1);
    assert_eq!(state.telemetry.get_stats().submissions_rejected, 1);
}

// ============================================
// JSON API
// ============================================

#[tokio::test]
async fn test_health_on_both_paths() {
    let app = app();
    for uri in ["/health", "/v1/health"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["status"], "healthy");
    }
}

#[tokio::test]
async fn test_content_endpoint() {
    let app = app();
    let (status, body) = get(&app, "/v1/content").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["data"]["hero"]["name"], "Praveen M Sadalgi");
    assert_eq!(json["data"]["achievements"].as_array().unwrap().len(), 6);
    assert_eq!(json["data"]["gallery"].as_array().unwrap().len(), 6);
    assert!(json["data"]["projects"][4]["image"].is_null());
}

#[tokio::test]
async fn test_gallery_endpoint() {
    let app = app();

    let (status, body) = get(&app, "/v1/gallery?category=projects").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json["data"]["categories"],
        serde_json::json!(["all", "awards", "projects"])
    );
    assert_eq!(json["data"]["active"], "projects");
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["items"][0]["id"], 5);

    let (status, body) = get(&app, "/v1/gallery?category=sports").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["code"], "API_BAD_REQUEST");
}

#[tokio::test]
async fn test_api_contact_missing_message() {
    let app = app();
    let (status, json) = post_json(
        &app,
        "/v1/contact",
        serde_json::json!({ "name": "Jane", "email": "jane@example.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "FORM_MISSING_FIELD");
}

#[tokio::test]
async fn test_api_contact_delivers() {
    let (app, state) = app_with(SiteConfig {
        submit_delay: Duration::from_millis(5),
        ..Default::default()
    });
    let (status, json) = post_json(
        &app,
        "/v1/contact",
        serde_json::json!({ "name": "Jane", "email": "jane@example.com", "message": "Hi" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["notification"]["title"], "Message Sent!");
    assert_eq!(state.inbox.len(), 1);
    assert_eq!(json["data"]["id"], state.inbox.recent()[0].id.to_string());
}

#[tokio::test]
async fn test_contact_rate_limited_per_client() {
    let (app, _) = app_with(SiteConfig {
        submit_delay: Duration::from_millis(1),
        contact_rate_limit: 1,
        ..Default::default()
    });
    let body = serde_json::json!({ "name": "Jane", "email": "jane@example.com", "message": "Hi" });

    let (status, _) = post_json(&app, "/v1/contact", body.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = post_json(&app, "/v1/contact", body).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "API_RATE_LIMITED");

    // the page itself is never limited
    let (status, _) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_tilt_endpoint() {
    let app = app();
    let rect = serde_json::json!({ "left": 0, "top": 0, "width": 200, "height": 100 });

    let (status, json) = post_json(
        &app,
        "/v1/effects/tilt",
        serde_json::json!({ "preset": "project_card", "pointer": { "x": 100, "y": 50 }, "rect": rect }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["transform"],
        "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) translateZ(0px)"
    );

    let (_, json) = post_json(
        &app,
        "/v1/effects/tilt",
        serde_json::json!({ "preset": "project_card", "pointer": { "x": 200, "y": 50 }, "rect": rect }),
    )
    .await;
    assert_eq!(json["data"]["tilt"]["rotate_y_deg"], 30.0);

    let (status, json) = post_json(
        &app,
        "/v1/effects/tilt",
        serde_json::json!({ "preset": "spinner", "rect": rect }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "API_BAD_REQUEST");
}

#[tokio::test]
async fn test_parallax_endpoint() {
    let app = app();

    let (status, json) = post_json(
        &app,
        "/v1/effects/parallax",
        serde_json::json!({ "element_top": -10000, "viewport_height": 800, "items": 3 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["progress"], 1.0);
    assert_eq!(json["data"]["frames"].as_array().unwrap().len(), 3);
    assert_eq!(json["data"]["frames"][2]["opacity"], 1.0);

    let (status, _) = post_json(
        &app,
        "/v1/effects/parallax",
        serde_json::json!({ "element_top": 0, "viewport_height": 800, "items": 1000 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_scroll_endpoint() {
    let app = app();

    let (status, json) = post_json(
        &app,
        "/v1/effects/scroll",
        serde_json::json!({ "scroll_y": 400, "rect_top": 100, "rect_bottom": 500, "viewport_height": 800 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["navbar_condensed"], true);
    assert_eq!(json["data"]["spin"]["rotate_y_deg"], 40.0);
    assert_eq!(json["data"]["transform"], "rotateY(40.0deg) rotateX(20.0deg)");

    // off screen keeps the previous rotation
    let (_, json) = post_json(
        &app,
        "/v1/effects/scroll",
        serde_json::json!({
            "scroll_y": 3000,
            "rect_top": -2000,
            "rect_bottom": -1600,
            "viewport_height": 800,
            "previous": { "rotate_y_deg": 40.0, "rotate_x_deg": 20.0 }
        }),
    )
    .await;
    assert_eq!(json["data"]["spin"]["rotate_y_deg"], 40.0);

    let (_, json) = post_json(
        &app,
        "/v1/effects/scroll",
        serde_json::json!({ "scroll_y": 10, "rect_top": 900, "rect_bottom": 1200, "viewport_height": 800 }),
    )
    .await;
    assert_eq!(json["data"]["navbar_condensed"], false);
    assert_eq!(json["data"]["spin"]["rotate_y_deg"], 0.0);
}

#[tokio::test]
async fn test_stats_count_page_views() {
    let app = app();
    get(&app, "/").await;
    get(&app, "/?category=awards").await;
    get(&app, "/v1/gallery").await;

    let (_, body) = get(&app, "/v1/stats").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["data"]["page_views"], 2);
    assert_eq!(json["data"]["gallery_queries"], 1);
    assert_eq!(json["data"]["inbox_size"], 0);
}
