use super::*;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use axum::{body, body::Body, http::Request};
use catalog::{EventSource, Lookup};
use scraper::{Html as Document, Selector};
use tower::ServiceExt;

/// Never answers within the test's render timeout.
struct StalledSource;

#[async_trait]
impl EventSource for StalledSource {
    async fn list_summaries(&self) -> Result<Vec<EventSummary>> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(Vec::new())
    }

    async fn get_detail(&self, _id: &EventId) -> Result<Lookup> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(Lookup::Absent)
    }
}

fn test_app_with(source: Arc<dyn EventSource>, render_timeout: Duration) -> Router {
    build_router(Arc::new(AppState {
        api: ApiContext::new(source),
        render_timeout,
    }))
}

fn test_app() -> Router {
    test_app_with(Arc::new(Catalog::canonical()), Duration::from_secs(2))
}

async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf8"))
}

fn count(html: &str, css: &str) -> usize {
    let doc = Document::parse_document(html);
    let selector = Selector::parse(css).expect("selector");
    doc.select(&selector).count()
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (status, body) = get_body(test_app(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn root_renders_five_cards() {
    let (status, html) = get_body(test_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&html, r#"[data-testid="meetup-card"]"#), 5);
    assert_eq!(count(&html, ".animate-spin"), 0);
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_list() {
    for uri in ["/nonexistent-page", "/event", "/event/1/extra"] {
        let (status, html) = get_body(test_app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(count(&html, r#"[data-testid="meetup-card"]"#), 5, "{uri}");
    }
}

#[tokio::test]
async fn detail_route_renders_event() {
    let (status, html) = get_body(test_app(), "/event/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Test Automation with Selenium &amp; Python"));
    assert!(html.contains("Sunday, September 15, 2024"));
    assert_eq!(count(&html, r#"a[href="mailto:sarah.johnson@testpro.com"]"#), 1);
    assert_eq!(count(&html, r#"a[href="tel:+1-555-0123"]"#), 1);
}

#[tokio::test]
async fn missing_event_renders_not_found_with_recovery() {
    let (status, html) = get_body(test_app(), "/event/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Event Not Found"));
    assert_eq!(count(&html, r#"a[role="button"][href="/"]"#), 1);
}

#[tokio::test]
async fn empty_source_renders_empty_state() {
    let app = test_app_with(Arc::new(Catalog::empty()), Duration::from_secs(2));
    let (status, html) = get_body(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No upcoming meetups"));
    assert_eq!(count(&html, r#"[data-testid="meetup-card"]"#), 0);
}

#[tokio::test]
async fn slow_source_renders_loading_state() {
    let app = test_app_with(Arc::new(StalledSource), Duration::from_millis(20));

    let (status, html) = get_body(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&html, ".animate-spin"), 1);

    let (status, html) = get_body(app, "/event/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&html, ".animate-spin"), 1);
}

#[tokio::test]
async fn json_api_lists_events_in_source_order() {
    let (status, body) = get_body(test_app(), "/api/events").await;
    assert_eq!(status, StatusCode::OK);
    let events: Vec<EventSummary> = serde_json::from_str(&body).expect("json");
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);
}

#[tokio::test]
async fn json_api_returns_detail_or_not_found() {
    let (status, body) = get_body(test_app(), "/api/events/4").await;
    assert_eq!(status, StatusCode::OK);
    let event: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(event["title"], "Performance Testing with JMeter");
    assert!(event.get("organizerPhone").is_none());

    let (status, body) = get_body(test_app(), "/api/events/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ApiError = serde_json::from_str(&body).expect("json");
    assert_eq!(error.code, ErrorCode::NotFound);
}

#[test]
fn builtin_catalog_is_used_without_a_path() {
    let catalog = open_catalog(&Settings::default()).expect("catalog");
    assert_eq!(catalog.len(), 5);
}

#[test]
fn missing_catalog_file_is_a_startup_error() {
    let settings = Settings {
        catalog_path: Some("/no/such/events.json".into()),
        ..Settings::default()
    };
    let err = open_catalog(&settings).expect_err("missing file");
    assert!(format!("{err:#}").contains("/no/such/events.json"));
}
