use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use canvas_dash::canvas::models::{Assignment, CalendarEvent, Course};
use canvas_dash::config::Config;
use canvas_dash::ics::Event;
use canvas_dash::routes::{router, AppState};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{header, method, path};
use wiremock::{Match, Mock, MockServer, ResponseTemplate};

const TEST_TOKEN: &str = "secret-token";

/// Matches requests whose raw query string contains the given fragment,
/// brackets and all
struct QueryContains(&'static str);

impl Match for QueryContains {
    fn matches(&self, request: &wiremock::Request) -> bool {
        request.url.query().unwrap_or("").contains(self.0)
    }
}

/// Matches requests whose raw query string does NOT contain the fragment
struct QueryLacks(&'static str);

impl Match for QueryLacks {
    fn matches(&self, request: &wiremock::Request) -> bool {
        !request.url.query().unwrap_or("").contains(self.0)
    }
}

fn test_config(base_url: &str) -> Config {
    Config {
        canvas_token: TEST_TOKEN.to_string(),
        canvas_school: "test".to_string(),
        base_url: base_url.trim_end_matches('/').to_string(),
        port: 0,
        static_dir: "./static".to_string(),
        feed_timeout_ms: 1000,
    }
}

fn test_app(base_url: &str) -> Router {
    let config = test_config(base_url);
    router(AppState::new(&config), &config.static_dir)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

#[tokio::test]
async fn courses_are_passed_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses"))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Algebra", "calendar": {"ics": "https://example.test/feeds/1.ics"}},
            {"id": 2, "name": "Biology", "calendar": {"ics": "https://example.test/feeds/2.ics"}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(test_app(&server.uri()), "/courses.json").await;

    assert_eq!(status, StatusCode::OK);
    let courses: Vec<Course> = serde_json::from_slice(&body).unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].name, "Algebra");
    assert_eq!(courses[1].calendar.url, "https://example.test/feeds/2.ics");
}

#[tokio::test]
async fn assignments_are_passed_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses/42/assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "name": "Worksheet 3", "description": "Chapters 1-2", "due_at": "2024-03-15T23:59:00Z"},
            {"id": 11, "name": "Essay", "description": null, "due_at": null}
        ])))
        .mount(&server)
        .await;

    let (status, body) = get(test_app(&server.uri()), "/courses/42/assignments.json").await;

    assert_eq!(status, StatusCode::OK);
    let assignments: Vec<Assignment> = serde_json::from_slice(&body).unwrap();
    assert_eq!(assignments.len(), 2);
    assert!(assignments[0].due_at.is_some());
    assert!(assignments[1].due_at.is_none());
}

#[tokio::test]
async fn non_200_upstream_yields_empty_list_not_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/courses/7/assignments"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, body) = get(test_app(&server.uri()), "/courses.json").await;
    assert_eq!(status, StatusCode::OK);
    let courses: Vec<Course> = serde_json::from_slice(&body).unwrap();
    assert!(courses.is_empty());

    let (status, body) = get(test_app(&server.uri()), "/courses/7/assignments.json").await;
    assert_eq!(status, StatusCode::OK);
    let assignments: Vec<Assignment> = serde_json::from_slice(&body).unwrap();
    assert!(assignments.is_empty());
}

#[tokio::test]
async fn malformed_upstream_json_yields_500() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let (status, body) = get(test_app(&server.uri()), "/courses.json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("JSON decode error"), "unexpected body: {}", text);
}

#[tokio::test]
async fn unreachable_upstream_yields_500() {
    // Nothing listens on port 1
    let (status, body) = get(test_app("http://127.0.0.1:1"), "/courses.json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("Canvas API error"), "unexpected body: {}", text);
}

#[tokio::test]
async fn today_merge_issues_both_queries_and_concatenates() {
    let server = MockServer::start().await;
    let codes = "context_codes[]=course_1&context_codes[]=course_2";

    // Plain calendar-events query
    Mock::given(method("GET"))
        .and(path("/api/v1/calendar_events"))
        .and(QueryContains(codes))
        .and(QueryLacks("type=assignment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"title": "Lecture", "context_code": "course_1", "hidden": false},
            {"title": "Lab", "context_code": "course_2", "hidden": false}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    // Assignment-typed query
    Mock::given(method("GET"))
        .and(path("/api/v1/calendar_events"))
        .and(QueryContains(codes))
        .and(QueryContains("type=assignment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"title": "Lecture", "context_code": "course_1", "hidden": false}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(test_app(&server.uri()), "/courses/1,2/today.json").await;

    assert_eq!(status, StatusCode::OK);
    let events: Vec<CalendarEvent> = serde_json::from_slice(&body).unwrap();
    // Generic first, assignment appended, duplicates kept
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].title, "Lecture");
    assert_eq!(events[1].title, "Lab");
    assert_eq!(events[2].title, "Lecture");
}

#[tokio::test]
async fn static_dashboard_is_served_at_root() {
    let (status, body) = get(test_app("http://127.0.0.1:1"), "/").await;

    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("<html"));
}

#[tokio::test]
async fn events_serialize_with_pascal_case_keys() {
    let value = serde_json::to_value(Event::default()).unwrap();
    let object = value.as_object().unwrap();
    for key in ["Start", "End", "Created", "Modified", "Description", "Location", "Summary", "Id"] {
        assert!(object.contains_key(key), "missing key {}", key);
    }
}
