
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

async fn get_json(app: &TestApp, path: &str) -> (StatusCode, Value) {
    let response = app.get(path).await;
    let status = response.status();
    (status, response.json().await.expect("Response body should be JSON"))
}

#[actix_rt::test]
async fn home_lists_endpoints_and_owner() {
    let app = TestApp::spawn().await;

    let (status, body) = get_json(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["owner"], "Maren Okafor");
    assert!(body["endpoints"].as_array().unwrap().contains(&json!("/api/contact")));
}

#[actix_rt::test]
async fn profile_is_served() {
    let app = TestApp::spawn().await;

    let (status, body) = get_json(&app, "/api/profile").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Maren Okafor");
    assert!(body["social"].as_array().is_some_and(|links| !links.is_empty()));
}

#[actix_rt::test]
async fn project_list_contains_summaries_only() {
    let app = TestApp::spawn().await;

    let (status, body) = get_json(&app, "/api/projects").await;

    assert_eq!(status, StatusCode::OK);
    let projects = body.as_array().unwrap();
    assert_eq!(projects.len(), 4);
    assert_eq!(projects[0]["slug"], "ledgerline");
    assert!(projects[0].get("description").is_none());
    assert!(projects[0].get("highlights").is_none());
}

#[actix_rt::test]
async fn project_detail_by_slug() {
    let app = TestApp::spawn().await;

    let (status, body) = get_json(&app, "/api/projects/tidewatch").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "tidewatch");
    assert!(body["description"].is_string());
    assert!(body["links"]["repo"].is_string());
}

#[actix_rt::test]
async fn unknown_project_is_404() {
    let app = TestApp::spawn().await;

    let (status, body) = get_json(&app, "/api/projects/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Project not found" }));
}

#[actix_rt::test]
async fn blog_posts_are_newest_first() {
    let app = TestApp::spawn().await;

    let (status, body) = get_json(&app, "/api/blog").await;

    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|post| post["slug"].as_str().unwrap())
        .collect();
    assert_eq!(
        slugs,
        ["typed-config-in-rust-services", "fixed-windows-are-fine", "honeypots-over-captchas"]
    );
}

#[actix_rt::test]
async fn blog_post_by_slug_and_missing_post() {
    let app = TestApp::spawn().await;

    let (status, body) = get_json(&app, "/api/blog/honeypots-over-captchas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2024-11-18");
    assert_eq!(body["readTime"], "4 min");

    let (status, body) = get_json(&app, "/api/blog/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Blog post not found" }));
}

#[actix_rt::test]
async fn skills_and_timeline_are_served() {
    let app = TestApp::spawn().await;

    let (status, skills) = get_json(&app, "/api/skills").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(skills.as_array().unwrap().len(), 3);
    assert_eq!(skills[0]["name"], "Backend");

    let (status, timeline) = get_json(&app, "/api/timeline").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timeline[0]["type"], "work");
    assert!(timeline[0]["startDate"].is_string());
}

#[actix_rt::test]
async fn trailing_slash_is_normalized() {
    let app = TestApp::spawn().await;

    let (status, _) = get_json(&app, "/api/skills/").await;

    assert_eq!(status, StatusCode::OK);
}

#[actix_rt::test]
async fn unknown_route_returns_json_404() {
    let app = TestApp::spawn().await;

    let (status, body) = get_json(&app, "/api/nothing-here").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
    assert_eq!(body["details"], "No route for GET /api/nothing-here");
}
