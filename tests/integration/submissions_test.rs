// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt;

use crate::helpers::{
    assert_error_code, json_body, post_json, spawn_app, spawn_app_with, TestAppOptions, TEST_IP,
};
use yakyunavi::presentation::middleware::rate_limit_middleware::SubmissionRateLimiter;

fn review_body(team_id: &str) -> serde_json::Value {
    json!({
        "teamId": team_id,
        "teamName": "大阪リバースターズ",
        "rating": 4,
        "nickname": "野球少年の父",
        "comment": "指導者が熱心で、初心者でも馴染みやすいチームです。"
    })
}

fn report_body() -> serde_json::Value {
    json!({
        "teamId": "osaka-rs",
        "teamName": "大阪リバースターズ",
        "issueType": "incorrect",
        "reporterType": "parent",
        "comment": "練習場所が昨年から変わっています。"
    })
}

#[tokio::test]
async fn fresh_review_is_created() {
    let app = spawn_app();

    let response = post_json(&app, "/api/review", TEST_IP, review_body("osaka-rs")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert!(body["id"].is_string());

    let rows = app.feedback_repo.rows.lock().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].ip_address, TEST_IP);
}

#[tokio::test]
async fn second_review_for_same_team_and_ip_conflicts() {
    let app = spawn_app();

    let first = post_json(&app, "/api/review", TEST_IP, review_body("osaka-rs")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(&app, "/api/review", TEST_IP, review_body("osaka-rs")).await;
    assert_error_code(second, StatusCode::CONFLICT, "DUPLICATE_REVIEW").await;

    // A different team from the same address is still fine.
    let other = post_json(&app, "/api/review", TEST_IP, review_body("hyogo-bs")).await;
    assert_eq!(other.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn blocked_ip_cannot_submit_anything() {
    let app = spawn_app();
    app.feedback_repo.block_ip(TEST_IP).await;

    let review = post_json(&app, "/api/review", TEST_IP, review_body("osaka-rs")).await;
    assert_error_code(review, StatusCode::FORBIDDEN, "IP_BLOCKED").await;

    let report = post_json(&app, "/api/feedback", TEST_IP, report_body()).await;
    assert_error_code(report, StatusCode::FORBIDDEN, "IP_BLOCKED").await;
}

#[tokio::test]
async fn review_validation_rejects_out_of_range_rating() {
    let app = spawn_app();

    let mut body = review_body("osaka-rs");
    body["rating"] = json!(6);
    let response = post_json(&app, "/api/review", TEST_IP, body).await;
    assert_error_code(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;

    let rows = app.feedback_repo.rows.lock().await;
    assert!(rows.is_empty());
}

#[tokio::test]
async fn review_validation_rejects_missing_fields() {
    let app = spawn_app();

    let response = post_json(
        &app,
        "/api/review",
        TEST_IP,
        json!({ "teamId": "osaka-rs" }),
    )
    .await;
    assert_error_code(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn malformed_json_body_keeps_the_error_envelope() {
    let app = spawn_app();

    let response = app
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/review")
                .header("content-type", "application/json")
                .header("x-forwarded-for", TEST_IP)
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_error_code(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn non_json_content_type_keeps_the_error_envelope() {
    let app = spawn_app();

    let response = app
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header("content-type", "text/plain")
                .header("x-forwarded-for", TEST_IP)
                .body(Body::from("hello"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_error_code(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn submission_without_client_ip_is_rejected() {
    let app = spawn_app();

    // No X-Forwarded-For, no X-Real-IP and no socket peer in oneshot.
    let response = app
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/review")
                .header("content-type", "application/json")
                .body(Body::from(review_body("osaka-rs").to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_error_code(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn reports_are_not_deduplicated() {
    let app = spawn_app();

    let first = post_json(&app, "/api/feedback", TEST_IP, report_body()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(&app, "/api/feedback", TEST_IP, report_body()).await;
    assert_eq!(second.status(), StatusCode::CREATED);

    let rows = app.feedback_repo.rows.lock().await;
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.issue_type.as_deref() == Some("incorrect")));
}

#[tokio::test]
async fn report_rejects_unknown_issue_type() {
    let app = spawn_app();

    let mut body = report_body();
    body["issueType"] = json!("spam");
    let response = post_json(&app, "/api/feedback", TEST_IP, body).await;
    assert_error_code(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn burst_from_one_ip_is_rate_limited() {
    let app = spawn_app_with(TestAppOptions {
        rate_limiter: SubmissionRateLimiter::new(true, 2),
        ..TestAppOptions::default()
    });

    let first = post_json(&app, "/api/review", TEST_IP, review_body("osaka-rs")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(&app, "/api/review", TEST_IP, review_body("hyogo-bs")).await;
    assert_eq!(second.status(), StatusCode::CREATED);

    let third = post_json(&app, "/api/review", TEST_IP, review_body("osaka-yg")).await;
    assert_error_code(third, StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED").await;

    // Another address still has budget.
    let other = post_json(
        &app,
        "/api/review",
        "198.51.100.4",
        review_body("osaka-sn"),
    )
    .await;
    assert_eq!(other.status(), StatusCode::CREATED);
}
