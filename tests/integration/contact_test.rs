// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{
    assert_error_code, json_body, post_json, spawn_app, spawn_app_with, TestAppOptions, TEST_IP,
};
use yakyunavi::infrastructure::mail::Mailer;

fn contact_body() -> serde_json::Value {
    json!({
        "name": "山田太郎",
        "email": "taro@example.jp",
        "subject": "掲載情報について",
        "message": "チーム情報の更新をお願いします。"
    })
}

fn mailer_for(server: &MockServer) -> Mailer {
    Mailer::with_base_url(
        server.uri(),
        "mail-key",
        "noreply@example.jp",
        vec!["ops@example.jp".to_string()],
    )
}

#[tokio::test]
async fn contact_is_forwarded_by_mail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(body_partial_json(json!({
            "subject": "【お問い合わせ】掲載情報について",
            "to": ["ops@example.jp"]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let app = spawn_app_with(TestAppOptions {
        mailer: mailer_for(&server),
        ..TestAppOptions::default()
    });

    let response = post_json(&app, "/api/contact", TEST_IP, contact_body()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn contact_without_mail_configured_still_succeeds() {
    let app = spawn_app();

    let response = post_json(&app, "/api/contact", TEST_IP, contact_body()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn contact_with_invalid_email_is_rejected() {
    let app = spawn_app();

    let mut body = contact_body();
    body["email"] = json!("not-an-email");
    let response = post_json(&app, "/api/contact", TEST_IP, body).await;
    assert_error_code(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn mail_provider_failure_is_a_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = spawn_app_with(TestAppOptions {
        mailer: mailer_for(&server),
        ..TestAppOptions::default()
    });

    let response = post_json(&app, "/api/contact", TEST_IP, contact_body()).await;
    assert_error_code(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "UPSTREAM_ERROR",
    )
    .await;
}
