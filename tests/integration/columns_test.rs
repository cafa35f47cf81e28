// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{assert_error_code, get, json_body, spawn_app, spawn_app_with, TestAppOptions};
use yakyunavi::infrastructure::cms::CmsClient;

#[tokio::test]
async fn columns_are_empty_when_cms_is_unconfigured() {
    let app = spawn_app();

    let response = get(&app, "/api/columns").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["totalCount"], 0);
    assert!(body["contents"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn columns_come_from_the_cms() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(header("X-MICROCMS-API-KEY", "cms-key"))
        .and(query_param("orders", "-publishedAt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contents": [{
                "id": "col-1",
                "title": "強豪チームの選び方",
                "content": "<p>まず体験会へ。</p>",
                "tags": [],
                "publishedAt": "2025-04-01T00:00:00Z"
            }],
            "totalCount": 1,
            "offset": 0,
            "limit": 12
        })))
        .mount(&server)
        .await;

    let app = spawn_app_with(TestAppOptions {
        cms: CmsClient::with_base_url(server.uri(), "cms-key"),
        ..TestAppOptions::default()
    });

    let response = get(&app, "/api/columns").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["contents"][0]["title"], "強豪チームの選び方");
}

#[tokio::test]
async fn column_listing_degrades_to_empty_on_cms_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let app = spawn_app_with(TestAppOptions {
        cms: CmsClient::with_base_url(server.uri(), "cms-key"),
        ..TestAppOptions::default()
    });

    let response = get(&app, "/api/columns").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["totalCount"], 0);
}

#[tokio::test]
async fn missing_column_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/articles/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let app = spawn_app_with(TestAppOptions {
        cms: CmsClient::with_base_url(server.uri(), "cms-key"),
        ..TestAppOptions::default()
    });

    let response = get(&app, "/api/columns/gone").await;
    assert_error_code(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[tokio::test]
async fn single_column_failure_is_an_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/articles/col-1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = spawn_app_with(TestAppOptions {
        cms: CmsClient::with_base_url(server.uri(), "cms-key"),
        ..TestAppOptions::default()
    });

    let response = get(&app, "/api/columns/col-1").await;
    assert_error_code(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "UPSTREAM_ERROR",
    )
    .await;
}
