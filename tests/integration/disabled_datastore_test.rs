// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{
    assert_error_code, json_body, router_get, router_post_json, spawn_app_disabled, TEST_IP,
};

#[tokio::test]
async fn review_write_without_datastore_is_an_internal_error() {
    let app = spawn_app_disabled();

    let response = router_post_json(
        &app.app,
        "/api/review",
        TEST_IP,
        json!({
            "teamId": "osaka-rs",
            "teamName": "大阪リバースターズ",
            "rating": 5,
            "comment": "熱心な指導で子どもが伸びました。"
        }),
    )
    .await;

    assert_error_code(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
    )
    .await;
}

#[tokio::test]
async fn report_write_without_datastore_is_an_internal_error() {
    let app = spawn_app_disabled();

    let response = router_post_json(
        &app.app,
        "/api/feedback",
        TEST_IP,
        json!({
            "teamId": "osaka-rs",
            "teamName": "大阪リバースターズ",
            "issueType": "incorrect",
            "reporterType": "parent",
            "comment": "連絡先が古いままです。"
        }),
    )
    .await;

    assert_error_code(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
    )
    .await;
}

#[tokio::test]
async fn review_listing_without_datastore_is_empty() {
    let app = spawn_app_disabled();

    let response = router_get(&app.app, "/api/teams/osaka-rs/reviews").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["totalCount"], 0);
    assert_eq!(body["contents"], json!([]));
}

#[tokio::test]
async fn directory_reads_without_datastore_still_serve() {
    let app = spawn_app_disabled();

    let response = router_get(&app.app, "/api/teams").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["totalCount"], 4);
}
