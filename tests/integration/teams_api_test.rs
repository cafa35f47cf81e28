// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{assert_error_code, get, json_body, post_json, spawn_app, TEST_IP};

#[tokio::test]
async fn list_teams_returns_whole_directory() {
    let app = spawn_app();

    let response = get(&app, "/api/teams").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["totalCount"], 4);
    assert_eq!(body["contents"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn list_teams_filters_by_prefecture_and_league() {
    let app = spawn_app();

    let response = get(
        &app,
        "/api/teams?prefecture=%E5%A4%A7%E9%98%AA%E5%BA%9C&league=boys",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["contents"][0]["id"], "osaka-rs");
}

#[tokio::test]
async fn list_teams_sorts_by_league_display_order() {
    let app = spawn_app();

    // 大阪府 has one team in each league; order is Boys, Senior, Young.
    let response = get(&app, "/api/teams?prefecture=%E5%A4%A7%E9%98%AA%E5%BA%9C").await;
    let body = json_body(response).await;

    let ids: Vec<&str> = body["contents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["osaka-rs", "osaka-sn", "osaka-yg"]);
}

#[tokio::test]
async fn unknown_league_slug_is_a_validation_error() {
    let app = spawn_app();

    let response = get(&app, "/api/teams?league=rookie").await;
    assert_error_code(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn facets_count_prefectures_and_scope_branches() {
    let app = spawn_app();

    let response = get(
        &app,
        "/api/teams/facets?prefecture=%E5%A4%A7%E9%98%AA%E5%BA%9C&league=boys",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    // Prefecture counts always span the whole dataset.
    let prefectures = body["prefectures"].as_array().unwrap();
    assert_eq!(prefectures.len(), 2);
    assert_eq!(prefectures[0]["name"], "大阪府");
    assert_eq!(prefectures[0]["count"], 3);

    // Branches follow the current selection: 大阪府 boys only.
    let branches = body["branches"].as_array().unwrap();
    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0]["name"], "大阪北支部");
    assert_eq!(branches[0]["count"], 1);
}

#[tokio::test]
async fn reviews_for_unknown_team_are_not_found() {
    let app = spawn_app();

    let response = get(&app, "/api/teams/no-such-team/reviews").await;
    assert_error_code(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[tokio::test]
async fn published_reviews_hide_moderation_columns() {
    let app = spawn_app();

    let created = post_json(
        &app,
        "/api/review",
        TEST_IP,
        json!({
            "teamId": "osaka-rs",
            "teamName": "大阪リバースターズ",
            "rating": 5,
            "nickname": "保護者A",
            "comment": "体験会の雰囲気がとても良かったです。"
        }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = get(&app, "/api/teams/osaka-rs/reviews").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["totalCount"], 1);
    let review = &body["contents"][0];
    assert_eq!(review["rating"], 5);
    assert_eq!(review["comment"], "体験会の雰囲気がとても良かったです。");
    assert!(review.get("ipAddress").is_none());
    assert!(review.get("isIpBlocked").is_none());
    assert!(review.get("status").is_none());
}
