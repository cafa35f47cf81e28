// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::domain::models::feedback::NewReview;
use crate::domain::repositories::feedback_repository::FeedbackRepository;
use crate::domain::services::submission_gate::SubmissionGate;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::app_json::AppJson;
use crate::presentation::extractors::client_ip::ClientIp;

/// POST /api/review body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    #[validate(length(min = 1, max = 100))]
    pub team_id: String,
    #[validate(length(min = 1, max = 200))]
    pub team_name: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i16,
    #[validate(length(max = 50))]
    pub nickname: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    pub comment: String,
}

/// POST /api/review
///
/// Runs the abuse gate (IP block, one review per IP per team) before
/// inserting. Accepted reviews are published immediately.
pub async fn create_review<F>(
    Extension(repo): Extension<Arc<F>>,
    ClientIp(ip): ClientIp,
    AppJson(request): AppJson<ReviewRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError>
where
    F: FeedbackRepository + 'static,
{
    request.validate()?;

    let gate = SubmissionGate::new(repo);
    let saved = gate
        .submit_review(NewReview {
            team_id: request.team_id,
            team_name: request.team_name,
            rating: request.rating,
            nickname: request.nickname.filter(|n| !n.trim().is_empty()),
            comment: request.comment,
            ip_address: ip,
        })
        .await?;

    info!(review_id = %saved.id, team_id = ?saved.team_id, "review accepted");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "id": saved.id })),
    ))
}
