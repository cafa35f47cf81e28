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

use crate::domain::models::feedback::{IssueType, NewReport, ReporterType};
use crate::domain::repositories::feedback_repository::FeedbackRepository;
use crate::domain::services::submission_gate::SubmissionGate;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::app_json::AppJson;
use crate::presentation::extractors::client_ip::ClientIp;

/// POST /api/feedback body. Reports about a listing or a published review.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    #[validate(length(max = 100))]
    pub team_id: Option<String>,
    #[validate(length(max = 200))]
    pub team_name: Option<String>,
    pub issue_type: IssueType,
    pub reporter_type: ReporterType,
    #[validate(length(min = 1, max = 2000))]
    pub comment: String,
}

/// POST /api/feedback
///
/// Reports only pass the IP-block check; the same address may file any
/// number of them. They land in the moderation queue as pending.
pub async fn create_report<F>(
    Extension(repo): Extension<Arc<F>>,
    ClientIp(ip): ClientIp,
    AppJson(request): AppJson<ReportRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError>
where
    F: FeedbackRepository + 'static,
{
    request.validate()?;

    let gate = SubmissionGate::new(repo);
    let saved = gate
        .submit_report(NewReport {
            team_id: request.team_id.filter(|t| !t.trim().is_empty()),
            team_name: request.team_name.filter(|t| !t.trim().is_empty()),
            issue_type: request.issue_type,
            reporter_type: request.reporter_type,
            comment: request.comment,
            ip_address: ip,
        })
        .await?;

    info!(report_id = %saved.id, issue_type = ?saved.issue_type, "report accepted");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "id": saved.id })),
    ))
}
