// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Path, Query};
use axum::Json;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::models::feedback::Feedback;
use crate::domain::models::team::{League, Team};
use crate::domain::repositories::feedback_repository::FeedbackRepository;
use crate::domain::services::directory::{FacetCount, TeamDirectory, TeamFilter};
use crate::presentation::errors::AppError;

/// Directory filter query. Absent parameters match everything.
#[derive(Debug, Deserialize)]
pub struct TeamsQuery {
    pub prefecture: Option<String>,
    pub league: Option<String>,
    pub branch: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsResponse {
    pub contents: Vec<Team>,
    pub total_count: usize,
}

#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub prefectures: Vec<FacetCount>,
    pub branches: Vec<FacetCount>,
}

/// Published review, stripped of the moderation-only columns.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: Uuid,
    pub team_id: Option<String>,
    pub rating: Option<i16>,
    pub nickname: Option<String>,
    pub comment: String,
    pub created_at: DateTime<FixedOffset>,
}

impl From<Feedback> for ReviewDto {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id,
            team_id: feedback.team_id,
            rating: feedback.rating,
            nickname: feedback.nickname,
            comment: feedback.comment,
            created_at: feedback.created_at,
        }
    }
}

fn parse_league(raw: Option<&str>) -> Result<Option<League>, AppError> {
    match raw {
        None => Ok(None),
        Some(slug) => slug
            .parse::<League>()
            .map(Some)
            .map_err(|_| AppError::Validation(format!("unknown league: {}", slug))),
    }
}

/// GET /api/teams
pub async fn list_teams(
    Extension(directory): Extension<Arc<TeamDirectory>>,
    Query(query): Query<TeamsQuery>,
) -> Result<Json<TeamsResponse>, AppError> {
    let filter = TeamFilter {
        prefecture: query.prefecture,
        league: parse_league(query.league.as_deref())?,
        branch: query.branch,
    };
    let contents = directory.filter(&filter);
    let total_count = contents.len();
    Ok(Json(TeamsResponse {
        contents,
        total_count,
    }))
}

/// GET /api/teams/facets
///
/// Prefecture counts span the whole dataset; branch options are scoped to
/// the current prefecture+league selection.
pub async fn team_facets(
    Extension(directory): Extension<Arc<TeamDirectory>>,
    Query(query): Query<TeamsQuery>,
) -> Result<Json<FacetsResponse>, AppError> {
    let league = parse_league(query.league.as_deref())?;
    Ok(Json(FacetsResponse {
        prefectures: directory.prefecture_counts(),
        branches: directory.branch_options(query.prefecture.as_deref(), league),
    }))
}

/// GET /api/teams/{id}/reviews
pub async fn list_team_reviews<F>(
    Extension(directory): Extension<Arc<TeamDirectory>>,
    Extension(repo): Extension<Arc<F>>,
    Path(team_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError>
where
    F: FeedbackRepository + 'static,
{
    if directory.find(&team_id).is_none() {
        return Err(AppError::NotFound);
    }

    let reviews: Vec<ReviewDto> = repo
        .list_reviews_for_team(&team_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let total_count = reviews.len();
    Ok(Json(serde_json::json!({
        "contents": reviews,
        "totalCount": total_count,
    })))
}
