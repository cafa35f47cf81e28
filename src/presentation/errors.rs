// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::repositories::feedback_repository::RepositoryError;
use crate::domain::services::submission_gate::GateError;
use crate::infrastructure::cms::CmsError;

/// Application error type for the HTTP surface.
///
/// Every route maps its failures here; the response body is always
/// `{ "error": <Japanese message>, "code": <stable code> }` and the status
/// follows the taxonomy: validation 400, blocked 403, not found 404,
/// duplicate 409, rate limited 429, everything else 500.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("submission from blocked IP")]
    IpBlocked,
    #[error("not found")]
    NotFound,
    #[error("duplicate review")]
    DuplicateReview,
    #[error("rate limited")]
    RateLimited,
    #[error("upstream dependency failed: {0}")]
    Upstream(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::IpBlocked => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::DuplicateReview => StatusCode::CONFLICT,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::Upstream(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::IpBlocked => "IP_BLOCKED",
            AppError::NotFound => "NOT_FOUND",
            AppError::DuplicateReview => "DUPLICATE_REVIEW",
            AppError::RateLimited => "RATE_LIMITED",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// User-facing message. Detail stays in the logs.
    fn message(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "入力内容に誤りがあります。ご確認のうえ再度お試しください。",
            AppError::IpBlocked => "この接続からの投稿は制限されています。",
            AppError::NotFound => "お探しのコンテンツが見つかりませんでした。",
            AppError::DuplicateReview => "このチームへの口コミは既に投稿済みです。",
            AppError::RateLimited => "リクエストが多すぎます。しばらくしてからお試しください。",
            AppError::Upstream(_) | AppError::Internal(_) => {
                "サーバーエラーが発生しました。時間をおいて再度お試しください。"
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("request failed: {}", self);
        } else {
            warn!("request rejected: {}", self);
        }

        let body = Json(json!({
            "error": self.message(),
            "code": self.code(),
        }));
        (status, body).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => AppError::NotFound,
            RepositoryError::Conflict => AppError::DuplicateReview,
            RepositoryError::Unavailable => {
                AppError::Internal("datastore is not configured".to_string())
            }
            RepositoryError::Database(e) => AppError::Upstream(e.to_string()),
        }
    }
}

impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::Blocked => AppError::IpBlocked,
            GateError::Duplicate => AppError::DuplicateReview,
            GateError::Repository(e) => e.into(),
        }
    }
}

impl From<CmsError> for AppError {
    fn from(err: CmsError) -> Self {
        match err {
            CmsError::NotFound => AppError::NotFound,
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
