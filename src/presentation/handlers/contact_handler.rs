// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::infrastructure::mail::Mailer;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::app_json::AppJson;

/// POST /api/contact body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 200))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 4000))]
    pub message: String,
}

/// POST /api/contact
///
/// Forwards the inquiry to the operators by mail. Contact messages are not
/// persisted, so a failed send is a hard error here.
pub async fn create_contact(
    Extension(mailer): Extension<Arc<Mailer>>,
    AppJson(request): AppJson<ContactRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    request.validate()?;

    let subject = match request.subject.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => format!("【お問い合わせ】{}", s),
        _ => "【お問い合わせ】件名なし".to_string(),
    };
    let text = format!(
        "お名前: {}\nメールアドレス: {}\n\n{}",
        request.name, request.email, request.message
    );

    mailer
        .send(&subject, &text)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    info!("contact inquiry forwarded");
    Ok(Json(json!({ "success": true })))
}
