// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Multipart};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::ValidateEmail;

use crate::domain::models::feature_request::NewFeatureRequest;
use crate::domain::repositories::feature_request_repository::FeatureRequestRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::infrastructure::mail::Mailer;
use crate::presentation::errors::AppError;

/// Exactly this many team photos per request.
const REQUIRED_IMAGES: usize = 2;
/// 5 MiB per image.
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug)]
struct UploadedImage {
    file_name: String,
    data: Vec<u8>,
}

#[derive(Debug, Default)]
struct FormFields {
    team_name: Option<String>,
    prefecture: Option<String>,
    league: Option<String>,
    director_name: Option<String>,
    email: Option<String>,
    description: Option<String>,
    images: Vec<UploadedImage>,
}

/// POST /api/team-feature-request
///
/// Multipart form: the text fields plus exactly two `images` parts, each an
/// `image/*` of at most 5 MiB. Images are stored first so the persisted row
/// always points at existing objects; the notification mail is best-effort.
pub async fn create_feature_request<Q>(
    Extension(repo): Extension<Arc<Q>>,
    Extension(storage): Extension<Arc<dyn StorageRepository>>,
    Extension(mailer): Extension<Arc<Mailer>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError>
where
    Q: FeatureRequestRepository + 'static,
{
    let fields = collect_fields(&mut multipart).await?;
    let request = validate_fields(&fields)?;

    let request_id = Uuid::new_v4();
    let mut image_keys = Vec::with_capacity(REQUIRED_IMAGES);
    for (index, image) in fields.images.iter().enumerate() {
        let key = format!(
            "feature-requests/{}/{}-{}",
            request_id,
            index + 1,
            sanitize_file_name(&image.file_name)
        );
        storage
            .save(&key, &image.data)
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;
        image_keys.push(key);
    }

    let saved = repo
        .insert(&NewFeatureRequest {
            image_keys,
            ..request
        })
        .await?;

    let subject = format!("【特集掲載リクエスト】{}", saved.team_name);
    let text = format!(
        "チーム名: {}\n都道府県: {}\nリーグ: {}\n監督名: {}\n連絡先: {}\n\n{}\n\n画像: {}",
        saved.team_name,
        saved.prefecture,
        saved.league,
        saved.director_name,
        saved.contact_email,
        saved.description,
        saved.image_keys.join(", ")
    );
    if let Err(e) = mailer.send(&subject, &text).await {
        // The row and images are already saved; the desk can still pick the
        // request up from the database.
        warn!(request_id = %saved.id, "feature request notification failed: {}", e);
    }

    info!(request_id = %saved.id, "feature request accepted");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "id": saved.id })),
    ))
}

async fn collect_fields(multipart: &mut Multipart) -> Result<FormFields, AppError> {
    let mut fields = FormFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "images" {
            let content_type = field.content_type().unwrap_or_default().to_string();
            if !content_type.starts_with("image/") {
                return Err(AppError::Validation(format!(
                    "images must be image/*, got {}",
                    content_type
                )));
            }
            let file_name = field.file_name().unwrap_or("photo").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read image: {}", e)))?;
            if data.len() > MAX_IMAGE_BYTES {
                return Err(AppError::Validation(
                    "each image must be 5MB or smaller".to_string(),
                ));
            }
            if data.is_empty() {
                return Err(AppError::Validation("empty image upload".to_string()));
            }
            fields.images.push(UploadedImage {
                file_name,
                data: data.to_vec(),
            });
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read field {}: {}", name, e)))?;
        match name.as_str() {
            "teamName" => fields.team_name = Some(value),
            "prefecture" => fields.prefecture = Some(value),
            "league" => fields.league = Some(value),
            "directorName" => fields.director_name = Some(value),
            "email" => fields.email = Some(value),
            "description" => fields.description = Some(value),
            other => {
                return Err(AppError::Validation(format!(
                    "unexpected form field: {}",
                    other
                )))
            }
        }
    }

    Ok(fields)
}

fn validate_fields(fields: &FormFields) -> Result<NewFeatureRequest, AppError> {
    let required = |value: &Option<String>, label: &str| -> Result<String, AppError> {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v.to_string()),
            _ => Err(AppError::Validation(format!("{} is required", label))),
        }
    };

    let team_name = required(&fields.team_name, "teamName")?;
    let prefecture = required(&fields.prefecture, "prefecture")?;
    let league = required(&fields.league, "league")?;
    let director_name = required(&fields.director_name, "directorName")?;
    let contact_email = required(&fields.email, "email")?;
    let description = required(&fields.description, "description")?;

    if !contact_email.validate_email() {
        return Err(AppError::Validation("email is not valid".to_string()));
    }
    if description.chars().count() > 4000 {
        return Err(AppError::Validation("description is too long".to_string()));
    }
    if fields.images.len() != REQUIRED_IMAGES {
        return Err(AppError::Validation(format!(
            "exactly {} images are required, got {}",
            REQUIRED_IMAGES,
            fields.images.len()
        )));
    }

    Ok(NewFeatureRequest {
        team_name,
        prefecture,
        league,
        director_name,
        contact_email,
        description,
        image_keys: Vec::new(),
    })
}

/// Keeps storage keys flat and ASCII-safe regardless of the uploaded name.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim_matches('_').is_empty() {
        "photo".to_string()
    } else {
        cleaned
    }
}
