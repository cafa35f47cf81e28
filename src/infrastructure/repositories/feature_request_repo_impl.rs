// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::feature_request::{FeatureRequest, NewFeatureRequest};
use crate::domain::repositories::feature_request_repository::FeatureRequestRepository;
use crate::domain::repositories::feedback_repository::RepositoryError;
use crate::infrastructure::database::entities::feature_request as request_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// SeaORM implementation of the feature-request repository.
#[derive(Clone)]
pub struct FeatureRequestRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl FeatureRequestRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<request_entity::Model> for FeatureRequest {
    fn from(model: request_entity::Model) -> Self {
        let image_keys = model
            .image_keys
            .as_array()
            .map(|keys| {
                keys.iter()
                    .filter_map(|k| k.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            id: model.id,
            team_name: model.team_name,
            prefecture: model.prefecture,
            league: model.league,
            director_name: model.director_name,
            contact_email: model.contact_email,
            description: model.description,
            image_keys,
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl FeatureRequestRepository for FeatureRequestRepositoryImpl {
    async fn insert(
        &self,
        request: &NewFeatureRequest,
    ) -> Result<FeatureRequest, RepositoryError> {
        let model = request_entity::ActiveModel {
            id: Set(Uuid::new_v4()),
            team_name: Set(request.team_name.clone()),
            prefecture: Set(request.prefecture.clone()),
            league: Set(request.league.clone()),
            director_name: Set(request.director_name.clone()),
            contact_email: Set(request.contact_email.clone()),
            description: Set(request.description.clone()),
            image_keys: Set(json!(request.image_keys)),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let saved = model.insert(self.db.as_ref()).await?;
        Ok(saved.into())
    }
}
