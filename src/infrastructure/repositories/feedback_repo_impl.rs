// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::feedback::{
    Feedback, FeedbackKind, FeedbackStatus, NewReport, NewReview,
};
use crate::domain::repositories::feedback_repository::{FeedbackRepository, RepositoryError};
use crate::infrastructure::database::entities::feedback as feedback_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set, SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

/// SeaORM implementation of the feedbacks repository.
#[derive(Clone)]
pub struct FeedbackRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl FeedbackRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<feedback_entity::Model> for Feedback {
    fn from(model: feedback_entity::Model) -> Self {
        Self {
            id: model.id,
            kind: model.kind.parse().unwrap_or_default(),
            team_id: model.team_id,
            team_name: model.team_name,
            rating: model.rating,
            nickname: model.nickname,
            comment: model.comment,
            issue_type: model.issue_type,
            reporter_type: model.reporter_type,
            ip_address: model.ip_address,
            is_ip_blocked: model.is_ip_blocked,
            status: model.status.parse().unwrap_or_default(),
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl FeedbackRepository for FeedbackRepositoryImpl {
    async fn insert_review(&self, review: &NewReview) -> Result<Feedback, RepositoryError> {
        let model = feedback_entity::ActiveModel {
            id: Set(Uuid::new_v4()),
            kind: Set(FeedbackKind::Review.as_str().to_string()),
            team_id: Set(Some(review.team_id.clone())),
            team_name: Set(Some(review.team_name.clone())),
            rating: Set(Some(review.rating)),
            nickname: Set(review.nickname.clone()),
            comment: Set(review.comment.clone()),
            issue_type: Set(None),
            reporter_type: Set(None),
            ip_address: Set(review.ip_address.clone()),
            is_ip_blocked: Set(false),
            status: Set(FeedbackStatus::Pending.as_str().to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        match model.insert(self.db.as_ref()).await {
            Ok(saved) => Ok(saved.into()),
            // The partial unique index on (team_id, ip_address) for reviews
            // rejects a concurrent duplicate here.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(RepositoryError::Conflict)
            }
            Err(e) => Err(RepositoryError::Database(e)),
        }
    }

    async fn insert_report(&self, report: &NewReport) -> Result<Feedback, RepositoryError> {
        let model = feedback_entity::ActiveModel {
            id: Set(Uuid::new_v4()),
            kind: Set(FeedbackKind::Report.as_str().to_string()),
            team_id: Set(report.team_id.clone()),
            team_name: Set(report.team_name.clone()),
            rating: Set(None),
            nickname: Set(None),
            comment: Set(report.comment.clone()),
            issue_type: Set(Some(report.issue_type.as_str().to_string())),
            reporter_type: Set(Some(report.reporter_type.as_str().to_string())),
            ip_address: Set(report.ip_address.clone()),
            is_ip_blocked: Set(false),
            status: Set(FeedbackStatus::Pending.as_str().to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let saved = model.insert(self.db.as_ref()).await?;
        Ok(saved.into())
    }

    async fn find_blocked_ip(&self, ip_address: &str) -> Result<Option<Feedback>, RepositoryError> {
        let found = feedback_entity::Entity::find()
            .filter(feedback_entity::Column::IpAddress.eq(ip_address))
            .filter(feedback_entity::Column::IsIpBlocked.eq(true))
            .one(self.db.as_ref())
            .await?;
        Ok(found.map(Into::into))
    }

    async fn find_review_by_team_and_ip(
        &self,
        team_id: &str,
        ip_address: &str,
    ) -> Result<Option<Feedback>, RepositoryError> {
        let found = feedback_entity::Entity::find()
            .filter(feedback_entity::Column::Kind.eq(FeedbackKind::Review.as_str()))
            .filter(feedback_entity::Column::TeamId.eq(team_id))
            .filter(feedback_entity::Column::IpAddress.eq(ip_address))
            .one(self.db.as_ref())
            .await?;
        Ok(found.map(Into::into))
    }

    async fn list_reviews_for_team(
        &self,
        team_id: &str,
    ) -> Result<Vec<Feedback>, RepositoryError> {
        let rows = feedback_entity::Entity::find()
            .filter(feedback_entity::Column::Kind.eq(FeedbackKind::Review.as_str()))
            .filter(feedback_entity::Column::TeamId.eq(team_id))
            .order_by_desc(feedback_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
