// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::feature_request::{FeatureRequest, NewFeatureRequest};
use crate::domain::models::feedback::{Feedback, NewReport, NewReview};
use crate::domain::repositories::feature_request_repository::FeatureRequestRepository;
use crate::domain::repositories::feedback_repository::{FeedbackRepository, RepositoryError};
use async_trait::async_trait;

/// Stand-in repository used when `database.url` is not configured.
///
/// Reads answer as if the tables were empty; writes fail with `Unavailable`
/// so the route boundary reports a 500 instead of silently dropping the
/// submission.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRepository;

#[async_trait]
impl FeedbackRepository for DisabledRepository {
    async fn insert_review(&self, _review: &NewReview) -> Result<Feedback, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }

    async fn insert_report(&self, _report: &NewReport) -> Result<Feedback, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }

    async fn find_blocked_ip(
        &self,
        _ip_address: &str,
    ) -> Result<Option<Feedback>, RepositoryError> {
        Ok(None)
    }

    async fn find_review_by_team_and_ip(
        &self,
        _team_id: &str,
        _ip_address: &str,
    ) -> Result<Option<Feedback>, RepositoryError> {
        Ok(None)
    }

    async fn list_reviews_for_team(
        &self,
        _team_id: &str,
    ) -> Result<Vec<Feedback>, RepositoryError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl FeatureRequestRepository for DisabledRepository {
    async fn insert(
        &self,
        _request: &NewFeatureRequest,
    ) -> Result<FeatureRequest, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }
}
