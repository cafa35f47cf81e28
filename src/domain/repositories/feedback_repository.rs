// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::feedback::{Feedback, NewReport, NewReview};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// Repository error type shared by the moderation-table repositories.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// Insert hit a uniqueness constraint (concurrent duplicate review)
    #[error("Conflicting record already exists")]
    Conflict,
    /// Record not found
    #[error("Record not found")]
    NotFound,
    /// The backing store is not configured for this deployment
    #[error("Datastore is not configured")]
    Unavailable,
}

/// Access to the shared feedbacks table.
///
/// The submission gate builds its blocked-IP and duplicate-review checks on
/// the two point lookups; both are single-row queries.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Inserts a review row. Returns `Conflict` when the store-level
    /// uniqueness of (team, ip) for reviews rejects it.
    async fn insert_review(&self, review: &NewReview) -> Result<Feedback, RepositoryError>;

    /// Inserts a report row.
    async fn insert_report(&self, report: &NewReport) -> Result<Feedback, RepositoryError>;

    /// Finds one row for this IP that carries the block flag, if any.
    async fn find_blocked_ip(&self, ip_address: &str) -> Result<Option<Feedback>, RepositoryError>;

    /// Finds one review row for this team/IP pair, if any.
    async fn find_review_by_team_and_ip(
        &self,
        team_id: &str,
        ip_address: &str,
    ) -> Result<Option<Feedback>, RepositoryError>;

    /// Published reviews for a team, newest first.
    async fn list_reviews_for_team(&self, team_id: &str)
        -> Result<Vec<Feedback>, RepositoryError>;
}
