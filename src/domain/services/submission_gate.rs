// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::feedback::{Feedback, NewReport, NewReview};
use crate::domain::repositories::feedback_repository::{FeedbackRepository, RepositoryError};
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Why a submission was turned away.
#[derive(Error, Debug)]
pub enum GateError {
    /// The caller's IP carries the block flag somewhere in its history.
    #[error("Submissions from this IP are blocked")]
    Blocked,
    /// A review from this IP already exists for the team.
    #[error("A review from this IP already exists for this team")]
    Duplicate,
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for GateError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // A concurrent duplicate that slipped past the pre-insert lookup
            // surfaces as a store-level conflict.
            RepositoryError::Conflict => GateError::Duplicate,
            other => GateError::Repository(other),
        }
    }
}

/// Abuse gate in front of the feedbacks table.
///
/// Every submission first checks the persistent IP-block flag; reviews
/// additionally check for an existing review from the same IP for the same
/// team. The checks are sequential point lookups; the partial unique index
/// created by the migration backstops the review check under concurrency.
pub struct SubmissionGate<F> {
    repo: Arc<F>,
}

impl<F: FeedbackRepository> SubmissionGate<F> {
    pub fn new(repo: Arc<F>) -> Self {
        Self { repo }
    }

    /// Runs the gate for a review and inserts it when it passes.
    pub async fn submit_review(&self, review: NewReview) -> Result<Feedback, GateError> {
        self.ensure_not_blocked(&review.ip_address).await?;

        if self
            .repo
            .find_review_by_team_and_ip(&review.team_id, &review.ip_address)
            .await?
            .is_some()
        {
            counter!("submissions_rejected_total", "reason" => "duplicate").increment(1);
            info!(team_id = %review.team_id, "duplicate review rejected");
            return Err(GateError::Duplicate);
        }

        let saved = self.repo.insert_review(&review).await?;
        counter!("submissions_total", "kind" => "review").increment(1);
        Ok(saved)
    }

    /// Runs the gate for a report and inserts it when it passes.
    pub async fn submit_report(&self, report: NewReport) -> Result<Feedback, GateError> {
        self.ensure_not_blocked(&report.ip_address).await?;

        let saved = self.repo.insert_report(&report).await?;
        counter!("submissions_total", "kind" => "report").increment(1);
        Ok(saved)
    }

    async fn ensure_not_blocked(&self, ip_address: &str) -> Result<(), GateError> {
        if self.repo.find_blocked_ip(ip_address).await?.is_some() {
            counter!("submissions_rejected_total", "reason" => "blocked").increment(1);
            info!("submission from blocked IP rejected");
            return Err(GateError::Blocked);
        }
        Ok(())
    }
}
