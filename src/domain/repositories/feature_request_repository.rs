// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::feature_request::{FeatureRequest, NewFeatureRequest};
use crate::domain::repositories::feedback_repository::RepositoryError;
use async_trait::async_trait;

/// Access to the feature-request moderation queue. Write-only from this
/// service; the editorial desk reads it elsewhere.
#[async_trait]
pub trait FeatureRequestRepository: Send + Sync {
    /// Inserts a feature-request row.
    async fn insert(&self, request: &NewFeatureRequest)
        -> Result<FeatureRequest, RepositoryError>;
}
