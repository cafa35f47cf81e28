// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A team's request for an editorial feature article.
///
/// Entered through the multipart form, persisted for the editorial desk,
/// never read back by any route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRequest {
    pub id: Uuid,
    pub team_name: String,
    pub prefecture: String,
    pub league: String,
    pub director_name: String,
    pub contact_email: String,
    pub description: String,
    /// Storage keys of the two uploaded images.
    pub image_keys: Vec<String>,
    pub created_at: DateTime<FixedOffset>,
}

/// Insert payload for a new feature request.
#[derive(Debug, Clone)]
pub struct NewFeatureRequest {
    pub team_name: String,
    pub prefecture: String,
    pub league: String,
    pub director_name: String,
    pub contact_email: String,
    pub description: String,
    pub image_keys: Vec<String>,
}
