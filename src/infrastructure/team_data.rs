// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::team::Team;
use once_cell::sync::Lazy;

/// The team dataset, embedded at build time.
///
/// The source of truth migrated from the CMS into the repo; edits go through
/// `data/teams.json` and a redeploy.
static TEAMS: Lazy<Vec<Team>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../data/teams.json"))
        .expect("data/teams.json must parse as a team list")
});

/// All teams in dataset order.
pub fn all() -> Vec<Team> {
    TEAMS.clone()
}
