// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::team::{League, Team};
use serde::Serialize;

/// A facet value with the number of teams carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCount {
    pub name: String,
    pub count: usize,
}

/// Filter selection for the team directory. All fields optional; `None`
/// matches everything.
#[derive(Debug, Clone, Default)]
pub struct TeamFilter {
    pub prefecture: Option<String>,
    pub league: Option<League>,
    pub branch: Option<String>,
}

/// In-memory team directory.
///
/// The dataset is a few hundred records embedded in the binary, so every
/// derivation is a linear scan recomputed per request.
pub struct TeamDirectory {
    teams: Vec<Team>,
}

impl TeamDirectory {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn all(&self) -> &[Team] {
        &self.teams
    }

    pub fn find(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Teams matching the filter, sorted by league display order
    /// (Boys, Senior, Young). Teams with an unknown league sort last.
    /// The sort is stable, so dataset order is preserved within a league.
    pub fn filter(&self, filter: &TeamFilter) -> Vec<Team> {
        let mut matched: Vec<Team> = self
            .teams
            .iter()
            .filter(|t| Self::matches(t, filter))
            .cloned()
            .collect();
        matched.sort_by_key(|t| t.primary_league().map(|l| l as u8).unwrap_or(u8::MAX));
        matched
    }

    /// Per-prefecture team counts over the whole dataset, in dataset
    /// first-seen order.
    pub fn prefecture_counts(&self) -> Vec<FacetCount> {
        let mut counts: Vec<FacetCount> = Vec::new();
        for team in &self.teams {
            let Some(prefecture) = team.primary_prefecture() else {
                continue;
            };
            match counts.iter_mut().find(|c| c.name == prefecture) {
                Some(entry) => entry.count += 1,
                None => counts.push(FacetCount {
                    name: prefecture.to_string(),
                    count: 1,
                }),
            }
        }
        counts
    }

    /// Distinct non-empty branches among teams matching the current
    /// prefecture+league selection, each with its count.
    pub fn branch_options(
        &self,
        prefecture: Option<&str>,
        league: Option<League>,
    ) -> Vec<FacetCount> {
        let filter = TeamFilter {
            prefecture: prefecture.map(str::to_string),
            league,
            branch: None,
        };
        let mut options: Vec<FacetCount> = Vec::new();
        for team in self.teams.iter().filter(|t| Self::matches(t, &filter)) {
            if team.branch.is_empty() {
                continue;
            }
            match options.iter_mut().find(|o| o.name == team.branch) {
                Some(entry) => entry.count += 1,
                None => options.push(FacetCount {
                    name: team.branch.clone(),
                    count: 1,
                }),
            }
        }
        options
    }

    fn matches(team: &Team, filter: &TeamFilter) -> bool {
        if let Some(prefecture) = &filter.prefecture {
            if team.primary_prefecture() != Some(prefecture.as_str()) {
                return false;
            }
        }
        if let Some(league) = filter.league {
            if team.primary_league() != Some(league) {
                return false;
            }
        }
        if let Some(branch) = &filter.branch {
            if &team.branch != branch {
                return false;
            }
        }
        true
    }
}
