// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hardball youth league a team belongs to.
///
/// The wire format uses lowercase slugs (`boys`, `senior`, `young`) while the
/// team dataset stores the Japanese labels. Ordering follows the directory
/// display order: Boys, Senior, Young.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Boys,
    Senior,
    Young,
}

impl League {
    /// Japanese label as it appears in the team dataset.
    pub fn label(&self) -> &'static str {
        match self {
            League::Boys => "ボーイズ",
            League::Senior => "シニア",
            League::Young => "ヤング",
        }
    }

    /// Lowercase slug used in query parameters.
    pub fn slug(&self) -> &'static str {
        match self {
            League::Boys => "boys",
            League::Senior => "senior",
            League::Young => "young",
        }
    }

    /// Maps a dataset label back to the league.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "ボーイズ" => Some(League::Boys),
            "シニア" => Some(League::Senior),
            "ヤング" => Some(League::Young),
            _ => None,
        }
    }
}

impl FromStr for League {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boys" => Ok(League::Boys),
            "senior" => Ok(League::Senior),
            "young" => Ok(League::Young),
            _ => Err(()),
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A youth baseball team in the directory.
///
/// Prefecture and league are single-element arrays by dataset convention;
/// filtering always looks at the first element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub prefecture: Vec<String>,
    #[serde(default)]
    pub league: Vec<String>,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub catchcopy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Up to three feature tags shown on the team card.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Team {
    /// First prefecture entry, the one the directory filters on.
    pub fn primary_prefecture(&self) -> Option<&str> {
        self.prefecture.first().map(String::as_str)
    }

    /// League parsed from the first league label.
    pub fn primary_league(&self) -> Option<League> {
        self.league.first().and_then(|l| League::from_label(l))
    }
}
