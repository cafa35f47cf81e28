// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Discriminator for the shared feedbacks table.
///
/// Reviews are published immediately; reports only ever feed the moderation
/// queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    #[default]
    Review,
    Report,
}

impl FeedbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Review => "review",
            FeedbackKind::Report => "report",
        }
    }
}

impl FromStr for FeedbackKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "review" => Ok(FeedbackKind::Review),
            "report" => Ok(FeedbackKind::Report),
            _ => Err(()),
        }
    }
}

/// Moderation workflow state. Set on insert, advanced by operators outside
/// this service; never read back here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl FeedbackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::Pending => "pending",
            FeedbackStatus::InProgress => "in_progress",
            FeedbackStatus::Done => "done",
        }
    }
}

impl FromStr for FeedbackStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FeedbackStatus::Pending),
            "in_progress" => Ok(FeedbackStatus::InProgress),
            "done" => Ok(FeedbackStatus::Done),
            _ => Err(()),
        }
    }
}

/// What a report is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// The team has disbanded or stopped accepting members.
    Closed,
    /// Listed information is wrong or outdated.
    Incorrect,
    /// A published review or listing is inappropriate.
    Inappropriate,
    Other,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Closed => "closed",
            IssueType::Incorrect => "incorrect",
            IssueType::Inappropriate => "inappropriate",
            IssueType::Other => "other",
        }
    }
}

/// Who is filing a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReporterType {
    Parent,
    Player,
    TeamStaff,
    Other,
}

impl ReporterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReporterType::Parent => "parent",
            ReporterType::Player => "player",
            ReporterType::TeamStaff => "team_staff",
            ReporterType::Other => "other",
        }
    }
}

/// One row of the shared feedbacks table: either a team review or a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: Uuid,
    pub kind: FeedbackKind,
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    /// 1..=5, reviews only.
    pub rating: Option<i16>,
    pub nickname: Option<String>,
    pub comment: String,
    /// Report issue type slug, reports only.
    pub issue_type: Option<String>,
    /// Report reporter type slug, reports only.
    pub reporter_type: Option<String>,
    pub ip_address: String,
    pub is_ip_blocked: bool,
    pub status: FeedbackStatus,
    pub created_at: DateTime<FixedOffset>,
}

/// Insert payload for a new review.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub team_id: String,
    pub team_name: String,
    pub rating: i16,
    pub nickname: Option<String>,
    pub comment: String,
    pub ip_address: String,
}

/// Insert payload for a new report.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub issue_type: IssueType,
    pub reporter_type: ReporterType,
    pub comment: String,
    pub ip_address: String,
}
