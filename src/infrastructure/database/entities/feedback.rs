// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Database entity for the shared feedbacks table.
///
/// Reviews and reports land in the same table, discriminated by `kind`.
/// `is_ip_blocked` is flipped by operators; this service only reads it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feedbacks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub kind: String,
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub rating: Option<i16>,
    pub nickname: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub issue_type: Option<String>,
    pub reporter_type: Option<String>,
    pub ip_address: String,
    pub is_ip_blocked: bool,
    pub status: String,
    pub created_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
