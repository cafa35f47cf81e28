// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// Indexes backing the abuse gate lookups.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Point lookup for the IP-block check
        manager
            .create_index(
                Index::create()
                    .name("idx_feedbacks_ip_blocked")
                    .table(Feedbacks::Table)
                    .col(Feedbacks::IpAddress)
                    .col(Feedbacks::IsIpBlocked)
                    .to_owned(),
            )
            .await?;

        // Review listings per team, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_feedbacks_team_created_at")
                    .table(Feedbacks::Table)
                    .col(Feedbacks::TeamId)
                    .col(Feedbacks::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // One review per IP per team, enforced at the store so concurrent
        // submissions cannot slip past the pre-insert lookup. Reports are
        // excluded by the predicate.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS uniq_feedbacks_review_team_ip \
                 ON feedbacks (team_id, ip_address) WHERE kind = 'review'",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS uniq_feedbacks_review_team_ip")
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_feedbacks_team_created_at")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_feedbacks_ip_blocked").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Feedbacks {
    Table,
    IpAddress,
    IsIpBlocked,
    TeamId,
    CreatedAt,
}
