// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// Creates the shared feedbacks table for reviews and reports.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedbacks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Feedbacks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Feedbacks::Kind).string().not_null())
                    .col(ColumnDef::new(Feedbacks::TeamId).string().null())
                    .col(ColumnDef::new(Feedbacks::TeamName).string().null())
                    .col(ColumnDef::new(Feedbacks::Rating).small_integer().null())
                    .col(ColumnDef::new(Feedbacks::Nickname).string().null())
                    .col(ColumnDef::new(Feedbacks::Comment).text().not_null())
                    .col(ColumnDef::new(Feedbacks::IssueType).string().null())
                    .col(ColumnDef::new(Feedbacks::ReporterType).string().null())
                    .col(ColumnDef::new(Feedbacks::IpAddress).string().not_null())
                    .col(
                        ColumnDef::new(Feedbacks::IsIpBlocked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Feedbacks::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Feedbacks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feedbacks::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Feedbacks {
    Table,
    Id,
    Kind,
    TeamId,
    TeamName,
    Rating,
    Nickname,
    Comment,
    IssueType,
    ReporterType,
    IpAddress,
    IsIpBlocked,
    Status,
    CreatedAt,
}
