// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// Creates the feature_requests table for editorial feature applications.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeatureRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeatureRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FeatureRequests::TeamName).string().not_null())
                    .col(
                        ColumnDef::new(FeatureRequests::Prefecture)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeatureRequests::League).string().not_null())
                    .col(
                        ColumnDef::new(FeatureRequests::DirectorName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeatureRequests::ContactEmail)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeatureRequests::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeatureRequests::ImageKeys)
                            .json()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeatureRequests::CreatedAt)
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
            .drop_table(Table::drop().table(FeatureRequests::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FeatureRequests {
    Table,
    Id,
    TeamName,
    Prefecture,
    League,
    DirectorName,
    ContactEmail,
    Description,
    ImageKeys,
    CreatedAt,
}
