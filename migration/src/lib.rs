// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_feedbacks;
mod m20250901_000002_create_feature_requests;
mod m20250901_000003_create_feedback_indexes;

/// Database migrator.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_feedbacks::Migration),
            Box::new(m20250901_000002_create_feature_requests::Migration),
            Box::new(m20250901_000003_create_feedback_indexes::Migration),
        ]
    }
}
