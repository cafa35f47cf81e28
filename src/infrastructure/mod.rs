// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Infrastructure layer module.
///
/// Technical integrations behind the domain abstractions:
/// - cms: headless-CMS read client for column articles
/// - database: managed-Postgres connection and entities
/// - mail: transactional-email delivery client
/// - metrics: Prometheus exporter setup
/// - repositories: SeaORM repository implementations
/// - storage: local and S3 object storage for uploaded images
/// - team_data: the embedded team dataset
pub mod cms;
pub mod database;
pub mod mail;
pub mod metrics;
pub mod repositories;
pub mod storage;
pub mod team_data;
