// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain layer.
///
/// Core business concepts of the directory service:
/// - models: teams, CMS articles, feedback rows, feature requests
/// - repositories: persistence abstractions for the moderation tables
/// - services: directory filtering and the submission abuse gate
///
/// The domain layer depends on no concrete external integration.
pub mod models;
pub mod repositories;
pub mod services;
