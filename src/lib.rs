// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Configuration module.
///
/// Layered settings from files and environment variables.
pub mod config;

/// Domain module.
///
/// Core entities, services and repository interfaces.
pub mod domain;

/// Infrastructure module.
///
/// External integrations: Postgres, headless CMS, transactional mail and
/// image storage.
pub mod infrastructure;

/// Presentation module.
///
/// HTTP routing, handlers, extractors and middleware.
pub mod presentation;

/// Utility module.
pub mod utils;
