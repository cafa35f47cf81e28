// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Repository implementation module.
///
/// SeaORM-backed implementations of the domain repository interfaces, plus
/// the disabled stand-in used when no database is configured.
pub mod disabled;
pub mod feature_request_repo_impl;
pub mod feedback_repo_impl;
