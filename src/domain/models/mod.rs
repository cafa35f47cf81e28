// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain model module.
///
/// Data shapes the rest of the service is built around:
/// - team: directory entries and league handling
/// - article: read-only CMS content shapes
/// - feedback: the shared review/report moderation row
/// - feature_request: editorial feature submissions
pub mod article;
pub mod feature_request;
pub mod feedback;
pub mod team;
