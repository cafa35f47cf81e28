// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP handler module.
///
/// One handler file per API surface: team directory, CMS columns, review
/// and report submission, contact, feature requests and the sitemap.
pub mod columns_handler;
pub mod contact_handler;
pub mod feature_request_handler;
pub mod feedback_handler;
pub mod review_handler;
pub mod sitemap_handler;
pub mod teams_handler;
