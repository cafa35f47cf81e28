// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Request extractor module.
///
/// Pulls the effective client IP out of proxy headers for the abuse gate
/// and the rate limiter, and wraps JSON body extraction so rejections keep
/// the API's error envelope.
pub mod app_json;
pub mod client_ip;
