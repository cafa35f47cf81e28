// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Middleware module.
///
/// Per-IP rate limiting for the submission routes.
pub mod rate_limit_middleware;
