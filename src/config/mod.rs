// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Configuration module.
///
/// Application settings: server, site, database, CMS, mail, storage and
/// rate limiting.
pub mod settings;
