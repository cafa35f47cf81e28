// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Database entity module.
///
/// SeaORM mappings for the two moderation tables this service writes.
pub mod feature_request;
pub mod feedback;
