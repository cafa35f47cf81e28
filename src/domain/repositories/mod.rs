// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Repository interface module.
///
/// Abstract persistence contracts for the moderation tables and the image
/// store; concrete implementations live in the infrastructure layer:
/// - feedback_repository: the shared review/report table
/// - feature_request_repository: editorial feature submissions
/// - storage_repository: uploaded image blobs
pub mod feature_request_repository;
pub mod feedback_repository;
pub mod storage_repository;
