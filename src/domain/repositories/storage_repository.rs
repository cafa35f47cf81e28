// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// Storage error type.
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Any other backend error
    #[error("Storage error: {0}")]
    Other(String),
}

/// Object storage interface for uploaded images.
///
/// Feature-request uploads are write-only from this service; moderation
/// tooling reads them straight from the backing store.
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// Saves data under the given key.
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), StorageError>;
}
