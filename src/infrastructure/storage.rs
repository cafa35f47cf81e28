// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;

use crate::config::settings::StorageSettings;
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};

/// S3-compatible object storage for feature-request images.
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Storage {
    pub fn new(
        region: String,
        bucket: String,
        access_key: String,
        secret_key: String,
        endpoint: Option<String>,
    ) -> Self {
        let credentials =
            aws_sdk_s3::config::Credentials::new(access_key, secret_key, None, None, "static");

        let mut config_builder = aws_sdk_s3::config::Builder::new()
            .region(aws_sdk_s3::config::Region::new(region))
            .credentials_provider(credentials);

        if let Some(ep) = endpoint {
            config_builder = config_builder.endpoint_url(ep).force_path_style(true);
        }

        Self {
            client: aws_sdk_s3::Client::from_conf(config_builder.build()),
            bucket,
        }
    }
}

#[async_trait]
impl StorageRepository for S3Storage {
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data.to_vec()))
            .send()
            .await
            .map_err(|e| StorageError::Other(e.to_string()))?;
        Ok(())
    }
}

/// Local filesystem storage. Keys map to paths under the base directory.
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self {
            base_path: PathBuf::from(base_path),
        }
    }
}

#[async_trait]
impl StorageRepository for LocalStorage {
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let full_path = self.base_path.join(key);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&full_path, data).await?;
        Ok(())
    }
}

/// Builds the storage backend selected by configuration.
pub fn create_storage_repository(
    settings: &StorageSettings,
) -> Result<Arc<dyn StorageRepository>, StorageError> {
    match settings.storage_type.as_str() {
        "local" => {
            let base_path = settings
                .local_path
                .as_ref()
                .cloned()
                .unwrap_or_else(|| "./storage".to_string());
            Ok(Arc::new(LocalStorage::new(base_path)))
        }
        "s3" => {
            let region = settings
                .s3_region
                .clone()
                .ok_or_else(|| StorageError::Other("storage.s3_region is required".to_string()))?;
            let bucket = settings
                .s3_bucket
                .clone()
                .ok_or_else(|| StorageError::Other("storage.s3_bucket is required".to_string()))?;
            let access_key = settings.s3_access_key.clone().ok_or_else(|| {
                StorageError::Other("storage.s3_access_key is required".to_string())
            })?;
            let secret_key = settings.s3_secret_key.clone().ok_or_else(|| {
                StorageError::Other("storage.s3_secret_key is required".to_string())
            })?;
            Ok(Arc::new(S3Storage::new(
                region,
                bucket,
                access_key,
                secret_key,
                settings.s3_endpoint.clone(),
            )))
        }
        other => Err(StorageError::Other(format!(
            "Unsupported storage type: {}",
            other
        ))),
    }
}
