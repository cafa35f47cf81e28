// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::CmsSettings;
use crate::domain::models::article::{Article, ArticleList, CategoryList, TagList};
use metrics::counter;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// CMS client error type.
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("CMS request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("CMS returned status {0}")]
    Status(StatusCode),
    #[error("Content not found")]
    NotFound,
}

/// Query parameters for article listings.
#[derive(Debug, Clone, Default)]
pub struct ArticleQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub category: Option<String>,
    pub tag: Option<String>,
}

/// Read client for the headless CMS that owns the column articles.
///
/// When the CMS is unconfigured every list call returns an empty envelope
/// instead of erroring, so the site renders without the column section.
pub struct CmsClient {
    endpoint: Option<Endpoint>,
}

struct Endpoint {
    base_url: String,
    api_key: String,
    client: Client,
}

impl CmsClient {
    /// Builds the client from configuration. Missing service domain or API
    /// key leaves the client in unconfigured (empty-result) mode.
    pub fn new(settings: &CmsSettings) -> Self {
        let endpoint = match (&settings.service_domain, &settings.api_key) {
            (Some(domain), Some(key)) => Some(Endpoint::new(
                format!("https://{}.microcms.io/api/v1", domain),
                key.clone(),
            )),
            _ => None,
        };
        Self { endpoint }
    }

    /// Builds a client against an explicit base URL. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: Some(Endpoint::new(base_url.into(), api_key.into())),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Lists published column articles, newest first.
    pub async fn list_articles(&self, query: &ArticleQuery) -> Result<ArticleList, CmsError> {
        let Some(endpoint) = &self.endpoint else {
            debug!("CMS unconfigured, returning empty article list");
            return Ok(ArticleList::empty());
        };

        let mut params: Vec<(&str, String)> = vec![("orders", "-publishedAt".to_string())];
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = query.offset {
            params.push(("offset", offset.to_string()));
        }
        let mut filters: Vec<String> = Vec::new();
        if let Some(category) = &query.category {
            filters.push(format!("category[equals]{}", category));
        }
        if let Some(tag) = &query.tag {
            filters.push(format!("tags[contains]{}", tag));
        }
        if !filters.is_empty() {
            params.push(("filters", filters.join("[and]")));
        }

        endpoint.get_json("articles", &params).await
    }

    /// Fetches a single article by its CMS content id.
    pub async fn get_article(&self, id: &str) -> Result<Article, CmsError> {
        let Some(endpoint) = &self.endpoint else {
            return Err(CmsError::NotFound);
        };
        endpoint.get_json(&format!("articles/{}", id), &[]).await
    }

    /// Lists article categories.
    pub async fn list_categories(&self) -> Result<CategoryList, CmsError> {
        let Some(endpoint) = &self.endpoint else {
            return Ok(CategoryList::empty());
        };
        endpoint.get_json("categories", &[]).await
    }

    /// Lists article tags.
    pub async fn list_tags(&self) -> Result<TagList, CmsError> {
        let Some(endpoint) = &self.endpoint else {
            return Ok(TagList::empty());
        };
        endpoint.get_json("tags", &[]).await
    }
}

impl Endpoint {
    fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, CmsError> {
        counter!("cms_requests_total").increment(1);
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(params)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(CmsError::NotFound),
            status if !status.is_success() => {
                counter!("cms_request_failures_total").increment(1);
                Err(CmsError::Status(status))
            }
            _ => Ok(response.json().await?),
        }
    }
}
