// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Path, Query};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

use crate::domain::models::article::{Article, ArticleList};
use crate::infrastructure::cms::{ArticleQuery, CmsClient, CmsError};
use crate::presentation::errors::AppError;

const DEFAULT_PAGE_SIZE: u64 = 12;
const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Deserialize)]
pub struct ColumnsQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub category: Option<String>,
    pub tag: Option<String>,
}

/// GET /api/columns
///
/// Column listings degrade to an empty envelope when the CMS errors; the
/// rest of a directory page must not fail because the column rail did.
pub async fn list_columns(
    Extension(cms): Extension<Arc<CmsClient>>,
    Query(query): Query<ColumnsQuery>,
) -> Json<ArticleList> {
    let cms_query = ArticleQuery {
        limit: Some(query.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE)),
        offset: query.offset,
        category: query.category.filter(|c| !c.is_empty()),
        tag: query.tag.filter(|t| !t.is_empty()),
    };

    match cms.list_articles(&cms_query).await {
        Ok(list) => Json(list),
        Err(e) => {
            warn!("column listing unavailable: {}", e);
            Json(ArticleList::empty())
        }
    }
}

/// GET /api/columns/{id}
///
/// Unlike the listing, a single article is the whole page; CMS failures
/// surface as errors here.
pub async fn get_column(
    Extension(cms): Extension<Arc<CmsClient>>,
    Path(id): Path<String>,
) -> Result<Json<Article>, AppError> {
    match cms.get_article(&id).await {
        Ok(article) => Ok(Json(article)),
        Err(CmsError::NotFound) => Err(AppError::NotFound),
        Err(e) => Err(AppError::Upstream(e.to_string())),
    }
}
