// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::Extension;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use std::sync::Arc;
use tracing::warn;

use crate::domain::models::article::Article;
use crate::domain::services::directory::TeamDirectory;
use crate::infrastructure::cms::{ArticleQuery, CmsClient};

const STATIC_PATHS: &[&str] = &["/", "/teams", "/columns", "/contact", "/feature-request"];
const SITEMAP_ARTICLE_LIMIT: u64 = 100;

/// GET /api/sitemap.xml
///
/// Static pages, every team page and the published columns. CMS failures
/// shrink the sitemap rather than erroring; crawlers retry on their own
/// schedule.
pub async fn sitemap(
    Extension(directory): Extension<Arc<TeamDirectory>>,
    Extension(cms): Extension<Arc<CmsClient>>,
    Extension(site_root): Extension<Arc<String>>,
) -> impl IntoResponse {
    let articles = match cms
        .list_articles(&ArticleQuery {
            limit: Some(SITEMAP_ARTICLE_LIMIT),
            ..ArticleQuery::default()
        })
        .await
    {
        Ok(list) => list.contents,
        Err(e) => {
            warn!("sitemap built without columns: {}", e);
            Vec::new()
        }
    };

    let body = render(&site_root, &directory, &articles);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        body,
    )
}

fn render(site_root: &str, directory: &TeamDirectory, articles: &[Article]) -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for path in STATIC_PATHS {
        push_url(&mut xml, &format!("{}{}", site_root, path), None);
    }

    for team in directory.all() {
        push_url(&mut xml, &format!("{}/teams/{}", site_root, team.id), None);
    }

    for article in articles {
        let lastmod = article
            .revised_at
            .or(article.published_at)
            .map(|t| t.format("%Y-%m-%d").to_string());
        push_url(
            &mut xml,
            &format!("{}/columns/{}", site_root, article.id),
            lastmod.as_deref(),
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: Option<&str>) {
    xml.push_str("  <url><loc>");
    xml.push_str(&html_escape::encode_text(loc));
    xml.push_str("</loc>");
    if let Some(lastmod) = lastmod {
        xml.push_str("<lastmod>");
        xml.push_str(lastmod);
        xml.push_str("</lastmod>");
    }
    xml.push_str("</url>\n");
}
