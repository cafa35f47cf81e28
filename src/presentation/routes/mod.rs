// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{middleware, Extension, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::domain::repositories::feature_request_repository::FeatureRequestRepository;
use crate::domain::repositories::feedback_repository::FeedbackRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::domain::services::directory::TeamDirectory;
use crate::infrastructure::cms::CmsClient;
use crate::infrastructure::mail::Mailer;
use crate::presentation::handlers::{
    columns_handler, contact_handler, feature_request_handler, feedback_handler, review_handler,
    sitemap_handler, teams_handler,
};
use crate::presentation::middleware::rate_limit_middleware::{
    submission_rate_limit, SubmissionRateLimiter,
};

/// Two 5 MiB images plus text fields and multipart framing.
const FEATURE_REQUEST_BODY_LIMIT: usize = 12 * 1024 * 1024;

/// Everything the router needs, wired up in `main` (live repositories) or in
/// tests (in-memory ones).
pub struct RouterDeps<F, Q> {
    pub feedback_repo: Arc<F>,
    pub feature_request_repo: Arc<Q>,
    pub directory: Arc<TeamDirectory>,
    pub cms: Arc<CmsClient>,
    pub mailer: Arc<Mailer>,
    pub storage: Arc<dyn StorageRepository>,
    pub rate_limiter: Arc<SubmissionRateLimiter>,
    /// Canonical site root for sitemap URLs.
    pub site_root: Arc<String>,
}

/// Builds the application router.
pub fn routes<F, Q>(deps: RouterDeps<F, Q>) -> Router
where
    F: FeedbackRepository + 'static,
    Q: FeatureRequestRepository + 'static,
{
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let directory_routes = Router::new()
        .route("/api/teams", get(teams_handler::list_teams))
        .route("/api/teams/facets", get(teams_handler::team_facets))
        .route(
            "/api/teams/{id}/reviews",
            get(teams_handler::list_team_reviews::<F>),
        )
        .route("/api/columns", get(columns_handler::list_columns))
        .route("/api/columns/{id}", get(columns_handler::get_column))
        .route("/api/sitemap.xml", get(sitemap_handler::sitemap));

    let submission_routes = Router::new()
        .route("/api/review", post(review_handler::create_review::<F>))
        .route("/api/feedback", post(feedback_handler::create_report::<F>))
        .route("/api/contact", post(contact_handler::create_contact))
        .route(
            "/api/team-feature-request",
            post(feature_request_handler::create_feature_request::<Q>)
                .layer(DefaultBodyLimit::max(FEATURE_REQUEST_BODY_LIMIT)),
        )
        .route_layer(middleware::from_fn_with_state(
            deps.rate_limiter,
            submission_rate_limit,
        ));

    Router::new()
        .merge(public_routes)
        .merge(directory_routes)
        .merge(submission_routes)
        .layer(Extension(deps.feedback_repo))
        .layer(Extension(deps.feature_request_repo))
        .layer(Extension(deps.directory))
        .layer(Extension(deps.cms))
        .layer(Extension(deps.mailer))
        .layer(Extension(deps.storage))
        .layer(Extension(deps.site_root))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint.
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
