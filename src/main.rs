// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use migration::{Migrator, MigratorTrait};
use yakyunavi::config::settings::Settings;
use yakyunavi::domain::services::directory::TeamDirectory;
use yakyunavi::infrastructure::cms::CmsClient;
use yakyunavi::infrastructure::database::connection;
use yakyunavi::infrastructure::mail::Mailer;
use yakyunavi::infrastructure::repositories::disabled::DisabledRepository;
use yakyunavi::infrastructure::repositories::feature_request_repo_impl::FeatureRequestRepositoryImpl;
use yakyunavi::infrastructure::repositories::feedback_repo_impl::FeedbackRepositoryImpl;
use yakyunavi::infrastructure::storage::create_storage_repository;
use yakyunavi::infrastructure::team_data;
use yakyunavi::presentation::middleware::rate_limit_middleware::SubmissionRateLimiter;
use yakyunavi::presentation::routes::{routes, RouterDeps};
use yakyunavi::utils::telemetry;

/// Application entry point.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting yakyunavi...");

    // Initialize Prometheus Metrics
    yakyunavi::infrastructure::metrics::init_metrics();

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Shared components
    let directory = Arc::new(TeamDirectory::new(team_data::all()));
    info!(teams = directory.all().len(), "Team directory loaded");

    let cms = Arc::new(CmsClient::new(&settings.cms));
    if !cms.is_configured() {
        warn!("CMS unconfigured, column listings will be empty");
    }

    let mailer = Arc::new(Mailer::new(&settings.mail));
    if !mailer.is_configured() {
        warn!("Mail unconfigured, form notifications will be skipped");
    }

    let storage = create_storage_repository(&settings.storage)
        .map_err(|e| anyhow::anyhow!("storage init failed: {}", e))?;

    let rate_limiter = Arc::new(SubmissionRateLimiter::new(
        settings.rate_limiting.enabled,
        settings.rate_limiting.default_rpm,
    ));
    // Keeps the per-IP store bounded under spoofed X-Forwarded-For churn.
    rate_limiter.spawn_cleanup(std::time::Duration::from_secs(60));

    let site_root = Arc::new(settings.site.root.clone());

    // 4. Datastore. Without a database URL the submission routes run
    // against the disabled repository and reject writes.
    let app: Router = if settings.database.url.is_some() {
        let db = Arc::new(connection::create_pool(&settings.database).await?);
        info!("Database connection established");

        info!("Running database migrations...");
        Migrator::up(db.as_ref(), None).await?;
        info!("Database migrations applied");

        routes(RouterDeps {
            feedback_repo: Arc::new(FeedbackRepositoryImpl::new(db.clone())),
            feature_request_repo: Arc::new(FeatureRequestRepositoryImpl::new(db)),
            directory,
            cms,
            mailer,
            storage,
            rate_limiter,
            site_root,
        })
    } else {
        warn!("Database unconfigured, submissions are disabled");
        let disabled = Arc::new(DisabledRepository);
        routes(RouterDeps {
            feedback_repo: disabled.clone(),
            feature_request_repo: disabled,
            directory,
            cms,
            mailer,
            storage,
            rate_limiter,
            site_root,
        })
    };

    // 5. Start HTTP server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
