// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::util::ServiceExt;
use uuid::Uuid;

use yakyunavi::domain::models::feature_request::{FeatureRequest, NewFeatureRequest};
use yakyunavi::domain::models::feedback::{
    Feedback, FeedbackKind, FeedbackStatus, IssueType, NewReport, NewReview, ReporterType,
};
use yakyunavi::domain::models::team::Team;
use yakyunavi::domain::repositories::feature_request_repository::FeatureRequestRepository;
use yakyunavi::domain::repositories::feedback_repository::{FeedbackRepository, RepositoryError};
use yakyunavi::domain::services::directory::TeamDirectory;
use yakyunavi::infrastructure::cms::CmsClient;
use yakyunavi::infrastructure::mail::Mailer;
use yakyunavi::infrastructure::repositories::disabled::DisabledRepository;
use yakyunavi::infrastructure::storage::LocalStorage;
use yakyunavi::presentation::middleware::rate_limit_middleware::SubmissionRateLimiter;
use yakyunavi::presentation::routes::{routes, RouterDeps};

pub const TEST_IP: &str = "203.0.113.7";

/// In-memory feedbacks table.
#[derive(Default)]
pub struct InMemoryFeedbackRepo {
    pub rows: Mutex<Vec<Feedback>>,
}

impl InMemoryFeedbackRepo {
    pub async fn block_ip(&self, ip: &str) {
        let mut rows = self.rows.lock().await;
        rows.push(Feedback {
            id: Uuid::new_v4(),
            kind: FeedbackKind::Report,
            team_id: None,
            team_name: None,
            rating: None,
            nickname: None,
            comment: "blocked by operators".to_string(),
            issue_type: Some(IssueType::Other.as_str().to_string()),
            reporter_type: Some(ReporterType::Other.as_str().to_string()),
            ip_address: ip.to_string(),
            is_ip_blocked: true,
            status: FeedbackStatus::Done,
            created_at: Utc::now().fixed_offset(),
        });
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepo {
    async fn insert_review(&self, review: &NewReview) -> Result<Feedback, RepositoryError> {
        let mut rows = self.rows.lock().await;
        let row = Feedback {
            id: Uuid::new_v4(),
            kind: FeedbackKind::Review,
            team_id: Some(review.team_id.clone()),
            team_name: Some(review.team_name.clone()),
            rating: Some(review.rating),
            nickname: review.nickname.clone(),
            comment: review.comment.clone(),
            issue_type: None,
            reporter_type: None,
            ip_address: review.ip_address.clone(),
            is_ip_blocked: false,
            status: FeedbackStatus::Pending,
            created_at: Utc::now().fixed_offset(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn insert_report(&self, report: &NewReport) -> Result<Feedback, RepositoryError> {
        let mut rows = self.rows.lock().await;
        let row = Feedback {
            id: Uuid::new_v4(),
            kind: FeedbackKind::Report,
            team_id: report.team_id.clone(),
            team_name: report.team_name.clone(),
            rating: None,
            nickname: None,
            comment: report.comment.clone(),
            issue_type: Some(report.issue_type.as_str().to_string()),
            reporter_type: Some(report.reporter_type.as_str().to_string()),
            ip_address: report.ip_address.clone(),
            is_ip_blocked: false,
            status: FeedbackStatus::Pending,
            created_at: Utc::now().fixed_offset(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_blocked_ip(&self, ip_address: &str) -> Result<Option<Feedback>, RepositoryError> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .find(|r| r.ip_address == ip_address && r.is_ip_blocked)
            .cloned())
    }

    async fn find_review_by_team_and_ip(
        &self,
        team_id: &str,
        ip_address: &str,
    ) -> Result<Option<Feedback>, RepositoryError> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .find(|r| {
                r.kind == FeedbackKind::Review
                    && r.team_id.as_deref() == Some(team_id)
                    && r.ip_address == ip_address
            })
            .cloned())
    }

    async fn list_reviews_for_team(&self, team_id: &str) -> Result<Vec<Feedback>, RepositoryError> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|r| r.kind == FeedbackKind::Review && r.team_id.as_deref() == Some(team_id))
            .cloned()
            .collect())
    }
}

/// In-memory feature_requests table.
#[derive(Default)]
pub struct InMemoryFeatureRequestRepo {
    pub rows: Mutex<Vec<FeatureRequest>>,
}

#[async_trait]
impl FeatureRequestRepository for InMemoryFeatureRequestRepo {
    async fn insert(
        &self,
        request: &NewFeatureRequest,
    ) -> Result<FeatureRequest, RepositoryError> {
        let mut rows = self.rows.lock().await;
        let row = FeatureRequest {
            id: Uuid::new_v4(),
            team_name: request.team_name.clone(),
            prefecture: request.prefecture.clone(),
            league: request.league.clone(),
            director_name: request.director_name.clone(),
            contact_email: request.contact_email.clone(),
            description: request.description.clone(),
            image_keys: request.image_keys.clone(),
            created_at: Utc::now().fixed_offset(),
        };
        rows.push(row.clone());
        Ok(row)
    }
}

fn team(id: &str, name: &str, prefecture: &str, league: &str, branch: &str) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        prefecture: vec![prefecture.to_string()],
        league: vec![league.to_string()],
        branch: branch.to_string(),
        catchcopy: "全国を目指す".to_string(),
        url: None,
        tags: Vec::new(),
    }
}

/// Deterministic directory fixture shared by the API tests.
pub fn fixture_directory() -> TeamDirectory {
    TeamDirectory::new(vec![
        team("osaka-rs", "大阪リバースターズ", "大阪府", "ボーイズ", "大阪北支部"),
        team("osaka-yg", "浪速ヤンガース", "大阪府", "ヤング", "大阪北支部"),
        team("osaka-sn", "堺シニアクラブ", "大阪府", "シニア", "大阪南支部"),
        team("hyogo-bs", "神戸ベイブルース", "兵庫県", "ボーイズ", "兵庫支部"),
    ])
}

pub struct TestApp {
    pub app: Router,
    pub feedback_repo: Arc<InMemoryFeedbackRepo>,
    pub feature_request_repo: Arc<InMemoryFeatureRequestRepo>,
    pub storage_dir: tempfile::TempDir,
}

pub struct TestAppOptions {
    pub cms: CmsClient,
    pub mailer: Mailer,
    pub rate_limiter: SubmissionRateLimiter,
}

impl Default for TestAppOptions {
    fn default() -> Self {
        Self {
            cms: CmsClient::new(&yakyunavi::config::settings::CmsSettings::default()),
            mailer: Mailer::new(&unconfigured_mail_settings()),
            rate_limiter: SubmissionRateLimiter::new(false, 0),
        }
    }
}

fn unconfigured_mail_settings() -> yakyunavi::config::settings::MailSettings {
    yakyunavi::config::settings::MailSettings {
        base_url: "https://api.resend.com".to_string(),
        api_key: None,
        from: "noreply@example.jp".to_string(),
        to: vec!["ops@example.jp".to_string()],
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(TestAppOptions::default())
}

pub fn spawn_app_with(options: TestAppOptions) -> TestApp {
    let feedback_repo = Arc::new(InMemoryFeedbackRepo::default());
    let feature_request_repo = Arc::new(InMemoryFeatureRequestRepo::default());
    let storage_dir = tempfile::tempdir().expect("tempdir");
    let storage = Arc::new(LocalStorage::new(
        storage_dir.path().to_string_lossy().to_string(),
    ));

    let app = routes(RouterDeps {
        feedback_repo: feedback_repo.clone(),
        feature_request_repo: feature_request_repo.clone(),
        directory: Arc::new(fixture_directory()),
        cms: Arc::new(options.cms),
        mailer: Arc::new(options.mailer),
        storage,
        rate_limiter: Arc::new(options.rate_limiter),
        site_root: Arc::new("https://yakyunavi.jp".to_string()),
    });

    TestApp {
        app,
        feedback_repo,
        feature_request_repo,
        storage_dir,
    }
}

pub struct DisabledApp {
    pub app: Router,
    #[allow(dead_code)]
    pub storage_dir: tempfile::TempDir,
}

/// App wired like the binary runs without a `database.url`: both
/// repositories are the disabled implementation.
pub fn spawn_app_disabled() -> DisabledApp {
    let storage_dir = tempfile::tempdir().expect("tempdir");
    let storage = Arc::new(LocalStorage::new(
        storage_dir.path().to_string_lossy().to_string(),
    ));
    let disabled = Arc::new(DisabledRepository);

    let app = routes(RouterDeps {
        feedback_repo: disabled.clone(),
        feature_request_repo: disabled,
        directory: Arc::new(fixture_directory()),
        cms: Arc::new(CmsClient::new(
            &yakyunavi::config::settings::CmsSettings::default(),
        )),
        mailer: Arc::new(Mailer::new(&unconfigured_mail_settings())),
        storage,
        rate_limiter: Arc::new(SubmissionRateLimiter::new(false, 0)),
        site_root: Arc::new("https://yakyunavi.jp".to_string()),
    });

    DisabledApp { app, storage_dir }
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    router_get(&app.app, uri).await
}

pub async fn router_get(router: &Router, uri: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(
    app: &TestApp,
    uri: &str,
    ip: &str,
    body: serde_json::Value,
) -> Response<Body> {
    router_post_json(&app.app, uri, ip, body).await
}

pub async fn router_post_json(
    router: &Router,
    uri: &str,
    ip: &str,
    body: serde_json::Value,
) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .header("x-forwarded-for", ip)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn assert_error_code(response: Response<Body>, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let body = json_body(response).await;
    assert_eq!(body["code"], code);
    assert!(body["error"].is_string());
}
