// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application settings.
///
/// Loaded from defaults, then `config/default.toml`, then
/// `config/{APP_ENVIRONMENT}.toml`, then `YAKYUNAVI__`-prefixed environment
/// variables. The database, CMS and mail integrations are each optional;
/// leaving them unset switches that integration to stub behavior.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// HTTP server settings
    pub server: ServerSettings,
    /// Public site settings (sitemap generation)
    pub site: SiteSettings,
    /// Managed Postgres settings
    pub database: DatabaseSettings,
    /// Headless CMS settings
    #[serde(default)]
    pub cms: CmsSettings,
    /// Transactional mail settings
    pub mail: MailSettings,
    /// Image storage settings
    pub storage: StorageSettings,
    /// Per-IP submission rate limiting
    pub rate_limiting: RateLimitingSettings,
}

/// HTTP server settings.
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Public site settings used when generating absolute URLs.
#[derive(Debug, Deserialize)]
pub struct SiteSettings {
    /// Canonical site root, no trailing slash (e.g. `https://yakyunavi.jp`)
    pub root: String,
}

/// Database settings. `url` unset runs the service without a datastore.
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    /// Connect timeout in seconds
    pub connect_timeout: Option<u64>,
    /// Idle timeout in seconds
    pub idle_timeout: Option<u64>,
}

/// Headless CMS settings. Both fields must be set for live mode.
#[derive(Debug, Default, Deserialize)]
pub struct CmsSettings {
    /// Service subdomain on the CMS provider
    pub service_domain: Option<String>,
    pub api_key: Option<String>,
}

/// Transactional mail settings. `api_key` unset makes sends a no-op.
#[derive(Debug, Deserialize)]
pub struct MailSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub from: String,
    /// Operator inboxes that receive form submissions
    pub to: Vec<String>,
}

/// Image storage settings.
#[derive(Debug, Deserialize)]
pub struct StorageSettings {
    /// Storage backend: `local` or `s3`
    pub storage_type: String,
    pub local_path: Option<String>,
    pub s3_region: Option<String>,
    pub s3_bucket: Option<String>,
    pub s3_access_key: Option<String>,
    pub s3_secret_key: Option<String>,
    /// Optional endpoint for S3-compatible providers
    pub s3_endpoint: Option<String>,
}

/// Per-IP rate limiting for the submission routes.
#[derive(Debug, Deserialize)]
pub struct RateLimitingSettings {
    pub enabled: bool,
    /// Requests per minute per client IP
    pub default_rpm: u32,
}

impl Settings {
    /// Loads the settings, layering files over defaults and environment
    /// variables over files.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - loaded configuration
    /// * `Err(ConfigError)` - load or deserialization failure
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("site.root", "https://yakyunavi.jp")?
            // Default DB pool settings
            .set_default("database.max_connections", 20)?
            .set_default("database.min_connections", 2)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default mail settings
            .set_default("mail.base_url", "https://api.resend.com")?
            .set_default("mail.from", "yakyunavi <noreply@yakyunavi.jp>")?
            .set_default("mail.to", vec!["info@yakyunavi.jp".to_string()])?
            // Default storage settings
            .set_default("storage.storage_type", "local")?
            .set_default("storage.local_path", "./storage")?
            // Default rate limiting settings
            .set_default("rate_limiting.enabled", true)?
            .set_default("rate_limiting.default_rpm", 10)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("YAKYUNAVI").separator("__"));

        builder.build()?.try_deserialize()
    }
}
