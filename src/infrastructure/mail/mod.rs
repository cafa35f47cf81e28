// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MailSettings;
use metrics::counter;
use reqwest::{header, Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Mail delivery error type.
#[derive(Error, Debug)]
pub enum MailError {
    #[error("Mail request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Mail provider returned status {0}")]
    Status(StatusCode),
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    text: &'a str,
}

/// Client for the transactional-email HTTP API.
///
/// Form submissions are forwarded to the site operators through this client.
/// Without an API key it degrades to a logged no-op, so local and preview
/// deployments never send mail. A failed send is the caller's problem to
/// log; there is no retry here.
pub struct Mailer {
    endpoint: Option<Endpoint>,
}

struct Endpoint {
    base_url: String,
    api_key: String,
    from: String,
    to: Vec<String>,
    client: Client,
}

impl Mailer {
    pub fn new(settings: &MailSettings) -> Self {
        let endpoint = settings.api_key.as_ref().map(|key| Endpoint {
            base_url: settings.base_url.clone(),
            api_key: key.clone(),
            from: settings.from.clone(),
            to: settings.to.clone(),
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
        });
        Self { endpoint }
    }

    /// Client against an explicit base URL. Used by tests.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        from: impl Into<String>,
        to: Vec<String>,
    ) -> Self {
        Self {
            endpoint: Some(Endpoint {
                base_url: base_url.into(),
                api_key: api_key.into(),
                from: from.into(),
                to,
                client: Client::builder()
                    .timeout(REQUEST_TIMEOUT)
                    .build()
                    .unwrap_or_default(),
            }),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Sends a plain-text notification to the configured operators.
    pub async fn send(&self, subject: &str, body: &str) -> Result<(), MailError> {
        let Some(endpoint) = &self.endpoint else {
            info!(subject, "mail unconfigured, skipping send");
            return Ok(());
        };

        let request = SendRequest {
            from: &endpoint.from,
            to: &endpoint.to,
            subject,
            text: body,
        };

        let response = endpoint
            .client
            .post(format!("{}/emails", endpoint.base_url))
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", endpoint.api_key),
            )
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            counter!("mail_send_failures_total").increment(1);
            return Err(MailError::Status(response.status()));
        }

        counter!("mail_sent_total").increment(1);
        Ok(())
    }
}
