// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use governor::clock::DefaultClock;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter};
use metrics::counter;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::presentation::errors::AppError;
use crate::presentation::extractors::client_ip::client_ip_from_headers;

type KeyedLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

/// In-process per-IP limiter for the submission routes.
///
/// The abuse gate handles persistent blocking; this only dampens bursts from
/// a single address. Disabled via `rate_limiting.enabled = false`.
///
/// Keys come from `X-Forwarded-For`, which callers control, so the keyed
/// store must not grow for the life of the process: the binary spawns
/// [`SubmissionRateLimiter::spawn_cleanup`] to drop replenished keys on an
/// interval.
pub struct SubmissionRateLimiter {
    limiter: Option<KeyedLimiter>,
}

impl SubmissionRateLimiter {
    pub fn new(enabled: bool, requests_per_minute: u32) -> Self {
        let limiter = if enabled {
            NonZeroU32::new(requests_per_minute)
                .map(|rpm| RateLimiter::keyed(Quota::per_minute(rpm)))
        } else {
            None
        };
        Self { limiter }
    }

    /// Checks the caller against its per-minute budget.
    pub fn check(&self, ip: &str) -> Result<(), AppError> {
        let Some(limiter) = &self.limiter else {
            return Ok(());
        };
        if limiter.check_key(&ip.to_string()).is_err() {
            counter!("submissions_rate_limited_total").increment(1);
            return Err(AppError::RateLimited);
        }
        Ok(())
    }

    /// Number of client addresses currently tracked by the store.
    pub fn tracked_keys(&self) -> usize {
        self.limiter.as_ref().map(|l| l.len()).unwrap_or(0)
    }

    /// Drops per-key state that has fully replenished and releases the
    /// store's spare capacity.
    pub fn prune(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.retain_recent();
            limiter.shrink_to_fit();
            debug!(tracked = limiter.len(), "rate limiter store pruned");
        }
    }

    /// Spawns the periodic prune task. A no-op when limiting is disabled.
    pub fn spawn_cleanup(self: &Arc<Self>, every: Duration) {
        if self.limiter.is_none() {
            return;
        }
        let limiter = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                limiter.prune();
            }
        });
    }
}

/// Axum middleware wrapping [`SubmissionRateLimiter`].
pub async fn submission_rate_limit(
    State(limiter): State<Arc<SubmissionRateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(ip) = client_ip_from_headers(request.headers(), request.extensions()) else {
        // Let the handler's ClientIp extractor produce the rejection.
        return next.run(request).await;
    };

    match limiter.check(&ip) {
        Ok(()) => next.run(request).await,
        Err(e) => e.into_response(),
    }
}
