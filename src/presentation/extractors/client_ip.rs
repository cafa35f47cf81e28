// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{Extensions, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::net::SocketAddr;

const FORWARDED_FOR: &str = "x-forwarded-for";
const REAL_IP: &str = "x-real-ip";

/// Client IP as seen through the hosting platform's proxy.
///
/// `X-Forwarded-For` first hop wins, then `X-Real-IP`, then the socket peer
/// address. The value is used as the abuse-gate key, so a request without
/// any of the three is rejected rather than defaulted.
#[derive(Debug, Clone)]
pub struct ClientIp(pub String);

/// Best-effort extraction shared with the rate-limit middleware.
pub fn client_ip_from_parts(parts: &Parts) -> Option<String> {
    client_ip_from_headers(&parts.headers, &parts.extensions)
}

/// Same lookup over raw headers and extensions, usable before a request is
/// split into parts.
pub fn client_ip_from_headers(headers: &HeaderMap, extensions: &Extensions) -> Option<String> {
    if let Some(value) = headers.get(FORWARDED_FOR) {
        if let Ok(raw) = value.to_str() {
            if let Some(first) = raw.split(',').next() {
                let trimmed = first.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
    }

    if let Some(value) = headers.get(REAL_IP) {
        if let Ok(raw) = value.to_str() {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }

    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match client_ip_from_parts(parts) {
            Some(ip) => Ok(ClientIp(ip)),
            None => {
                let status = axum::http::StatusCode::BAD_REQUEST;
                let body = Json(json!({
                    "error": "リクエスト元を特定できませんでした。",
                    "code": "VALIDATION_ERROR",
                }));
                Err((status, body).into_response())
            }
        }
    }
}
