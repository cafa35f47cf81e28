// Copyright (c) 2025 Yakyunavi Project
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

use crate::presentation::errors::AppError;

/// JSON body extractor whose rejection uses the shared error envelope.
///
/// Axum's plain `Json` rejection answers with a text body; a malformed
/// submission must fail with `{ "error", "code" }` like every other
/// validation failure.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}
