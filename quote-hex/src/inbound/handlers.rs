//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use quote_types::{AppError, QuoteLedger, QuoteProvider};

use crate::QuoteService;

/// Application state shared across handlers.
pub struct AppState<P: QuoteProvider, L: QuoteLedger> {
    pub service: QuoteService<P, L>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        // Plain text: the raw error message is the whole body.
        (status, message).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Fetch the latest quote for the tracked pair.
#[tracing::instrument(skip(state))]
pub async fn cotacao<P: QuoteProvider, L: QuoteLedger>(
    State(state): State<Arc<AppState<P, L>>>,
) -> Result<impl IntoResponse, ApiError> {
    let quote = state.service.latest_quote().await?;
    tracing::debug!(bid = %quote, "Serving quote");
    Ok(Json(quote))
}
