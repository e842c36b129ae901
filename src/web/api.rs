// src/web/api.rs
// REST handlers and the wire-shape adapter

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::chat::{ChatRequest, DEFAULT_CONSTRUCT, DEFAULT_FORMAT};
use crate::error::PricelError;
use crate::web::state::AppState;

/// Wire payload for `POST /chat`.
///
/// Two generations of the contract coexist: the short field names and
/// the long aliases are both accepted, normalized to the canonical
/// [`ChatRequest`] before dispatch.
#[derive(Debug, Deserialize)]
pub struct ChatPayload {
    #[serde(alias = "message_text")]
    text: Option<String>,
    #[serde(alias = "personality_construct")]
    construct: Option<String>,
    #[serde(alias = "answer_format")]
    response_format: Option<String>,
}

impl ChatPayload {
    /// Apply selector defaults and reject a missing message before
    /// resolution begins.
    pub fn into_request(self) -> Result<ChatRequest, PricelError> {
        let text = self.text.ok_or_else(|| {
            PricelError::InvalidInput("missing required field: text".to_string())
        })?;
        Ok(ChatRequest {
            text,
            construct: self
                .construct
                .unwrap_or_else(|| DEFAULT_CONSTRUCT.to_string()),
            response_format: self
                .response_format
                .unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
        })
    }
}

/// Uniform failure shape: every server-side error collapses to
/// HTTP 500 with `{"detail": <message>}`, no error codes.
pub struct ApiError(String);

impl From<PricelError> for ApiError {
    fn from(err: PricelError) -> Self {
        Self(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(detail = %self.0, "chat request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": self.0 })),
        )
            .into_response()
    }
}

/// POST /chat
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    // Take the raw body and decode by hand: a syntactically invalid
    // payload must surface through the same uniform error shape as
    // every other failure, not an extractor rejection
    let payload: ChatPayload = serde_json::from_slice(&body).map_err(PricelError::from)?;
    let request = payload.into_request()?;

    let response = state.chat.respond(&request).await?;

    Ok(Json(json!({ "response": response })))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
