//! Authentication middleware for protected routes.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;
use tracing::error;

use crate::AppState;
use kodestudio_core::auth::SessionContext;
use kodestudio_db::SessionRepository;

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn unauthorized(error: &str, message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": error, "message": message })),
    )
        .into_response()
}

/// Authentication middleware that resolves bearer tokens to sessions.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Looks up the live session for the token's hash and checks its expiry
/// 3. Stores the `SessionContext` in request extensions for handlers to access
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(token) = auth_header.and_then(extract_bearer_token) else {
        return unauthorized(
            "missing_token",
            "Authorization header with Bearer token is required",
        );
    };

    let sessions = SessionRepository::new((*state.db).clone());
    match sessions.find_active_by_token(token).await {
        Ok(Some(ctx)) if !ctx.is_expired_at(Utc::now()) => {
            request.extensions_mut().insert(ctx);
            next.run(request).await
        }
        Ok(_) => unauthorized("invalid_token", "Invalid or expired token"),
        Err(e) => {
            error!(error = %e, "Failed to resolve session token");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An internal error occurred"
                })),
            )
                .into_response()
        }
    }
}

/// Extractor for the authenticated session.
///
/// ```ignore
/// async fn handler(session: CurrentSession) -> impl IntoResponse {
///     let user_id = session.user_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionContext);

impl CurrentSession {
    /// Returns the user ID of the session owner.
    #[must_use]
    pub fn user_id(&self) -> kodestudio_shared::types::UserId {
        self.0.user_id
    }

    /// Returns the inner context.
    #[must_use]
    pub fn context(&self) -> &SessionContext {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .map(CurrentSession)
            .ok_or_else(|| unauthorized("unauthorized", "Authentication required"))
    }
}
