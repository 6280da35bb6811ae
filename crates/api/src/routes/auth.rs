//! Account routes: register, login, logout and profile.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{DbErr, SqlErr};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extract::ApiJson,
    middleware::CurrentSession,
};
use kodestudio_core::auth::{
    AccountError, Credentials, generate_token, hash_password, validate_password,
    validate_username, verify_password,
};
use kodestudio_db::{SessionRepository, UpdateUserInput, UserRepository, entities::users};
use kodestudio_shared::AppError;

/// Creates the public auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Creates the auth routes that need a session.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/logout", post(logout))
        .route("/user", get(get_user).put(update_user))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Opaque bearer token.
    pub token: String,
    /// Logged-in username.
    pub username: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

/// Profile as returned by `/user`.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User ID.
    pub id: uuid::Uuid,
    /// Username.
    pub username: String,
    /// Registration time.
    pub created_at: String,
}

impl From<users::Model> for UserResponse {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Profile update. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    /// New username.
    pub username: Option<String>,
    /// New password.
    pub password: Option<String>,
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/register` - Create an account.
async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Credentials>,
) -> ApiResult<impl IntoResponse> {
    let username = payload.validate_new()?;
    let user_repo = UserRepository::new((*state.db).clone());

    if user_repo
        .username_exists(&username)
        .await
        .map_err(|e| ApiError::database(&e, "Failed to check username"))?
    {
        return Err(AccountError::UsernameTaken.into());
    }

    let password_hash = hash_password(&payload.password).map_err(|e| {
        error!(error = %e, "Failed to hash password");
        AppError::Internal(e.to_string())
    })?;

    let user = match user_repo.create(&username, &password_hash).await {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => return Err(AccountError::UsernameTaken.into()),
        Err(e) => return Err(ApiError::database(&e, "Failed to create user")),
    };

    info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User registered successfully",
            "username": user.username,
        })),
    ))
}

/// POST `/login` - Exchange credentials for a bearer token.
async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Credentials>,
) -> ApiResult<Json<LoginResponse>> {
    let user_repo = UserRepository::new((*state.db).clone());

    let user = user_repo
        .find_by_username(payload.username.trim())
        .await
        .map_err(|e| ApiError::database(&e, "Database error during login"))?;

    let Some(user) = user else {
        info!("Login attempt for non-existent user");
        return Err(AccountError::InvalidCredentials.into());
    };

    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(user_id = %user.id, "Failed login attempt - invalid password");
            return Err(AccountError::InvalidCredentials.into());
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return Err(AppError::Internal(e.to_string()).into());
        }
    }

    let token = generate_token();
    let expires_at = Utc::now() + Duration::hours(i64::from(state.session_ttl_hours));

    SessionRepository::new((*state.db).clone())
        .create(user.id.into(), &token, expires_at)
        .await
        .map_err(|e| ApiError::database(&e, "Failed to create session"))?;

    info!(user_id = %user.id, "User logged in successfully");

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        expires_at,
    }))
}

/// POST `/logout` - Revoke the current session.
async fn logout(
    State(state): State<AppState>,
    session: CurrentSession,
) -> ApiResult<Json<serde_json::Value>> {
    SessionRepository::new((*state.db).clone())
        .revoke(session.context().session_id)
        .await
        .map_err(|e| ApiError::database(&e, "Failed to revoke session"))?;

    info!(user_id = %session.user_id(), "User logged out");
    Ok(Json(json!({ "message": "Logged out" })))
}

/// GET `/user` - Current user's profile.
async fn get_user(
    State(state): State<AppState>,
    session: CurrentSession,
) -> ApiResult<Json<UserResponse>> {
    UserRepository::new((*state.db).clone())
        .find_by_id(session.user_id())
        .await
        .map_err(|e| ApiError::database(&e, "Failed to load user"))?
        .map(|user| Json(user.into()))
        .ok_or_else(|| ApiError::not_found("User"))
}

/// PUT `/user` - Change username and/or password.
async fn update_user(
    State(state): State<AppState>,
    session: CurrentSession,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    if payload.username.is_none() && payload.password.is_none() {
        return Err(AppError::Validation("Nothing to update".into()).into());
    }

    let user_repo = UserRepository::new((*state.db).clone());
    let mut input = UpdateUserInput::default();

    if let Some(raw) = payload.username {
        let username = validate_username(&raw)?;
        if username != session.context().username
            && user_repo
                .username_exists(&username)
                .await
                .map_err(|e| ApiError::database(&e, "Failed to check username"))?
        {
            return Err(AccountError::UsernameTaken.into());
        }
        input.username = Some(username);
    }

    if let Some(password) = payload.password {
        validate_password(&password)?;
        let hash = hash_password(&password).map_err(|e| {
            error!(error = %e, "Failed to hash password");
            AppError::Internal(e.to_string())
        })?;
        input.password_hash = Some(hash);
    }

    let updated = match user_repo.update(session.user_id(), input).await {
        Ok(updated) => updated,
        Err(e) if is_unique_violation(&e) => return Err(AccountError::UsernameTaken.into()),
        Err(e) => return Err(ApiError::database(&e, "Failed to update user")),
    };

    let user = updated.ok_or_else(|| ApiError::not_found("User"))?;
    info!(user_id = %user.id, "User profile updated");

    Ok(Json(user.into()))
}
