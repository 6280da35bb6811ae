//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth_middleware};

pub mod auth;
pub mod chat;
pub mod clients;
pub mod estimate;
pub mod health;
pub mod requirements;
pub mod reviews;

/// Routes under `/api`. Record and profile routes sit behind the session
/// middleware; the estimator, chat, reviews and sign-in routes are public.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(auth::protected_routes())
        .merge(clients::routes())
        .merge(requirements::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(health::api_routes())
        .merge(estimate::routes())
        .merge(chat::routes())
        .merge(reviews::routes())
        .merge(auth::routes())
        .merge(protected_routes)
}
