//! Public client testimonials.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
};
use kodestudio_db::{ReviewRepository, entities::reviews};

/// Creates the reviews route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reviews", get(list_reviews))
}

/// One testimonial as the carousel renders it.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    /// Client name.
    pub cliente: String,
    /// Rating from 1 to 5.
    pub calificacion: i16,
    /// Testimonial text.
    pub descripcion: String,
}

impl From<reviews::Model> for ReviewResponse {
    fn from(model: reviews::Model) -> Self {
        Self {
            cliente: model.cliente,
            calificacion: model.calificacion,
            descripcion: model.descripcion,
        }
    }
}

/// GET `/reviews` - All reviews, newest first, as a bare array.
async fn list_reviews(State(state): State<AppState>) -> ApiResult<Json<Vec<ReviewResponse>>> {
    let repo = ReviewRepository::new((*state.db).clone());
    let reviews = repo
        .list()
        .await
        .map_err(|e| ApiError::database(&e, "Failed to list reviews"))?;

    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}
