//! Project requirement routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

use super::clients::SearchQuery;
use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extract::ApiJson,
};
use kodestudio_core::requirement::{RequirementDraft, RequirementStats};
use kodestudio_db::{RequirementFilter, RequirementRepository};
use kodestudio_shared::types::{PageRequest, RequirementId};

/// Creates the requirement routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/requirements",
            get(list_requirements).post(create_requirement),
        )
        .route("/requirements/search", get(search_requirements))
        .route("/requirements/stats", get(requirement_stats))
        .route(
            "/requirements/{id}",
            get(get_requirement)
                .put(update_requirement)
                .delete(delete_requirement),
        )
}

/// Query parameters for listing requirements.
#[derive(Debug, Default, Deserialize)]
pub struct ListRequirementsQuery {
    /// Status filter.
    pub status: Option<String>,
    /// Priority filter.
    pub priority: Option<String>,
    /// Department filter.
    pub department: Option<String>,
    /// Project type filter.
    #[serde(rename = "projectType")]
    pub project_type: Option<String>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
}

impl ListRequirementsQuery {
    fn filter(&self) -> RequirementFilter {
        let non_blank = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty());
        RequirementFilter {
            status: non_blank(&self.status),
            priority: non_blank(&self.priority),
            department: non_blank(&self.department),
            project_type: non_blank(&self.project_type),
        }
    }
}

fn repo(state: &AppState) -> RequirementRepository {
    RequirementRepository::new((*state.db).clone())
}

/// GET `/requirements` - List requirements, newest first.
async fn list_requirements(
    State(state): State<AppState>,
    Query(query): Query<ListRequirementsQuery>,
) -> ApiResult<Json<Value>> {
    let page = PageRequest::from_query(query.page, query.per_page);

    let result = repo(&state)
        .list(query.filter(), page)
        .await
        .map_err(|e| ApiError::database(&e, "Failed to list requirements"))?;

    Ok(Json(json!({
        "requirements": result.items,
        "total": result.total,
        "page": result.page,
        "per_page": result.per_page,
        "total_pages": result.total_pages,
    })))
}

/// POST `/requirements` - Submit a requirement.
async fn create_requirement(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RequirementDraft>,
) -> ApiResult<impl IntoResponse> {
    let data = payload.validate()?;

    let requirement = repo(&state)
        .insert(data)
        .await
        .map_err(|e| ApiError::database(&e, "Failed to create requirement"))?;

    info!(requirement_id = %requirement.id, "Requirement created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Requirement created successfully",
            "id": requirement.id,
        })),
    ))
}

/// GET `/requirements/search?q=` - Search requirements.
async fn search_requirements(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Value>> {
    let results = repo(&state)
        .search(query.term()?)
        .await
        .map_err(|e| ApiError::database(&e, "Failed to search requirements"))?;

    Ok(Json(json!({ "results": results })))
}

/// GET `/requirements/stats` - Totals for the dashboard.
async fn requirement_stats(State(state): State<AppState>) -> ApiResult<Json<RequirementStats>> {
    repo(&state)
        .stats()
        .await
        .map(Json)
        .map_err(|e| ApiError::database(&e, "Failed to compute requirement stats"))
}

/// GET `/requirements/{id}` - Fetch a requirement.
async fn get_requirement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let requirement = repo(&state)
        .get(RequirementId::from_uuid(id))
        .await
        .map_err(|e| ApiError::database(&e, "Failed to get requirement"))?
        .ok_or_else(|| ApiError::not_found("Requirement"))?;

    Ok(Json(json!({ "requirement": requirement })))
}

/// PUT `/requirements/{id}` - Replace a requirement.
async fn update_requirement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(payload): ApiJson<RequirementDraft>,
) -> ApiResult<Json<Value>> {
    let data = payload.validate()?;

    let requirement = repo(&state)
        .update(RequirementId::from_uuid(id), data)
        .await
        .map_err(|e| ApiError::database(&e, "Failed to update requirement"))?
        .ok_or_else(|| ApiError::not_found("Requirement"))?;

    Ok(Json(json!({
        "message": "Requirement updated successfully",
        "requirement": requirement,
    })))
}

/// DELETE `/requirements/{id}` - Remove a requirement.
async fn delete_requirement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let deleted = repo(&state)
        .delete(RequirementId::from_uuid(id))
        .await
        .map_err(|e| ApiError::database(&e, "Failed to delete requirement"))?;

    if !deleted {
        return Err(ApiError::not_found("Requirement"));
    }

    info!(requirement_id = %id, "Requirement deleted");
    Ok(Json(json!({ "message": "Requirement deleted successfully" })))
}
