//! Client management routes.

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

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extract::ApiJson,
    middleware::CurrentSession,
};
use kodestudio_core::client::ClientDraft;
use kodestudio_db::{ClientFilter, ClientRepository};
use kodestudio_shared::{
    AppError,
    types::{ClientId, PageRequest},
};

/// Creates the client routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clientes", get(list_clients).post(create_client))
        .route("/clientes/search", get(search_clients))
        .route(
            "/clientes/{id}",
            get(get_client).put(update_client).delete(delete_client),
        )
}

/// Query parameters for listing clients.
#[derive(Debug, Default, Deserialize)]
pub struct ListClientsQuery {
    /// Exact city filter.
    pub ciudad: Option<String>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
}

/// Query parameters for search endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Search term.
    #[serde(default)]
    pub q: String,
}

impl SearchQuery {
    /// Returns the trimmed term, rejecting blanks.
    pub fn term(&self) -> Result<&str, AppError> {
        let term = self.q.trim();
        if term.is_empty() {
            return Err(AppError::Validation("Search term is required".into()));
        }
        Ok(term)
    }
}

fn repo(state: &AppState) -> ClientRepository {
    ClientRepository::new((*state.db).clone())
}

/// GET `/clientes` - List clients, newest first.
async fn list_clients(
    State(state): State<AppState>,
    Query(query): Query<ListClientsQuery>,
) -> ApiResult<Json<Value>> {
    let filter = ClientFilter {
        ciudad: query.ciudad.filter(|c| !c.trim().is_empty()),
    };
    let page = PageRequest::from_query(query.page, query.per_page);

    let result = repo(&state)
        .list(filter, page)
        .await
        .map_err(|e| ApiError::database(&e, "Failed to list clients"))?;

    Ok(Json(json!({
        "clientes": result.items,
        "total": result.total,
        "page": result.page,
        "per_page": result.per_page,
        "total_pages": result.total_pages,
    })))
}

/// POST `/clientes` - Register a client.
async fn create_client(
    State(state): State<AppState>,
    session: CurrentSession,
    ApiJson(payload): ApiJson<ClientDraft>,
) -> ApiResult<impl IntoResponse> {
    let data = payload.validate()?;

    let client = repo(&state)
        .create(data)
        .await
        .map_err(|e| ApiError::database(&e, "Failed to create client"))?;

    info!(client_id = %client.id, user_id = %session.user_id(), "Client created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Cliente registrado exitosamente",
            "cliente": client,
        })),
    ))
}

/// GET `/clientes/search?q=` - Search clients.
async fn search_clients(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Value>> {
    let results = repo(&state)
        .search(query.term()?)
        .await
        .map_err(|e| ApiError::database(&e, "Failed to search clients"))?;

    Ok(Json(json!({ "results": results })))
}

/// GET `/clientes/{id}` - Fetch a client.
async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let client = repo(&state)
        .find_by_id(ClientId::from_uuid(id))
        .await
        .map_err(|e| ApiError::database(&e, "Failed to get client"))?
        .ok_or_else(|| ApiError::not_found("Client"))?;

    Ok(Json(json!({ "cliente": client })))
}

/// PUT `/clientes/{id}` - Replace a client's details.
async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(payload): ApiJson<ClientDraft>,
) -> ApiResult<Json<Value>> {
    let data = payload.validate()?;

    let client = repo(&state)
        .update(ClientId::from_uuid(id), data)
        .await
        .map_err(|e| ApiError::database(&e, "Failed to update client"))?
        .ok_or_else(|| ApiError::not_found("Client"))?;

    Ok(Json(json!({
        "message": "Cliente actualizado exitosamente",
        "cliente": client,
    })))
}

/// DELETE `/clientes/{id}` - Remove a client.
async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let deleted = repo(&state)
        .delete(ClientId::from_uuid(id))
        .await
        .map_err(|e| ApiError::database(&e, "Failed to delete client"))?;

    if !deleted {
        return Err(ApiError::not_found("Client"));
    }

    info!(client_id = %id, "Client deleted");
    Ok(Json(json!({ "message": "Cliente eliminado exitosamente" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_term_rejects_blank() {
        let blank = SearchQuery { q: "   ".into() };
        assert!(blank.term().is_err());

        let query = SearchQuery { q: " lima ".into() };
        assert_eq!(query.term().unwrap(), "lima");
    }
}
