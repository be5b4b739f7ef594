use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use service::collections::{self, CompanyCollectionMetadata, CompanyCollectionOutput};
use tracing::info;
use uuid::Uuid;

use crate::{errors::ApiError, metrics, routes::{PageQuery, ServerState}};

#[derive(Debug, Deserialize)]
pub struct CompanyIdsRequest {
    pub company_ids: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LikedIdResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct CompanyIdsResponse {
    pub company_ids: Vec<i32>,
}

#[utoipa::path(
    get, path = "/collections/liked-id", tag = "collections",
    responses(
        (status = 200, description = "OK", body = crate::openapi::LikedIdDoc),
        (status = 404, description = "Liked Companies List not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_liked_collection_id(State(state): State<ServerState>) -> Result<Json<LikedIdResponse>, ApiError> {
    let id = collections::liked_collection_id(&state.db).await?;
    Ok(Json(LikedIdResponse { id: id.to_string() }))
}

#[utoipa::path(
    get, path = "/collections", tag = "collections",
    responses((status = 200, description = "OK", body = [crate::openapi::CollectionMetadataDoc]))
)]
pub async fn list_collections(State(state): State<ServerState>) -> Result<Json<Vec<CompanyCollectionMetadata>>, ApiError> {
    let list = collections::list_collection_metadata(&state.db).await?;
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/collections/{collection_id}", tag = "collections",
    params(("collection_id" = Uuid, Path, description = "Collection ID"), PageQuery),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CollectionDoc),
        (status = 404, description = "Collection not found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_collection(
    State(state): State<ServerState>,
    path: Result<Path<Uuid>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CompanyCollectionOutput>, ApiError> {
    let Path(collection_id) = path?;
    let Query(q) = query?;
    let out = collections::get_collection(&state.db, collection_id, state.page(&q)).await?;
    Ok(Json(out))
}

#[utoipa::path(
    get, path = "/collections/{collection_id}/company-ids", tag = "collections",
    params(("collection_id" = Uuid, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CompanyIdsDoc),
        (status = 404, description = "Collection not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_collection_company_ids(
    State(state): State<ServerState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<CompanyIdsResponse>, ApiError> {
    let Path(collection_id) = path?;
    let company_ids = collections::company_ids_in_collection(&state.db, collection_id).await?;
    Ok(Json(CompanyIdsResponse { company_ids }))
}

#[utoipa::path(
    post, path = "/collections/add-liked", tag = "collections",
    request_body = crate::openapi::CompanyIdsDoc,
    responses(
        (status = 200, description = "Added", body = crate::openapi::MessageDoc),
        (status = 404, description = "Liked Companies List not found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add_liked(
    State(state): State<ServerState>,
    body: Result<Json<CompanyIdsRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = body?;
    let added = collections::add_companies_to_liked(&state.db, &req.company_ids).await?;
    metrics::COMPANIES_ADDED_TOTAL.with_label_values(&["liked"]).inc_by(added);
    info!(requested = req.company_ids.len(), added, "add_liked");
    Ok(Json(MessageResponse { message: format!("Added {} companies to liked collection", added) }))
}

#[utoipa::path(
    post, path = "/collections/remove-liked", tag = "collections",
    request_body = crate::openapi::CompanyIdsDoc,
    responses(
        (status = 200, description = "Removed", body = crate::openapi::MessageDoc),
        (status = 404, description = "Liked Companies List not found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn remove_liked(
    State(state): State<ServerState>,
    body: Result<Json<CompanyIdsRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = body?;
    let removed = collections::remove_companies_from_liked(&state.db, &req.company_ids).await?;
    metrics::COMPANIES_REMOVED_TOTAL.with_label_values(&["liked"]).inc_by(removed);
    info!(requested = req.company_ids.len(), removed, "remove_liked");
    Ok(Json(MessageResponse { message: format!("Removed {} companies from liked collection", removed) }))
}

#[utoipa::path(
    post, path = "/collections/add-my-list", tag = "collections",
    request_body = crate::openapi::CompanyIdsDoc,
    responses(
        (status = 200, description = "Added", body = crate::openapi::MessageDoc),
        (status = 404, description = "My List not found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add_my_list(
    State(state): State<ServerState>,
    body: Result<Json<CompanyIdsRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = body?;
    let added = collections::add_companies_to_my_list(&state.db, &req.company_ids).await?;
    metrics::COMPANIES_ADDED_TOTAL.with_label_values(&["my_list"]).inc_by(added);
    info!(requested = req.company_ids.len(), added, "add_my_list");
    Ok(Json(MessageResponse { message: format!("Added {} companies to My List", added) }))
}
