use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use service::companies::{self, CompanyBatchOutput};

use crate::{errors::ApiError, routes::{PageQuery, ServerState}};

#[utoipa::path(
    get, path = "/companies", tag = "companies",
    params(PageQuery),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CompanyBatchDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_companies(
    State(state): State<ServerState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CompanyBatchOutput>, ApiError> {
    let Query(q) = query?;
    let out = companies::list_companies(&state.db, state.page(&q)).await?;
    Ok(Json(out))
}
