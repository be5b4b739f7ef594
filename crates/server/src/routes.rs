pub mod collections;
pub mod companies;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use configs::PaginationConfig;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use service::pagination::Pagination;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::{metrics, openapi::ApiDoc};

/// Shared handler state. The pool hands each query its own connection.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub pagination: PaginationConfig,
}

/// `offset` / `limit` query parameters; negative or non-numeric values are rejected.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// The number of items to skip from the beginning
    pub offset: Option<u64>,
    /// The number of items to fetch (capped by the server)
    pub limit: Option<u64>,
}

impl ServerState {
    pub fn page(&self, q: &PageQuery) -> Pagination {
        Pagination::new(
            q.offset.unwrap_or(0),
            q.limit.unwrap_or(self.pagination.default_limit),
        )
        .normalize(self.pagination.max_limit)
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/collections", get(collections::list_collections))
        .route("/collections/liked-id", get(collections::get_liked_collection_id))
        .route("/collections/add-liked", post(collections::add_liked))
        .route("/collections/remove-liked", post(collections::remove_liked))
        .route("/collections/add-my-list", post(collections::add_my_list))
        .route("/collections/:collection_id", get(collections::get_collection))
        .route("/collections/:collection_id/company-ids", get(collections::get_collection_company_ids))
        .route("/companies", get(companies::list_companies))
        .route("/health", get(health))
        .route_layer(middleware::from_fn(metrics::track_metrics))
        .with_state(state);

    api
        .route("/metrics", get(metrics::metrics_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(default_limit: u64, max_limit: u64) -> ServerState {
        ServerState {
            db: DatabaseConnection::Disconnected,
            pagination: PaginationConfig { default_limit, max_limit },
        }
    }

    #[test]
    fn page_defaults_and_cap() {
        let s = state(10, 100);
        assert_eq!(s.page(&PageQuery::default()), Pagination::new(0, 10));
        assert_eq!(s.page(&PageQuery { offset: Some(20), limit: Some(5) }), Pagination::new(20, 5));
        assert_eq!(s.page(&PageQuery { offset: None, limit: Some(10_000) }), Pagination::new(0, 100));
    }

    #[test]
    fn offset_past_i64_is_clamped() {
        let s = state(10, 100);
        let p = s.page(&PageQuery { offset: Some(9_223_372_036_854_775_808), limit: None });
        assert_eq!(p.offset, i64::MAX as u64);
    }

    #[test]
    fn configured_cap_applies() {
        let s = state(25, 50);
        assert_eq!(s.page(&PageQuery::default()).limit, 25);
        assert_eq!(s.page(&PageQuery { offset: None, limit: Some(51) }).limit, 50);
    }
}
