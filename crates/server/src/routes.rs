use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::beer::{repository::BeerRepository, BeerService};

use crate::openapi::ApiDoc;

pub mod beers;

pub const BEER_PATH: &str = "/api/v1/beer";

/// Shared request state. Cheap to clone: the service only holds an `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub beers: BeerService<dyn BeerRepository>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn BeerRepository>) -> Self {
        Self { beers: BeerService::new(repo) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, API doc and the beer resource.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let beer_routes = Router::new()
        .route(BEER_PATH, axum::routing::post(beers::save_new_beer))
        .route(&format!("{BEER_PATH}/"), axum::routing::post(beers::save_new_beer))
        .route(
            &format!("{BEER_PATH}/:beer_id"),
            get(beers::get_beer_by_id).put(beers::update_beer_by_id),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(beer_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
