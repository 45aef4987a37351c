use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use service::beer::dto::BeerDto;
use tracing::info;
use uuid::Uuid;

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::routes::{ServerState, BEER_PATH};

#[utoipa::path(
    get, path = "/api/v1/beer/{beerId}", tag = "beer",
    params(("beerId" = Uuid, Path, description = "UUID of desired beer to get.")),
    responses(
        (status = 200, description = "Beer found", body = crate::openapi::BeerDtoDoc),
        (status = 400, description = "beerId is not a UUID", body = crate::openapi::ErrorResponseDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_beer_by_id(
    State(state): State<ServerState>,
    ApiPath(beer_id): ApiPath<Uuid>,
) -> Result<Json<BeerDto>, JsonApiError> {
    let dto = state.beers.get_beer(beer_id).await?;
    Ok(Json(dto))
}

#[utoipa::path(
    post, path = "/api/v1/beer", tag = "beer",
    request_body = crate::openapi::BeerDtoDoc,
    responses(
        (status = 201, description = "Created; Location points at the new beer"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn save_new_beer(
    State(state): State<ServerState>,
    ApiJson(dto): ApiJson<BeerDto>,
) -> Result<Response, JsonApiError> {
    let saved = state.beers.save_new_beer(&dto).await?;
    match saved.id {
        Some(id) => {
            info!(%id, "beer created via api");
            let location = format!("{BEER_PATH}/{id}");
            Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
        }
        None => Ok(StatusCode::CREATED.into_response()),
    }
}

#[utoipa::path(
    put, path = "/api/v1/beer/{beerId}", tag = "beer",
    params(("beerId" = Uuid, Path, description = "UUID of the beer to update.")),
    request_body = crate::openapi::BeerDtoDoc,
    responses(
        (status = 204, description = "Updated, or no beer with this id"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponseDoc),
        (status = 409, description = "Concurrent modification")
    )
)]
pub async fn update_beer_by_id(
    State(state): State<ServerState>,
    ApiPath(beer_id): ApiPath<Uuid>,
    ApiJson(dto): ApiJson<BeerDto>,
) -> Result<StatusCode, JsonApiError> {
    // Unknown ids are answered with 204 as well.
    state.beers.update_beer(beer_id, &dto).await?;
    Ok(StatusCode::NO_CONTENT)
}
