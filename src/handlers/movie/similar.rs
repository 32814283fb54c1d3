use axum::{
    extract::{Query, State},
    Json,
};
use mockall_double::double;
use serde_json::Value;
use std::sync::Arc;

use super::{INVALID_MOVIE_ID_MSG, MOVIE_ID_REQUIRED_MSG};
use crate::{
    models::*,
    utils::{parse_positive_id, AppError},
};

#[double]
use crate::catalog::CatalogClient;

/// Get similar movies
///
/// Passes the catalog payload through untouched
#[utoipa::path(
    get,
    path = "/movies/similar",
    params(MovieIdParams),
    responses(
        (status = StatusCode::OK, description = "Catalog payload of similar movies"),
        (status = StatusCode::BAD_REQUEST, description = "Missing or invalid id", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Catalog failure", body = ErrorResponse)
    ),
    tag = "Movies API"
)]
pub async fn similar_movies_handler(
    State(catalog): State<Arc<CatalogClient>>,
    Query(params): Query<MovieIdParams>,
) -> Result<Json<Value>, AppError> {
    let id = parse_positive_id(
        params.id.as_deref(),
        MOVIE_ID_REQUIRED_MSG,
        INVALID_MOVIE_ID_MSG,
    )?;
    let value = catalog
        .fetch_similar(id)
        .await
        .map_err(|err| AppError::upstream("Failed to fetch similar movies", err))?;
    Ok(Json(value))
}
