use axum::{
    extract::{Query, State},
    Json,
};
use mockall_double::double;
use std::sync::Arc;

use super::{INVALID_MOVIE_ID_MSG, MOVIE_ID_REQUIRED_MSG};
use crate::{
    models::*,
    type_validation::parse_movie_details,
    utils::{parse_positive_id, AppError},
};

#[double]
use crate::catalog::CatalogClient;

const DETAILS_ERR_MSG: &str = "Failed to fetch movie details";

/// Get movie details
///
/// Full details of one movie. Served under `/movies/details` and `/movie-details`.
#[utoipa::path(
    get,
    path = "/movies/details",
    params(MovieIdParams),
    responses(
        (status = StatusCode::OK, description = "Movie details", body = MovieDetails),
        (status = StatusCode::BAD_REQUEST, description = "Missing or invalid id", body = ErrorResponse),
        (status = StatusCode::NOT_FOUND, description = "Unknown movie", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Catalog failure", body = ErrorResponse)
    ),
    tag = "Movies API"
)]
pub async fn movie_details_handler(
    State(catalog): State<Arc<CatalogClient>>,
    Query(params): Query<MovieIdParams>,
) -> Result<Json<MovieDetails>, AppError> {
    let id = parse_positive_id(
        params.id.as_deref(),
        MOVIE_ID_REQUIRED_MSG,
        INVALID_MOVIE_ID_MSG,
    )?;
    let value = catalog.fetch_details(id).await.map_err(|err| {
        if err.is_not_found() {
            AppError::NotFound("Movie not found".into())
        } else {
            AppError::upstream(DETAILS_ERR_MSG, err)
        }
    })?;
    let details = parse_movie_details(&value).ok_or_else(|| {
        AppError::upstream(DETAILS_ERR_MSG, anyhow::anyhow!("unexpected details shape for {id}"))
    })?;
    Ok(Json(details))
}
