use axum::{
    extract::{Query, State},
    Json,
};
use mockall_double::double;
use std::sync::Arc;

use super::{INVALID_MOVIE_ID_MSG, MOVIE_ID_REQUIRED_MSG};
use crate::{
    catalog::{select_trailer, trailer_watch_url},
    models::*,
    type_validation::parse_movie_videos,
    utils::{parse_positive_id, AppError},
};

#[double]
use crate::catalog::CatalogClient;

const VIDEOS_ERR_MSG: &str = "Failed to fetch movie videos";

/// Get movie videos
///
/// Trailers, teasers and clips of one movie. Served under `/movies/videos` and `/movie-videos`.
#[utoipa::path(
    get,
    path = "/movies/videos",
    params(MovieIdParams),
    responses(
        (status = StatusCode::OK, description = "Movie videos", body = VideosResponse),
        (status = StatusCode::BAD_REQUEST, description = "Missing or invalid id", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Catalog failure", body = ErrorResponse)
    ),
    tag = "Movies API"
)]
pub async fn movie_videos_handler(
    State(catalog): State<Arc<CatalogClient>>,
    Query(params): Query<MovieIdParams>,
) -> Result<Json<VideosResponse>, AppError> {
    let videos = get_videos(&catalog, &params).await?;
    Ok(Json(VideosResponse { videos }))
}

/// Get movie trailer
///
/// The first YouTube trailer of a movie along with its watch url
#[utoipa::path(
    get,
    path = "/movies/trailer",
    params(MovieIdParams),
    responses(
        (status = StatusCode::OK, description = "Trailer, null when the movie has none", body = TrailerResponse),
        (status = StatusCode::BAD_REQUEST, description = "Missing or invalid id", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Catalog failure", body = ErrorResponse)
    ),
    tag = "Movies API"
)]
pub async fn movie_trailer_handler(
    State(catalog): State<Arc<CatalogClient>>,
    Query(params): Query<MovieIdParams>,
) -> Result<Json<TrailerResponse>, AppError> {
    let videos = get_videos(&catalog, &params).await?;
    let trailer = select_trailer(&videos);
    let res = TrailerResponse {
        url: trailer.map(trailer_watch_url),
        trailer: trailer.cloned(),
    };
    Ok(Json(res))
}

async fn get_videos(
    catalog: &Arc<CatalogClient>,
    params: &MovieIdParams,
) -> Result<Vec<MovieVideo>, AppError> {
    let id = parse_positive_id(
        params.id.as_deref(),
        MOVIE_ID_REQUIRED_MSG,
        INVALID_MOVIE_ID_MSG,
    )?;
    let value = catalog
        .fetch_videos(id)
        .await
        .map_err(|err| AppError::upstream(VIDEOS_ERR_MSG, err))?;
    parse_movie_videos(&value).ok_or_else(|| {
        AppError::upstream(VIDEOS_ERR_MSG, anyhow::anyhow!("no video results for {id}"))
    })
}
