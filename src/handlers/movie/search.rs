use axum::{
    extract::{Query, State},
    Json,
};
use mockall_double::double;
use std::sync::Arc;

use crate::{
    models::*,
    type_validation::parse_movie_page,
    utils::{parse_page, AppError},
};

#[double]
use crate::catalog::CatalogClient;

const SEARCH_ERR_MSG: &str = "Failed to search movies";

/// Search movies
///
/// Free text search over movie titles
#[utoipa::path(
    get,
    path = "/movies/search",
    params(SearchParams),
    responses(
        (status = StatusCode::OK, description = "One page of matching movies", body = MoviePage),
        (status = StatusCode::BAD_REQUEST, description = "Bad request", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Catalog failure", body = ErrorResponse)
    ),
    tag = "Movies API"
)]
pub async fn search_movies_handler(
    State(catalog): State<Arc<CatalogClient>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<MoviePage>, AppError> {
    let query = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequestErr("Search query is required".into()))?;
    let page = parse_page(params.page.as_deref())?;
    let value = catalog
        .search(query, page)
        .await
        .map_err(|err| AppError::upstream(SEARCH_ERR_MSG, err))?;
    let data = parse_movie_page(&value).ok_or_else(|| {
        AppError::upstream(SEARCH_ERR_MSG, anyhow::anyhow!("unexpected search shape"))
    })?;
    Ok(Json(data))
}
