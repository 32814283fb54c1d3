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

const FETCH_ERR_MSG: &str = "Failed to fetch movies";

/// List movies
///
/// One page of the popular, top rated or upcoming listing
#[utoipa::path(
    get,
    path = "/movies",
    params(MovieListParams),
    responses(
        (status = StatusCode::OK, description = "One page of movies", body = MoviePage),
        (status = StatusCode::BAD_REQUEST, description = "Bad request", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Catalog failure", body = ErrorResponse)
    ),
    tag = "Movies API"
)]
pub async fn movies_handler(
    State(catalog): State<Arc<CatalogClient>>,
    Query(params): Query<MovieListParams>,
) -> Result<Json<MoviePage>, AppError> {
    let category = get_category(params.category.as_deref())?;
    let page = parse_page(params.page.as_deref())?;
    let value = catalog
        .fetch_movies(category, page)
        .await
        .map_err(|err| AppError::upstream(FETCH_ERR_MSG, err))?;
    let data = parse_movie_page(&value).ok_or_else(|| {
        AppError::upstream(FETCH_ERR_MSG, anyhow::anyhow!("unexpected listing shape"))
    })?;
    Ok(Json(data))
}

fn get_category(value: Option<&str>) -> Result<MovieCategory, AppError> {
    match value.filter(|v| !v.is_empty()) {
        None => Ok(MovieCategory::Popular),
        Some(value) => MovieCategory::parse(value)
            .ok_or_else(|| AppError::BadRequestErr(format!("Unknown category: {value}"))),
    }
}
