use axum::{
    extract::{Query, State},
    Json,
};
use mockall_double::double;
use std::sync::Arc;

use super::store::list_reviews;
use crate::{
    handlers::movie::{INVALID_MOVIE_ID_MSG, MOVIE_ID_REQUIRED_MSG},
    models::*,
    utils::{parse_positive_id, AppError},
};

#[double]
use crate::database::AppDatabase;

/// Get reviews
///
/// Reviews of one movie, newest first
#[utoipa::path(
    get,
    path = "/reviews",
    params(ReviewListParams),
    responses(
        (status = StatusCode::OK, description = "Reviews of the movie", body = ReviewsResponse),
        (status = StatusCode::BAD_REQUEST, description = "Missing or invalid movieId", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Database failure", body = ErrorResponse)
    ),
    tag = "Reviews API"
)]
pub async fn get_reviews_handler(
    State(db): State<Arc<AppDatabase>>,
    Query(params): Query<ReviewListParams>,
) -> Result<Json<ReviewsResponse>, AppError> {
    let movie_id = parse_positive_id(
        params.movie_id.as_deref(),
        MOVIE_ID_REQUIRED_MSG,
        INVALID_MOVIE_ID_MSG,
    )?;
    let reviews = list_reviews(&db, movie_id)
        .await?
        .iter()
        .map(|review| review.to_review_resp_data())
        .collect::<Vec<_>>();
    Ok(Json(ReviewsResponse { reviews }))
}
