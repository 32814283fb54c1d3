use axum::{extract::State, http::StatusCode, Json};
use mockall_double::double;
use mongodb::bson::{oid::ObjectId, DateTime};
use std::sync::Arc;

use super::store::create_review;
use crate::{
    models::*,
    utils::{AppError, ValidatedBody},
};

#[double]
use crate::database::AppDatabase;

/// Add review
///
/// One review per user and movie
#[utoipa::path(
    post,
    path = "/reviews",
    request_body = CreateReviewReq,
    responses(
        (status = StatusCode::CREATED, description = "Review added", body = CreateReviewResponse),
        (status = StatusCode::BAD_REQUEST, description = "Invalid review or already reviewed", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Database failure", body = ErrorResponse)
    ),
    tag = "Reviews API"
)]
pub async fn create_review_handler(
    State(db): State<Arc<AppDatabase>>,
    ValidatedBody(body): ValidatedBody<CreateReviewReq>,
) -> Result<(StatusCode, Json<CreateReviewResponse>), AppError> {
    let review = build_review(body)?;
    create_review(&db, &review).await?;
    let res = CreateReviewResponse {
        message: "Review added successfully".to_owned(),
        review: review.to_review_resp_data(),
    };
    Ok((StatusCode::CREATED, Json(res)))
}

// body is already validated, every field is present
fn build_review(body: CreateReviewReq) -> Result<Review, AppError> {
    let rating = i32::try_from(body.rating.unwrap_or_default())?;
    let review = Review {
        id: Some(ObjectId::new()),
        movie_id: body.movie_id.unwrap_or_default(),
        user_name: body.user_name.unwrap_or_default().trim().to_owned(),
        rating,
        comment: body.comment.unwrap_or_default(),
        created_at: DateTime::now().to_chrono(),
    };
    Ok(review)
}
