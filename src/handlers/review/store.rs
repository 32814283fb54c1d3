use mockall_double::double;
use mongodb::{
    bson::{doc, Document},
    options::FindOptions,
};
use std::sync::Arc;

use crate::{constants::*, models::Review, utils::AppError};

#[double]
use crate::database::AppDatabase;

pub const ALREADY_REVIEWED_MSG: &str = "You have already reviewed this movie";

/// Newest reviews of a movie first, at most `REVIEW_QUERY_LIMIT` of them
pub async fn list_reviews(db: &Arc<AppDatabase>, movie_id: i64) -> Result<Vec<Review>, AppError> {
    let filter = doc! {"movieId": movie_id};
    let options = FindOptions::builder()
        .sort(Some(doc! {"createdAt": -1, "_id": -1}))
        .limit(Some(REVIEW_QUERY_LIMIT))
        .build();
    let data = db
        .find::<Review>(DB_NAME, COLL_REVIEWS, Some(filter), Some(options))
        .await
        .map_err(|err| {
            tracing::debug!("{:?}", err);
            anyhow::anyhow!("Not able to query reviews")
        })?;
    Ok(data)
}

/// Quick rejection of a second review by the same user.
/// The unique index still decides when two requests race.
pub async fn check_not_reviewed(
    db: &Arc<AppDatabase>,
    movie_id: i64,
    user_name: &str,
) -> Result<(), AppError> {
    let filter = doc! {"movieId": movie_id, "userName": user_name};
    let existing = db
        .find_one::<Document>(DB_NAME, COLL_REVIEWS, Some(filter), None)
        .await?;
    if existing.is_some() {
        return Err(AppError::BadRequestErr(ALREADY_REVIEWED_MSG.into()));
    }
    Ok(())
}

pub async fn create_review(db: &Arc<AppDatabase>, review: &Review) -> Result<(), AppError> {
    check_not_reviewed(db, review.movie_id, &review.user_name).await?;
    let inserted = db
        .insert_unique::<Review>(DB_NAME, COLL_REVIEWS, review, None)
        .await?;
    if inserted.is_none() {
        return Err(AppError::BadRequestErr(ALREADY_REVIEWED_MSG.into()));
    }
    tracing::debug!(
        "Review added for movie {} by {}",
        review.movie_id,
        review.user_name
    );
    Ok(())
}

/// Create the review indexes. Safe to call on every start.
pub async fn ensure_indexes(db: &AppDatabase) -> anyhow::Result<()> {
    let unique = doc! {"movieId": 1, "userName": 1};
    let name = db.create_index(DB_NAME, COLL_REVIEWS, unique, true).await?;
    tracing::debug!("Index ready: {name}");
    let listing = doc! {"movieId": 1, "createdAt": -1};
    let name = db.create_index(DB_NAME, COLL_REVIEWS, listing, false).await?;
    tracing::debug!("Index ready: {name}");
    Ok(())
}
