use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{MovieVideo, ReviewRespData};

/// response schema for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// response schema for movie videos
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideosResponse {
    pub videos: Vec<MovieVideo>,
}

/// response schema for the trailer lookup
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrailerResponse {
    pub trailer: Option<MovieVideo>,
    /// watch url of the selected trailer
    pub url: Option<String>,
}

/// response schema for image url resolution
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImageUrlResponse {
    pub url: String,
}

/// response schema for the review listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewsResponse {
    pub reviews: Vec<ReviewRespData>,
}

/// response schema for create review
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewResponse {
    pub message: String,
    pub review: ReviewRespData,
}
