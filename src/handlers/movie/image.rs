use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::{
    images::{ImageKind, ImageResolver},
    models::*,
};

/// Resolve image url
///
/// Absolute url for a catalog image path, or a placeholder data url when
/// there is no path
#[utoipa::path(
    get,
    path = "/movies/image",
    params(ImageParams),
    responses(
        (status = StatusCode::OK, description = "Image url", body = ImageUrlResponse)
    ),
    tag = "Movies API"
)]
pub async fn image_url_handler(
    State(resolver): State<Arc<ImageResolver>>,
    Query(params): Query<ImageParams>,
) -> Json<ImageUrlResponse> {
    let kind = ImageKind::parse(params.image_type.as_deref());
    let url = resolver.resolve(params.path.as_deref(), kind, params.size.as_deref());
    Json(ImageUrlResponse { url })
}
