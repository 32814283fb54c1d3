use axum::http::Uri;
use axum::response::{IntoResponse, Response};

use crate::utils::AppError;

pub async fn global_404_handler(uri: Uri) -> Response {
    let msg = format!("Route `{}` does not exist", uri);
    AppError::NotFound(msg).into_response()
}
