use axum::Json;

use crate::models::GenericResponse;

/// Ping endpoint
///
/// Reports the running package name and version
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Service name and version", body = GenericResponse)
    ),
    tag = "Debugging API"
)]
pub async fn ping_handler() -> Json<GenericResponse> {
    let res = GenericResponse {
        success: true,
        message: format!("pong from {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
    };
    Json(res)
}
