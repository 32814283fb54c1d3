use axum::{
    extract::FromRef,
    routing::{get, IntoMakeService},
    Router,
};
use mockall_double::double;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers::*, images::ImageResolver, swagger::ApiDoc};

#[double]
use crate::catalog::CatalogClient;
#[double]
use crate::database::AppDatabase;

/// Shared handles every request works with. All of them are read only.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: Arc<AppDatabase>,
    pub catalog: Arc<CatalogClient>,
    pub images: Arc<ImageResolver>,
}

pub fn build_app(state: AppState) -> IntoMakeService<Router> {
    tracing::debug!("Initializing the app");
    build_router(state).into_make_service()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(default_route_handler))
        .route("/ping", get(ping_handler))
        .route("/movies", get(movies_handler))
        .route("/movies/search", get(search_movies_handler))
        .route("/movies/details", get(movie_details_handler))
        .route("/movies/videos", get(movie_videos_handler))
        .route("/movies/trailer", get(movie_trailer_handler))
        .route("/movies/similar", get(similar_movies_handler))
        .route("/movies/image", get(image_url_handler))
        .route("/movie-details", get(movie_details_handler))
        .route("/movie-videos", get(movie_videos_handler))
        .route(
            "/reviews",
            get(get_reviews_handler).post(create_review_handler),
        )
        .fallback(global_404_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
