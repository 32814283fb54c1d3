use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::ping::ping_handler,
        crate::handlers::default::default_route_handler,
        crate::handlers::movie::list::movies_handler,
        crate::handlers::movie::search::search_movies_handler,
        crate::handlers::movie::details::movie_details_handler,
        crate::handlers::movie::videos::movie_videos_handler,
        crate::handlers::movie::videos::movie_trailer_handler,
        crate::handlers::movie::similar::similar_movies_handler,
        crate::handlers::movie::image::image_url_handler,
        crate::handlers::review::get::get_reviews_handler,
        crate::handlers::review::create::create_review_handler,
    ),
    components(
        schemas(
            crate::models::CreateReviewReq,

            crate::models::GenericResponse,
            crate::models::ErrorResponse,
            crate::models::VideosResponse,
            crate::models::TrailerResponse,
            crate::models::ImageUrlResponse,
            crate::models::ReviewsResponse,
            crate::models::CreateReviewResponse,

            crate::models::Movie,
            crate::models::MovieDetails,
            crate::models::MoviePage,
            crate::models::MovieVideo,
            crate::models::Genre,
            crate::models::ProductionCompany,
            crate::models::ReviewRespData,
            crate::models::MovieCategory,
        )
    ),
    tags(
        (name = "Debugging API", description = "API for debugging purposes"),
        (name = "Movies API", description = "Catalog browsing backed by TMDB"),
        (name = "Reviews API", description = "User reviews of movies")
    )
)]
pub struct ApiDoc;
