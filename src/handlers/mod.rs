pub mod default;
pub mod global_404;
pub mod movie;
pub mod ping;
pub mod review;

#[cfg(test)]
pub(crate) mod test_utils;

pub use default::default_route_handler;

pub use global_404::global_404_handler;

pub use movie::details::movie_details_handler;
pub use movie::image::image_url_handler;
pub use movie::list::movies_handler;
pub use movie::search::search_movies_handler;
pub use movie::similar::similar_movies_handler;
pub use movie::videos::movie_trailer_handler;
pub use movie::videos::movie_videos_handler;

pub use ping::ping_handler;

pub use review::create::create_review_handler;
pub use review::get::get_reviews_handler;
pub use review::store::ensure_indexes;
