pub mod details;
pub mod image;
pub mod list;
pub mod search;
pub mod similar;
pub mod videos;

pub(crate) const MOVIE_ID_REQUIRED_MSG: &str = "Movie ID is required";
pub(crate) const INVALID_MOVIE_ID_MSG: &str = "Invalid movie ID";
