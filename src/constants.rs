pub const MONGO_MIN_POOL_SIZE: u32 = 5;
pub const MONGO_MAX_POOL_SIZE: u32 = 10;
pub const MONGO_CONN_TIMEOUT: u64 = 10;

pub const DB_NAME: &str = "reviewroom";
pub const COLL_REVIEWS: &str = "reviews";

pub const REVIEW_QUERY_LIMIT: i64 = 100;
pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;
// mongodb server error code for a unique index violation
pub const DUPLICATE_KEY_ERROR_CODE: i32 = 11000;

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const TMDB_LANGUAGE: &str = "en-US";
// the catalog refuses to page past this point
pub const MAX_CATALOG_PAGE: u32 = 500;

pub const DEFAULT_POSTER_SIZE: &str = "w500";
pub const DEFAULT_BACKDROP_SIZE: &str = "original";

pub const TRAILER_VIDEO_TYPE: &str = "Trailer";
pub const TRAILER_VIDEO_SITE: &str = "YouTube";
pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

pub const PAGE_QUERY_PARAM: &str = "page";
pub const PAGE_RANGE_DELTA: u32 = 2;
