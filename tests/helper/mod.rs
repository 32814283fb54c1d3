pub mod catalog;
pub mod helper;

pub use catalog::spawn_fake_catalog;
pub use catalog::FakeCatalog;
pub use catalog::MISSING_MOVIE_ID;
pub use catalog::TEST_API_KEY;

pub use helper::build_get_request;
pub use helper::build_post_request;
pub use helper::get_app;
pub use helper::send;
pub use helper::TEST_IMAGE_BASE_URL;
