pub(crate) mod error_handler;
pub(crate) mod misc;
pub(crate) mod validation;

pub use error_handler::AppError;
pub(crate) use misc::*;
pub use validation::validate_not_blank;
pub use validation::ValidatedBody;
