use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod movie;
pub mod request_schema;
pub mod response_schema;
pub mod review;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenericResponse {
    pub success: bool,
    pub message: String,
}

pub use movie::*;
pub use request_schema::*;
pub use response_schema::*;
pub use review::*;
