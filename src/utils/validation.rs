use axum::{async_trait, extract::FromRequest, http::Request, Json, RequestExt};
use validator::{Validate, ValidationError, ValidationErrors};

use super::AppError;

/// Custom validator function to reject blank strings
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// JSON body which is validated before it reaches the handler
pub struct ValidatedBody<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for ValidatedBody<T>
where
    B: Send + 'static,
    S: Send + Sync,
    T: Validate + 'static,
    Json<T>: FromRequest<(), B>,
{
    type Rejection = AppError;

    async fn from_request(req: Request<B>, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = req
            .extract::<Json<T>, _>()
            .await
            .map_err(|_| AppError::BadRequestErr("Invalid JSON body".into()))?;
        data.validate()
            .map_err(|errors| AppError::BadRequestErr(first_error_message(&errors)))?;
        Ok(Self(data))
    }
}

// field validators carry the client facing message, pick any of them
fn first_error_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|msg| msg.to_string()))
        .unwrap_or_else(|| "Invalid JSON body".to_owned())
}
