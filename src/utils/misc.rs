use super::AppError;
use crate::constants::*;

/// Parse an optional query value as a strictly positive integer id.
/// Anything that is missing, non-numeric or `<= 0` is a bad request.
pub fn parse_positive_id(
    value: Option<&str>,
    missing_message: &str,
    invalid_message: &str,
) -> Result<i64, AppError> {
    let value = value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequestErr(missing_message.into()))?;
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(id) => {
            tracing::debug!("Non positive id received: {id}");
            Err(AppError::BadRequestErr(invalid_message.into()))
        }
        Err(err) => {
            tracing::debug!("Unable to parse id {value:?}: {err:?}");
            Err(AppError::BadRequestErr(invalid_message.into()))
        }
    }
}

/// Parse the catalog page number.
/// A missing page is page 1, the canonical form used in urls.
pub fn parse_page(value: Option<&str>) -> Result<u32, AppError> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Ok(1);
    };
    match value.parse::<u32>() {
        Ok(page) if (1..=MAX_CATALOG_PAGE).contains(&page) => Ok(page),
        _ => {
            tracing::debug!("Invalid page received: {value:?}");
            let msg = format!("Page must be an integer between 1 and {MAX_CATALOG_PAGE}");
            Err(AppError::BadRequestErr(msg))
        }
    }
}
