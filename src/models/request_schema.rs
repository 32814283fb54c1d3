use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::{constants::*, utils::validate_not_blank};

pub const MISSING_FIELDS_MSG: &str = "Missing required fields";
pub const INVALID_RATING_MSG: &str = "Rating must be between 1 and 5";

/// request body schema for create review
///
/// Every field is optional at the serde level so that an absent field is
/// reported as missing rather than as a malformed body. Presence is checked
/// before the rating range, so a missing field always wins over a bad rating.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_review_fields"))]
pub struct CreateReviewReq {
    pub movie_id: Option<i64>,
    pub user_name: Option<String>,
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

impl CreateReviewReq {
    // blank strings, zero ids and a zero rating count as not given
    fn has_all_fields(&self) -> bool {
        self.movie_id.map_or(false, |id| id > 0)
            && is_present(self.user_name.as_deref())
            && self.rating.map_or(false, |rating| rating != 0)
            && is_present(self.comment.as_deref())
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.map_or(false, |v| validate_not_blank(v).is_ok())
}

fn validate_review_fields(req: &CreateReviewReq) -> Result<(), ValidationError> {
    let (code, message) = if !req.has_all_fields() {
        ("required", MISSING_FIELDS_MSG)
    } else if !(MIN_RATING..=MAX_RATING).contains(&req.rating.unwrap_or_default()) {
        ("rating", INVALID_RATING_MSG)
    } else {
        return Ok(());
    };
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    Err(err)
}

/// query params for the category listing
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieListParams {
    /// one of `popular`, `top_rated`, `upcoming`; defaults to `popular`
    pub category: Option<String>,
    /// page number, defaults to 1
    pub page: Option<String>,
}

/// query params for the movie search
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    pub query: Option<String>,
    pub page: Option<String>,
}

/// query params for every endpoint addressing a single movie
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieIdParams {
    /// catalog movie id
    pub id: Option<String>,
}

/// query params for the image url resolver
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ImageParams {
    pub path: Option<String>,
    /// `poster` or `backdrop`; anything else is treated as poster
    #[serde(rename = "type")]
    pub image_type: Option<String>,
    pub size: Option<String>,
}

/// query params for the review listing
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReviewListParams {
    pub movie_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::utils::ValidatedBody;

    fn check(body: serde_json::Value) -> Result<(), String> {
        let req: CreateReviewReq = serde_json::from_value(body).unwrap();
        req.validate().map_err(|errors| {
            let msgs = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .filter_map(|err| err.message.as_ref().map(|m| m.to_string()))
                .collect::<Vec<_>>();
            assert!(!msgs.is_empty());
            // every reported message must agree
            assert!(msgs.iter().all(|m| m == &msgs[0]));
            msgs[0].clone()
        })
    }

    #[test]
    fn test_create_review_valid_ratings() {
        for rating in 1..=5 {
            let body = json!({"movieId": 5, "userName": "alice", "rating": rating, "comment": "great"});
            assert_eq!(check(body), Ok(()));
        }
    }

    #[test]
    fn test_create_review_rating_out_of_range() {
        for rating in [6, 7, -1, 100] {
            let body = json!({"movieId": 5, "userName": "alice", "rating": rating, "comment": "great"});
            assert_eq!(check(body), Err(INVALID_RATING_MSG.to_owned()));
        }
    }

    #[test]
    fn test_create_review_missing_fields() {
        let bodies = [
            json!({}),
            json!({"userName": "alice", "rating": 4, "comment": "great"}),
            json!({"movieId": 0, "userName": "alice", "rating": 4, "comment": "great"}),
            json!({"movieId": 5, "userName": "", "rating": 4, "comment": "great"}),
            json!({"movieId": 5, "userName": "   ", "rating": 4, "comment": "great"}),
            json!({"movieId": 5, "userName": "alice", "comment": "great"}),
            json!({"movieId": 5, "userName": "alice", "rating": 0, "comment": "great"}),
            json!({"movieId": 5, "userName": "alice", "rating": 4, "comment": ""}),
        ];
        for body in bodies {
            assert_eq!(check(body), Err(MISSING_FIELDS_MSG.to_owned()));
        }
    }

    #[test]
    fn test_create_review_missing_wins_over_bad_rating() {
        let bodies = [
            json!({"movieId": 5, "userName": "alice", "rating": 9}),
            json!({"userName": "alice", "rating": 9, "comment": "x"}),
            json!({"movieId": -3, "userName": "alice", "rating": 9, "comment": "x"}),
            json!({"movieId": 5, "rating": 0, "comment": "x"}),
        ];
        for body in bodies {
            assert_eq!(check(body), Err(MISSING_FIELDS_MSG.to_owned()));
        }
    }

    #[tokio::test]
    async fn test_validated_body_reports_missing_fields() {
        use axum::{body::Body, extract::FromRequest, http::Request};

        let bodies = [
            r#"{"movieId": 5, "rating": 3, "comment": "great"}"#,
            r#"{"userName": "alice", "rating": 9, "comment": "x"}"#,
        ];
        for body in bodies {
            let req = Request::builder()
                .method("POST")
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap();
            let result = ValidatedBody::<CreateReviewReq>::from_request(req, &()).await;
            match result {
                Err(crate::utils::AppError::BadRequestErr(msg)) => {
                    assert_eq!(msg, MISSING_FIELDS_MSG)
                }
                _ => panic!("AppError::BadRequestErr should be received"),
            }
        }
    }

    #[tokio::test]
    async fn test_validated_body_rejects_wrong_types() {
        use axum::{body::Body, extract::FromRequest, http::Request};

        let req = Request::builder()
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(r#"{"movieId": 5, "userName": "alice", "rating": "five", "comment": "ok"}"#))
            .unwrap();
        let result = ValidatedBody::<CreateReviewReq>::from_request(req, &()).await;
        match result {
            Err(crate::utils::AppError::BadRequestErr(msg)) => assert_eq!(msg, "Invalid JSON body"),
            _ => panic!("AppError::BadRequestErr should be received"),
        }
    }
}
