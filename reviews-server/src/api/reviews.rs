//! Review read and submission handlers
//!
//! Dispatch is by method only; the request path is ignored.
//!
//! - GET: filter the store, annotate each match with sentiment scores
//! - POST: validate a URL-encoded submission and echo it back with a fresh
//!   id and timestamp. The submission is NOT added to the store, so later
//!   GET requests will not include it.
//! - Anything else: 405

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query, State},
    http::StatusCode,
    routing::{get, MethodRouter},
    Json,
};
use reviews_common::{locations::is_valid_location, time, uuid_utils, Review};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{ApiError, ApiResult};
use crate::filter::{self, FilterCriteria};
use crate::form::{decode_pairs, first_value};
use crate::sentiment::SentimentScore;
use crate::AppState;

/// Review with its sentiment annotation
#[derive(Debug, Serialize)]
pub struct AnnotatedReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: SentimentScore,
}

/// Validated submission fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// As submitted (untrimmed)
    pub location: String,
    pub review_body: String,
}

/// GET handler, POST handler and 405 fallback for every path
pub fn review_routes() -> MethodRouter<AppState> {
    get(list_reviews)
        .post(create_review)
        .fallback(method_not_allowed)
}

/// GET /?location=&start_date=&end_date=
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<AnnotatedReview>>> {
    let criteria = FilterCriteria::from_query_pairs(&params).map_err(|e| {
        warn!("Rejected review query: {}", e);
        e
    })?;

    let matched = filter::apply(state.store.all(), &criteria).map_err(|e| {
        warn!("Review filtering failed: {}", e);
        e
    })?;

    let annotated: Vec<AnnotatedReview> = matched
        .into_iter()
        .map(|review| AnnotatedReview {
            sentiment: state.scorer.score(&review.review_body),
            review: review.clone(),
        })
        .collect();

    debug!(
        "Returning {} of {} reviews ({:?})",
        annotated.len(),
        state.store.len(),
        criteria
    );

    Ok(Json(annotated))
}

/// POST / with form fields `Location` and `ReviewBody`
///
/// Body read failures (aborted stream, body over the extractor limit) are
/// reported as 500 with the failure message.
pub async fn create_review(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<Review>)> {
    let body = body.map_err(|rejection| {
        warn!("Failed to read submission body: {}", rejection.body_text());
        ApiError::Internal(rejection.body_text())
    })?;

    let submission = parse_submission(&body).map_err(|e| {
        warn!("Rejected review submission: {}", e);
        e
    })?;

    let review = Review {
        review_id: uuid_utils::generate_unique(|id| state.store.contains_id(id)),
        review_body: submission.review_body,
        location: submission.location,
        timestamp: time::now_timestamp(),
    };

    info!(
        "Accepted review {} for {} (not added to store)",
        review.review_id, review.location
    );

    Ok((StatusCode::CREATED, Json(review)))
}

/// Any method other than GET/POST
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Decode and validate a submission body
///
/// Decoding failures are internal errors; validation stops at the first
/// failing field, checked in order: location present, location known,
/// body present.
pub fn parse_submission(body: &[u8]) -> ApiResult<Submission> {
    let text = std::str::from_utf8(body).map_err(|e| ApiError::Internal(e.to_string()))?;
    let pairs = decode_pairs(text).map_err(|e| ApiError::Internal(e.to_string()))?;

    let location = first_value(&pairs, "Location").ok_or(ApiError::MissingLocation)?;
    if !is_valid_location(&location) {
        return Err(ApiError::InvalidLocation);
    }

    let review_body = first_value(&pairs, "ReviewBody").ok_or(ApiError::MissingReviewBody)?;

    Ok(Submission {
        location,
        review_body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_submission() {
        let submission =
            parse_submission(b"Location=Denver%2C+Colorado&ReviewBody=Great+service").unwrap();

        assert_eq!(submission.location, "Denver, Colorado");
        assert_eq!(submission.review_body, "Great service");
    }

    #[test]
    fn test_location_echoed_untrimmed() {
        let submission =
            parse_submission(b"Location=+Denver%2C+Colorado+&ReviewBody=ok").unwrap();
        assert_eq!(submission.location, " Denver, Colorado ");
    }

    #[test]
    fn test_missing_location_checked_first() {
        let err = parse_submission(b"").unwrap_err();
        assert!(matches!(err, ApiError::MissingLocation));
    }

    #[test]
    fn test_blank_location_is_missing() {
        let err = parse_submission(b"Location=&ReviewBody=hi").unwrap_err();
        assert!(matches!(err, ApiError::MissingLocation));
    }

    #[test]
    fn test_invalid_location_checked_before_body() {
        let err = parse_submission(b"Location=Nowhere%2C+Nowhere").unwrap_err();
        assert!(matches!(err, ApiError::InvalidLocation));
    }

    #[test]
    fn test_missing_review_body() {
        let err = parse_submission(b"Location=Tucson%2C+Arizona").unwrap_err();
        assert!(matches!(err, ApiError::MissingReviewBody));
    }

    #[test]
    fn test_non_utf8_body_is_internal_error() {
        let err = parse_submission(&[0x4c, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
