//! Review filtering by location and date range
//!
//! Each predicate is independent and side-effect free; `apply` combines them
//! with logical AND, evaluating the location predicate first. A stored
//! timestamp is only parsed when a date bound is active, and a timestamp
//! that fails to parse fails the whole request instead of being skipped.

use chrono::NaiveDateTime;
use reviews_common::time::{parse_date_bound, parse_timestamp};
use reviews_common::Review;
use thiserror::Error;

use crate::form::first_value;

/// Filter errors
#[derive(Debug, Error)]
pub enum FilterError {
    /// `start_date` / `end_date` query value is not `YYYY-MM-DD`
    #[error("invalid {param}: '{value}' (expected YYYY-MM-DD)")]
    InvalidBound { param: &'static str, value: String },

    /// Stored review timestamp is not `YYYY-MM-DD HH:MM:SS`
    #[error("review {review_id} has unparseable timestamp '{timestamp}': {source}")]
    UnparseableTimestamp {
        review_id: String,
        timestamp: String,
        source: chrono::ParseError,
    },
}

/// Per-request filter criteria; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact, case-sensitive location match
    pub location: Option<String>,
    /// Inclusive lower bound (midnight of the given day)
    pub start_date: Option<NaiveDateTime>,
    /// Inclusive upper bound (midnight of the given day)
    pub end_date: Option<NaiveDateTime>,
}

impl FilterCriteria {
    /// Build criteria from decoded query pairs (`location`, `start_date`, `end_date`)
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Result<Self, FilterError> {
        Ok(Self {
            location: first_value(pairs, "location"),
            start_date: parse_bound(pairs, "start_date")?,
            end_date: parse_bound(pairs, "end_date")?,
        })
    }

    fn has_date_bounds(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }
}

fn parse_bound(
    pairs: &[(String, String)],
    param: &'static str,
) -> Result<Option<NaiveDateTime>, FilterError> {
    first_value(pairs, param)
        .map(|value| {
            parse_date_bound(&value).map_err(|_| FilterError::InvalidBound { param, value })
        })
        .transpose()
}

/// Location predicate: passes when no location is given or it matches exactly
pub fn location_matches(review: &Review, criteria: &FilterCriteria) -> bool {
    criteria
        .location
        .as_deref()
        .map_or(true, |location| review.location == location)
}

/// Date predicate: passes when the review timestamp is within every supplied bound
pub fn date_matches(review: &Review, criteria: &FilterCriteria) -> Result<bool, FilterError> {
    if !criteria.has_date_bounds() {
        return Ok(true);
    }

    let timestamp =
        parse_timestamp(&review.timestamp).map_err(|source| FilterError::UnparseableTimestamp {
            review_id: review.review_id.clone(),
            timestamp: review.timestamp.clone(),
            source,
        })?;

    let after_start = criteria.start_date.map_or(true, |start| timestamp >= start);
    let before_end = criteria.end_date.map_or(true, |end| timestamp <= end);

    Ok(after_start && before_end)
}

/// Ordered subsequence of `reviews` satisfying all predicates
pub fn apply<'a>(
    reviews: &'a [Review],
    criteria: &FilterCriteria,
) -> Result<Vec<&'a Review>, FilterError> {
    let mut matched = Vec::new();

    for review in reviews {
        if location_matches(review, criteria) && date_matches(review, criteria)? {
            matched.push(review);
        }
    }

    Ok(matched)
}
