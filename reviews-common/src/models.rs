//! Review record

use serde::{Deserialize, Serialize};

/// A single customer review
///
/// Field names match the wire and data-file column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "ReviewId", alias = "review_id")]
    pub review_id: String,
    #[serde(rename = "ReviewBody")]
    pub review_body: String,
    #[serde(rename = "Location")]
    pub location: String,
    /// `YYYY-MM-DD HH:MM:SS`, naive local time
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_wire_names() {
        let review = Review {
            review_id: "abc".to_string(),
            review_body: "Great service".to_string(),
            location: "Denver, Colorado".to_string(),
            timestamp: "2023-01-01 12:00:00".to_string(),
        };

        let value = serde_json::to_value(&review).unwrap();
        assert_eq!(
            value,
            json!({
                "ReviewId": "abc",
                "ReviewBody": "Great service",
                "Location": "Denver, Colorado",
                "Timestamp": "2023-01-01 12:00:00",
            })
        );
    }

    #[test]
    fn test_accepts_snake_case_id_column() {
        let review: Review = serde_json::from_value(json!({
            "review_id": "xyz",
            "ReviewBody": "ok",
            "Location": "Tucson, Arizona",
            "Timestamp": "2023-01-01 12:00:00",
        }))
        .unwrap();

        assert_eq!(review.review_id, "xyz");
    }
}
