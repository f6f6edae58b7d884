//! Sentiment scoring
//!
//! The scorer is injected into handler state as a trait object so tests can
//! substitute a fixed scorer. The production implementation wraps the VADER
//! lexicon analyzer.

use serde::Serialize;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Polarity scores for a piece of text
///
/// `compound` is in [-1, 1]; the other three are proportions in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentScore {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

/// Maps review text to polarity scores
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}

/// VADER lexicon-based scorer
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    /// Load the lexicon
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        SentimentScore {
            negative: get("neg"),
            neutral: get("neu"),
            positive: get("pos"),
            compound: get("compound"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_range(score: &SentimentScore) {
        for proportion in [score.negative, score.neutral, score.positive] {
            assert!((0.0..=1.0).contains(&proportion), "{:?}", score);
        }
        assert!((-1.0..=1.0).contains(&score.compound), "{:?}", score);
    }

    #[test]
    fn test_positive_text() {
        let scorer = VaderScorer::new();
        let score = scorer.score("Great service");

        assert!(score.compound > 0.0);
        assert!(score.positive > score.negative);
        assert_in_range(&score);
    }

    #[test]
    fn test_negative_text() {
        let scorer = VaderScorer::new();
        let score = scorer.score("Terrible food and awful, rude staff");

        assert!(score.compound < 0.0);
        assert!(score.negative > score.positive);
        assert_in_range(&score);
    }

    #[test]
    fn test_deterministic() {
        let scorer = VaderScorer::new();
        let text = "The tacos were good but the wait was horrible.";

        assert_eq!(scorer.score(text), scorer.score(text));
    }

    #[test]
    fn test_serializes_four_named_fields() {
        let value = serde_json::to_value(SentimentScore::default()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        for key in ["negative", "neutral", "positive", "compound"] {
            assert!(object[key].is_number(), "missing {}", key);
        }
    }
}
