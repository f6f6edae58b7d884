//! reviews-server library - customer review analysis service
//!
//! Serves a fixed collection of reviews with location/date filtering and
//! per-review sentiment scores, and validates new review submissions.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod filter;
pub mod form;
pub mod sentiment;
pub mod store;

use sentiment::SentimentScorer;
use store::ReviewStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Reviews loaded at startup (read-only)
    pub store: Arc<ReviewStore>,
    /// Sentiment scorer applied to every returned review
    pub scorer: Arc<dyn SentimentScorer>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: ReviewStore, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self {
            store: Arc::new(store),
            scorer,
        }
    }
}

/// Build application router
///
/// There are no routed paths: every request dispatches on method alone
/// through the review handlers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(api::review_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
