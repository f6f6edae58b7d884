//! HTTP API handlers for reviews-server

pub mod reviews;

pub use reviews::review_routes;
