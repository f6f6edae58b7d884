//! # Reviews Common Library
//!
//! Shared code for the review analysis service including:
//! - The `Review` record and the submission location allow-list
//! - Configuration resolution
//! - Timestamp formatting and parsing
//! - Identifier generation

pub mod config;
pub mod error;
pub mod locations;
pub mod models;
pub mod time;
pub mod uuid_utils;

pub use error::{Error, Result};
pub use models::Review;
