//! In-memory review store
//!
//! Loaded once at startup and read-only afterwards. Handlers share it behind
//! an `Arc`; no locking is needed because nothing writes to it.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use reviews_common::{Error, Result, Review};
use tracing::{debug, info};

/// Ordered, immutable collection of reviews
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews: Vec<Review>,
    ids: HashSet<String>,
}

impl ReviewStore {
    /// Create a store from in-memory records, preserving their order
    pub fn new(reviews: Vec<Review>) -> Self {
        let ids = reviews.iter().map(|r| r.review_id.clone()).collect();
        Self { reviews, ids }
    }

    /// Load reviews from a CSV file
    ///
    /// Required columns: `ReviewId` (or `review_id`), `ReviewBody`,
    /// `Location`, `Timestamp`. Other columns are ignored.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let store = Self::from_csv_reader(file).map_err(|e| match e {
            Error::Data(msg) => Error::Data(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;

        info!("Loaded {} reviews from {}", store.len(), path.display());
        Ok(store)
    }

    /// Load reviews from any CSV source with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let mut reviews = Vec::new();
        for (index, record) in csv_reader.deserialize::<Review>().enumerate() {
            // Header is line 1
            let review = record.map_err(|e| Error::Data(format!("row {}: {}", index + 2, e)))?;
            reviews.push(review);
        }

        let store = Self::new(reviews);
        if store.ids.len() != store.reviews.len() {
            debug!(
                "Data source contains {} duplicate review ids",
                store.reviews.len() - store.ids.len()
            );
        }

        Ok(store)
    }

    /// All reviews in load order
    pub fn all(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Whether `id` is already used by a stored review
    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_CSV: &str = "\
ReviewId,Location,Timestamp,ReviewBody
a1,\"Denver, Colorado\",2021-01-05 10:00:00,Great coffee
b2,\"Tucson, Arizona\",2021-02-10 14:30:00,\"Slow, but friendly\"
";

    #[test]
    fn test_from_csv_reader_preserves_order() {
        let store = ReviewStore::from_csv_reader(SAMPLE_CSV.as_bytes()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].review_id, "a1");
        assert_eq!(store.all()[1].review_id, "b2");
        assert_eq!(store.all()[1].review_body, "Slow, but friendly");
        assert_eq!(store.all()[0].location, "Denver, Colorado");
    }

    #[test]
    fn test_snake_case_id_header_and_extra_columns() {
        let csv = "review_id,ReviewBody,Location,Timestamp,Rating\nx9,Fine,\"Fresno, California\",2022-03-01 08:00:00,4\n";
        let store = ReviewStore::from_csv_reader(csv.as_bytes()).unwrap();

        assert_eq!(store.all()[0].review_id, "x9");
        assert!(store.contains_id("x9"));
    }

    #[test]
    fn test_missing_column_is_data_error() {
        let csv = "ReviewId,ReviewBody,Location\na1,Text,\"Denver, Colorado\"\n";
        let result = ReviewStore::from_csv_reader(csv.as_bytes());

        assert!(matches!(result, Err(Error::Data(_))));
    }

    #[test]
    fn test_from_csv_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let store = ReviewStore::from_csv_path(file.path()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_from_missing_path_is_io_error() {
        let result = ReviewStore::from_csv_path(Path::new("/nonexistent/reviews.csv"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_contains_id() {
        let store = ReviewStore::from_csv_reader(SAMPLE_CSV.as_bytes()).unwrap();

        assert!(store.contains_id("a1"));
        assert!(!store.contains_id("zz"));
    }

    #[test]
    fn test_empty_store() {
        let store = ReviewStore::new(Vec::new());
        assert!(store.is_empty());
        assert!(store.all().is_empty());
    }
}
