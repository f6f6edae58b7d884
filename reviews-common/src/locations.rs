//! Locations accepted for new review submissions
//!
//! Pre-loaded reviews are not checked against this list.

/// Known `"City, State"` locations
pub const VALID_LOCATIONS: [&str; 18] = [
    "Albuquerque, New Mexico",
    "Carlsbad, California",
    "Chula Vista, California",
    "Colorado Springs, Colorado",
    "Denver, Colorado",
    "El Cajon, California",
    "El Paso, Texas",
    "Escondido, California",
    "Fresno, California",
    "La Mesa, California",
    "Las Vegas, Nevada",
    "Los Angeles, California",
    "Oceanside, California",
    "Phoenix, Arizona",
    "Sacramento, California",
    "Salt Lake City, Utah",
    "San Diego, California",
    "Tucson, Arizona",
];

/// Whether `location` is an accepted submission location
///
/// Leading and trailing whitespace is ignored; the comparison is otherwise
/// exact and case-sensitive.
pub fn is_valid_location(location: &str) -> bool {
    let trimmed = location.trim();
    VALID_LOCATIONS.contains(&trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_location_accepted() {
        assert!(is_valid_location("Denver, Colorado"));
        assert!(is_valid_location("Salt Lake City, Utah"));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert!(is_valid_location("  San Diego, California\t"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!is_valid_location("denver, colorado"));
    }

    #[test]
    fn test_unknown_location_rejected() {
        assert!(!is_valid_location("Nowhere, Nowhere"));
        assert!(!is_valid_location(""));
    }
}
