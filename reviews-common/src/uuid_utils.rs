//! UUID utilities

use uuid::Uuid;

/// Generate a new UUIDv4
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

/// Generate a UUIDv4 string not already taken
///
/// `is_taken` is consulted for every candidate; a colliding candidate is
/// discarded and a fresh one drawn.
pub fn generate_unique<F>(is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    loop {
        let candidate = generate().to_string();
        if !is_taken(&candidate) {
            return candidate;
        }
    }
}
