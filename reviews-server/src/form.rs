//! URL-encoded key/value pair helpers
//!
//! Query strings and form bodies are decoded into ordered pairs so repeated
//! keys can be resolved explicitly: the first non-empty occurrence wins and
//! blank values count as absent.

/// Decode an `application/x-www-form-urlencoded` string into ordered pairs
pub fn decode_pairs(input: &str) -> Result<Vec<(String, String)>, serde_urlencoded::de::Error> {
    serde_urlencoded::from_str(input)
}

/// First non-empty value for `key`
pub fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.clone())
}
