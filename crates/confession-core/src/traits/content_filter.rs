//! Content filter port

/// Transforms a validated message before it is stored.
///
/// Implementations must be total and deterministic.
pub trait ContentFilter: Send + Sync {
    fn clean(&self, text: &str) -> String;
}

/// Stores the text unchanged
impl ContentFilter for () {
    fn clean(&self, text: &str) -> String {
        text.to_string()
    }
}
