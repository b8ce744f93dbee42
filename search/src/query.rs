//! Search query types.

/// A user query after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Empty or whitespace-only input: show every record.
    All,
    /// Starts-with filter on the active collection.
    Prefix(String),
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            SearchQuery::All
        } else {
            SearchQuery::Prefix(trimmed.to_string())
        }
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
