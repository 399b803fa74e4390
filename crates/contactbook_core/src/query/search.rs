//! Case-insensitive substring search across contact fields.
//!
//! # Invariants
//! - A blank query is an error, never "match everything".
//! - Matches keep snapshot order.

use crate::model::contact::{Contact, ContactField};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for search APIs.
pub type SearchResult<T> = Result<T, SearchError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Query was empty after trimming.
    EmptyQuery,
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQuery => f.write_str("search query is empty"),
        }
    }
}

impl Error for SearchError {}

/// Returns every contact with at least one field containing `query`.
///
/// `query` is trimmed and compared case-insensitively.
///
/// # Errors
/// - [`SearchError::EmptyQuery`] when `query` is blank.
pub fn search(snapshot: &[Contact], query: &str) -> SearchResult<Vec<Contact>> {
    let needle = normalize_query(query).ok_or(SearchError::EmptyQuery)?;

    Ok(snapshot
        .iter()
        .filter(|contact| matches(contact, &needle))
        .cloned()
        .collect())
}

fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

fn matches(contact: &Contact, needle: &str) -> bool {
    ContactField::ALL
        .into_iter()
        .any(|field| field.value(contact).to_lowercase().contains(needle))
}
