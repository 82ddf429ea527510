//! Record Filters
//!
//! Free-text search and parent-id (relationship) filtering.

use crate::models::{Comment, Post, Todo, User};

/// Fields a record is searched by
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

impl Searchable for Todo {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

impl Searchable for Post {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.body.as_str()]
    }
}

impl Searchable for Comment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.body.as_str()]
    }
}

/// Case-insensitive substring match on any search field
pub fn matches_search<T: Searchable>(record: &T, term: &str) -> bool {
    let term = term.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Keeps records matching `term`; an empty term keeps everything
pub fn filter_by_search<T: Searchable>(records: Vec<T>, term: &str) -> Vec<T> {
    if term.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| matches_search(record, term))
        .collect()
}

/// Reads a query-string value the way JavaScript `==` does against a number:
/// the string is trimmed and read as a number, blank reads as 0.
pub fn loose_number(query: &str) -> Option<f64> {
    let query = query.trim();
    if query.is_empty() {
        return Some(0.0);
    }
    query.parse::<f64>().ok()
}

/// `loose_number`, kept only when it names a whole non-negative id
pub fn loose_id(query: &str) -> Option<u64> {
    loose_number(query).and_then(whole_id)
}

pub fn whole_id(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0).then(|| value as u64)
}

pub fn loosely_equals(key: u64, query: &str) -> bool {
    loose_number(query).is_some_and(|value| value == key as f64)
}

/// Restricts records to one parent. `None` or an empty value leaves them alone.
pub fn filter_by_parent<T>(records: Vec<T>, parent: Option<&str>, key: impl Fn(&T) -> u64) -> Vec<T> {
    match parent {
        Some(query) if !query.is_empty() => records
            .into_iter()
            .filter(|record| loosely_equals(key(record), query))
            .collect(),
        _ => records,
    }
}
