//! Query builder: maps a [`FilterState`] onto the `/products` query parameters.
//!
//! Each rule applies independently and empty or default fields are omitted.
//! Price bounds pass through as raw strings, so an inverted range such as
//! `min_price=10&max_price=5` reaches the server untouched.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::filters::{FilterState, ALL_CATEGORIES};

/// Characters left unescaped in encoded query values (RFC 3986 unreserved).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Canonical, ordered parameter set for one `/products` request.
///
/// Two queries are equal iff every parameter matches, which is what the
/// fetch orchestrator diffs on to decide whether a new request is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProductQuery {
    params: Vec<(&'static str, String)>,
}

impl ProductQuery {
    #[must_use]
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Looks up a parameter value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Percent-encoded `key=value&...` string, without a leading `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn push_if_present(&mut self, key: &'static str, value: &str) {
        if !value.is_empty() {
            self.params.push((key, value.to_string()));
        }
    }
}

impl fmt::Display for ProductQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Builds the outbound query for the current filter state.
///
/// Uses the debounced search term, never the raw one.
#[must_use]
pub fn build_query(state: &FilterState) -> ProductQuery {
    let mut query = ProductQuery::default();

    query.push_if_present("search", &state.debounced_search_term);

    if state.selected_category != ALL_CATEGORIES {
        query.push_if_present("category", &state.selected_category);
    }

    if let Some(sort) = state.sort_option.as_param() {
        query.push_if_present("sort", sort);
    }

    query.push_if_present("min_price", &state.min_price);
    query.push_if_present("max_price", &state.max_price);

    query
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
