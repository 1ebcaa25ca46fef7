//! Filter state for the catalog browser.
//!
//! Each filter control owns one field. Setters are plain assignments that
//! report whether the stored value changed; no validation happens here, so
//! half-typed price bounds such as `""` or `"1e"` are legal intermediate
//! values.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Sentinel category meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Ordering requested from the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOption {
    /// Server-default ordering; no `sort` parameter is sent.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl SortOption {
    /// Wire value for the `sort` query parameter, or `None` for the default.
    #[must_use]
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            SortOption::Default => None,
            SortOption::PriceAsc => Some("price_asc"),
            SortOption::PriceDesc => Some("price_desc"),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Default => "No sorting",
            SortOption::PriceAsc => "Price: low to high",
            SortOption::PriceDesc => "Price: high to low",
        }
    }
}

impl FromStr for SortOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(SortOption::Default),
            "price_asc" | "asc" => Ok(SortOption::PriceAsc),
            "price_desc" | "desc" => Ok(SortOption::PriceDesc),
            other => Err(CoreError::InvalidSortOption(other.to_string())),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param().unwrap_or(""))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Raw search text as typed.
    pub search_term: String,
    /// Search text after the debounce quiet period; this is what queries use.
    pub debounced_search_term: String,
    pub selected_category: String,
    pub min_price: String,
    pub max_price: String,
    pub sort_option: SortOption,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            debounced_search_term: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            min_price: String::new(),
            max_price: String::new(),
            sort_option: SortOption::Default,
        }
    }
}

fn assign(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

impl FilterState {
    pub fn set_search_term(&mut self, value: impl Into<String>) -> bool {
        assign(&mut self.search_term, value.into())
    }

    pub fn set_debounced_search_term(&mut self, value: impl Into<String>) -> bool {
        assign(&mut self.debounced_search_term, value.into())
    }

    pub fn set_selected_category(&mut self, value: impl Into<String>) -> bool {
        assign(&mut self.selected_category, value.into())
    }

    pub fn set_min_price(&mut self, value: impl Into<String>) -> bool {
        assign(&mut self.min_price, value.into())
    }

    pub fn set_max_price(&mut self, value: impl Into<String>) -> bool {
        assign(&mut self.max_price, value.into())
    }

    pub fn set_sort_option(&mut self, value: SortOption) -> bool {
        if self.sort_option == value {
            return false;
        }
        self.sort_option = value;
        true
    }

    /// `true` while the typed search text has not yet been published.
    #[must_use]
    pub fn search_pending(&self) -> bool {
        self.search_term != self.debounced_search_term
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_selects_all_categories() {
        let state = FilterState::default();
        assert_eq!(state.selected_category, ALL_CATEGORIES);
        assert_eq!(state.sort_option, SortOption::Default);
        assert!(state.search_term.is_empty());
        assert!(!state.search_pending());
    }

    #[test]
    fn setters_report_changes_only() {
        let mut state = FilterState::default();
        assert!(state.set_min_price("10"));
        assert!(!state.set_min_price("10"));
        assert!(state.set_sort_option(SortOption::PriceDesc));
        assert!(!state.set_sort_option(SortOption::PriceDesc));
        assert!(!state.set_selected_category("All"));
    }

    #[test]
    fn price_bounds_accept_non_numeric_text() {
        let mut state = FilterState::default();
        assert!(state.set_max_price("1e"));
        assert_eq!(state.max_price, "1e");
    }

    #[test]
    fn search_is_pending_until_debounced_value_catches_up() {
        let mut state = FilterState::default();
        state.set_search_term("shirt");
        assert!(state.search_pending());
        state.set_debounced_search_term("shirt");
        assert!(!state.search_pending());
    }

    #[test]
    fn sort_option_parses_wire_values_and_aliases() {
        assert_eq!("".parse::<SortOption>().unwrap(), SortOption::Default);
        assert_eq!("none".parse::<SortOption>().unwrap(), SortOption::Default);
        assert_eq!("price_asc".parse::<SortOption>().unwrap(), SortOption::PriceAsc);
        assert_eq!("desc".parse::<SortOption>().unwrap(), SortOption::PriceDesc);
    }

    #[test]
    fn sort_option_rejects_unknown_value() {
        let err = "cheapest".parse::<SortOption>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidSortOption(ref v) if v == "cheapest"));
    }

    #[test]
    fn sort_option_display_matches_wire_value() {
        assert_eq!(SortOption::PriceAsc.to_string(), "price_asc");
        assert_eq!(SortOption::Default.to_string(), "");
    }
}
