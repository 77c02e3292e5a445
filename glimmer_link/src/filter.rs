// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Table search filter narrowing the table to the selected identifiers.

/// Table column holding record identifiers.
pub const ID_COLUMN: usize = 0;

/// A search request for the table widget.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SearchFilter {
    pattern: String,
    regex: bool,
    smart: bool,
}

impl SearchFilter {
    /// Builds a filter matching exactly the given identifiers.
    ///
    /// Each identifier becomes an anchored, case-sensitive `^id$` term and the
    /// terms are joined with `|` in the given order. Regex metacharacters in
    /// identifiers are escaped. No identifiers yields the empty pattern, which
    /// matches every row.
    ///
    /// ```
    /// use glimmer_link::filter::SearchFilter;
    ///
    /// let filter = SearchFilter::for_ids(["Foo", "Bar"]);
    /// assert_eq!(filter.pattern(), "^Foo$|^Bar$");
    /// assert!(filter.is_regex());
    /// assert!(!filter.is_smart());
    /// ```
    pub fn for_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let pattern = ids
            .into_iter()
            .map(|id| format!("^{}$", regex::escape(id)))
            .collect::<Vec<_>>()
            .join("|");
        log::trace!("table filter rebuilt: {pattern:?}");
        Self {
            pattern,
            regex: true,
            smart: false,
        }
    }

    /// The search pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern is a regular expression.
    #[must_use]
    pub fn is_regex(&self) -> bool {
        self.regex
    }

    /// Whether the table's word-splitting smart search applies.
    #[must_use]
    pub fn is_smart(&self) -> bool {
        self.smart
    }

    /// Returns `true` if the filter matches every row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn empty_selection_matches_everything() {
        let f = SearchFilter::for_ids(core::iter::empty());
        assert!(f.is_empty());
        assert!(f.is_regex());
    }

    #[test]
    fn pattern_matches_exactly_the_selected_ids() {
        let f = SearchFilter::for_ids(["Foo", "Bar"]);
        let re = Regex::new(f.pattern()).unwrap();
        assert!(re.is_match("Foo"));
        assert!(re.is_match("Bar"));
        assert!(!re.is_match("Foo2"));
        assert!(!re.is_match("xBar"));
        assert!(!re.is_match("foo"));
    }

    #[test]
    fn metacharacters_match_literally() {
        let f = SearchFilter::for_ids(["A.1", "B+"]);
        let re = Regex::new(f.pattern()).unwrap();
        assert!(re.is_match("A.1"));
        assert!(!re.is_match("AX1"));
        assert!(re.is_match("B+"));
        assert!(!re.is_match("BB"));
    }
}
