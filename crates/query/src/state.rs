use chrono::NaiveDate;

use crate::engine::{run, Page, Query, Queryable, SortOrder};

/// Pagination-aware query owned by a single listing view.
///
/// Changing the search term or any structured filter resets the view to the
/// first page; flipping through pages never changes the filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    query: Query,
}

impl QueryState {
    pub fn new(per_page: usize) -> Self {
        Self {
            query: Query::new().per_page(per_page),
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.query.search = (!term.is_empty()).then_some(term);
        self.query.page = 1;
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.query.date = date;
        self.query.page = 1;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.query.category = category;
        self.query.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.query.sort = sort;
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.page = page.max(1);
    }

    /// Advance one page, clamped to the last page.
    pub fn next_page(&mut self, total_pages: usize) {
        self.query.page = (self.query.page + 1).min(total_pages.max(1));
    }

    /// Go back one page, clamped to the first page.
    pub fn prev_page(&mut self) {
        self.query.page = self.query.page.saturating_sub(1).max(1);
    }

    /// Run the engine over a record list with the current query.
    pub fn run<T: Queryable + Clone>(&self, records: &[T]) -> Page<T> {
        run(records, &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changing_search_resets_page() {
        let mut state = QueryState::new(2);
        state.set_page(4);
        state.set_search("camp");
        assert_eq!(state.query().page, 1);
    }

    #[test]
    fn test_changing_date_filter_resets_page() {
        let mut state = QueryState::new(2);
        state.set_page(3);
        state.set_date(Some("2024-04-01".parse().unwrap()));
        assert_eq!(state.query().page, 1);
    }

    #[test]
    fn test_changing_category_filter_resets_page() {
        let mut state = QueryState::new(2);
        state.set_page(3);
        state.set_category(Some("Discipleship".to_string()));
        assert_eq!(state.query().page, 1);
    }

    #[test]
    fn test_empty_search_term_clears_the_filter() {
        let mut state = QueryState::new(2);
        state.set_search("camp");
        state.set_search("");
        assert_eq!(state.query().search, None);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut state = QueryState::new(2);
        state.prev_page();
        assert_eq!(state.query().page, 1);

        state.next_page(3);
        state.next_page(3);
        state.next_page(3);
        assert_eq!(state.query().page, 3);
    }
}
