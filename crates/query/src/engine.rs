use chrono::{DateTime, NaiveDate, Utc};

/// Rows per listing page, matching the public site's grids.
pub const DEFAULT_PER_PAGE: usize = 6;

/// A record the engine can search, filter and sort.
///
/// The engine never mutates the source list; every call recomputes a
/// derived view from the full input.
pub trait Queryable {
    /// Field values scanned by free-text search.
    fn search_fields(&self) -> Vec<&str>;

    /// Timestamp used for chronological sorting.
    fn sort_key(&self) -> DateTime<Utc>;

    /// Calendar date matched by the exact-date filter.
    fn date(&self) -> Option<NaiveDate> {
        None
    }

    /// Category label matched by the exact-category filter.
    fn category(&self) -> Option<&str> {
        None
    }
}

/// Chronological sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

/// Filter, sort and pagination options for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Case-insensitive free-text term; empty/absent matches everything.
    pub search: Option<String>,

    /// Exact-match calendar-date filter.
    pub date: Option<NaiveDate>,

    /// Exact-match category filter.
    pub category: Option<String>,

    pub sort: SortOrder,

    /// 1-based page index. A page beyond the available range yields an
    /// empty page, not an error.
    pub page: usize,

    pub per_page: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search: None,
            date: None,
            category: None,
            sort: SortOrder::default(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Query {
    /// Create a new empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term (builder pattern).
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Set the exact-date filter (builder pattern).
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the exact-category filter (builder pattern).
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the sort direction (builder pattern).
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Set the 1-based page index (builder pattern).
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set the page size (builder pattern).
    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    fn matches<T: Queryable>(&self, record: &T) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !term.is_empty()
                && !record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            {
                return false;
            }
        }
        if let Some(date) = self.date {
            if record.date() != Some(date) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if record.category() != Some(category.as_str()) {
                return false;
            }
        }
        true
    }
}

/// One page of a filtered, sorted listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,

    /// Post-filter match count across all pages.
    pub total: usize,

    /// 1-based index of this page.
    pub page: usize,

    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filter, sort and paginate a record list.
///
/// Search matches a record when the term occurs, case-insensitively, in any
/// of its searchable fields; structured filters are exact equality and must
/// all hold. Sorting is stable, so ties keep their input order.
pub fn run<T: Queryable + Clone>(records: &[T], query: &Query) -> Page<T> {
    let mut matched: Vec<&T> = records.iter().filter(|r| query.matches(*r)).collect();

    match query.sort {
        SortOrder::Oldest => matched.sort_by_key(|r| r.sort_key()),
        SortOrder::Newest => matched.sort_by_key(|r| std::cmp::Reverse(r.sort_key())),
    }

    let total = matched.len();
    let per_page = query.per_page.max(1);
    let total_pages = total.div_ceil(per_page);
    let start = query.page.saturating_sub(1) * per_page;

    let items = matched
        .into_iter()
        .skip(start)
        .take(per_page)
        .cloned()
        .collect();

    Page {
        items,
        total,
        page: query.page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        title: String,
        description: Option<String>,
        category: Option<String>,
        date: NaiveDate,
    }

    impl Entry {
        fn new(title: &str, date: &str) -> Self {
            Self {
                title: title.to_string(),
                description: None,
                category: None,
                date: date.parse().unwrap(),
            }
        }

        fn with_description(mut self, description: &str) -> Self {
            self.description = Some(description.to_string());
            self
        }

        fn with_category(mut self, category: &str) -> Self {
            self.category = Some(category.to_string());
            self
        }
    }

    impl Queryable for Entry {
        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.title.as_str()];
            if let Some(description) = &self.description {
                fields.push(description);
            }
            fields
        }

        fn sort_key(&self) -> DateTime<Utc> {
            self.date.and_time(NaiveTime::MIN).and_utc()
        }

        fn date(&self) -> Option<NaiveDate> {
            Some(self.date)
        }

        fn category(&self) -> Option<&str> {
            self.category.as_deref()
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("Easter Service", "2024-04-01").with_description("He is risen"),
            Entry::new("Youth Camp", "2024-03-01"),
            Entry::new("Prayer Night", "2024-04-01").with_category("Discipleship"),
            Entry::new("Bible Study", "2024-05-10").with_description("Romans part 1"),
        ]
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let records = sample();
        let page = run(&records, &Query::new().per_page(10));
        assert_eq!(page.total, records.len());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = sample();
        let page = run(&records, &Query::new().search("eASTer"));
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].title, "Easter Service");
    }

    #[test]
    fn test_search_covers_all_searchable_fields() {
        let records = sample();
        let page = run(&records, &Query::new().search("romans"));
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].title, "Bible Study");
    }

    #[test]
    fn test_search_results_are_subset_containing_term() {
        let records = sample();
        let page = run(&records, &Query::new().search("er").per_page(10));
        assert!(page.total < records.len());
        for item in &page.items {
            assert!(records.contains(item));
            assert!(item
                .search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains("er")));
        }
    }

    #[test]
    fn test_category_filter_is_exact_match() {
        let records = sample();
        let page = run(&records, &Query::new().category("Discipleship"));
        assert_eq!(page.total, 1);
        // No substring matching on categories.
        let page = run(&records, &Query::new().category("Disciple"));
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_filters_are_anded_with_search() {
        let records = sample();
        let query = Query::new()
            .search("prayer")
            .date("2024-04-01".parse().unwrap());
        assert_eq!(run(&records, &query).total, 1);

        let query = Query::new()
            .search("prayer")
            .date("2024-03-01".parse().unwrap());
        assert_eq!(run(&records, &query).total, 0);
    }

    #[test]
    fn test_date_filter_is_exact_match() {
        let records = sample();
        let page = run(&records, &Query::new().date("2024-04-01".parse().unwrap()));
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_sort_newest_and_oldest() {
        let records = sample();
        let newest = run(&records, &Query::new().per_page(10));
        assert_eq!(newest.items[0].title, "Bible Study");

        let oldest = run(&records, &Query::new().sort(SortOrder::Oldest).per_page(10));
        assert_eq!(oldest.items[0].title, "Youth Camp");
    }

    #[test]
    fn test_sort_ties_keep_input_order() {
        let records = sample();
        let page = run(&records, &Query::new().sort(SortOrder::Oldest).per_page(10));
        let titles: Vec<&str> = page.items.iter().map(|e| e.title.as_str()).collect();
        // Both 2024-04-01 entries stay in input order.
        assert_eq!(
            titles,
            ["Youth Camp", "Easter Service", "Prayer Night", "Bible Study"]
        );
    }

    #[test]
    fn test_pages_reconstruct_the_full_list() {
        let records = sample();
        let mut seen = Vec::new();
        let mut page_index = 1;
        loop {
            let page = run(&records, &Query::new().per_page(3).page(page_index));
            assert!(page.items.len() <= 3);
            if page.is_empty() {
                break;
            }
            seen.extend(page.items);
            page_index += 1;
        }
        let full = run(&records, &Query::new().per_page(records.len()));
        assert_eq!(seen, full.items);
    }

    #[test]
    fn test_page_beyond_range_is_empty() {
        let records = sample();
        let page = run(&records, &Query::new().per_page(2).page(99));
        assert!(page.is_empty());
        assert_eq!(page.total, records.len());
    }

    #[test]
    fn test_source_list_is_not_mutated() {
        let records = sample();
        let before = records.clone();
        let _ = run(&records, &Query::new().search("easter"));
        assert_eq!(records, before);
    }

    // The worked example: two records, no search, newest first, one per page.
    #[test]
    fn test_two_record_pagination_example() {
        let records = vec![
            Entry::new("Easter Service", "2024-04-01"),
            Entry::new("Youth Camp", "2024-03-01"),
        ];

        let first = run(&records, &Query::new().per_page(1).page(1));
        assert_eq!(first.items[0].title, "Easter Service");
        assert_eq!(first.total_pages, 2);

        let second = run(&records, &Query::new().per_page(1).page(2));
        assert_eq!(second.items[0].title, "Youth Camp");
    }
}
