//! Catalog queries: category filter, free-text search, stable sort and pagination.
//!
//! A query is a pure function of the catalog and its parameters. Nothing here
//! fails: unknown sort keys, bad page numbers and unparseable fields fall back
//! to defaults or zero.

use crate::error::Error;
use crate::types::{BlogPost, Project};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Category sentinel that matches every record
pub const ALL: &str = "All";

/// A record that can be filtered, searched and sorted
pub trait Queryable {
    type SortKey: Copy + Default;

    fn category(&self) -> &str;

    /// Text searched by free-text queries
    fn search_text(&self) -> String;

    /// Ascending comparison under `key`
    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(Error::InvalidData(format!("unknown sort direction '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostSort {
    #[default]
    Date,
    Title,
    ReadTime,
}

impl PostSort {
    pub fn as_str(self) -> &'static str {
        match self {
            PostSort::Date => "date",
            PostSort::Title => "title",
            PostSort::ReadTime => "read_time",
        }
    }
}

impl FromStr for PostSort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(PostSort::Date),
            "title" => Ok(PostSort::Title),
            "readtime" | "read_time" | "read-time" => Ok(PostSort::ReadTime),
            other => Err(Error::InvalidData(format!("unknown post sort key '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSort {
    #[default]
    Title,
    Performance,
}

impl ProjectSort {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectSort::Title => "title",
            ProjectSort::Performance => "performance",
        }
    }
}

impl FromStr for ProjectSort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(ProjectSort::Title),
            "performance" => Ok(ProjectSort::Performance),
            other => Err(Error::InvalidData(format!(
                "unknown project sort key '{}'",
                other
            ))),
        }
    }
}

/// Case-insensitive title order with a case-sensitive tiebreak
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl Queryable for BlogPost {
    type SortKey = PostSort;

    fn category(&self) -> &str {
        &self.category
    }

    fn search_text(&self) -> String {
        BlogPost::search_text(self)
    }

    fn compare_by(&self, other: &Self, key: PostSort) -> Ordering {
        match key {
            // Malformed dates sort before every real date
            PostSort::Date => self.published_on().cmp(&other.published_on()),
            PostSort::Title => compare_titles(&self.title, &other.title),
            PostSort::ReadTime => self.read_time_minutes().cmp(&other.read_time_minutes()),
        }
    }
}

impl Queryable for Project {
    type SortKey = ProjectSort;

    fn category(&self) -> &str {
        &self.category
    }

    fn search_text(&self) -> String {
        Project::search_text(self)
    }

    fn compare_by(&self, other: &Self, key: ProjectSort) -> Ordering {
        match key {
            ProjectSort::Title => compare_titles(&self.title, &other.title),
            ProjectSort::Performance => self.metrics.performance.cmp(&other.metrics.performance),
        }
    }
}

/// Parameters of one listing view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery<K> {
    pub category: String,
    pub search: String,
    pub sort: K,
    pub direction: SortDirection,
    /// 1-based; anything out of range is clamped
    pub page: i64,
    pub page_size: usize,
}

impl<K: Default> CatalogQuery<K> {
    fn with_direction(direction: SortDirection, page_size: usize) -> Self {
        Self {
            category: ALL.to_string(),
            search: String::new(),
            sort: K::default(),
            direction,
            page: 1,
            page_size,
        }
    }
}

impl CatalogQuery<PostSort> {
    /// Blog listing default: newest first
    pub fn posts(page_size: usize) -> Self {
        Self::with_direction(SortDirection::Desc, page_size)
    }
}

impl CatalogQuery<ProjectSort> {
    /// Project gallery default: title A-Z
    pub fn projects(page_size: usize) -> Self {
        Self::with_direction(SortDirection::Asc, page_size)
    }
}

impl<K> CatalogQuery<K> {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn sort(mut self, key: K, direction: SortDirection) -> Self {
        self.sort = key;
        self.direction = direction;
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Normalized search needle; empty means "match everything"
    fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }

    fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// One page of query results, borrowed from the catalog
#[derive(Debug, Serialize)]
pub struct QueryPage<'a, T> {
    pub items: Vec<&'a T>,
    /// Page actually shown, after clamping
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub page_size: usize,
    pub category_counts: Vec<CategoryCount>,
}

impl<T> QueryPage<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn count_for(&self, category: &str) -> usize {
        self.category_counts
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

fn matches_needle<T: Queryable>(record: &T, needle: &str) -> bool {
    needle.is_empty() || record.search_text().to_lowercase().contains(needle)
}

fn matches_category<T: Queryable>(record: &T, category: &str) -> bool {
    category == ALL || record.category() == category
}

/// `max(1, ceil(matches / page_size))`
pub fn total_pages(matches: usize, page_size: usize) -> usize {
    matches.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `[1, total_pages]`
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = i64::try_from(total_pages.max(1)).unwrap_or(i64::MAX);
    requested.clamp(1, last) as usize
}

/// Lenient page parsing for query strings: anything unparseable is page 1
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(1)
}

/// Per-category counts over the search-filtered set.
///
/// `All` comes first, then the declared categories in order, then categories
/// present in the data but not declared, in first-seen order.
pub fn category_counts<T, C>(catalog: &[T], categories: &[C], search: &str) -> Vec<CategoryCount>
where
    T: Queryable,
    C: AsRef<str>,
{
    let needle = search.trim().to_lowercase();
    let matching: Vec<&T> = catalog
        .iter()
        .filter(|r| matches_needle(*r, &needle))
        .collect();

    let mut counts = vec![CategoryCount {
        name: ALL.to_string(),
        count: matching.len(),
    }];

    for name in categories.iter().map(|c| c.as_ref()).filter(|c| *c != ALL) {
        if counts.iter().all(|c| c.name != name) {
            counts.push(CategoryCount {
                name: name.to_string(),
                count: 0,
            });
        }
    }

    for record in &matching {
        match counts
            .iter_mut()
            .skip(1)
            .find(|c| c.name == record.category())
        {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                name: record.category().to_string(),
                count: 1,
            }),
        }
    }

    counts
}

/// Every matching record in display order
pub fn filter_and_sort<'a, T: Queryable>(
    catalog: &'a [T],
    query: &CatalogQuery<T::SortKey>,
) -> Vec<&'a T> {
    let needle = query.needle();
    let mut matching: Vec<&T> = catalog
        .iter()
        .filter(|r| matches_category(*r, &query.category))
        .filter(|r| matches_needle(*r, &needle))
        .collect();

    // sort_by is stable; reversing the comparator keeps ties in input order
    match query.direction {
        SortDirection::Asc => matching.sort_by(|a, b| a.compare_by(b, query.sort)),
        SortDirection::Desc => matching.sort_by(|a, b| b.compare_by(a, query.sort)),
    }
    matching
}

/// Run a query and return the visible page plus category counts
pub fn run_query<'a, T, C>(
    catalog: &'a [T],
    categories: &[C],
    query: &CatalogQuery<T::SortKey>,
) -> QueryPage<'a, T>
where
    T: Queryable,
    C: AsRef<str>,
{
    let matching = filter_and_sort(catalog, query);
    let page_size = query.effective_page_size();
    let total_matches = matching.len();
    let total_pages = total_pages(total_matches, page_size);
    let page = clamp_page(query.page, total_pages);

    let items = matching
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    QueryPage {
        items,
        page,
        total_pages,
        total_matches,
        page_size,
        category_counts: category_counts(catalog, categories, &query.search),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        group: &'static str,
        rank: u32,
    }

    #[derive(Debug, Clone, Copy, Default)]
    enum ItemSort {
        #[default]
        Rank,
        Name,
    }

    impl Queryable for Item {
        type SortKey = ItemSort;

        fn category(&self) -> &str {
            self.group
        }

        fn search_text(&self) -> String {
            format!("{} {}", self.name, self.group)
        }

        fn compare_by(&self, other: &Self, key: ItemSort) -> Ordering {
            match key {
                ItemSort::Rank => self.rank.cmp(&other.rank),
                ItemSort::Name => compare_titles(self.name, other.name),
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "alpha", group: "A", rank: 2 },
            Item { name: "Bravo", group: "B", rank: 1 },
            Item { name: "charlie", group: "A", rank: 2 },
            Item { name: "delta", group: "C", rank: 3 },
            Item { name: "echo", group: "B", rank: 2 },
        ]
    }

    fn query() -> CatalogQuery<ItemSort> {
        CatalogQuery {
            category: ALL.to_string(),
            search: String::new(),
            sort: ItemSort::Rank,
            direction: SortDirection::Asc,
            page: 1,
            page_size: 2,
        }
    }

    fn names<'a>(records: &[&'a Item]) -> Vec<&'a str> {
        records.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(8, 6), 2);
        assert_eq!(total_pages(13, 6), 3);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(-5, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(99, 3), 3);
        assert_eq!(clamp_page(i64::MAX, 1), 1);
        assert_eq!(clamp_page(1, 0), 1);
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some(" -2 ")), -2);
        assert_eq!(parse_page(Some("two")), 1);
        assert_eq!(parse_page(None), 1);
    }

    #[test]
    fn test_stable_sort_ascending_keeps_input_order_for_ties() {
        let catalog = items();
        let sorted = filter_and_sort(&catalog, &query());
        assert_eq!(names(&sorted), ["Bravo", "alpha", "charlie", "echo", "delta"]);
    }

    #[test]
    fn test_stable_sort_descending_keeps_input_order_for_ties() {
        let catalog = items();
        let q = query().sort(ItemSort::Rank, SortDirection::Desc);
        let sorted = filter_and_sort(&catalog, &q);
        assert_eq!(names(&sorted), ["delta", "alpha", "charlie", "echo", "Bravo"]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let catalog = items();
        let q = query().sort(ItemSort::Name, SortDirection::Asc);
        let sorted = filter_and_sort(&catalog, &q);
        assert_eq!(names(&sorted), ["alpha", "Bravo", "charlie", "delta", "echo"]);
    }

    #[test]
    fn test_category_filter_and_search_combine() {
        let catalog = items();
        let q = query().category("A").search("CHAR");
        let sorted = filter_and_sort(&catalog, &q);
        assert_eq!(names(&sorted), ["charlie"]);
    }

    #[test]
    fn test_search_is_trimmed() {
        let catalog = items();
        let q = query().search("   ");
        assert_eq!(filter_and_sort(&catalog, &q).len(), catalog.len());
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let catalog = items();
        let result = run_query(&catalog, &["All", "A", "B", "C"], &query().category("Z"));
        assert!(result.items.is_empty());
        assert_eq!(result.total_matches, 0);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.page, 1);
    }

    #[test]
    fn test_category_counts_follow_search_not_category() {
        let catalog = items();
        let q = query().category("C").search("a");
        let result = run_query(&catalog, &["All", "A", "B", "C"], &q);
        // "a" hits alpha, Bravo, charlie and delta but not echo
        assert_eq!(result.count_for(ALL), 4);
        assert_eq!(result.count_for("A"), 2);
        assert_eq!(result.count_for("B"), 1);
        assert_eq!(result.count_for("C"), 1);
        assert_eq!(names(&result.items), ["delta"]);
    }

    #[test]
    fn test_category_counts_include_undeclared_categories() {
        let catalog = items();
        let counts = category_counts(&catalog, &["All", "B", "Empty"], "");
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.name.as_str(), c.count)).collect();
        assert_eq!(
            pairs,
            [("All", 5), ("B", 2), ("Empty", 0), ("A", 2), ("C", 1)]
        );
    }

    #[test]
    fn test_pagination_and_clamping() {
        let catalog = items();
        let categories = ["All"];

        let first = run_query(&catalog, &categories, &query().page(1));
        assert_eq!(names(&first.items), ["Bravo", "alpha"]);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = run_query(&catalog, &categories, &query().page(3));
        assert_eq!(names(&last.items), ["delta"]);
        assert!(last.has_previous());
        assert!(!last.has_next());

        let beyond = run_query(&catalog, &categories, &query().page(42));
        assert_eq!(beyond.page, 3);
        assert_eq!(names(&beyond.items), ["delta"]);

        let before = run_query(&catalog, &categories, &query().page(-1));
        assert_eq!(before.page, 1);
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let catalog = items();
        let mut q = query();
        q.page_size = 0;
        let result = run_query(&catalog, &["All"], &q);
        assert_eq!(result.page_size, 1);
        assert_eq!(result.total_pages, 5);
        assert_eq!(result.items.len(), 1);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("date".parse::<PostSort>().unwrap(), PostSort::Date);
        assert_eq!("readTime".parse::<PostSort>().unwrap(), PostSort::ReadTime);
        assert_eq!("read-time".parse::<PostSort>().unwrap(), PostSort::ReadTime);
        assert_eq!(" Title ".parse::<PostSort>().unwrap(), PostSort::Title);
        assert!("likes".parse::<PostSort>().is_err());
        assert_eq!("likes".parse::<PostSort>().unwrap_or_default(), PostSort::Date);

        assert_eq!(
            "performance".parse::<ProjectSort>().unwrap(),
            ProjectSort::Performance
        );
        assert!("date".parse::<ProjectSort>().is_err());

        assert_eq!("ASC".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!(
            "descending".parse::<SortDirection>().unwrap(),
            SortDirection::Desc
        );
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::Asc.toggle(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggle(), SortDirection::Asc);
    }

    #[test]
    fn test_catalog_is_not_mutated() {
        let catalog = items();
        let before = catalog.clone();
        let q = query().sort(ItemSort::Name, SortDirection::Desc);
        let _ = run_query(&catalog, &["All"], &q);
        assert_eq!(catalog, before);
    }
}
