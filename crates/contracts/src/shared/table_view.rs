//! Generic tabular view: filter → sort → paginate over an in-memory row set.
//!
//! List pages keep the full fetched array and derive everything they render
//! from the base rows plus [`FilterState`], [`SortState`] and [`PageState`].
//! Derived views are recomputed on demand and never stored.
//!
//! ```
//! use contracts::shared::table_view::{SortValue, TableRow, TableView};
//!
//! #[derive(Clone)]
//! struct Car { model: String, qty: i64 }
//!
//! impl TableRow for Car {
//!     fn search_text(&self) -> String { self.model.clone() }
//!     fn sort_value(&self, field: &str) -> SortValue {
//!         match field {
//!             "qty" => SortValue::from(self.qty),
//!             _ => SortValue::from(self.model.as_str()),
//!         }
//!     }
//! }
//!
//! let mut view = TableView::new(10);
//! view.set_rows(vec![Car { model: "A".into(), qty: 2 }, Car { model: "B".into(), qty: 10 }]);
//! view.set_query("a");
//! assert_eq!(view.total_count(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Category selection meaning "no filter" (what the `<select>` "All" option sends).
pub const ALL: &str = "all";

/// Default number of rows per page for list pages.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Value a row exposes for one sortable column.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    fn as_text(&self) -> String {
        match self {
            SortValue::Number(n) => n.to_string(),
            SortValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl From<Option<&str>> for SortValue {
    fn from(value: Option<&str>) -> Self {
        SortValue::Text(value.unwrap_or_default().to_string())
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<usize> for SortValue {
    fn from(value: usize) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        SortValue::Number(if value { 1.0 } else { 0.0 })
    }
}

/// A flat display record that can be searched, filtered by category and sorted.
pub trait TableRow {
    /// Searchable fields concatenated into one string.
    fn search_text(&self) -> String;

    /// Value of a categorical column (dealer, model, status...).
    ///
    /// Rows that do not know the field return `None` and never match a set
    /// filter on it.
    fn category(&self, _field: &str) -> Option<String> {
        None
    }

    /// Value used when sorting by `field`. Unknown fields should return an
    /// empty text so they compare equal.
    fn sort_value(&self, field: &str) -> SortValue;
}

/// Compares two sort values: numbers numerically, anything else as
/// case-insensitive text.
pub fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        _ => a.as_text().to_lowercase().cmp(&b.as_text().to_lowercase()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn asc(key: &str) -> Self {
        Self {
            key: key.to_string(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: &str) -> Self {
        Self {
            key: key.to_string(),
            direction: SortDirection::Desc,
        }
    }

    /// Header click: same key flips the direction, another key starts ascending.
    pub fn toggle(current: Option<&SortState>, key: &str) -> SortState {
        match current {
            Some(state) if state.key == key => SortState {
                key: state.key.clone(),
                direction: state.direction.toggled(),
            },
            _ => SortState::asc(key),
        }
    }
}

/// Orders two rows by the sort key; reversed when descending.
pub fn compare_rows<R: TableRow>(a: &R, b: &R, sort: &SortState) -> Ordering {
    let ord = compare_values(&a.sort_value(&sort.key), &b.sort_value(&sort.key));
    match sort.direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

fn is_unset(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(ALL)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    /// Set categorical filters only; "all" selections are never stored.
    pub categories: BTreeMap<String, String>,
}

impl FilterState {
    pub fn with_query(query: &str) -> Self {
        Self {
            query: query.to_string(),
            categories: BTreeMap::new(),
        }
    }

    pub fn set_category(&mut self, field: &str, value: &str) {
        if is_unset(value) {
            self.categories.remove(field);
        } else {
            self.categories.insert(field.to_string(), value.to_string());
        }
    }

    pub fn category(&self, field: &str) -> Option<&str> {
        self.categories.get(field).map(String::as_str)
    }

    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || !self.categories.is_empty()
    }

    /// Row predicate: every set category equals the row's value, and the
    /// query is empty or a case-insensitive substring of the searchable text.
    pub fn matches<R: TableRow>(&self, row: &R) -> bool {
        let categories_ok = self
            .categories
            .iter()
            .all(|(field, wanted)| row.category(field).as_deref() == Some(wanted.as_str()));
        if !categories_ok {
            return false;
        }

        let needle = self.query.trim().to_lowercase();
        needle.is_empty() || row.search_text().to_lowercase().contains(&needle)
    }
}

pub fn filter_rows<'a, R: TableRow>(rows: &'a [R], filter: &FilterState) -> Vec<&'a R> {
    rows.iter().filter(|row| filter.matches(*row)).collect()
}

pub fn sort_rows<R: TableRow>(rows: &mut [&R], sort: &SortState) {
    rows.sort_by(|a, b| compare_rows(*a, *b, sort));
}

/// `ceil(count / page_size)`; zero when there is nothing to show.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return usize::from(count > 0);
    }
    count.div_ceil(page_size)
}

/// `max(1, min(page, total_pages))`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages).max(1)
}

/// Rows `[(page-1)*page_size, page*page_size)`, truncated at the end.
/// `page` is 1-based; page 0 or an empty page size yields nothing.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One rendered page together with the counters the pagination bar needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<R> {
    pub rows: Vec<R>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Base rows plus filter/sort/page state for one list page.
#[derive(Debug, Clone)]
pub struct TableView<R> {
    rows: Vec<R>,
    filter: FilterState,
    sort: Option<SortState>,
    page: PageState,
}

impl<R> Default for TableView<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            filter: FilterState::default(),
            sort: None,
            page: PageState::default(),
        }
    }
}

impl<R: TableRow + Clone> TableView<R> {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: PageState::new(page_size),
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Replaces the base rows (refresh). The page is kept and re-clamped on read.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Applies `f` to the base rows, for pages that edit records locally.
    pub fn update_rows(&mut self, f: impl FnOnce(&mut Vec<R>)) {
        f(&mut self.rows);
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.query = query.to_string();
        self.page.page = 1;
    }

    pub fn set_category(&mut self, field: &str, value: &str) {
        self.filter.set_category(field, value);
        self.page.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.page.page = 1;
    }

    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = Some(SortState::toggle(self.sort.as_ref(), key));
    }

    pub fn set_sort(&mut self, sort: Option<SortState>) {
        self.sort = sort;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page.page = clamp_page(page, self.total_pages());
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page.page_size = page_size.max(1);
        self.page.page = 1;
    }

    pub fn filtered(&self) -> Vec<&R> {
        filter_rows(&self.rows, &self.filter)
    }

    pub fn sorted(&self) -> Vec<&R> {
        let mut rows = self.filtered();
        if let Some(sort) = &self.sort {
            sort_rows(&mut rows, sort);
        }
        rows
    }

    pub fn total_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count(), self.page.page_size)
    }

    pub fn current_page(&self) -> usize {
        clamp_page(self.page.page, self.total_pages())
    }

    /// Filter, sort and slice in one pass over the base rows.
    pub fn slice(&self) -> PageSlice<R> {
        let sorted = self.sorted();
        let total_count = sorted.len();
        let pages = total_pages(total_count, self.page.page_size);
        let page = clamp_page(self.page.page, pages);
        let rows = paginate(&sorted, page, self.page.page_size)
            .iter()
            .map(|row| (*row).clone())
            .collect();

        PageSlice {
            rows,
            page,
            page_size: self.page.page_size,
            total_pages: pages,
            total_count,
        }
    }

    pub fn page_rows(&self) -> Vec<R> {
        self.slice().rows
    }

    /// Runs an aggregation over the filtered (not paginated) rows.
    pub fn summarize<S>(&self, f: impl FnOnce(&[&R]) -> S) -> S {
        f(&self.filtered())
    }

    /// Distinct values of a categorical field across all base rows, sorted.
    /// Used to fill filter drop-downs.
    pub fn category_options(&self, field: &str) -> Vec<String> {
        let mut values: Vec<String> = self
            .rows
            .iter()
            .filter_map(|row| row.category(field))
            .collect();
        values.sort_by_key(|v| v.to_lowercase());
        values.dedup();
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Car {
        model: String,
        qty: i64,
        status: String,
    }

    fn car(model: &str, qty: i64, status: &str) -> Car {
        Car {
            model: model.to_string(),
            qty,
            status: status.to_string(),
        }
    }

    impl TableRow for Car {
        fn search_text(&self) -> String {
            format!("{} {}", self.model, self.status)
        }

        fn category(&self, field: &str) -> Option<String> {
            match field {
                "status" => Some(self.status.clone()),
                "model" => Some(self.model.clone()),
                _ => None,
            }
        }

        fn sort_value(&self, field: &str) -> SortValue {
            match field {
                "qty" => SortValue::from(self.qty),
                "model" => SortValue::from(self.model.as_str()),
                "status" => SortValue::from(self.status.as_str()),
                _ => SortValue::from(""),
            }
        }
    }

    fn fleet() -> Vec<Car> {
        vec![
            car("VF 8", 4, "available"),
            car("VF 9", 0, "sold_out"),
            car("VF e34", 12, "available"),
            car("VF 5", 7, "reserved"),
            car("vf 6", 3, "available"),
        ]
    }

    #[test]
    fn test_end_to_end_scenario() {
        let rows = vec![car("A", 2, ""), car("B", 10, "")];

        let mut view = TableView::new(10);
        view.set_rows(rows.clone());
        view.set_query("a");
        assert_eq!(view.page_rows(), vec![rows[0].clone()]);

        let mut view = TableView::new(10);
        view.set_rows(rows.clone());
        view.set_sort(Some(SortState::desc("qty")));
        assert_eq!(view.page_rows(), vec![rows[1].clone(), rows[0].clone()]);

        view.set_page_size(1);
        view.set_page(2);
        assert_eq!(view.page_rows(), vec![rows[0].clone()]);
    }

    #[test]
    fn test_filter_is_subset_and_satisfies_predicate() {
        let rows = fleet();
        let mut filter = FilterState::with_query("vf");
        filter.set_category("status", "available");

        let result = filter_rows(&rows, &filter);
        assert_eq!(result.len(), 3);
        for row in result {
            assert!(rows.contains(row));
            assert!(filter.matches(row));
            assert_eq!(row.status, "available");
        }
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let rows = fleet();
        let filter = FilterState::with_query("E34");
        let result = filter_rows(&rows, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].model, "VF e34");

        let filter = FilterState::with_query("   ");
        assert_eq!(filter_rows(&rows, &filter).len(), rows.len());
    }

    #[test]
    fn test_all_selection_clears_category() {
        let mut filter = FilterState::default();
        filter.set_category("status", "reserved");
        assert_eq!(filter.category("status"), Some("reserved"));

        filter.set_category("status", "All");
        assert_eq!(filter.category("status"), None);
        assert!(!filter.is_active());

        filter.set_category("status", "");
        assert!(filter.categories.is_empty());
    }

    #[test]
    fn test_unknown_category_field_never_matches() {
        let rows = fleet();
        let mut filter = FilterState::default();
        filter.set_category("dealer", "Hanoi");
        assert!(filter_rows(&rows, &filter).is_empty());
    }

    #[test]
    fn test_direction_reverses_strict_order() {
        let rows = fleet();
        for key in ["qty", "model", "status"] {
            for a in &rows {
                for b in &rows {
                    let asc = compare_rows(a, b, &SortState::asc(key));
                    let desc = compare_rows(a, b, &SortState::desc(key));
                    assert_eq!(asc, desc.reverse(), "key {key}: {a:?} vs {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_numeric_and_text_branches() {
        // numeric: 10 > 9 (text order would say otherwise)
        assert_eq!(
            compare_values(&SortValue::from(10_i64), &SortValue::from(9_i64)),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(&SortValue::from("b"), &SortValue::from("A")),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(&SortValue::Number(f64::NAN), &SortValue::from(1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_sort_toggle() {
        let first = SortState::toggle(None, "qty");
        assert_eq!(first, SortState::asc("qty"));
        let second = SortState::toggle(Some(&first), "qty");
        assert_eq!(second, SortState::desc("qty"));
        let other = SortState::toggle(Some(&second), "model");
        assert_eq!(other, SortState::asc("model"));
    }

    #[test]
    fn test_pages_reconstruct_input() {
        let items: Vec<u32> = (0..23).collect();
        for size in 1..=25 {
            let pages = total_pages(items.len(), size);
            let mut joined = Vec::new();
            for page in 1..=pages {
                let chunk = paginate(&items, page, size);
                assert!(chunk.len() <= size);
                joined.extend_from_slice(chunk);
            }
            assert_eq!(joined, items, "page size {size}");
        }
    }

    #[test]
    fn test_paginate_out_of_range() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 0, 2).is_empty());
        assert!(paginate(&items, 3, 2).is_empty());
        assert!(paginate(&items, 1, 0).is_empty());
        assert_eq!(paginate(&items, 2, 2), &[3]);
    }

    #[test]
    fn test_total_pages_and_clamp() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn test_page_is_clamped_after_filtering() {
        let mut view = TableView::new(2);
        view.set_rows(fleet());
        view.set_page(3);
        assert_eq!(view.current_page(), 3);

        view.set_query("vf 9");
        assert_eq!(view.page_state().page, 1);

        // shrinking the base rows keeps the stored page but reads clamp it
        view.set_query("");
        view.set_page(3);
        view.set_rows(fleet().into_iter().take(2).collect());
        let slice = view.slice();
        assert_eq!(slice.page, 1);
        assert_eq!(slice.total_pages, 1);
        assert_eq!(slice.rows.len(), 2);
    }

    #[test]
    fn test_summarize_uses_filtered_rows() {
        let mut view = TableView::new(1);
        view.set_rows(fleet());
        view.set_category("status", "available");
        let total: i64 = view.summarize(|rows| rows.iter().map(|r| r.qty).sum());
        assert_eq!(total, 4 + 12 + 3);
        assert_eq!(view.page_rows().len(), 1);
    }

    #[test]
    fn test_category_options_are_distinct() {
        let mut view = TableView::new(10);
        view.set_rows(fleet());
        assert_eq!(
            view.category_options("status"),
            vec!["available", "reserved", "sold_out"]
        );
    }
}
