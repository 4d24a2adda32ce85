//! Reactive glue between a list page and its `TableView`.
//!
//! Every list page keeps one `RwSignal<ListState<Row>>`. The extension trait
//! below hands out the signals and callbacks the shared widgets expect, so
//! pages only describe their columns.

use contracts::shared::table_view::{SortState, TableRow, TableView, ALL};
use leptos::prelude::*;

use crate::shared::config::config;

#[derive(Debug, Clone)]
pub struct ListState<R> {
    pub view: TableView<R>,
    pub is_loaded: bool,
}

impl<R: TableRow + Clone> ListState<R> {
    pub fn new() -> Self {
        Self {
            view: TableView::new(config().ui.default_page_size),
            is_loaded: false,
        }
    }

    pub fn sorted_by(sort: SortState) -> Self {
        let mut state = Self::new();
        state.view.set_sort(Some(sort));
        state
    }

    /// Replaces the rows after a fetch; filters, sort and page survive.
    pub fn loaded(&mut self, rows: Vec<R>) {
        self.view.set_rows(rows);
        self.is_loaded = true;
    }

    /// Edits the first row matching `is_target` in place, for pages that
    /// keep their records locally.
    pub fn edit_row(
        &mut self,
        is_target: impl Fn(&R) -> bool,
        edit: impl FnOnce(&mut R) -> Result<(), String>,
    ) -> Result<(), String> {
        let mut result = Err("Record not found".to_string());
        self.view.update_rows(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| is_target(r)) {
                result = edit(row);
            }
        });
        result
    }
}

impl<R: TableRow + Clone> Default for ListState<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters for the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<R: TableRow + Clone> ListState<R> {
    pub fn pager_info(&self) -> PagerInfo {
        let page = self.view.page_state();
        PagerInfo {
            page: self.view.current_page(),
            page_size: page.page_size,
            total_pages: self.view.total_pages(),
            total_count: self.view.total_count(),
        }
    }
}

pub trait ListSignals<R: Send + Sync + 'static> {
    fn page_rows(self) -> Signal<Vec<R>>;
    fn pager(self) -> Memo<PagerInfo>;
    fn sort(self) -> Signal<Option<SortState>>;
    fn on_sort(self) -> Callback<&'static str>;
    fn query(self) -> Signal<String>;
    fn on_query(self) -> Callback<String>;
    /// Selected value of a categorical filter, `"all"` when unset.
    fn category(self, field: &'static str) -> Signal<String>;
    fn category_options(self, field: &'static str) -> Signal<Vec<String>>;
    fn on_category(self, field: &'static str) -> Callback<String>;
    fn on_page(self) -> Callback<usize>;
    fn on_page_size(self) -> Callback<usize>;
    fn active_filters(self) -> Signal<usize>;
    fn clear_filters(self);
}

impl<R> ListSignals<R> for RwSignal<ListState<R>>
where
    R: TableRow + Clone + Send + Sync + 'static,
{
    fn page_rows(self) -> Signal<Vec<R>> {
        Signal::derive(move || self.with(|s| s.view.page_rows()))
    }

    fn pager(self) -> Memo<PagerInfo> {
        Memo::new(move |_| self.with(|s| s.pager_info()))
    }

    fn sort(self) -> Signal<Option<SortState>> {
        Signal::derive(move || self.with(|s| s.view.sort().cloned()))
    }

    fn on_sort(self) -> Callback<&'static str> {
        Callback::new(move |field: &'static str| self.update(|s| s.view.toggle_sort(field)))
    }

    fn query(self) -> Signal<String> {
        Signal::derive(move || self.with(|s| s.view.filter().query.clone()))
    }

    fn on_query(self) -> Callback<String> {
        Callback::new(move |query: String| self.update(|s| s.view.set_query(&query)))
    }

    fn category(self, field: &'static str) -> Signal<String> {
        Signal::derive(move || {
            self.with(|s| s.view.filter().category(field).unwrap_or(ALL).to_string())
        })
    }

    fn category_options(self, field: &'static str) -> Signal<Vec<String>> {
        Signal::derive(move || self.with(|s| s.view.category_options(field)))
    }

    fn on_category(self, field: &'static str) -> Callback<String> {
        Callback::new(move |value: String| self.update(|s| s.view.set_category(field, &value)))
    }

    fn on_page(self) -> Callback<usize> {
        Callback::new(move |page: usize| self.update(|s| s.view.set_page(page)))
    }

    fn on_page_size(self) -> Callback<usize> {
        Callback::new(move |size: usize| self.update(|s| s.view.set_page_size(size)))
    }

    fn active_filters(self) -> Signal<usize> {
        Signal::derive(move || {
            self.with(|s| {
                let filter = s.view.filter();
                filter.categories.len() + usize::from(!filter.query.trim().is_empty())
            })
        })
    }

    fn clear_filters(self) {
        self.update(|s| s.view.clear_filters());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table_view::SortValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Unit {
        model: &'static str,
        qty: i64,
    }

    impl TableRow for Unit {
        fn search_text(&self) -> String {
            self.model.to_string()
        }

        fn sort_value(&self, field: &str) -> SortValue {
            match field {
                "qty" => SortValue::from(self.qty),
                _ => SortValue::from(self.model),
            }
        }
    }

    #[test]
    fn test_pager_info_follows_filter() {
        let mut state = ListState::<Unit>::sorted_by(SortState::desc("qty"));
        assert!(!state.is_loaded);
        state.loaded(vec![Unit { model: "A", qty: 2 }, Unit { model: "B", qty: 10 }]);
        state.view.set_page_size(1);
        state.view.set_page(2);

        assert_eq!(
            state.pager_info(),
            PagerInfo { page: 2, page_size: 1, total_pages: 2, total_count: 2 }
        );
        assert_eq!(state.view.page_rows(), vec![Unit { model: "A", qty: 2 }]);

        state.view.set_query("b");
        assert_eq!(state.pager_info().page, 1);
        assert_eq!(state.pager_info().total_count, 1);
    }

    #[test]
    fn test_signal_accessors_drive_the_page() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(ListState::<Unit>::sorted_by(SortState::desc("qty")));
            state.update(|s| s.loaded(vec![Unit { model: "A", qty: 2 }, Unit { model: "B", qty: 10 }]));

            let rows = state.page_rows();
            let query = state.query();
            let active = state.active_filters();
            assert_eq!(rows.get_untracked()[0].model, "B");

            state.on_query().run("a".to_string());
            assert_eq!(query.get_untracked(), "a");
            assert_eq!(active.get_untracked(), 1);
            assert_eq!(rows.get_untracked(), vec![Unit { model: "A", qty: 2 }]);

            state.clear_filters();
            assert_eq!(active.get_untracked(), 0);
            assert_eq!(rows.get_untracked().len(), 2);
        });
    }

    #[test]
    fn test_edit_row() {
        let mut state = ListState::<Unit>::new();
        state.loaded(vec![Unit { model: "A", qty: 2 }, Unit { model: "B", qty: 10 }]);

        let bumped = state.edit_row(|u| u.model == "B", |u| {
            u.qty += 1;
            Ok(())
        });
        assert_eq!(bumped, Ok(()));
        assert_eq!(state.view.rows()[1].qty, 11);

        let refused = state.edit_row(|u| u.model == "A", |_| Err("locked".to_string()));
        assert_eq!(refused, Err("locked".to_string()));
        assert!(state.edit_row(|u| u.model == "Z", |_| Ok(())).is_err());
    }
}
