use contracts::domain::a007_quotation::{sample_quotations, Quotation};
use contracts::shared::table_view::SortState;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type QuotationListState = ListState<Quotation>;

pub fn create_state() -> RwSignal<QuotationListState> {
    let mut state = ListState::sorted_by(SortState::desc("created_date"));
    state.loaded(sample_quotations());
    RwSignal::new(state)
}
