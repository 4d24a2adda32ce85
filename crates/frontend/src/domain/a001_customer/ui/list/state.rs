use contracts::domain::a001_customer::Customer;
use contracts::shared::table_view::SortState;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type CustomerListState = ListState<Customer>;

pub fn create_state() -> RwSignal<CustomerListState> {
    RwSignal::new(ListState::sorted_by(SortState::desc("created_at")))
}
