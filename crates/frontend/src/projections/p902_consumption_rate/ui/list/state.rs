use contracts::projections::p902_consumption_rate::ConsumptionRow;
use contracts::shared::table_view::SortState;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub fn create_state() -> RwSignal<ListState<ConsumptionRow>> {
    RwSignal::new(ListState::sorted_by(SortState::asc("rate")))
}
