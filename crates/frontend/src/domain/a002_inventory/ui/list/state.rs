use contracts::domain::a002_inventory::InventoryRow;
use contracts::shared::table_view::SortState;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type InventoryListState = ListState<InventoryRow>;

pub fn create_state() -> RwSignal<InventoryListState> {
    RwSignal::new(ListState::sorted_by(SortState::asc("model")))
}
