use contracts::projections::p900_inventory_report::InventoryReportRow;
use contracts::shared::table_view::SortState;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type InventoryReportState = ListState<InventoryReportRow>;

pub fn create_state() -> RwSignal<InventoryReportState> {
    RwSignal::new(ListState::sorted_by(SortState::desc("turnover")))
}
