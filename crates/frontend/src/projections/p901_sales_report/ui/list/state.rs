use contracts::domain::a004_sales_record::SalesRecord;
use contracts::shared::table_view::SortState;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub fn create_state() -> RwSignal<ListState<SalesRecord>> {
    RwSignal::new(ListState::sorted_by(SortState::desc("sale_date")))
}
