use contracts::domain::a003_promotion::PromotionRow;
use contracts::shared::table_view::SortState;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type PromotionListState = ListState<PromotionRow>;

pub fn create_state() -> RwSignal<PromotionListState> {
    RwSignal::new(ListState::sorted_by(SortState::desc("start_date")))
}
