use contracts::shared::table_view::SortState;
use contracts::system::users::DealerAccount;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type DealerAccountsListState = ListState<DealerAccount>;

pub fn create_state() -> RwSignal<DealerAccountsListState> {
    RwSignal::new(ListState::sorted_by(SortState::asc("full_name")))
}
