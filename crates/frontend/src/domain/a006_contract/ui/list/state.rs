use contracts::domain::a006_contract::{sample_contracts, Contract};
use contracts::shared::table_view::SortState;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type ContractListState = ListState<Contract>;

/// Contracts are not served by the backend yet; the list starts from samples.
pub fn create_state() -> RwSignal<ContractListState> {
    let mut state = ListState::sorted_by(SortState::desc("contract_id"));
    state.loaded(sample_contracts());
    RwSignal::new(state)
}
