use contracts::domain::a005_vehicle_request::VehicleRequest;
use contracts::shared::table_view::SortState;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type VehicleRequestListState = ListState<VehicleRequest>;

pub fn create_state() -> RwSignal<VehicleRequestListState> {
    RwSignal::new(ListState::sorted_by(SortState::desc("request_date")))
}
