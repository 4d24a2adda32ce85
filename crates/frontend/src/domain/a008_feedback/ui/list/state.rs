use contracts::domain::a008_feedback::{sample_feedback, Feedback};
use contracts::shared::table_view::SortState;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type FeedbackListState = ListState<Feedback>;

pub fn create_state() -> RwSignal<FeedbackListState> {
    let mut state = ListState::sorted_by(SortState::desc("created_date"));
    state.loaded(sample_feedback());
    RwSignal::new(state)
}
