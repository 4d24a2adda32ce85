//! Sortable table header cell
//!
//! ```text
//! <SortableHeaderCell
//!     label="Quantity"
//!     sort_field="quantity"
//!     sort=Signal::derive(move || state.with(|s| s.view.sort().cloned()))
//!     on_sort=Callback::new(toggle_sort)
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::table_view::SortState;
use leptos::prelude::*;
use thaw::*;

/// Header cell with a sort indicator (▲▼) that reports clicks by field key.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Key passed to `TableRow::sort_value`
    sort_field: &'static str,

    /// Active sort of the table, `None` for the fetch order
    #[prop(into)]
    sort: Signal<Option<SortState>>,

    on_sort: Callback<&'static str>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// left/right
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_field)
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(s.as_ref(), sort_field))>
                    {move || sort.with(|s| get_sort_indicator(s.as_ref(), sort_field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
