mod state;

use contracts::domain::a005_vehicle_request::{RequestStatus, VehicleRequest};
use contracts::shared::summary::{count_where, sum_int_by};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::RequestStatusForm;
use crate::domain::a005_vehicle_request::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::ListPager;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::{format_number_int, SortableHeaderCell};
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_state::ListSignals;
use crate::shared::list_utils::{highlight_matches, CategoryFilter, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

fn status_label(code: &str) -> String {
    RequestStatus::parse(code)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| code.to_string())
}

#[component]
pub fn VehicleRequestList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let updating: RwSignal<Option<VehicleRequest>> = RwSignal::new(None);
    let filters_expanded = RwSignal::new(true);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_vehicle_requests().await {
                Ok(data) => state.update(|s| s.loaded(data)),
                Err(e) => set_error.set(Some(format!("Could not load vehicle requests: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let pending = Memo::new(move |_| {
        state.with(|s| s.view.summarize(|rows| count_where(rows, |r| r.status == Some(RequestStatus::Pending))))
    });
    let requested_units = Memo::new(move |_| {
        state.with(|s| s.view.summarize(|rows| sum_int_by(rows, VehicleRequest::units)))
    });

    let query = state.query();
    let sort = state.sort();
    let on_sort = state.on_sort();
    let rows = state.page_rows();

    view! {
        <PageFrame page_id="a005_vehicle_request--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Vehicle Requests"</h1>
                    <Badge>{move || state.with(|s| s.view.total_count()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="stat-strip">
                    <StatCard
                        label="Pending approval"
                        icon_name="clipboard"
                        value=Signal::derive(move || pending.get().to_string())
                        tone=Signal::derive(move || if pending.get() > 0 { StatTone::Warning } else { StatTone::Good })
                    />
                    <StatCard
                        label="Units requested"
                        icon_name="truck"
                        value=Signal::derive(move || format_number_int(requested_units.get() as f64))
                    />
                </div>

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=state.active_filters()
                    pagination_controls=move || view! { <ListPager state=state /> }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <SearchInput
                                    value=state.query()
                                    on_change=state.on_query()
                                    placeholder="Request, dealer, model..."
                                />
                            </div>
                            <CategoryFilter
                                label="Dealer"
                                options=state.category_options("dealer")
                                selected=state.category("dealer")
                                on_change=state.on_category("dealer")
                            />
                            <CategoryFilter
                                label="Model"
                                options=state.category_options("model")
                                selected=state.category("model")
                                on_change=state.on_category("model")
                            />
                            <CategoryFilter
                                label="Status"
                                options=state.category_options("status")
                                selected=state.category("status")
                                on_change=state.on_category("status")
                                display=status_label
                            />
                        </Flex>
                    }
                    header_actions=move || view! {
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| state.clear_filters()
                        >
                            "Reset"
                        </Button>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:id="a005-vehicle-request-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="#" sort_field="request_id" sort=sort on_sort=on_sort min_width=70.0 />
                                <SortableHeaderCell label="Dealer" sort_field="dealer" sort=sort on_sort=on_sort min_width=150.0 />
                                <SortableHeaderCell label="Model" sort_field="model" sort=sort on_sort=on_sort min_width=120.0 />
                                <TableHeaderCell resizable=false min_width=120.0>"Variant"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Color"</TableHeaderCell>
                                <SortableHeaderCell label="Qty" sort_field="quantity" sort=sort on_sort=on_sort min_width=70.0 align="right" />
                                <SortableHeaderCell label="Requested" sort_field="request_date" sort=sort on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Status" sort_field="status" sort=sort on_sort=on_sort min_width=100.0 />
                                <TableHeaderCell resizable=false min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|r| (r.request_id.clone(), r.status)
                                children=move |request| {
                                    let request_id = request.request_id.clone();
                                    let dealer = request.dealer_name.clone().unwrap_or_default();
                                    let model = request.model_name.clone().unwrap_or_default();
                                    let variant = request.variant_name.clone().unwrap_or_default();
                                    let color = request.color.clone().unwrap_or_default();
                                    let units = request.units();
                                    let requested = format_date_opt(request.request_date.as_deref());
                                    let badge_label = request.status_label();
                                    let badge_color = request.status_color();
                                    let can_change = !request.next_statuses().is_empty();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{request_id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&dealer, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {move || highlight_matches(&model, &query.get())}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{variant}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{color}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{units}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{requested}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge label=badge_label color=badge_color />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {can_change.then(|| view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click=move |_| updating.set(Some(request.clone()))
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || state.with(|s| s.is_loaded && s.view.total_count() == 0).then(|| view! {
                        <div class="table__empty">"No vehicle requests match the filters."</div>
                    })}
                </div>
            </div>

            {move || updating.get().map(|request| view! {
                <RequestStatusForm
                    request=request
                    on_close=move || updating.set(None)
                    on_updated=move || {
                        updating.set(None);
                        load_data();
                    }
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_label() {
        assert_eq!(status_label("SHIPPING"), "Shipping");
        assert_eq!(status_label("??"), "??");
    }
}
