mod state;

use contracts::projections::p900_inventory_report::{summarize_report, InventoryReportSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::projections::p900_inventory_report::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::ListPager;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{
    format_number_int, format_number_with_decimals, format_percent, SortableHeaderCell,
};
use crate::shared::icons::icon;
use crate::shared::list_state::ListSignals;
use crate::shared::list_utils::{highlight_matches, CategoryFilter, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use state::create_state;

/// Stock/sales turnover per dealer and model.
#[component]
pub fn InventoryReportList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let filters_expanded = RwSignal::new(true);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_inventory_report().await {
                Ok(rows) => state.update(|s| s.loaded(rows)),
                Err(e) => set_error.set(Some(format!("Could not load inventory report: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let summary: Memo<InventoryReportSummary> =
        Memo::new(move |_| state.with(|s| s.view.summarize(summarize_report)));

    let query = state.query();
    let sort = state.sort();
    let on_sort = state.on_sort();
    let rows = state.page_rows();

    view! {
        <PageFrame page_id="p900_inventory_report--report" category=PAGE_CAT_REPORT>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inventory Report"</h1>
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
                        label="In stock"
                        icon_name="car"
                        value=Signal::derive(move || format_number_int(summary.get().total_stock as f64))
                    />
                    <StatCard
                        label="Sold"
                        icon_name="trending-up"
                        value=Signal::derive(move || format_number_int(summary.get().total_sold as f64))
                    />
                    <StatCard
                        label="Average turnover"
                        icon_name="bar-chart"
                        value=Signal::derive(move || format_percent(summary.get().average_turnover))
                    />
                </div>

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=state.active_filters()
                    pagination_controls=move || view! { <ListPager state=state /> }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <SearchInput value=state.query() on_change=state.on_query() placeholder="Dealer, model, variant..." />
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
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:id="p900-inventory-report-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Dealer" sort_field="dealer" sort=sort on_sort=on_sort min_width=150.0 />
                                <SortableHeaderCell label="Model" sort_field="model" sort=sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Variant" sort_field="variant" sort=sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Stock" sort_field="stock" sort=sort on_sort=on_sort min_width=90.0 align="right" />
                                <SortableHeaderCell label="Sold" sort_field="sold" sort=sort on_sort=on_sort min_width=90.0 align="right" />
                                <SortableHeaderCell label="Turnover" sort_field="turnover" sort=sort on_sort=on_sort min_width=100.0 align="right" />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|r| r.id.clone()
                                children=move |row| {
                                    let dealer = row.dealer.clone();
                                    let model = row.model.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{move || highlight_matches(&dealer, &query.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{move || highlight_matches(&model, &query.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.variant.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{format_number_int(row.stock as f64)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{format_number_int(row.sold as f64)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{format!("{}%", format_number_with_decimals(row.turnover, 1))}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || state.with(|s| s.is_loaded && s.view.total_count() == 0).then(|| view! {
                        <div class="table__empty">"No report rows match the filters."</div>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}
