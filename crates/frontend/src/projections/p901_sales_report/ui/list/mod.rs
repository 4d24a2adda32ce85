mod state;

use contracts::projections::p901_sales_report::{
    rollup_by_dealer, summarize_sales, DealerSalesRow, SalesSummary,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::projections::p901_sales_report::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::ListPager;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_number_int, format_vnd, SortableHeaderCell};
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_state::ListSignals;
use crate::shared::list_utils::{highlight_matches, CategoryFilter, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use state::create_state;

/// Sales across all dealers: KPI strip, per-dealer totals of the filtered
/// records and the record table itself.
#[component]
pub fn SalesReportList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let filters_expanded = RwSignal::new(true);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_sales_report().await {
                Ok(rows) => {
                    log::debug!("Sales report: {} records", rows.len());
                    state.update(|s| s.loaded(rows));
                }
                Err(e) => set_error.set(Some(format!("Could not load sales records: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let summary: Memo<SalesSummary> =
        Memo::new(move |_| state.with(|s| s.view.summarize(summarize_sales)));
    let by_dealer: Memo<Vec<DealerSalesRow>> =
        Memo::new(move |_| state.with(|s| s.view.summarize(rollup_by_dealer)));

    let query = state.query();
    let sort = state.sort();
    let on_sort = state.on_sort();
    let rows = state.page_rows();

    view! {
        <PageFrame page_id="p901_sales_report--report" category=PAGE_CAT_REPORT>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Sales Report"</h1>
                    <Badge>{move || summary.get().orders.to_string()}</Badge>
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
                        label="Orders"
                        icon_name="clipboard"
                        value=Signal::derive(move || format_number_int(summary.get().orders as f64))
                    />
                    <StatCard
                        label="Units sold"
                        icon_name="car"
                        value=Signal::derive(move || format_number_int(summary.get().units as f64))
                    />
                    <StatCard
                        label="Revenue"
                        icon_name="money"
                        value=Signal::derive(move || format_vnd(summary.get().revenue))
                    />
                    <StatCard
                        label="Average order"
                        icon_name="trending-up"
                        value=Signal::derive(move || format_vnd(summary.get().average_order_value as f64))
                    />
                </div>

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=state.active_filters()
                    pagination_controls=move || view! { <ListPager state=state /> }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <SearchInput value=state.query() on_change=state.on_query() placeholder="Sale, customer, model..." />
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
                                label="Month"
                                options=state.category_options("period")
                                selected=state.category("period")
                                on_change=state.on_category("period")
                            />
                            <CategoryFilter
                                label="Status"
                                options=state.category_options("status")
                                selected=state.category("status")
                                on_change=state.on_category("status")
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

                <h2 class="section__title">"By dealer"</h2>
                <div class="table-wrapper">
                    <Table attr:id="p901-sales-by-dealer-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Dealer"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Orders"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Units"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Revenue"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || by_dealer.get()
                                key=|r| r.dealer.clone()
                                children=move |row| view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{row.dealer.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class="table__cell--right">
                                            <TableCellLayout>{row.orders.to_string()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class="table__cell--right">
                                            <TableCellLayout>{format_number_int(row.units as f64)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class="table__cell--right">
                                            <TableCellLayout>{format_vnd(row.revenue)}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <h2 class="section__title">"Records"</h2>
                <div class="table-wrapper">
                    <Table attr:id="p901-sales-records-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Sale" sort_field="sale_id" sort=sort on_sort=on_sort min_width=80.0 />
                                <SortableHeaderCell label="Dealer" sort_field="dealer" sort=sort on_sort=on_sort min_width=150.0 />
                                <SortableHeaderCell label="Customer" sort_field="customer" sort=sort on_sort=on_sort min_width=150.0 />
                                <SortableHeaderCell label="Model" sort_field="model" sort=sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Qty" sort_field="quantity" sort=sort on_sort=on_sort min_width=70.0 align="right" />
                                <SortableHeaderCell label="Amount" sort_field="total_amount" sort=sort on_sort=on_sort min_width=150.0 align="right" />
                                <SortableHeaderCell label="Date" sort_field="sale_date" sort=sort on_sort=on_sort min_width=100.0 />
                                <TableHeaderCell resizable=false min_width=100.0>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|r| r.sale_id.clone()
                                children=move |record| {
                                    let customer = record.customer_name.clone().unwrap_or_default();
                                    let model = record.model();
                                    let sale_id = record.sale_id.clone();
                                    let dealer = record.dealer();
                                    let units = record.units().to_string();
                                    let amount = format_vnd(record.amount());
                                    let sale_date = format_date_opt(record.sale_date.as_deref());
                                    let status = record.status.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{sale_id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{dealer}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{move || highlight_matches(&customer, &query.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{move || highlight_matches(&model, &query.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{units}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{amount}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{sale_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{status}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || state.with(|s| s.is_loaded && s.view.total_count() == 0).then(|| view! {
                        <div class="table__empty">"No sales records match the filters."</div>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}
