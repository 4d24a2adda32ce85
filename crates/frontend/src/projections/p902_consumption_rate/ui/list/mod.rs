mod state;

use contracts::projections::p902_consumption_rate::average_rate;
use contracts::shared::summary::sum_int_by;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::projections::p902_consumption_rate::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::ListPager;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::{
    format_number_int, format_number_with_decimals, format_percent, SortableHeaderCell,
};
use crate::shared::icons::icon;
use crate::shared::list_state::ListSignals;
use crate::shared::list_utils::{highlight_matches, CategoryFilter, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use state::create_state;

/// Below this share of imported units sold a model is flagged as slow.
const SLOW_RATE: f64 = 30.0;

fn rate_color(rate: f64) -> &'static str {
    if rate < SLOW_RATE {
        "danger"
    } else if rate < 70.0 {
        "warning"
    } else {
        "success"
    }
}

#[component]
pub fn ConsumptionRateList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let filters_expanded = RwSignal::new(true);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_consumption_rate().await {
                Ok(rows) => state.update(|s| s.loaded(rows)),
                Err(e) => set_error.set(Some(format!("Could not load consumption rate: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let avg = Memo::new(move |_| state.with(|s| s.view.summarize(average_rate)));
    let imported = Memo::new(move |_| {
        state.with(|s| s.view.summarize(|rows| sum_int_by(rows, |r| r.imported)))
    });
    let sold = Memo::new(move |_| state.with(|s| s.view.summarize(|rows| sum_int_by(rows, |r| r.sold))));

    let query = state.query();
    let sort = state.sort();
    let on_sort = state.on_sort();
    let rows = state.page_rows();

    view! {
        <PageFrame page_id="p902_consumption_rate--report" category=PAGE_CAT_REPORT>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Consumption Rate"</h1>
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
                        label="Imported"
                        icon_name="truck"
                        value=Signal::derive(move || format_number_int(imported.get() as f64))
                    />
                    <StatCard
                        label="Sold"
                        icon_name="trending-up"
                        value=Signal::derive(move || format_number_int(sold.get() as f64))
                    />
                    <StatCard
                        label="Average rate"
                        icon_name="bar-chart"
                        value=Signal::derive(move || format_percent(avg.get()))
                        tone=Signal::derive(move || {
                            if (avg.get() as f64) < SLOW_RATE { StatTone::Warning } else { StatTone::Good }
                        })
                    />
                </div>

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=state.active_filters()
                    pagination_controls=move || view! { <ListPager state=state /> }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <SearchInput value=state.query() on_change=state.on_query() placeholder="Model, variant, dealer..." />
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
                    <Table attr:id="p902-consumption-rate-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Dealer" sort_field="dealer" sort=sort on_sort=on_sort min_width=150.0 />
                                <SortableHeaderCell label="Model" sort_field="model" sort=sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Variant" sort_field="variant" sort=sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Imported" sort_field="imported" sort=sort on_sort=on_sort min_width=90.0 align="right" />
                                <SortableHeaderCell label="Sold" sort_field="sold" sort=sort on_sort=on_sort min_width=90.0 align="right" />
                                <SortableHeaderCell label="Rate" sort_field="rate" sort=sort on_sort=on_sort min_width=100.0 align="right" />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|r| r.id.clone()
                                children=move |row| {
                                    let model = row.model.clone();
                                    let variant = row.variant.clone();
                                    let rate = format!("{}%", format_number_with_decimals(row.rate, 1));
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.dealer.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{move || highlight_matches(&model, &query.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{move || highlight_matches(&variant, &query.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{format_number_int(row.imported as f64)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{format_number_int(row.sold as f64)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>
                                                    <StatusBadge label=rate color=rate_color(row.rate) />
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || state.with(|s| s.is_loaded && s.view.total_count() == 0).then(|| view! {
                        <div class="table__empty">"No consumption data match the filters."</div>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_color_bands() {
        assert_eq!(rate_color(0.0), "danger");
        assert_eq!(rate_color(29.9), "danger");
        assert_eq!(rate_color(30.0), "warning");
        assert_eq!(rate_color(85.0), "success");
    }
}
