mod state;

use contracts::domain::a002_inventory::{summarize_inventory, InventorySummary, StockLevel};
use contracts::system::auth::ApiScope;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_inventory::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::ListPager;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::{format_number_int, format_vnd, SortableHeaderCell};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_state::ListSignals;
use crate::shared::list_utils::{highlight_matches, CategoryFilter, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;
use state::create_state;

fn stock_badge_color(level: StockLevel) -> &'static str {
    match level {
        StockLevel::OutOfStock => "danger",
        StockLevel::Low => "warning",
        StockLevel::InStock => "success",
    }
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let scope = Signal::derive(move || {
        auth_state.with(|s| s.role().map(|r| r.api_scope()).unwrap_or(ApiScope::Dealer))
    });
    let is_evm = Signal::derive(move || scope.get() == ApiScope::Evm);
    let threshold = config().ui.low_stock_threshold;

    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let filters_expanded = RwSignal::new(false);

    let load_data = move || {
        let scope = scope.get_untracked();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_inventory(scope).await {
                Ok(rows) => {
                    log::debug!("Inventory ({}): {} rows", scope.as_path(), rows.len());
                    state.update(|s| s.loaded(rows));
                }
                Err(e) => set_error.set(Some(format!("Could not load inventory: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let summary: Memo<InventorySummary> = Memo::new(move |_| {
        state.with(|s| s.view.summarize(|rows| summarize_inventory(rows, threshold)))
    });

    let query = state.query();
    let sort = state.sort();
    let on_sort = state.on_sort();
    let rows = state.page_rows();

    view! {
        <PageFrame page_id="a002_inventory--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_evm.get() { "Inventory (all dealers)" } else { "Inventory" }}
                    </h1>
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
                        label="Units in stock"
                        icon_name="car"
                        value=Signal::derive(move || format_number_int(summary.get().total_units as f64))
                    />
                    <StatCard
                        label="Models"
                        icon_name="folder-open"
                        value=Signal::derive(move || summary.get().distinct_models.to_string())
                    />
                    <StatCard
                        label="Low stock"
                        icon_name="alert"
                        value=Signal::derive(move || summary.get().low_stock_rows.to_string())
                        tone=Signal::derive(move || {
                            if summary.get().low_stock_rows > 0 { StatTone::Warning } else { StatTone::Good }
                        })
                        subtitle=Signal::derive(move || Some(format!("{} units or fewer", threshold)))
                    />
                    <StatCard
                        label="Stock value"
                        icon_name="money"
                        value=Signal::derive(move || format_vnd(summary.get().stock_value))
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
                                    placeholder="Model, variant, color..."
                                />
                            </div>
                            <Show when=move || is_evm.get()>
                                <CategoryFilter
                                    label="Dealer"
                                    options=state.category_options("dealer")
                                    selected=state.category("dealer")
                                    on_change=state.on_category("dealer")
                                />
                            </Show>
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
                    <Table attr:id="a002-inventory-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <Show when=move || is_evm.get()>
                                    <SortableHeaderCell label="Dealer" sort_field="dealer" sort=sort on_sort=on_sort min_width=140.0 />
                                </Show>
                                <SortableHeaderCell label="Model" sort_field="model" sort=sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Variant" sort_field="variant" sort=sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Color" sort_field="color" sort=sort on_sort=on_sort min_width=90.0 />
                                <SortableHeaderCell label="Quantity" sort_field="quantity" sort=sort on_sort=on_sort min_width=90.0 align="right" />
                                <SortableHeaderCell label="Price" sort_field="price" sort=sort on_sort=on_sort min_width=140.0 align="right" />
                                <TableHeaderCell resizable=false min_width=110.0>"Stock"</TableHeaderCell>
                                <SortableHeaderCell label="Status" sort_field="status" sort=sort on_sort=on_sort min_width=100.0 />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|r| r.id.clone()
                                children=move |row| {
                                    let level = row.stock_level(threshold);
                                    let model = row.model.clone();
                                    let variant = row.variant.clone();
                                    let dealer = row.dealer.clone();
                                    view! {
                                        <TableRow>
                                            {move || is_evm.get().then(|| {
                                                let dealer = dealer.clone();
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{dealer}</TableCellLayout>
                                                    </TableCell>
                                                }
                                            })}
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {move || highlight_matches(&model, &query.get())}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&variant, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.color.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{format_number_int(row.quantity as f64)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{format_vnd(row.price)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge label=level.label() color=stock_badge_color(level) />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.status.clone()}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || state.with(|s| s.is_loaded && s.view.total_count() == 0).then(|| view! {
                        <div class="table__empty">"No vehicles match the filters."</div>
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
    fn test_stock_badge_colors() {
        assert_eq!(stock_badge_color(StockLevel::of(0, 5)), "danger");
        assert_eq!(stock_badge_color(StockLevel::of(5, 5)), "warning");
        assert_eq!(stock_badge_color(StockLevel::of(6, 5)), "success");
    }
}
