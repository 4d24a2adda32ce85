mod state;

use contracts::domain::a003_promotion::{
    count_active, DiscountType, Promotion, PromotionRow, PromotionStatus,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::{AssignDealersForm, DeletePromotionConfirm, PromotionForm};
use crate::domain::a003_promotion::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::ListPager;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::{format_number_with_decimals, format_vnd, SortableHeaderCell};
use crate::shared::date_utils::{format_date_opt, today};
use crate::shared::icons::icon;
use crate::shared::list_state::ListSignals;
use crate::shared::list_utils::{highlight_matches, CategoryFilter, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

fn status_color(status: PromotionStatus) -> &'static str {
    match status {
        PromotionStatus::Active => "success",
        PromotionStatus::Upcoming => "brand",
        PromotionStatus::Expired => "subtle",
        PromotionStatus::Inactive => "danger",
    }
}

fn status_label(code: &str) -> String {
    [
        PromotionStatus::Upcoming,
        PromotionStatus::Active,
        PromotionStatus::Expired,
        PromotionStatus::Inactive,
    ]
    .into_iter()
    .find(|s| s.code() == code)
    .map(|s| s.label().to_string())
    .unwrap_or_else(|| code.to_string())
}

fn discount_type_label(code: &str) -> String {
    DiscountType::parse(code)
        .map(|t| t.label().to_string())
        .unwrap_or_else(|| code.to_string())
}

fn format_discount(promotion: &Promotion) -> String {
    match promotion.discount_type {
        Some(DiscountType::Percentage) => {
            format!("{}%", format_number_with_decimals(promotion.value(), 1))
        }
        Some(DiscountType::FixedAmount) => format_vnd(promotion.value()),
        None => format_number_with_decimals(promotion.value(), 1),
    }
}

/// Which dialog is open.
#[derive(Debug, Clone, PartialEq)]
enum Dialog {
    Create,
    Edit(Promotion),
    Delete(Promotion),
    Assign(Promotion),
}

#[component]
pub fn PromotionList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let dialog: RwSignal<Option<Dialog>> = RwSignal::new(None);
    let filters_expanded = RwSignal::new(true);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_promotions().await {
                Ok(data) => {
                    let rows = PromotionRow::rows(data, today());
                    state.update(|s| s.loaded(rows));
                }
                Err(e) => set_error.set(Some(format!("Could not load promotions: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let active_count = Memo::new(move |_| state.with(|s| s.view.summarize(count_active)));
    let total = Signal::derive(move || state.with(|s| s.view.total_count()));

    let after_change = move || {
        dialog.set(None);
        load_data();
    };

    let query = state.query();
    let sort = state.sort();
    let on_sort = state.on_sort();
    let rows = state.page_rows();

    view! {
        <PageFrame page_id="a003_promotion--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Promotions"</h1>
                    <Badge>{move || total.get().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| dialog.set(Some(Dialog::Create))
                    >
                        {icon("plus")}
                        " New"
                    </Button>
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
                        label="Promotions"
                        icon_name="tag"
                        value=Signal::derive(move || total.get().to_string())
                    />
                    <StatCard
                        label="Active today"
                        icon_name="check"
                        value=Signal::derive(move || active_count.get().to_string())
                        tone=Signal::derive(move || {
                            if active_count.get() > 0 { StatTone::Good } else { StatTone::Neutral }
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
                                <SearchInput
                                    value=state.query()
                                    on_change=state.on_query()
                                    placeholder="Name, description or dealer..."
                                />
                            </div>
                            <CategoryFilter
                                label="Status"
                                options=state.category_options("status")
                                selected=state.category("status")
                                on_change=state.on_category("status")
                                display=status_label
                            />
                            <CategoryFilter
                                label="Discount type"
                                options=state.category_options("discount_type")
                                selected=state.category("discount_type")
                                on_change=state.on_category("discount_type")
                                display=discount_type_label
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
                    <Table attr:id="a003-promotion-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Name" sort_field="name" sort=sort on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Discount" sort_field="discount_value" sort=sort on_sort=on_sort min_width=120.0 align="right" />
                                <SortableHeaderCell label="Start" sort_field="start_date" sort=sort on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="End" sort_field="end_date" sort=sort on_sort=on_sort min_width=100.0 />
                                <TableHeaderCell resizable=false min_width=180.0>"Dealers"</TableHeaderCell>
                                <SortableHeaderCell label="Status" sort_field="status" sort=sort on_sort=on_sort min_width=100.0 />
                                <TableHeaderCell resizable=false min_width=120.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|r| r.promotion.promotion_id.clone()
                                children=move |row| {
                                    let promotion = &row.promotion;
                                    let name = promotion.display_name();
                                    let discount = format_discount(promotion);
                                    let start = format_date_opt(promotion.start_date.as_deref());
                                    let end = format_date_opt(promotion.end_date.as_deref());
                                    let dealers = row.dealers_label();
                                    let status = row.status;
                                    let for_edit = promotion.clone();
                                    let for_delete = promotion.clone();
                                    let for_assign = promotion.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {move || highlight_matches(&name, &query.get())}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{discount}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{start}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{end}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{dealers}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge label=status.label() color=status_color(status) />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| dialog.set(Some(Dialog::Assign(for_assign.clone())))
                                                    >
                                                        {icon("link")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| dialog.set(Some(Dialog::Edit(for_edit.clone())))
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| dialog.set(Some(Dialog::Delete(for_delete.clone())))
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || state.with(|s| s.is_loaded && s.view.total_count() == 0).then(|| view! {
                        <div class="table__empty">"No promotions match the filters."</div>
                    })}
                </div>
            </div>

            {move || dialog.get().map(|d| match d {
                Dialog::Create => view! {
                    <PromotionForm on_close=move || dialog.set(None) on_saved=after_change />
                }.into_any(),
                Dialog::Edit(promotion) => view! {
                    <PromotionForm promotion=promotion on_close=move || dialog.set(None) on_saved=after_change />
                }.into_any(),
                Dialog::Delete(promotion) => view! {
                    <DeletePromotionConfirm promotion=promotion on_close=move || dialog.set(None) on_deleted=after_change />
                }.into_any(),
                Dialog::Assign(promotion) => view! {
                    <AssignDealersForm promotion=promotion on_close=move || dialog.set(None) on_assigned=after_change />
                }.into_any(),
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promotion(json: &str) -> Promotion {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_format_discount() {
        let pct = promotion(r#"{"promotionId":1,"name":"Tet","discountType":"PERCENTAGE","discountValue":7.5}"#);
        assert_eq!(format_discount(&pct), "7.5%");
        let fixed = promotion(r#"{"promotionId":2,"name":"Cash","discountType":"FIXED_AMOUNT","discountValue":20000000}"#);
        assert_eq!(format_discount(&fixed), "20 000 000 ₫");
        let bundle = promotion(r#"{"promotionId":3,"name":"Combo","discountType":"BUNDLE","discountValue":5}"#);
        assert_eq!(format_discount(&bundle), "5.0");
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(status_label("active"), "Active");
        assert_eq!(status_label("odd"), "odd");
        assert_eq!(discount_type_label("FIXED_AMOUNT"), "Fixed amount");
    }
}
