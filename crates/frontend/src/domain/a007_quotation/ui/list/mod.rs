mod state;

use contracts::domain::a007_quotation::{Quotation, QuotationStatus};
use contracts::shared::summary::{count_where, sum_by};
use contracts::system::auth::ApiScope;
use leptos::prelude::*;
use serde::Serialize;
use thaw::*;

use crate::shared::api_utils::log_local_call;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::ListPager;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::{format_number_with_decimals, format_vnd, SortableHeaderCell};
use crate::shared::date_utils::format_date;
use crate::shared::list_state::ListSignals;
use crate::shared::list_utils::{highlight_matches, CategoryFilter, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuotationStatusRequest<'a> {
    quotation_id: &'a str,
    status: QuotationStatus,
}

fn status_color(status: QuotationStatus) -> &'static str {
    match status {
        QuotationStatus::Draft => "subtle",
        QuotationStatus::Sent => "brand",
        QuotationStatus::Accepted => "success",
        QuotationStatus::Rejected => "danger",
        QuotationStatus::Expired => "warning",
    }
}

fn status_label(code: &str) -> String {
    QuotationStatus::ALL
        .into_iter()
        .find(|s| s.code() == code)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Row actions: (button text, target status).
fn actions_for(status: QuotationStatus) -> &'static [(&'static str, QuotationStatus)] {
    match status {
        QuotationStatus::Draft => &[("Send", QuotationStatus::Sent)],
        QuotationStatus::Sent => &[
            ("Accept", QuotationStatus::Accepted),
            ("Reject", QuotationStatus::Rejected),
        ],
        _ => &[],
    }
}

#[component]
pub fn QuotationList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let filters_expanded = RwSignal::new(true);

    let change_status = move |quotation_id: String, status: QuotationStatus| {
        let result = state
            .try_update(|s| s.edit_row(|q| q.quotation_id == quotation_id, |q| q.change_status(status)))
            .unwrap_or_else(|| Err("Quotation list is gone".to_string()));
        match result {
            Ok(()) => {
                set_error.set(None);
                log_local_call(
                    &ApiScope::Dealer.endpoint("quotations/update-status"),
                    &QuotationStatusRequest { quotation_id: &quotation_id, status },
                );
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    let open_value = Memo::new(move |_| {
        state.with(|s| {
            s.view.summarize(|rows| {
                sum_by(rows, |q| if q.status.is_open() { q.final_price() } else { 0.0 })
            })
        })
    });
    let accepted = Memo::new(move |_| {
        state.with(|s| s.view.summarize(|rows| count_where(rows, |q| q.status == QuotationStatus::Accepted)))
    });

    let query = state.query();
    let sort = state.sort();
    let on_sort = state.on_sort();
    let rows = state.page_rows();

    view! {
        <PageFrame page_id="a007_quotation--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Quotations"</h1>
                    <Badge>{move || state.with(|s| s.view.total_count()).to_string()}</Badge>
                </div>
            </div>

            <div class="page__content">
                <div class="alert alert--info">"Sample data: changes stay in this tab."</div>
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="stat-strip">
                    <StatCard
                        label="Open quotations"
                        icon_name="clipboard"
                        value=Signal::derive(move || format_vnd(open_value.get()))
                    />
                    <StatCard
                        label="Accepted"
                        icon_name="check"
                        value=Signal::derive(move || accepted.get().to_string())
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
                                    placeholder="Quotation, customer, model..."
                                />
                            </div>
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
                />

                <div class="table-wrapper">
                    <Table attr:id="a007-quotation-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Quotation" sort_field="quotation_id" sort=sort on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Customer" sort_field="customer" sort=sort on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Vehicle" sort_field="model" sort=sort on_sort=on_sort min_width=130.0 />
                                <TableHeaderCell resizable=false min_width=80.0>"Discount"</TableHeaderCell>
                                <SortableHeaderCell label="Final price" sort_field="final_price" sort=sort on_sort=on_sort min_width=140.0 align="right" />
                                <SortableHeaderCell label="Created" sort_field="created_date" sort=sort on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Valid until" sort_field="valid_until" sort=sort on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Status" sort_field="status" sort=sort on_sort=on_sort min_width=100.0 />
                                <TableHeaderCell resizable=false min_width=150.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|q: &Quotation| (q.quotation_id.clone(), q.status.code())
                                children=move |quotation| {
                                    let id = quotation.quotation_id.clone();
                                    let customer = quotation.customer_name.clone();
                                    let vehicle = format!("{} {}", quotation.model_name, quotation.variant_name);
                                    let discount = format!("{}%", format_number_with_decimals(quotation.discount_percent, 1));
                                    let final_price = format_vnd(quotation.final_price());
                                    let created = format_date(&quotation.created_date);
                                    let valid_until = format_date(&quotation.valid_until);
                                    let status = quotation.status;
                                    let buttons = actions_for(status)
                                        .iter()
                                        .map(|&(text, target)| {
                                            let quotation_id = quotation.quotation_id.clone();
                                            view! {
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| change_status(quotation_id.clone(), target)
                                                >
                                                    {text}
                                                </Button>
                                            }
                                        })
                                        .collect_view();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{move || highlight_matches(&id, &query.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{move || highlight_matches(&customer, &query.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{vehicle}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{discount}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{final_price}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{valid_until}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge label=status.label() color=status_color(status) />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{buttons}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_actions_follow_status() {
        assert_eq!(actions_for(QuotationStatus::Draft), &[("Send", QuotationStatus::Sent)]);
        assert_eq!(actions_for(QuotationStatus::Sent).len(), 2);
        assert!(actions_for(QuotationStatus::Accepted).is_empty());
    }
}
