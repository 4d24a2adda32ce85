mod state;

use contracts::domain::a006_contract::{Contract, ContractStatus};
use contracts::shared::summary::sum_by;
use contracts::system::auth::ApiScope;
use leptos::prelude::*;
use serde::Serialize;
use thaw::*;

use super::details::ContractStatusForm;
use crate::shared::api_utils::log_local_call;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::ListPager;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::{format_vnd, SortableHeaderCell};
use crate::shared::date_utils::{format_date_opt, today_iso};
use crate::shared::icons::icon;
use crate::shared::list_state::ListSignals;
use crate::shared::list_utils::{highlight_matches, CategoryFilter, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContractStatusRequest<'a> {
    contract_id: &'a str,
    status: ContractStatus,
}

fn status_color(status: ContractStatus) -> &'static str {
    match status {
        ContractStatus::Draft => "subtle",
        ContractStatus::PendingSignature => "warning",
        ContractStatus::Signed => "brand",
        ContractStatus::Completed => "success",
        ContractStatus::Cancelled => "danger",
    }
}

fn live_amount(contract: &Contract, amount: f64) -> f64 {
    if contract.status == ContractStatus::Cancelled {
        0.0
    } else {
        amount
    }
}

fn status_label(code: &str) -> String {
    ContractStatus::ALL
        .into_iter()
        .find(|s| s.code() == code)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| code.to_string())
}

#[component]
pub fn ContractList() -> impl IntoView {
    let state = create_state();
    let editing: RwSignal<Option<Contract>> = RwSignal::new(None);
    let filters_expanded = RwSignal::new(true);

    let apply_status = Callback::new(move |status: ContractStatus| {
        let Some(contract_id) = editing.with_untracked(|c| c.as_ref().map(|c| c.contract_id.clone())) else {
            return Err("No contract selected".to_string());
        };
        let today = today_iso();
        state
            .try_update(|s| {
                s.edit_row(|c| c.contract_id == contract_id, |c| c.change_status(status, &today))
            })
            .unwrap_or_else(|| Err("Contract list is gone".to_string()))?;

        log_local_call(
            &ApiScope::Dealer.endpoint("contracts/update-status"),
            &ContractStatusRequest { contract_id: &contract_id, status },
        );
        Ok(())
    });

    // Cancelled contracts count as zero
    let outstanding = Memo::new(move |_| {
        state.with(|s| s.view.summarize(|rows| sum_by(rows, |c| live_amount(c, c.remaining()))))
    });
    let contract_value = Memo::new(move |_| {
        state.with(|s| s.view.summarize(|rows| sum_by(rows, |c| live_amount(c, c.total_amount))))
    });

    let query = state.query();
    let sort = state.sort();
    let on_sort = state.on_sort();
    let rows = state.page_rows();

    view! {
        <PageFrame page_id="a006_contract--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Contracts"</h1>
                    <Badge>{move || state.with(|s| s.view.total_count()).to_string()}</Badge>
                </div>
            </div>

            <div class="page__content">
                <div class="alert alert--info">"Sample data: changes stay in this tab."</div>

                <div class="stat-strip">
                    <StatCard
                        label="Contract value"
                        icon_name="file-text"
                        value=Signal::derive(move || format_vnd(contract_value.get()))
                    />
                    <StatCard
                        label="Outstanding"
                        icon_name="money"
                        value=Signal::derive(move || format_vnd(outstanding.get()))
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
                                    placeholder="Contract, customer, model..."
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
                    <Table attr:id="a006-contract-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Contract" sort_field="contract_id" sort=sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Customer" sort_field="customer" sort=sort on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Vehicle" sort_field="model" sort=sort on_sort=on_sort min_width=130.0 />
                                <SortableHeaderCell label="Total" sort_field="total_amount" sort=sort on_sort=on_sort min_width=140.0 align="right" />
                                <SortableHeaderCell label="Remaining" sort_field="remaining" sort=sort on_sort=on_sort min_width=140.0 align="right" />
                                <SortableHeaderCell label="Signed" sort_field="signed_date" sort=sort on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Status" sort_field="status" sort=sort on_sort=on_sort min_width=130.0 />
                                <TableHeaderCell resizable=false min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|c| (c.contract_id.clone(), c.status.code())
                                children=move |contract| {
                                    let id = contract.contract_id.clone();
                                    let customer = contract.customer_name.clone();
                                    let vehicle = format!("{} {}", contract.model_name, contract.variant_name);
                                    let total = format_vnd(contract.total_amount);
                                    let remaining = format_vnd(contract.remaining());
                                    let signed = format_date_opt(contract.signed_date.as_deref());
                                    let status = contract.status;
                                    let closed = status.next_statuses().is_empty();
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
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{total}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{remaining}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{signed}</TableCellLayout>
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
                                                        disabled=closed
                                                        on_click=move |_| editing.set(Some(contract.clone()))
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || editing.get().map(|contract| view! {
                <ContractStatusForm
                    contract=contract
                    on_close=move || editing.set(None)
                    on_apply=apply_status
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_request_body() {
        let body = ContractStatusRequest {
            contract_id: "HD-2026-002",
            status: ContractStatus::Completed,
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["contractId"], "HD-2026-002");
        assert_eq!(v["status"], "COMPLETED");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label("PENDING_SIGNATURE"), "Pending signature");
    }
}
