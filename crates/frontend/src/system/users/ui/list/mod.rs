mod state;

use contracts::system::auth::UserRole;
use contracts::system::users::{known_dealers, DealerAccount};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::{CreateDealerAccountForm, DeleteDealerAccountConfirm, EditDealerAccountForm};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::ListPager;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_state::ListSignals;
use crate::shared::list_utils::{highlight_matches, CategoryFilter, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::guard::{RequireRole, ADMIN_ONLY};
use crate::system::users::api;
use state::create_state;

fn role_label(code: &str) -> String {
    UserRole::parse(code)
        .map(|r| r.label().to_string())
        .unwrap_or_else(|| code.to_string())
}

fn status_label(code: &str) -> String {
    match code {
        "active" => "Active".to_string(),
        "inactive" => "Locked".to_string(),
        other => other.to_string(),
    }
}

#[component]
pub fn DealerAccountsPage() -> impl IntoView {
    view! {
        <RequireRole roles=ADMIN_ONLY>
            <DealerAccountsList />
        </RequireRole>
    }
}

#[component]
fn DealerAccountsList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<DealerAccount>> = RwSignal::new(None);
    let deleting: RwSignal<Option<DealerAccount>> = RwSignal::new(None);
    let filters_expanded = RwSignal::new(true);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_dealer_accounts().await {
                Ok(data) => {
                    log::info!("Loaded {} dealer accounts", data.len());
                    state.update(|s| s.loaded(data));
                }
                Err(e) => set_error.set(Some(format!("Could not load dealer accounts: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let query = state.query();
    let sort = state.sort();
    let on_sort = state.on_sort();
    let rows = state.page_rows();
    let total = Signal::derive(move || state.with(|s| s.view.total_count()));

    let after_change = move || {
        set_show_create_form.set(false);
        editing.set(None);
        deleting.set(None);
        load_data();
    };

    view! {
        <PageFrame page_id="sys_dealer_accounts--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dealer Accounts"</h1>
                    <Badge>{move || total.get().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
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
                                    placeholder="Name, email, phone or dealer..."
                                />
                            </div>
                            <CategoryFilter
                                label="Role"
                                options=state.category_options("role")
                                selected=state.category("role")
                                on_change=state.on_category("role")
                                display=role_label
                            />
                            <CategoryFilter
                                label="Dealer"
                                options=state.category_options("dealer")
                                selected=state.category("dealer")
                                on_change=state.on_category("dealer")
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
                    <Table attr:id="sys-dealer-accounts-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Full name" sort_field="full_name" sort=sort on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Email" sort_field="email" sort=sort on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Role" sort_field="role" sort=sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Dealer" sort_field="dealer" sort=sort on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Status" sort_field="is_active" sort=sort on_sort=on_sort min_width=90.0 />
                                <SortableHeaderCell label="Created" sort_field="created_at" sort=sort on_sort=on_sort min_width=110.0 />
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|a| a.account_id.clone()
                                children=move |account| {
                                    let for_edit = account.clone();
                                    let for_delete = account.clone();
                                    let full_name = account.display_name();
                                    let email = account.display_email();
                                    let role_label = account.role_label();
                                    let role_color = match account.role {
                                        Some(role) if role.is_evm() => "brand",
                                        Some(_) => "informative",
                                        None => "subtle",
                                    };
                                    let dealer = account.dealer_name.clone().unwrap_or_else(|| "-".to_string());
                                    let created = format_date_opt(account.created_at.as_deref());
                                    let (status, status_color) = if account.is_active {
                                        ("Active", "success")
                                    } else {
                                        ("Locked", "danger")
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {move || highlight_matches(&full_name, &query.get())}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&email, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge label=role_label color=role_color />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{dealer}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge label=status color=status_color />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| editing.set(Some(for_edit.clone()))
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| deleting.set(Some(for_delete.clone()))
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
                    {move || (state.with(|s| s.is_loaded && s.view.total_count() == 0)).then(|| view! {
                        <div class="table__empty">"No accounts match the filters."</div>
                    })}
                </div>
            </div>

            {move || show_create_form.get().then(|| {
                let dealers = state.with_untracked(|s| known_dealers(s.view.rows()));
                view! {
                    <CreateDealerAccountForm
                        dealers=dealers
                        on_close=move || set_show_create_form.set(false)
                        on_created=after_change
                    />
                }
            })}

            {move || editing.get().map(|account| view! {
                <EditDealerAccountForm
                    account=account
                    on_close=move || editing.set(None)
                    on_saved=after_change
                />
            })}

            {move || deleting.get().map(|account| view! {
                <DeleteDealerAccountConfirm
                    account=account
                    on_close=move || deleting.set(None)
                    on_deleted=after_change
                />
            })}
        </PageFrame>
    }
}
