mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::CreateCustomerForm;
use crate::domain::a001_customer::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::ListPager;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_state::ListSignals;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

#[component]
pub fn CustomerList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let filters_expanded = RwSignal::new(true);

    // Some(keyword) while the rows come from a server search
    let server_keyword: RwSignal<Option<String>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        server_keyword.set(None);
        spawn_local(async move {
            match api::fetch_customers().await {
                Ok(data) => state.update(|s| s.loaded(data)),
                Err(e) => set_error.set(Some(format!("Could not load customers: {}", e))),
            }
            set_loading.set(false);
        });
    };

    let search_server = move || {
        let keyword = state.with_untracked(|s| s.view.filter().query.trim().to_string());
        if keyword.is_empty() {
            load_data();
            return;
        }
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::search_customers(&keyword).await {
                Ok(data) => {
                    log::debug!("Server search '{}' returned {} customers", keyword, data.len());
                    state.update(|s| {
                        s.loaded(data);
                        s.view.set_query("");
                    });
                    server_keyword.set(Some(keyword));
                }
                Err(e) => set_error.set(Some(format!("Search failed: {}", e))),
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

    view! {
        <PageFrame page_id="a001_customer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Customers"</h1>
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
                            <div style="flex: 1; max-width: 360px;">
                                <SearchInput
                                    value=state.query()
                                    on_change=state.on_query()
                                    placeholder="Name, phone, email or ID number..."
                                />
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| search_server()
                                disabled=Signal::derive(move || loading.get())
                            >
                                "Search server"
                            </Button>
                            {move || server_keyword.get().map(|k| view! {
                                <span class="filter-panel__hint">
                                    {format!("Server results for \"{}\"", k)}
                                </span>
                            })}
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:id="a001-customer-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Full name" sort_field="full_name" sort=sort on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Phone" sort_field="phone" sort=sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Email" sort_field="email" sort=sort on_sort=on_sort min_width=160.0 />
                                <TableHeaderCell resizable=false min_width=110.0>"ID number"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Address"</TableHeaderCell>
                                <SortableHeaderCell label="Created" sort_field="created_at" sort=sort on_sort=on_sort min_width=110.0 />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|c| c.customer_id.clone()
                                children=move |customer| {
                                    let full_name = customer.display_name();
                                    let phone = customer.phone.clone().unwrap_or_default();
                                    let email = customer.email.clone().unwrap_or_default();
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
                                                <TableCellLayout>{move || highlight_matches(&phone, &query.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{move || highlight_matches(&email, &query.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{customer.id_number.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{customer.address.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date_opt(customer.created_at.as_deref())}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || state.with(|s| s.is_loaded && s.view.total_count() == 0).then(|| view! {
                        <div class="table__empty">"No customers found."</div>
                    })}
                </div>
            </div>

            {move || show_create_form.get().then(|| view! {
                <CreateCustomerForm
                    on_close=move || set_show_create_form.set(false)
                    on_created=move || {
                        set_show_create_form.set(false);
                        load_data();
                    }
                />
            })}
        </PageFrame>
    }
}
