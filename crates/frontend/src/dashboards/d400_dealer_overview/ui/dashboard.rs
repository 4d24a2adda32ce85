use contracts::dashboards::d400_dealer_overview::DealerOverview;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_dealer_overview::api;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::{format_number_int, format_vnd};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;

/// Width of a bar in percent of the largest value.
fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

/// Landing page: stock and sales KPIs, best sellers and revenue by month.
#[component]
pub fn DealerOverviewDashboard() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let threshold = config().ui.low_stock_threshold;

    let (data, set_data) = signal(None::<DealerOverview>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let show_sales = Signal::derive(move || auth_state.with(|s| s.role().is_some_and(|r| r.is_evm())));

    let load_data = move || {
        let Some(role) = auth_state.with_untracked(|s| s.role()) else {
            return;
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_overview(role, threshold).await {
                Ok(overview) => set_data.set(Some(overview)),
                Err(e) => set_error.set(Some(format!("Could not load the overview: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if data.with_untracked(|d| d.is_none()) {
            load_data();
        }
    });

    let overview = Memo::new(move |_| data.get().unwrap_or_default());

    view! {
        <PageFrame page_id="d400_dealer_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
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
                        value=Signal::derive(move || format_number_int(overview.get().inventory.total_units as f64))
                    />
                    <StatCard
                        label="Models"
                        icon_name="folder-open"
                        value=Signal::derive(move || overview.get().inventory.distinct_models.to_string())
                    />
                    <StatCard
                        label="Low stock"
                        icon_name="alert"
                        value=Signal::derive(move || overview.get().inventory.low_stock_rows.to_string())
                        tone=Signal::derive(move || {
                            if overview.get().inventory.low_stock_rows > 0 { StatTone::Warning } else { StatTone::Good }
                        })
                    />
                    <StatCard
                        label="Stock value"
                        icon_name="money"
                        value=Signal::derive(move || format_vnd(overview.get().inventory.stock_value))
                    />
                </div>

                <Show when=move || show_sales.get()>
                    <div class="stat-strip">
                        <StatCard
                            label="Orders"
                            icon_name="clipboard"
                            value=Signal::derive(move || overview.get().sales.orders.to_string())
                        />
                        <StatCard
                            label="Units sold"
                            icon_name="trending-up"
                            value=Signal::derive(move || format_number_int(overview.get().sales.units as f64))
                        />
                        <StatCard
                            label="Revenue"
                            icon_name="bar-chart"
                            value=Signal::derive(move || format_vnd(overview.get().sales.revenue))
                        />
                    </div>

                    <div class="dashboard__grid">
                        <div class="dashboard__panel">
                            <h2 class="section__title">"Top models"</h2>
                            {move || {
                                let top = overview.get().top_models;
                                let max = top.iter().map(|m| m.units).max().unwrap_or(0) as f64;
                                if top.is_empty() {
                                    view! { <div class="table__empty">"No sales yet."</div> }.into_any()
                                } else {
                                    top.into_iter().map(|m| {
                                        let width = format!("width: {:.1}%;", bar_width(m.units as f64, max));
                                        view! {
                                            <div class="bar-row">
                                                <span class="bar-row__label">{m.model}</span>
                                                <div class="bar-row__track"><div class="bar-row__fill" style=width></div></div>
                                                <span class="bar-row__value">{format_number_int(m.units as f64)}</span>
                                            </div>
                                        }
                                    }).collect_view().into_any()
                                }
                            }}
                        </div>

                        <div class="dashboard__panel">
                            <h2 class="section__title">"Revenue by month"</h2>
                            {move || {
                                let monthly = overview.get().monthly;
                                let max = monthly.iter().map(|m| m.revenue).fold(0.0, f64::max);
                                monthly.into_iter().map(|m| {
                                    let width = format!("width: {:.1}%;", bar_width(m.revenue, max));
                                    view! {
                                        <div class="bar-row">
                                            <span class="bar-row__label">{m.period}</span>
                                            <div class="bar-row__track"><div class="bar-row__fill" style=width></div></div>
                                            <span class="bar-row__value">{format_vnd(m.revenue)}</span>
                                        </div>
                                    }
                                }).collect_view()
                            }}
                        </div>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(5.0, 10.0), 50.0);
        assert_eq!(bar_width(3.0, 0.0), 0.0);
        assert_eq!(bar_width(12.0, 10.0), 100.0);
    }
}
