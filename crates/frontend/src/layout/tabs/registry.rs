//! Tab content registry: the only place that maps `tab.key` to a view.

use contracts::system::auth::UserRole;
use leptos::logging::log;
use leptos::prelude::*;

use crate::dashboards::d400_dealer_overview::DealerOverviewDashboard;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_inventory::ui::list::InventoryList;
use crate::domain::a003_promotion::ui::list::PromotionList;
use crate::domain::a005_vehicle_request::ui::list::VehicleRequestList;
use crate::domain::a006_contract::ui::list::ContractList;
use crate::domain::a007_quotation::ui::list::QuotationList;
use crate::domain::a008_feedback::ui::list::FeedbackList;
use crate::projections::p900_inventory_report::ui::list::InventoryReportList;
use crate::projections::p901_sales_report::ui::list::SalesReportList;
use crate::projections::p902_consumption_rate::ui::list::ConsumptionRateList;
use crate::system::auth::context::current_role;
use crate::system::auth::guard::{ADMIN_ONLY, DEALER_ROLES, EVM_ROLES};
use crate::system::users::ui::list::DealerAccountsPage;

const EVERYONE: &[UserRole] = &UserRole::ALL;

/// Roles allowed to open a tab. Unknown keys are open to nobody.
pub fn roles_for_key(key: &str) -> &'static [UserRole] {
    match key {
        "d400_dealer_overview" | "a002_inventory" => EVERYONE,
        "a001_customer" | "a006_contract" | "a007_quotation" | "a008_feedback" => DEALER_ROLES,
        "a003_promotion"
        | "a005_vehicle_request"
        | "p900_inventory_report"
        | "p901_sales_report"
        | "p902_consumption_rate" => EVM_ROLES,
        "sys_dealer_accounts" => ADMIN_ONLY,
        _ => &[],
    }
}

/// Renders the content of a tab. Tabs live only inside the logged-in shell,
/// so the role is checked once when the tab is created.
pub fn render_tab_content(key: &str) -> AnyView {
    let allowed = current_role()
        .map(|role| roles_for_key(key).contains(&role))
        .unwrap_or(false);
    if !allowed {
        log!("Tab '{}' denied for role {:?}", key, current_role());
        return view! {
            <div class="alert alert--error">"Access denied for your role."</div>
        }
        .into_any();
    }

    match key {
        // Dashboards
        "d400_dealer_overview" => view! { <DealerOverviewDashboard /> }.into_any(),

        // Aggregates
        "a001_customer" => view! { <CustomerList /> }.into_any(),
        "a002_inventory" => view! { <InventoryList /> }.into_any(),
        "a003_promotion" => view! { <PromotionList /> }.into_any(),
        "a005_vehicle_request" => view! { <VehicleRequestList /> }.into_any(),
        "a006_contract" => view! { <ContractList /> }.into_any(),
        "a007_quotation" => view! { <QuotationList /> }.into_any(),
        "a008_feedback" => view! { <FeedbackList /> }.into_any(),

        // Projections
        "p900_inventory_report" => view! { <InventoryReportList /> }.into_any(),
        "p901_sales_report" => view! { <SalesReportList /> }.into_any(),
        "p902_consumption_rate" => view! { <ConsumptionRateList /> }.into_any(),

        // System
        "sys_dealer_accounts" => view! { <DealerAccountsPage /> }.into_any(),

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_access() {
        assert!(roles_for_key("sys_dealer_accounts").contains(&UserRole::Admin));
        assert!(!roles_for_key("sys_dealer_accounts").contains(&UserRole::EvmStaff));
        assert!(roles_for_key("a002_inventory").contains(&UserRole::DealerStaff));
        assert!(!roles_for_key("a001_customer").contains(&UserRole::EvmStaff));
        assert!(roles_for_key("p901_sales_report").contains(&UserRole::EvmStaff));
        assert!(roles_for_key("nope").is_empty());
    }
}
