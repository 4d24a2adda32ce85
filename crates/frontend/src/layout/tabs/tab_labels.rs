//! Tab titles. Unknown keys get a generic title.

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_dealer_overview" => "Overview",

        // ── Aggregates (a0xx) ─────────────────────────────────────────────
        "a001_customer" => "Customers",
        "a002_inventory" => "Inventory",
        "a003_promotion" => "Promotions",
        "a005_vehicle_request" => "Vehicle Requests",
        "a006_contract" => "Contracts",
        "a007_quotation" => "Quotations",
        "a008_feedback" => "Feedback & Complaints",

        // ── Projections (p9xx) ────────────────────────────────────────────
        "p900_inventory_report" => "Inventory Report",
        "p901_sales_report" => "Sales Report",
        "p902_consumption_rate" => "Consumption Rate",

        // ── System (sys_*) ────────────────────────────────────────────────
        "sys_dealer_accounts" => "Dealer Accounts",

        _ => "Unknown page",
    }
}
