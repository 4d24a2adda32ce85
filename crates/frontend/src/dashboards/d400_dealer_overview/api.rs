use contracts::dashboards::d400_dealer_overview::{build_overview, DealerOverview};
use contracts::shared::envelope::ApiError;
use contracts::system::auth::UserRole;

use crate::domain::a002_inventory::api::fetch_inventory;
use crate::domain::a004_sales_record::api::fetch_sales_records;

/// Inventory in the role's scope; sales records are an EVM endpoint, so
/// dealer roles get an overview without the sales half.
pub async fn fetch_overview(
    role: UserRole,
    low_stock_threshold: i64,
) -> Result<DealerOverview, ApiError> {
    let inventory = fetch_inventory(role.api_scope()).await?;
    let sales = if role.is_evm() {
        fetch_sales_records(None).await?
    } else {
        Vec::new()
    };
    log::debug!(
        "Overview: {} inventory rows, {} sales records",
        inventory.len(),
        sales.len()
    );
    Ok(build_overview(&inventory, &sales, low_stock_threshold))
}
