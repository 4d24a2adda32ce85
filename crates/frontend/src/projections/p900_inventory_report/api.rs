use contracts::projections::p900_inventory_report::{
    normalize_inventory_report, InventoryReportDto, InventoryReportRow,
};
use contracts::shared::envelope::ApiError;
use contracts::system::auth::ApiScope;

use crate::shared::api_utils::{post_list, NoBody};

/// Stock vs. sold per dealer, model and variant.
pub async fn fetch_inventory_report() -> Result<Vec<InventoryReportRow>, ApiError> {
    let models: Vec<InventoryReportDto> =
        post_list(&ApiScope::Evm.endpoint("inventory/report"), &NoBody {}).await?;
    Ok(normalize_inventory_report(&models))
}
