use contracts::domain::a002_inventory::{normalize_inventory, InventoryModelDto, InventoryRow};
use contracts::shared::envelope::ApiError;
use contracts::system::auth::ApiScope;

use crate::shared::api_utils::{post_list, NoBody};

/// Inventory visible to the scope: every dealer for `evm`, the own stock for `dealer`.
/// Models are flattened into one row per variant.
pub async fn fetch_inventory(scope: ApiScope) -> Result<Vec<InventoryRow>, ApiError> {
    let models: Vec<InventoryModelDto> =
        post_list(&scope.endpoint("inventory/view"), &NoBody {}).await?;
    Ok(normalize_inventory(&models))
}
