use contracts::projections::p902_consumption_rate::{
    normalize_consumption, ConsumptionModelDto, ConsumptionRow,
};
use contracts::shared::envelope::ApiError;
use contracts::system::auth::ApiScope;

use crate::shared::api_utils::{post_list, NoBody};

pub async fn fetch_consumption_rate() -> Result<Vec<ConsumptionRow>, ApiError> {
    let models: Vec<ConsumptionModelDto> =
        post_list(&ApiScope::Evm.endpoint("consumption-rate/view"), &NoBody {}).await?;
    Ok(normalize_consumption(&models))
}
