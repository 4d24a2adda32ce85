use contracts::domain::a004_sales_record::{SalesRecord, SalesRecordsRequest};
use contracts::shared::envelope::ApiError;
use contracts::system::auth::ApiScope;

use crate::shared::api_utils::post_list;

/// Sales records of one dealer, or of every dealer when `dealer_id` is `None`.
pub async fn fetch_sales_records(dealer_id: Option<String>) -> Result<Vec<SalesRecord>, ApiError> {
    let request = SalesRecordsRequest { dealer_id };
    post_list(&ApiScope::Evm.endpoint("sales-records/by-dealer"), &request).await
}
