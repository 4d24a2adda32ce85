use contracts::domain::a004_sales_record::SalesRecord;
use contracts::shared::envelope::ApiError;

use crate::domain::a004_sales_record::api::fetch_sales_records;

/// Every dealer's sales records; the report groups them client-side.
pub async fn fetch_sales_report() -> Result<Vec<SalesRecord>, ApiError> {
    fetch_sales_records(None).await
}
