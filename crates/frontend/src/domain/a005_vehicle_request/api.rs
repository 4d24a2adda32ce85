use contracts::domain::a005_vehicle_request::{UpdateRequestStatusDto, VehicleRequest};
use contracts::shared::envelope::ApiError;
use contracts::system::auth::ApiScope;

use crate::shared::api_utils::{post_ack, post_list, NoBody};

pub async fn fetch_vehicle_requests() -> Result<Vec<VehicleRequest>, ApiError> {
    post_list(&ApiScope::Evm.endpoint("vehicle-requests/list"), &NoBody {}).await
}

pub async fn update_vehicle_request_status(dto: &UpdateRequestStatusDto) -> Result<String, ApiError> {
    post_ack(&ApiScope::Evm.endpoint("vehicle-requests/update-status"), dto).await
}
