use contracts::domain::a003_promotion::{
    AssignPromotionDto, CreatePromotionDto, DeletePromotionRequest, Promotion, UpdatePromotionDto,
};
use contracts::shared::envelope::ApiError;
use contracts::system::auth::ApiScope;

use crate::shared::api_utils::{post_ack, post_list, NoBody};

pub async fn fetch_promotions() -> Result<Vec<Promotion>, ApiError> {
    post_list(&ApiScope::Evm.endpoint("promotions/list"), &NoBody {}).await
}

pub async fn create_promotion(dto: &CreatePromotionDto) -> Result<String, ApiError> {
    post_ack(&ApiScope::Evm.endpoint("promotions/create"), dto).await
}

pub async fn update_promotion(dto: &UpdatePromotionDto) -> Result<String, ApiError> {
    post_ack(&ApiScope::Evm.endpoint("promotions/update"), dto).await
}

pub async fn delete_promotion(promotion_id: String) -> Result<String, ApiError> {
    let request = DeletePromotionRequest { promotion_id };
    post_ack(&ApiScope::Evm.endpoint("promotions/delete"), &request).await
}

/// Links the promotion to the given dealers.
pub async fn assign_promotion(dto: &AssignPromotionDto) -> Result<String, ApiError> {
    post_ack(&ApiScope::Evm.endpoint("promotions/assign-dealers"), dto).await
}
