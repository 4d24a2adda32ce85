use contracts::shared::envelope::ApiError;
use contracts::system::auth::ApiScope;
use contracts::system::users::{
    CreateDealerAccountDto, DealerAccount, DeleteDealerAccountRequest, UpdateDealerAccountDto,
};

use crate::shared::api_utils::{post_ack, post_list, NoBody};

/// Fetch all dealer accounts
pub async fn fetch_dealer_accounts() -> Result<Vec<DealerAccount>, ApiError> {
    post_list(&ApiScope::Evm.endpoint("dealer-accounts/list"), &NoBody {}).await
}

pub async fn create_dealer_account(dto: &CreateDealerAccountDto) -> Result<String, ApiError> {
    post_ack(&ApiScope::Evm.endpoint("dealer-accounts/create"), dto).await
}

pub async fn update_dealer_account(dto: &UpdateDealerAccountDto) -> Result<String, ApiError> {
    post_ack(&ApiScope::Evm.endpoint("dealer-accounts/update"), dto).await
}

pub async fn delete_dealer_account(account_id: String) -> Result<String, ApiError> {
    let request = DeleteDealerAccountRequest { account_id };
    post_ack(&ApiScope::Evm.endpoint("dealer-accounts/delete"), &request).await
}
